use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::game::{GameState, Line, Orientation, Position, GRID_SIZE};

use super::theme::Theme;

/// Smallest cells that still leave room for a symbol inside the borders.
pub const MIN_CELL_WIDTH: u16 = 3;
pub const MIN_CELL_HEIGHT: u16 = 2;

/// Where the grid sits on screen and how big its cells are.
///
/// Cell sizes include the shared border on the left/top, so the grid is
/// `GRID_SIZE * cell_width + 1` columns wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    pub x: u16,
    pub y: u16,
    pub cell_width: u16,
    pub cell_height: u16,
}

impl BoardGeometry {
    /// Center a grid of the given cell size inside `area`.
    pub fn centered(area: Rect, cell_width: u16, cell_height: u16) -> Self {
        let (width, height) = Self::grid_size(cell_width, cell_height);
        BoardGeometry {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y + area.height.saturating_sub(height) / 2,
            cell_width,
            cell_height,
        }
    }

    /// Center the largest grid that fits in `area`, using cells no bigger
    /// than `max_width` × `max_height`. `None` if even the smallest cells
    /// do not fit.
    pub fn fit(area: Rect, max_width: u16, max_height: u16) -> Option<Self> {
        let n = GRID_SIZE as u16;
        let cell_width = max_width.min(area.width.saturating_sub(1) / n);
        let cell_height = max_height.min(area.height.saturating_sub(1) / n);
        if cell_width < MIN_CELL_WIDTH || cell_height < MIN_CELL_HEIGHT {
            return None;
        }
        Some(Self::centered(area, cell_width, cell_height))
    }

    pub fn grid_size(cell_width: u16, cell_height: u16) -> (u16, u16) {
        let n = GRID_SIZE as u16;
        (n * cell_width + 1, n * cell_height + 1)
    }

    pub fn area(&self) -> Rect {
        let (width, height) = Self::grid_size(self.cell_width, self.cell_height);
        Rect::new(self.x, self.y, width, height)
    }

    /// Map a terminal position to the grid cell under it.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        let dx = column.checked_sub(self.x)?;
        let dy = row.checked_sub(self.y)?;
        let (col, row) = (
            (dx / self.cell_width) as usize,
            (dy / self.cell_height) as usize,
        );
        (col < GRID_SIZE && row < GRID_SIZE).then(|| Position::new(row, col))
    }

    /// Terminal position of the middle of a grid cell.
    pub fn center_of(&self, pos: Position) -> (u16, u16) {
        (
            self.x + pos.col as u16 * self.cell_width + self.cell_width / 2,
            self.y + pos.row as u16 * self.cell_height + self.cell_height / 2,
        )
    }
}

/// Grid, completed lines and symbols, drawn in that order.
pub struct BoardWidget<'a> {
    state: &'a GameState,
    theme: &'a Theme,
    geometry: BoardGeometry,
}

impl<'a> BoardWidget<'a> {
    pub fn new(state: &'a GameState, theme: &'a Theme, geometry: BoardGeometry) -> Self {
        BoardWidget {
            state,
            theme,
            geometry,
        }
    }

    fn render_grid(&self, clip: Rect, buf: &mut Buffer) {
        let g = self.geometry;
        let area = g.area();
        for dy in 0..area.height {
            for dx in 0..area.width {
                let on_row_border = dy % g.cell_height == 0;
                let on_col_border = dx % g.cell_width == 0;
                let glyph = match (on_row_border, on_col_border) {
                    (true, true) => junction(dx, dy, area.width - 1, area.height - 1),
                    (true, false) => "─",
                    (false, true) => "│",
                    (false, false) => continue,
                };
                set(buf, clip, area.x + dx, area.y + dy, glyph, Style::default());
            }
        }
    }

    fn render_line(&self, line: &Line, clip: Rect, buf: &mut Buffer) {
        let (sx, sy) = self.geometry.center_of(line.start);
        let (ex, ey) = self.geometry.center_of(line.end);
        let glyph = match line.orientation() {
            Orientation::Horizontal => "─",
            Orientation::Vertical => "│",
            Orientation::DiagonalDown => "╲",
            Orientation::DiagonalUp => "╱",
        };
        let style = Style::default()
            .fg(self.theme.color_for(line.player))
            .add_modifier(Modifier::BOLD);

        let (dx, dy) = (ex as f32 - sx as f32, ey as f32 - sy as f32);
        let steps = dx.abs().max(dy.abs()) as u16;
        for step in 0..=steps {
            let t = step as f32 / steps.max(1) as f32;
            let x = (sx as f32 + dx * t).round() as u16;
            let y = (sy as f32 + dy * t).round() as u16;
            set(buf, clip, x, y, glyph, style);
        }
    }

    fn render_symbols(&self, clip: Rect, buf: &mut Buffer) {
        let style = Style::default().add_modifier(Modifier::BOLD);
        for (row, cells) in self.state.board().rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if cell.is_empty() {
                    continue;
                }
                let (x, y) = self.geometry.center_of(Position::new(row, col));
                set(buf, clip, x, y, cell.glyph(), style);
            }
        }
    }
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let clip = area.intersection(self.geometry.area());
        self.render_grid(clip, buf);
        for line in self.state.lines() {
            self.render_line(line, clip, buf);
        }
        self.render_symbols(clip, buf);
    }
}

/// Box-drawing character where a row border meets a column border.
fn junction(dx: u16, dy: u16, right: u16, bottom: u16) -> &'static str {
    match (dy == 0, dy == bottom, dx == 0, dx == right) {
        (true, _, true, _) => "┌",
        (true, _, _, true) => "┐",
        (_, true, true, _) => "└",
        (_, true, _, true) => "┘",
        (true, _, _, _) => "┬",
        (_, true, _, _) => "┴",
        (_, _, true, _) => "├",
        (_, _, _, true) => "┤",
        _ => "┼",
    }
}

/// Write one glyph, dropping anything outside `clip` or the buffer.
fn set(buf: &mut Buffer, clip: Rect, x: u16, y: u16, glyph: &str, style: Style) {
    let inside = x >= clip.x && x < clip.right() && y >= clip.y && y < clip.bottom();
    if !inside {
        return;
    }
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_symbol(glyph).set_style(style);
    }
}

use crate::config::UiConfig;
use crate::game::GameState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::{BoardGeometry, BoardWidget};
use super::theme::Theme;

/// Draw the board screen and return where the grid landed, for click mapping.
///
/// Header, status and controls keep their rows; the grid shrinks into what is
/// left and is replaced by a notice when it no longer fits.
pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    theme: &Theme,
    ui: &UiConfig,
) -> Option<BoardGeometry> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Board
            Constraint::Length(4), // Status and scores
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    let geometry = BoardGeometry::fit(chunks[1], ui.cell_width, ui.cell_height);
    match geometry {
        Some(geometry) => frame.render_widget(
            BoardWidget::new(game_state, theme, geometry),
            geometry.area().intersection(chunks[1]),
        ),
        None => render_too_small(frame, chunks[1]),
    }
    render_status(frame, game_state, theme, chunks[2]);
    render_controls(frame, chunks[3]);

    geometry
}

fn render_too_small(frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let notice = Paragraph::new("Terminal too small for the board")
        .alignment(Alignment::Center);
    let row = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
    frame.render_widget(notice, row);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new("Make S-O-S runs in any direction")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("SOS"));

    frame.render_widget(header, area);
}

fn render_status(frame: &mut Frame, game_state: &GameState, theme: &Theme, area: Rect) {
    let color = theme.color_for(game_state.current_player());
    let lines = vec![
        Line::styled(
            game_state.status_line(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Line::from(game_state.scores_line()),
    ];

    let status = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(status, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("S / O: choose symbol  |  Click: place  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

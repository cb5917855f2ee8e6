//! SOS detection around a freshly placed symbol.

use super::board::{Board, Cell, Position, Symbol};
use super::player::Player;

const PATTERN: [Cell; 3] = [
    Cell::Filled(Symbol::S),
    Cell::Filled(Symbol::O),
    Cell::Filled(Symbol::S),
];

/// Scan order: right, down, down-right, up-right.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Where the placed cell may sit inside a three-cell run, as a step count
/// from the placed cell back to the run's start.
const ANCHOR_OFFSETS: [isize; 3] = [-2, -1, 0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
    DiagonalDown,
    DiagonalUp,
}

/// A completed S-O-S run, from its first S to its last S.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    pub start: Position,
    pub end: Position,
    pub player: Player,
}

impl Line {
    pub fn orientation(&self) -> Orientation {
        let dr = self.end.row as isize - self.start.row as isize;
        let dc = self.end.col as isize - self.start.col as isize;
        match (dr.signum(), dc.signum()) {
            (0, _) => Orientation::Horizontal,
            (_, 0) => Orientation::Vertical,
            (1, 1) | (-1, -1) => Orientation::DiagonalDown,
            _ => Orientation::DiagonalUp,
        }
    }
}

/// Result of [`detect`]: every run the placement completed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Detection {
    pub lines: Vec<Line>,
}

impl Detection {
    pub fn count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Find the SOS runs passing through `pos`, credited to `player`.
///
/// Only the windows that contain `pos` are tested: for each direction the
/// run may start two steps back, one step back, or at `pos` itself. Windows
/// that leave the grid are skipped entirely. Every matching window counts,
/// so one placement can score several runs, including two along the same
/// direction (the centre S of `S O S O S`).
pub fn detect(board: &Board, pos: Position, player: Player) -> Detection {
    let mut lines = Vec::new();

    for (dr, dc) in DIRECTIONS {
        for offset in ANCHOR_OFFSETS {
            let start_row = pos.row as isize + offset * dr;
            let start_col = pos.col as isize + offset * dc;

            if let Some((start, end)) = window_matches(board, start_row, start_col, dr, dc) {
                lines.push(Line { start, end, player });
            }
        }
    }

    Detection { lines }
}

/// Check the three cells starting at (`row`, `col`) stepping by (`dr`, `dc`).
/// Returns the run's endpoints if all three are on the board and read S, O, S.
fn window_matches(
    board: &Board,
    row: isize,
    col: isize,
    dr: isize,
    dc: isize,
) -> Option<(Position, Position)> {
    let mut cells = [Position::new(0, 0); 3];
    for (step, slot) in cells.iter_mut().enumerate() {
        let step = step as isize;
        *slot = Position::checked(row + step * dr, col + step * dc)?;
    }

    let matched = cells
        .iter()
        .zip(PATTERN)
        .all(|(&p, expected)| board.get(p) == expected);

    matched.then_some((cells[0], cells[2]))
}

//! Core SOS game logic: board, players, run detection, and the turn/score
//! state machine. Nothing here touches the terminal.

mod board;
mod detector;
mod player;
mod state;

pub use board::{Board, Cell, Position, Symbol, GRID_SIZE};
pub use detector::{detect, Detection, Line, Orientation};
pub use player::Player;
pub use state::{Command, Effect, GameOutcome, GameState, Ignored, Phase, Summary};

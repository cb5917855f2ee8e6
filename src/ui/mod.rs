//! Terminal UI: the board screen with mouse placement and keyboard symbol
//! choice, and the end-of-game summary screen.

mod app;
pub mod board_widget;
mod game_view;
pub mod input;
mod summary_view;
pub mod theme;

pub use app::App;

//! # SOS
//!
//! Two-player SOS on a 5×5 grid, played in the terminal. Players take turns
//! choosing a symbol (S or O) and clicking an empty cell; every S-O-S run the
//! placement completes scores a point and is drawn over the board.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, run detection, turn/score state machine
//! - [`ui`] — Terminal UI: board view, summary view, input decoding
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — File-backed tracing subscriber
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;

//! Decoding of terminal events into game commands.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::game::{Command, Symbol};

use super::board_widget::BoardGeometry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Game(Command),
    Quit,
}

/// Translate a terminal event. `board` is where the grid was last drawn,
/// or `None` while it is not on screen.
pub fn action_for_event(event: &Event, board: Option<&BoardGeometry>) -> Option<Action> {
    match event {
        Event::Key(key) => action_for_key(key),
        Event::Mouse(mouse) => action_for_mouse(mouse, board?),
        _ => None,
    }
}

pub fn action_for_key(key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::Game(Command::Select(Symbol::S))),
        KeyCode::Char('o') | KeyCode::Char('O') => Some(Action::Game(Command::Select(Symbol::O))),
        _ => None,
    }
}

pub fn action_for_mouse(mouse: &MouseEvent, board: &BoardGeometry) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => board
            .cell_at(mouse.column, mouse.row)
            .map(|pos| Action::Game(Command::Place(pos))),
        _ => None,
    }
}

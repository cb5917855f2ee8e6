use crate::config::{AppConfig, UiConfig};
use crate::error::ConfigError;
use crate::game::GameState;
use crossterm::event;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;
use tracing::info;

use super::board_widget::BoardGeometry;
use super::input::{self, Action};
use super::theme::Theme;
use super::{game_view, summary_view};

pub struct App {
    game_state: GameState,
    theme: Theme,
    ui: UiConfig,
    /// Where the grid was drawn last frame; `None` once the summary is shown.
    board: Option<BoardGeometry>,
    should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, ConfigError> {
        Ok(App {
            game_state: GameState::initial(),
            theme: Theme::from_config(&config.ui)?,
            ui: config.ui.clone(),
            board: None,
            should_quit: false,
        })
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        info!("game started");
        loop {
            let mut board = None;
            terminal
                .draw(|f| board = self.render(f))
                .map_err(Into::<io::Error>::into)?;
            self.board = board;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        info!(finished = self.game_state.is_terminal(), "quit");
        Ok(())
    }

    /// Wait one tick for input and dispatch it
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(self.ui.tick_rate_ms))? {
            let event = event::read()?;
            if let Some(action) = input::action_for_event(&event, self.board.as_ref()) {
                self.dispatch(action);
            }
        }
        Ok(())
    }

    /// Feed one decoded input to the game. Rejected commands leave the
    /// game untouched and are not reported on screen.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Game(command) => {
                self.game_state.apply_mut(command);
            }
        }
    }

    /// Render the UI. Returns the grid geometry while the board is shown and
    /// fits on screen.
    pub fn render(&self, frame: &mut ratatui::Frame) -> Option<BoardGeometry> {
        match self.game_state.summary() {
            Some(summary) => {
                summary_view::render(frame, &summary);
                None
            }
            None => game_view::render(frame, &self.game_state, &self.theme, &self.ui),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Command, Phase, Player, Position, Symbol, GRID_SIZE};
    use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    fn app() -> App {
        App::new(&AppConfig::default()).unwrap()
    }

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw(app: &App) -> (String, Option<BoardGeometry>) {
        draw_sized(app, 60, 30)
    }

    fn draw_sized(app: &App, width: u16, height: u16) -> (String, Option<BoardGeometry>) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut board = None;
        terminal.draw(|f| board = app.render(f)).unwrap();
        (buffer_text(terminal.backend().buffer()), board)
    }

    #[test]
    fn test_quit_action() {
        let mut app = app();
        assert!(!app.should_quit());
        app.dispatch(Action::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_select_then_place() {
        let mut app = app();
        app.dispatch(Action::Game(Command::Select(Symbol::S)));
        app.dispatch(Action::Game(Command::Place(Position::new(2, 2))));
        let state = app.game_state();
        assert_eq!(state.current_player(), Player::Two);
        assert_eq!(state.phase(), Phase::AwaitingSymbolSelection);
        assert!(!state.board().get(Position::new(2, 2)).is_empty());
    }

    #[test]
    fn test_board_view_shows_status_and_scores() {
        let (text, board) = draw(&app());
        assert!(text.contains("Player 1's turn (no symbol selected)"));
        assert!(text.contains("Scores - Player 1: 0 Player 2: 0"));
        assert!(board.is_some());
    }

    #[test]
    fn test_standard_terminal_keeps_scores_on_screen() {
        let (text, board) = draw_sized(&app(), 80, 24);
        assert!(text.contains("Player 1's turn (no symbol selected)"));
        assert!(text.contains("Scores - Player 1: 0 Player 2: 0"));
        assert!(text.contains("Q: Quit"));

        // The grid shrank to fit between the header and the status panel.
        let board = board.unwrap();
        let grid = board.area();
        assert_eq!(board.cell_height, 2);
        assert!(grid.top() >= 3);
        assert!(grid.bottom() <= 24 - 7);
        assert!(text.contains('┌') && text.contains('┘'));
    }

    #[test]
    fn test_tiny_terminal_shows_notice_instead_of_board() {
        let mut app = app();
        let (text, board) = draw_sized(&app, 60, 20);
        assert!(board.is_none());
        assert!(text.contains("Terminal too small for the board"));
        assert!(text.contains("Scores - Player 1: 0 Player 2: 0"));

        // Clicks land nowhere while the board is hidden.
        app.dispatch(Action::Game(Command::Select(Symbol::S)));
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 30,
            row: 14,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(input::action_for_event(&click, board.as_ref()), None);
        assert_eq!(app.game_state().current_player(), Player::One);
    }

    #[test]
    fn test_click_on_drawn_board_maps_to_cell() {
        let mut app = app();
        let (_, board) = draw(&app);
        let board = board.unwrap();
        let (x, y) = board.center_of(Position::new(1, 3));

        app.dispatch(Action::Game(Command::Select(Symbol::O)));
        let action = input::action_for_mouse(
            &MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: x,
                row: y,
                modifiers: KeyModifiers::NONE,
            },
            &board,
        )
        .unwrap();
        app.dispatch(action);
        assert!(!app.game_state().board().get(Position::new(1, 3)).is_empty());
    }

    #[test]
    fn test_summary_replaces_board_when_full() {
        let mut app = app();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                app.dispatch(Action::Game(Command::Select(Symbol::O)));
                app.dispatch(Action::Game(Command::Place(Position::new(row, col))));
            }
        }
        assert_eq!(app.game_state().phase(), Phase::GameOver);

        let (text, board) = draw(&app);
        assert!(board.is_none());
        assert!(text.contains("Draw"));
        assert!(text.contains("Final Scores - Player 1: 0, Player 2: 0"));
        assert!(!text.contains("turn"));
    }
}

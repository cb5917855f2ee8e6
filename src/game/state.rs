use tracing::{debug, info};

use super::detector::{detect, Line};
use super::{Board, Player, Position, Symbol};

/// A player's intent, already decoded from raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Select(Symbol),
    Place(Position),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingSymbolSelection,
    AwaitingPlacement,
    GameOver,
}

/// Why a command left the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    NoSymbolSelected,
    /// The position is outside the grid.
    OffBoard,
    CellOccupied,
    GameOver,
}

/// What applying a [`Command`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    SymbolSelected(Symbol),
    Placed {
        position: Position,
        symbol: Symbol,
        /// SOS runs completed by this placement.
        completed: usize,
        /// The placement filled the board.
        finished: bool,
    },
    Ignored(Ignored),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

impl GameOutcome {
    fn from_scores(scores: [u32; 2]) -> Self {
        match scores[0].cmp(&scores[1]) {
            std::cmp::Ordering::Greater => GameOutcome::Winner(Player::One),
            std::cmp::Ordering::Less => GameOutcome::Winner(Player::Two),
            std::cmp::Ordering::Equal => GameOutcome::Draw,
        }
    }

    pub fn headline(self) -> String {
        match self {
            GameOutcome::Winner(player) => format!("{} Won", player.name()),
            GameOutcome::Draw => "Draw".to_string(),
        }
    }
}

/// Final result shown once the board is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub outcome: GameOutcome,
    pub scores: [u32; 2],
}

impl Summary {
    pub fn headline(&self) -> String {
        self.outcome.headline()
    }

    pub fn scores_line(&self) -> String {
        format!(
            "Final Scores - {}: {}, {}: {}",
            Player::One.name(),
            self.scores[0],
            Player::Two.name(),
            self.scores[1]
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    selected: Option<Symbol>,
    scores: [u32; 2],
    /// Completed runs for both players, oldest first.
    lines: Vec<Line>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState::with_board(Board::seeded())
    }

    /// Start from an arbitrary board, Player 1 to move.
    pub fn with_board(board: Board) -> Self {
        GameState {
            board,
            current_player: Player::One,
            selected: None,
            scores: [0; 2],
            lines: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Symbol the current player has chosen for their next placement.
    pub fn selected_symbol(&self) -> Option<Symbol> {
        self.selected
    }

    pub fn score(&self, player: Player) -> u32 {
        self.scores[player.index()]
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn lines_of(&self, player: Player) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(move |line| line.player == player)
    }

    pub fn is_terminal(&self) -> bool {
        self.board.is_full()
    }

    pub fn phase(&self) -> Phase {
        if self.is_terminal() {
            Phase::GameOver
        } else if self.selected.is_some() {
            Phase::AwaitingPlacement
        } else {
            Phase::AwaitingSymbolSelection
        }
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.is_terminal().then(|| GameOutcome::from_scores(self.scores))
    }

    pub fn summary(&self) -> Option<Summary> {
        self.outcome().map(|outcome| Summary {
            outcome,
            scores: self.scores,
        })
    }

    pub fn status_line(&self) -> String {
        let symbol = match self.selected {
            Some(symbol) => symbol.glyph(),
            None => "no symbol selected",
        };
        format!("{}'s turn ({})", self.current_player.name(), symbol)
    }

    pub fn scores_line(&self) -> String {
        format!(
            "Scores - {}: {} {}: {}",
            Player::One.name(),
            self.scores[0],
            Player::Two.name(),
            self.scores[1]
        )
    }

    /// Choose the symbol for the current player's next placement.
    /// Returns false once the game is over.
    pub fn select(&mut self, symbol: Symbol) -> bool {
        matches!(
            self.apply_mut(Command::Select(symbol)),
            Effect::SymbolSelected(_)
        )
    }

    /// Place the selected symbol at `pos` for the current player.
    ///
    /// Returns false without touching anything if no symbol is selected, the
    /// cell is occupied, or the game is over.
    pub fn place(&mut self, pos: Position) -> bool {
        matches!(self.apply_mut(Command::Place(pos)), Effect::Placed { .. })
    }

    /// Apply a command and return the new state (immutable)
    pub fn apply(&self, command: Command) -> (GameState, Effect) {
        let mut next = self.clone();
        let effect = next.apply_mut(command);
        (next, effect)
    }

    /// Apply a command in place (for UI efficiency)
    pub fn apply_mut(&mut self, command: Command) -> Effect {
        let effect = self.transition(command);
        match effect {
            Effect::SymbolSelected(symbol) => {
                debug!(player = self.current_player.number(), ?symbol, "symbol selected");
            }
            Effect::Placed {
                position,
                symbol,
                completed,
                finished,
            } => {
                info!(
                    player = self.current_player.other().number(),
                    row = position.row,
                    col = position.col,
                    ?symbol,
                    completed,
                    "symbol placed"
                );
                if finished {
                    if let Some(summary) = self.summary() {
                        info!(
                            result = %summary.headline(),
                            player_1 = summary.scores[0],
                            player_2 = summary.scores[1],
                            "game over"
                        );
                    }
                }
            }
            Effect::Ignored(reason) => {
                debug!(?command, ?reason, "command ignored");
            }
        }
        effect
    }

    fn transition(&mut self, command: Command) -> Effect {
        if self.is_terminal() {
            return Effect::Ignored(Ignored::GameOver);
        }

        match command {
            Command::Select(symbol) => {
                self.selected = Some(symbol);
                Effect::SymbolSelected(symbol)
            }
            Command::Place(position) => {
                if !position.in_bounds() {
                    return Effect::Ignored(Ignored::OffBoard);
                }
                let Some(symbol) = self.selected else {
                    return Effect::Ignored(Ignored::NoSymbolSelected);
                };
                if !self.board.place(position, symbol) {
                    return Effect::Ignored(Ignored::CellOccupied);
                }

                let mover = self.current_player;
                let detection = detect(&self.board, position, mover);
                let completed = detection.count();
                self.scores[mover.index()] += completed as u32;
                self.lines.extend(detection.lines);

                // The turn passes after every accepted placement, scoring or not.
                self.current_player = mover.other();
                self.selected = None;

                Effect::Placed {
                    position,
                    symbol,
                    completed,
                    finished: self.board.is_full(),
                }
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

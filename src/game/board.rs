pub const GRID_SIZE: usize = 5;

/// A mark a player can put on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    S,
    O,
}

impl Symbol {
    pub fn glyph(self) -> &'static str {
        match self {
            Symbol::S => "S",
            Symbol::O => "O",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Filled(Symbol),
}

impl Cell {
    /// Text shown for this cell; empty cells render as a blank.
    pub fn glyph(self) -> &'static str {
        match self {
            Cell::Empty => " ",
            Cell::Filled(symbol) => symbol.glyph(),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Grid coordinate. Row 0 is the top row, col 0 the leftmost column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Not bounds checked; see [`Position::in_bounds`].
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    pub const fn in_bounds(&self) -> bool {
        self.row < GRID_SIZE && self.col < GRID_SIZE
    }

    /// Build a position from signed coordinates, or `None` if it falls
    /// outside the grid.
    pub fn checked(row: isize, col: isize) -> Option<Self> {
        let in_range = |v: isize| v >= 0 && (v as usize) < GRID_SIZE;
        if in_range(row) && in_range(col) {
            Some(Position::new(row as usize, col as usize))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Board {
    /// Create a board with every cell empty
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Create the starting board: the four corners hold an S.
    pub fn seeded() -> Self {
        let mut board = Board::new();
        let last = GRID_SIZE - 1;
        for (row, col) in [(0, 0), (0, last), (last, 0), (last, last)] {
            board.cells[row][col] = Cell::Filled(Symbol::S);
        }
        board
    }

    /// Panics if `pos` is off the grid.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    /// Put `symbol` on an empty cell. Returns false and leaves the board
    /// untouched if the cell is already filled or off the grid.
    pub fn place(&mut self, pos: Position, symbol: Symbol) -> bool {
        let cell = self.cells.get_mut(pos.row).and_then(|row| row.get_mut(pos.col));
        let Some(cell) = cell else {
            return false;
        };
        if !cell.is_empty() {
            return false;
        }
        *cell = Cell::Filled(symbol);
        true
    }

    pub fn empty_cells(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_empty())
            .count()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.empty_cells() == 0
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; GRID_SIZE]> {
        self.cells.iter()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::seeded()
    }
}

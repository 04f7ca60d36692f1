use std::fmt;

use arrayvec::ArrayVec;

use super::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Column holding the centre of the board.
pub const CENTER_COL: usize = COLS / 2;

/// A set of playable columns; never more than one entry per column.
pub type Moves = ArrayVec<usize, COLS>;

/// Line directions through a cell as (column step, row step): horizontal,
/// vertical, rising diagonal, falling diagonal.
pub(crate) const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// A 7x6 grid stored column-major. Row 0 is the bottom row, so the pieces
/// of a column always occupy rows `0..height` with no gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; ROWS]; COLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; ROWS]; COLS],
        }
    }

    /// Get the cell at a specific position (row 0 is the bottom)
    pub fn get(&self, col: usize, row: usize) -> Cell {
        self.cells[col][row]
    }

    /// Like [`Board::get`] but tolerates coordinates outside the grid.
    fn get_checked(&self, col: isize, row: isize) -> Option<Cell> {
        if col < 0 || row < 0 || col >= COLS as isize || row >= ROWS as isize {
            return None;
        }
        Some(self.cells[col as usize][row as usize])
    }

    /// First empty row of `col` scanning bottom-up, or `None` when the column
    /// is full.
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        self.cells[col].iter().position(|&cell| cell == Cell::Empty)
    }

    pub fn is_column_full(&self, col: usize) -> bool {
        self.cells[col][ROWS - 1] != Cell::Empty
    }

    /// Drop a piece for `player` into `col` and return the row where it
    /// landed. A full column is left untouched and yields `None`.
    ///
    /// `col` must be below [`COLS`]; callers validate user input first.
    pub fn place(&mut self, col: usize, player: Player) -> Option<usize> {
        let row = self.lowest_empty_row(col)?;
        self.cells[col][row] = player.to_cell();
        Some(row)
    }

    /// Number of occupied cells.
    pub fn count_pieces(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.count_pieces() == COLS * ROWS
    }

    /// True once no further move can be played. Callers check for a win on
    /// the last placement before asking this.
    pub fn check_draw(&self) -> bool {
        self.is_full()
    }

    /// Check whether the piece `player` just placed at `(col, row)` completes
    /// four or more in a line.
    ///
    /// Only the most recent placement should be passed in: the cell itself
    /// is assumed to hold `player` and is counted once.
    pub fn is_winning_placement(&self, col: usize, row: usize, player: Player) -> bool {
        let cell = player.to_cell();
        DIRECTIONS.iter().any(|&(dc, dr)| {
            let run = 1
                + self.run_length(col, row, dc, dr, cell)
                + self.run_length(col, row, -dc, -dr, cell);
            run >= 4
        })
    }

    /// Count consecutive `cell`s starting one step away from `(col, row)`.
    fn run_length(&self, col: usize, row: usize, dc: isize, dr: isize, cell: Cell) -> usize {
        let mut count = 0;
        let mut c = col as isize + dc;
        let mut r = row as isize + dr;
        while self.get_checked(c, r) == Some(cell) {
            count += 1;
            c += dc;
            r += dr;
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            for col in 0..COLS {
                let symbol = match self.get(col, row) {
                    Cell::Empty => '.',
                    Cell::Red => 'X',
                    Cell::Yellow => 'O',
                };
                write!(f, " {symbol}")?;
            }
            writeln!(f)?;
        }
        for col in 1..=COLS {
            write!(f, " {col}")?;
        }
        writeln!(f)
    }
}

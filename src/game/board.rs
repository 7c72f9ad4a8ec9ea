use serde::{Deserialize, Serialize};

use super::outcome::{Coord, GameOutcome};
use super::player::Player;
use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Length of a winning line.
pub const CONNECT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Red,
    Green,
}

impl Cell {
    /// The player owning this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Green => Some(Player::Green),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A 7x6 board stored column-major. Row 0 is the bottom of each column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Board {
    pub(super) columns: [[Cell; ROWS]; COLS],
}

/// Result of a copy-on-write move: the new board and the row the token landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub board: Board,
    pub column: usize,
    pub row: usize,
}

impl Placement {
    /// Where the token landed
    pub fn coord(&self) -> Coord {
        Coord::new(self.column, self.row)
    }
}

/// Create a board with every cell empty.
pub fn create_empty_board() -> Board {
    Board::new()
}

/// Drop `player`'s token into `column`, leaving `board` untouched.
pub fn apply_move(board: &Board, column: usize, player: Player) -> Result<Placement, MoveError> {
    let mut next = *board;
    let row = next.drop_token(column, player.to_cell())?;
    Ok(Placement {
        board: next,
        column,
        row,
    })
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            columns: [[Cell::Empty; ROWS]; COLS],
        }
    }

    /// Get the cell at a specific position.
    ///
    /// Panics if the position is off the board; use [`Board::cell`] for a
    /// checked lookup.
    pub fn get(&self, column: usize, row: usize) -> Cell {
        self.columns[column][row]
    }

    /// Checked lookup, `None` when the coordinate is off the board
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        self.columns
            .get(coord.column)
            .and_then(|col| col.get(coord.row))
            .copied()
    }

    /// Column-major view of the cells, bottom row first
    pub fn columns(&self) -> &[[Cell; ROWS]; COLS] {
        &self.columns
    }

    /// Number of tokens in a column; also the row the next token lands in.
    /// `None` for a column off the board.
    pub fn column_height(&self, column: usize) -> Option<usize> {
        let cells = self.columns.get(column)?;
        Some(cells.iter().take_while(|cell| !cell.is_empty()).count())
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        if column >= COLS {
            return true;
        }
        !self.columns[column][ROWS - 1].is_empty()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.columns
            .iter()
            .all(|col| col.iter().all(|cell| !cell.is_empty()))
    }

    /// Number of occupied cells
    pub fn token_count(&self) -> usize {
        self.columns
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Columns that can still take a token
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Drop a token in a column, returns the row where it landed
    pub fn drop_token(&mut self, column: usize, cell: Cell) -> Result<usize, MoveError> {
        if column >= COLS {
            return Err(MoveError::InvalidColumn { column });
        }

        // Lowest empty row in this column
        let row = self.columns[column]
            .iter()
            .position(|c| c.is_empty())
            .ok_or(MoveError::ColumnFull { column })?;

        self.columns[column][row] = cell;
        Ok(row)
    }

    /// Clear every cell
    pub fn reset(&mut self) {
        *self = Board::new();
    }

    /// Evaluate the whole board by rescanning every possible line.
    ///
    /// The first line found is reported, in the order horizontal, vertical,
    /// rising diagonal, falling diagonal; within a family columns are scanned
    /// before rows.
    pub fn evaluate(&self) -> GameOutcome {
        // (dc, dr, start columns, start rows)
        let families: [(isize, isize, usize, std::ops::RangeInclusive<usize>); 4] = [
            (1, 0, COLS - CONNECT + 1, 0..=ROWS - 1),
            (0, 1, COLS, 0..=ROWS - CONNECT),
            (1, 1, COLS - CONNECT + 1, 0..=ROWS - CONNECT),
            (1, -1, COLS - CONNECT + 1, CONNECT - 1..=ROWS - 1),
        ];

        for (dc, dr, start_cols, start_rows) in families {
            for column in 0..start_cols {
                for row in start_rows.clone() {
                    if let Some(outcome) = self.line_at(Coord::new(column, row), dc, dr) {
                        return outcome;
                    }
                }
            }
        }

        if self.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }

    /// Check the four cells starting at `start` along `(dc, dr)`.
    fn line_at(&self, start: Coord, dc: isize, dr: isize) -> Option<GameOutcome> {
        let player = self.cell(start)?.player()?;
        let mut cells = Vec::with_capacity(CONNECT);
        let mut coord = start;
        cells.push(coord);

        for _ in 1..CONNECT {
            coord = coord.offset(dc, dr)?;
            if self.cell(coord)? != player.to_cell() {
                return None;
            }
            cells.push(coord);
        }

        cells.sort();
        Some(GameOutcome::Win { player, cells })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

//! Stored board shape: 7 column arrays of 6 cells, bottom row first.
//! Cells are `"red"`, `"green"` or `null`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::board::{Board, Cell, COLS, ROWS};
use super::player::Player;
use crate::error::BoardError;

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.player().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let player = Option::<Player>::deserialize(deserializer)?;
        Ok(player.map_or(Cell::Empty, Player::to_cell))
    }
}

impl From<Board> for Vec<Vec<Cell>> {
    fn from(board: Board) -> Self {
        board.columns.iter().map(|col| col.to_vec()).collect()
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Board {
    type Error = BoardError;

    fn try_from(columns: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        if columns.len() != COLS {
            return Err(BoardError::ColumnCount {
                found: columns.len(),
            });
        }

        let mut board = Board::new();
        for (column, cells) in columns.into_iter().enumerate() {
            if cells.len() != ROWS {
                return Err(BoardError::RowCount {
                    column,
                    found: cells.len(),
                });
            }

            let mut below_empty = false;
            for (row, cell) in cells.into_iter().enumerate() {
                if cell.is_empty() {
                    below_empty = true;
                } else if below_empty {
                    return Err(BoardError::FloatingToken { column, row });
                }
                board.columns[column][row] = cell;
            }
        }

        Ok(board)
    }
}

impl Board {
    /// Decode a stored board
    pub fn from_json(json: &str) -> Result<Board, BoardError> {
        let columns: Vec<Vec<Cell>> = serde_json::from_str(json)?;
        Board::try_from(columns)
    }

    /// Encode to the stored shape
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("board serializes")
    }
}

use serde::{Deserialize, Serialize};

use super::board::{COLS, ROWS};
use super::player::Player;

/// A board position. Row 0 is the bottom row.
///
/// Ordering is by column, then row, which is the order winning cells are
/// reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub column: usize,
    pub row: usize,
}

impl Coord {
    pub const fn new(column: usize, row: usize) -> Self {
        Coord { column, row }
    }

    pub fn in_bounds(self) -> bool {
        self.column < COLS && self.row < ROWS
    }

    /// Step by `(dc, dr)`, returning `None` when the result leaves the board.
    pub(crate) fn offset(self, dc: isize, dr: isize) -> Option<Coord> {
        let column = self.column.checked_add_signed(dc)?;
        let row = self.row.checked_add_signed(dr)?;
        let next = Coord { column, row };
        next.in_bounds().then_some(next)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((column, row): (usize, usize)) -> Self {
        Coord { column, row }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GameOutcome {
    InProgress,
    Win { player: Player, cells: Vec<Coord> },
    Draw,
}

impl GameOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Win { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Winning coordinates, empty unless the outcome is a win.
    pub fn winning_cells(&self) -> &[Coord] {
        match self {
            GameOutcome::Win { cells, .. } => cells,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_stays_on_board() {
        let origin = Coord::new(0, 0);
        assert_eq!(origin.offset(-1, 0), None);
        assert_eq!(origin.offset(0, -1), None);
        assert_eq!(origin.offset(1, 1), Some(Coord::new(1, 1)));

        let corner = Coord::new(COLS - 1, ROWS - 1);
        assert_eq!(corner.offset(1, 0), None);
        assert_eq!(corner.offset(0, 1), None);
        assert_eq!(corner.offset(-1, -1), Some(Coord::new(5, 4)));
    }

    #[test]
    fn test_coord_ordering_is_column_major() {
        let mut coords = vec![Coord::new(3, 0), Coord::new(0, 3), Coord::new(0, 1)];
        coords.sort();
        assert_eq!(
            coords,
            vec![Coord::new(0, 1), Coord::new(0, 3), Coord::new(3, 0)]
        );
    }

    #[test]
    fn test_outcome_accessors() {
        let win = GameOutcome::Win {
            player: Player::Green,
            cells: vec![Coord::new(0, 0)],
        };
        assert!(win.is_terminal());
        assert_eq!(win.winner(), Some(Player::Green));
        assert_eq!(win.winning_cells(), &[Coord::new(0, 0)]);

        assert!(!GameOutcome::InProgress.is_terminal());
        assert!(GameOutcome::Draw.is_terminal());
        assert!(GameOutcome::Draw.winning_cells().is_empty());
    }

    #[test]
    fn test_outcome_json() {
        let json = serde_json::to_string(&GameOutcome::Win {
            player: Player::Red,
            cells: vec![Coord::new(1, 0)],
        })
        .unwrap();
        assert_eq!(
            json,
            r#"{"status":"win","player":"red","cells":[{"column":1,"row":0}]}"#
        );
    }
}

use serde::{Deserialize, Serialize};

use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// Moves first unless configured otherwise
    #[default]
    Red,
    Green,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Red => Player::Green,
            Player::Green => Player::Red,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Red => Cell::Red,
            Player::Green => Cell::Green,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Green => "Green",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::Red.other(), Player::Green);
        assert_eq!(Player::Green.other(), Player::Red);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::Red.name(), "Red");
        assert_eq!(Player::Green.name(), "Green");
    }

    #[test]
    fn test_cell_roundtrip() {
        for player in [Player::Red, Player::Green] {
            assert_eq!(player.to_cell().player(), Some(player));
        }
    }

    #[test]
    fn test_serde_tags() {
        assert_eq!(serde_json::to_string(&Player::Green).unwrap(), "\"green\"");
        let p: Player = serde_json::from_str("\"red\"").unwrap();
        assert_eq!(p, Player::Red);
    }
}

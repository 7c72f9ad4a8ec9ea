use tracing::{debug, info, warn};

use super::board::{Board, COLS};
use super::outcome::{Coord, GameOutcome};
use super::player::Player;
use super::win_lines::extract_win_lines;
use crate::error::MoveError;

/// One accepted move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedMove {
    pub player: Player,
    pub coord: Coord,
}

/// A game in progress: board, turn order, history and outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    first_player: Player,
    current_player: Player,
    history: Vec<PlayedMove>,
    outcome: GameOutcome,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        Self::with_first_player(Player::default())
    }

    pub fn with_first_player(first_player: Player) -> Self {
        GameState {
            board: Board::new(),
            first_player,
            current_player: first_player,
            history: Vec::new(),
            outcome: GameOutcome::InProgress,
        }
    }

    /// Replay a list of columns from a fresh game
    pub fn replay(first_player: Player, columns: &[usize]) -> Result<Self, MoveError> {
        let mut state = Self::with_first_player(first_player);
        for &column in columns {
            state.apply_move_mut(column)?;
        }
        Ok(state)
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> &GameOutcome {
        &self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    pub fn last_move(&self) -> Option<PlayedMove> {
        self.history.last().copied()
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply move in place, returning where the token landed.
    ///
    /// Rejected moves leave the state untouched.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<Coord, MoveError> {
        if self.is_terminal() {
            warn!(column, "move rejected: game is over");
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        let row = self
            .board
            .drop_token(column, player.to_cell())
            .inspect_err(|err| warn!(column, player = player.name(), %err, "move rejected"))?;

        let coord = Coord::new(column, row);
        self.history.push(PlayedMove { player, coord });
        debug!(column, row, player = player.name(), "token dropped");

        self.outcome = extract_win_lines(&self.board, coord, player);
        match &self.outcome {
            GameOutcome::InProgress => self.current_player = player.other(),
            GameOutcome::Win { player, cells } => {
                info!(
                    winner = player.name(),
                    cells = cells.len(),
                    moves = self.history.len(),
                    "game won"
                );
            }
            GameOutcome::Draw => info!(moves = self.history.len(), "game drawn"),
        }

        Ok(coord)
    }

    /// Start over with an empty board and the same first player
    pub fn reset(&mut self) {
        *self = Self::with_first_player(self.first_player);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

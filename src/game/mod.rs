//! Core Connect Four game logic: board, gravity drops, win/draw evaluation,
//! winning-line extraction, the stored board shape and a turn-tracking session.

mod board;
mod codec;
mod outcome;
mod player;
mod state;
mod win_lines;

pub use board::{apply_move, create_empty_board, Board, Cell, Placement, COLS, CONNECT, ROWS};
pub use outcome::{Coord, GameOutcome};
pub use player::Player;
pub use state::{GameState, PlayedMove};
pub use win_lines::extract_win_lines;

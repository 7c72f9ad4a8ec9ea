//! Win detection local to the last placed token.
//!
//! Instead of rescanning the board, walk outward from the token along each
//! axis and collect the matching neighbours. This also yields the exact cells
//! to highlight, including every line when one drop completes several.

use super::board::{Board, CONNECT};
use super::outcome::{Coord, GameOutcome};
use super::player::Player;

/// Horizontal, vertical, rising and falling diagonal. Each axis is walked in
/// both directions.
const AXES: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Evaluate the board after `player` dropped a token at `last`.
///
/// If `last` is off the board or does not hold `player`'s token, no line is
/// reported and only the draw check applies.
pub fn extract_win_lines(board: &Board, last: Coord, player: Player) -> GameOutcome {
    if board.cell(last) == Some(player.to_cell()) {
        let mut cells = vec![last];

        for (dc, dr) in AXES {
            let forward = walk(board, last, player, dc, dr);
            let backward = walk(board, last, player, -dc, -dr);

            if forward.len() + backward.len() >= CONNECT - 1 {
                cells.extend(forward);
                cells.extend(backward);
            }
        }

        if cells.len() > 1 {
            cells.sort();
            cells.dedup();
            return GameOutcome::Win { player, cells };
        }
    }

    if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

/// Contiguous `player` cells from `origin` along `(dc, dr)`, at most three steps.
fn walk(board: &Board, origin: Coord, player: Player, dc: isize, dr: isize) -> Vec<Coord> {
    let mut found = Vec::with_capacity(CONNECT - 1);
    let mut coord = origin;

    for _ in 1..CONNECT {
        match coord.offset(dc, dr) {
            Some(next) if board.cell(next) == Some(player.to_cell()) => {
                found.push(next);
                coord = next;
            }
            _ => break,
        }
    }

    found
}

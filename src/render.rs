use crate::config::RenderConfig;
use crate::game::{Board, Cell, Coord, GameOutcome, COLS, ROWS};

/// Render a board as text, top row first, with `highlight` cells wrapped in
/// brackets and 1-based column labels underneath.
pub fn render_board(board: &Board, highlight: &[Coord], glyphs: &RenderConfig) -> String {
    let mut out = String::with_capacity((ROWS + 1) * COLS * 3 + ROWS + 1);

    for row in (0..ROWS).rev() {
        for col in 0..COLS {
            let glyph = match board.get(col, row) {
                Cell::Empty => glyphs.empty,
                Cell::Red => glyphs.red,
                Cell::Green => glyphs.green,
            };
            if highlight.contains(&Coord::new(col, row)) {
                out.push('[');
                out.push(glyph);
                out.push(']');
            } else {
                out.push(' ');
                out.push(glyph);
                out.push(' ');
            }
        }
        out.push('\n');
    }

    for col in 1..=COLS {
        out.push_str(&format!(" {col} "));
    }
    out.push('\n');
    out
}

/// One-line summary of an outcome
pub fn describe_outcome(outcome: &GameOutcome) -> String {
    match outcome {
        GameOutcome::InProgress => "In progress".to_string(),
        GameOutcome::Draw => "Draw".to_string(),
        GameOutcome::Win { player, cells } => {
            let cells: Vec<String> = cells
                .iter()
                .map(|c| format!("({},{})", c.column, c.row))
                .collect();
            format!("{} wins: {}", player.name(), cells.join(" "))
        }
    }
}

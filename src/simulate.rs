//! Random self-play that cross-checks the local win extraction used by
//! [`GameState`] against a full board rescan after every move.

use serde::Serialize;
use tracing::{debug, warn};

use crate::game::{GameOutcome, GameState, Player};
use crate::random::RandomPlayer;

/// Result of a single game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub winner: Option<Player>,
    pub game_length: usize,
    /// Moves after which the two evaluators disagreed
    pub disagreements: usize,
}

/// Aggregate over a simulation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SimulationReport {
    pub games: usize,
    pub red_wins: usize,
    pub green_wins: usize,
    pub draws: usize,
    pub total_moves: usize,
    pub disagreements: usize,
}

impl SimulationReport {
    pub fn record(&mut self, game: &GameRecord) {
        self.games += 1;
        match game.winner {
            Some(Player::Red) => self.red_wins += 1,
            Some(Player::Green) => self.green_wins += 1,
            None => self.draws += 1,
        }
        self.total_moves += game.game_length;
        self.disagreements += game.disagreements;
    }

    /// Share of games won by `player`.
    pub fn win_rate(&self, player: Player) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        let wins = match player {
            Player::Red => self.red_wins,
            Player::Green => self.green_wins,
        };
        wins as f32 / self.games as f32
    }

    pub fn draw_rate(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.draws as f32 / self.games as f32
    }

    pub fn average_game_length(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_moves as f32 / self.games as f32
    }
}

/// Play one game with a single random player choosing for both sides.
pub fn play_random_game(player: &mut RandomPlayer, first_player: Player) -> GameRecord {
    let mut state = GameState::with_first_player(first_player);
    let mut disagreements = 0;

    while let Some(column) = player.select_column(&state) {
        // Columns come from legal_columns(), so the drop is always accepted.
        let Ok(coord) = state.apply_move_mut(column) else {
            break;
        };

        if !agrees(state.outcome(), &state.board().evaluate()) {
            warn!(
                column = coord.column,
                row = coord.row,
                board = %state.board().to_json(),
                "win extraction disagrees with full rescan"
            );
            disagreements += 1;
        }
    }

    GameRecord {
        winner: state.outcome().winner(),
        game_length: state.history().len(),
        disagreements,
    }
}

/// Play `games` random games from a seed.
pub fn simulate(games: usize, seed: u64, first_player: Player) -> SimulationReport {
    let mut player = RandomPlayer::seeded(seed);
    let mut report = SimulationReport::default();

    for index in 0..games {
        let game = play_random_game(&mut player, first_player);
        debug!(
            index,
            winner = game.winner.map(Player::name),
            moves = game.game_length,
            "game finished"
        );
        report.record(&game);
    }

    report
}

/// Same winner, or both in progress, or both drawn. The rescan's line must lie
/// within the extracted cells.
fn agrees(local: &GameOutcome, rescan: &GameOutcome) -> bool {
    match (local, rescan) {
        (GameOutcome::Win { player: a, cells }, GameOutcome::Win { player: b, cells: line }) => {
            a == b && line.iter().all(|c| cells.contains(c))
        }
        (GameOutcome::InProgress, GameOutcome::InProgress) => true,
        (GameOutcome::Draw, GameOutcome::Draw) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Coord;

    #[test]
    fn test_simulation_counts_add_up() {
        let report = simulate(200, 11, Player::Red);
        assert_eq!(report.games, 200);
        assert_eq!(report.red_wins + report.green_wins + report.draws, 200);
        assert_eq!(report.disagreements, 0);
        assert!(report.average_game_length() >= 7.0);
        assert!(report.average_game_length() <= 42.0);
    }

    #[test]
    fn test_simulation_is_reproducible() {
        assert_eq!(simulate(50, 3, Player::Green), simulate(50, 3, Player::Green));
    }

    #[test]
    fn test_record_and_rates() {
        let mut report = SimulationReport::default();
        assert_eq!(report.win_rate(Player::Red), 0.0);
        assert_eq!(report.draw_rate(), 0.0);

        report.record(&GameRecord {
            winner: Some(Player::Red),
            game_length: 7,
            disagreements: 0,
        });
        report.record(&GameRecord {
            winner: None,
            game_length: 42,
            disagreements: 0,
        });

        assert_eq!(report.games, 2);
        assert!((report.win_rate(Player::Red) - 0.5).abs() < 1e-6);
        assert!((report.draw_rate() - 0.5).abs() < 1e-6);
        assert!((report.average_game_length() - 24.5).abs() < 1e-6);
    }

    #[test]
    fn test_agrees() {
        let line = vec![
            Coord::new(0, 0),
            Coord::new(1, 0),
            Coord::new(2, 0),
            Coord::new(3, 0),
        ];
        let mut wider = line.clone();
        wider.push(Coord::new(4, 0));

        let local = GameOutcome::Win {
            player: Player::Red,
            cells: wider,
        };
        let rescan = GameOutcome::Win {
            player: Player::Red,
            cells: line.clone(),
        };
        assert!(agrees(&local, &rescan));
        assert!(!agrees(&rescan, &GameOutcome::Draw));
        assert!(!agrees(
            &GameOutcome::Win {
                player: Player::Green,
                cells: line.clone(),
            },
            &rescan
        ));
        assert!(!agrees(&GameOutcome::InProgress, &rescan));
    }
}

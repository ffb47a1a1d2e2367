use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::{Board, Location, Player, COLS};

use super::moves::{terminal_placement, valid_moves};
use super::strategy::Strategy;

const BLOCK_CHANCE: f64 = 0.85;
const CENTER_CHANCE: f64 = 0.6;

/// Mid tier: always takes a win, usually blocks, and leans toward the center
/// columns. Each step after the win check is gated by its own random draw.
pub struct MediumStrategy {
    player: Player,
    rng: StdRng,
}

impl MediumStrategy {
    pub fn new(player: Player) -> Self {
        MediumStrategy {
            player,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(player: Player, seed: u64) -> Self {
        MediumStrategy {
            player,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for MediumStrategy {
    fn choose_move(&mut self, board: &Board) -> Location {
        let moves = valid_moves(board);
        assert!(!moves.is_empty(), "No valid moves available");

        if let Some(win) = terminal_placement(board, &moves, self.player.to_cell()) {
            return win;
        }

        if self.rng.random::<f64>() < BLOCK_CHANCE {
            let opponent = self.player.other().to_cell();
            if let Some(block) = terminal_placement(board, &moves, opponent) {
                return block;
            }
        }

        let center = COLS / 2;
        let center_moves: Vec<Location> = moves
            .iter()
            .copied()
            .filter(|mv| mv.col.abs_diff(center) <= 1)
            .collect();
        if !center_moves.is_empty() && self.rng.random::<f64>() <= CENTER_CHANCE {
            return center_moves[self.rng.random_range(0..center_moves.len())];
        }

        moves[self.rng.random_range(0..moves.len())]
    }

    fn name(&self) -> &str {
        "Medium"
    }
}

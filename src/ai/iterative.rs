use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::{Board, Location, Player};

use super::moves::{terminal_placement, valid_moves};
use super::strategy::Strategy;

const BLOCK_CHANCE: f64 = 0.4;

/// Reserved tier for a future adaptive opponent that tunes itself between
/// games. Kept as its own type so it can be swapped out independently; for
/// now it plays exactly like the easy tier.
pub struct IterativeStrategy {
    player: Player,
    rng: StdRng,
}

impl IterativeStrategy {
    pub fn new(player: Player) -> Self {
        IterativeStrategy {
            player,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(player: Player, seed: u64) -> Self {
        IterativeStrategy {
            player,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for IterativeStrategy {
    fn choose_move(&mut self, board: &Board) -> Location {
        let moves = valid_moves(board);
        assert!(!moves.is_empty(), "No valid moves available");

        if self.rng.random::<f64>() < BLOCK_CHANCE {
            let opponent = self.player.other().to_cell();
            if let Some(block) = terminal_placement(board, &moves, opponent) {
                return block;
            }
        }

        moves[self.rng.random_range(0..moves.len())]
    }

    fn name(&self) -> &str {
        "Iterative"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn test_matches_easy_tier_behavior_for_now() {
        use super::super::EasyStrategy;

        let mut board = Board::new();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(2, Cell::Red).unwrap();

        for seed in 0..50 {
            let mut iterative = IterativeStrategy::with_seed(Player::Red, seed);
            let mut easy = EasyStrategy::with_seed(Player::Red, seed);
            assert_eq!(iterative.choose_move(&board), easy.choose_move(&board));
        }
    }

    #[test]
    fn test_returns_valid_move() {
        let mut board = Board::new();
        for _ in 0..6 {
            board.drop_piece(0, Cell::Red).unwrap();
        }

        for seed in 0..50 {
            let mut ai = IterativeStrategy::with_seed(Player::Yellow, seed);
            let loc = ai.choose_move(&board);
            assert_ne!(loc.col, 0, "column 0 is full");
            assert_eq!(board.drop_row(loc.col), Some(loc.row));
        }
    }
}

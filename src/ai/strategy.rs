use crate::game::{Board, Location, Player};

use super::{EasyStrategy, HardStrategy, IterativeStrategy, MediumStrategy};

/// Difficulty tags selectable from configuration and the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Iterative,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Iterative => "Iterative",
        }
    }
}

/// Universal interface for the move-decision tiers.
///
/// A strategy is bound to its side at construction and never infers identity
/// from the board. The returned location is always a currently valid move;
/// callers must not invoke a strategy on a full or finished board.
pub trait Strategy {
    /// Choose the cell to play for the bound side.
    fn choose_move(&mut self, board: &Board) -> Location;

    /// Return the strategy's display name.
    fn name(&self) -> &str;
}

/// Build the strategy for a difficulty tag, bound to `player`, drawing
/// randomness from an OS-seeded generator.
pub fn select_strategy(difficulty: Difficulty, player: Player) -> Box<dyn Strategy> {
    match difficulty {
        Difficulty::Easy => Box::new(EasyStrategy::new(player)),
        Difficulty::Medium => Box::new(MediumStrategy::new(player)),
        Difficulty::Hard => Box::new(HardStrategy::new(player)),
        Difficulty::Iterative => Box::new(IterativeStrategy::new(player)),
    }
}

/// Seeded variant for reproducible games and deterministic tests.
pub fn select_strategy_seeded(
    difficulty: Difficulty,
    player: Player,
    seed: u64,
) -> Box<dyn Strategy> {
    match difficulty {
        Difficulty::Easy => Box::new(EasyStrategy::with_seed(player, seed)),
        Difficulty::Medium => Box::new(MediumStrategy::with_seed(player, seed)),
        Difficulty::Hard => Box::new(HardStrategy::with_seed(player, seed)),
        Difficulty::Iterative => Box::new(IterativeStrategy::with_seed(player, seed)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_covers_every_tag() {
        for (difficulty, name) in [
            (Difficulty::Easy, "Easy"),
            (Difficulty::Medium, "Medium"),
            (Difficulty::Hard, "Hard"),
            (Difficulty::Iterative, "Iterative"),
        ] {
            let strategy = select_strategy(difficulty, Player::Red);
            assert_eq!(strategy.name(), name);
            assert_eq!(difficulty.label(), name);
        }
    }

    #[test]
    fn test_selector_returns_valid_move_for_every_tag() {
        let board = Board::new();
        for difficulty in [
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Iterative,
        ] {
            let mut strategy = select_strategy_seeded(difficulty, Player::Yellow, 7);
            let loc = strategy.choose_move(&board);
            assert_eq!(loc.row, 5, "{difficulty:?} must drop to the bottom row");
            assert!(loc.col < 7);
        }
    }

    #[test]
    fn test_difficulty_deserializes_lowercase() {
        #[derive(serde::Deserialize)]
        struct Wrapper {
            difficulty: Difficulty,
        }
        let w: Wrapper = toml::from_str("difficulty = \"iterative\"").unwrap();
        assert_eq!(w.difficulty, Difficulty::Iterative);

        assert!(toml::from_str::<Wrapper>("difficulty = \"impossible\"").is_err());
    }
}

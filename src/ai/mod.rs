//! The move-decision engine: a common strategy interface, four difficulty
//! tiers layered from random-ish to threat-aware, and the selector that binds
//! a tier to a side.

mod easy;
mod hard;
mod iterative;
mod medium;
mod moves;
mod strategy;

pub use easy::EasyStrategy;
pub use hard::HardStrategy;
pub use iterative::IterativeStrategy;
pub use medium::MediumStrategy;
pub use moves::valid_moves;
pub use strategy::{select_strategy, select_strategy_seeded, Difficulty, Strategy};

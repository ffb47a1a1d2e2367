//! # Connect Four AI
//!
//! A Connect Four game built around a heuristic move-decision engine with
//! four difficulty tiers, playable against in a Ratatui terminal UI.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, line analysis, player, state machine
//! - [`ai`] — Strategy trait, difficulty tiers (Easy/Medium/Hard/Iterative),
//!   move generation, selector
//! - [`ui`] — Terminal UI: game view and app loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;

//! Snake TUI - the classic grid snake game in the terminal
//!
//! This library provides:
//! - Core simulation (game module): fixed-timestep clock, segment-following
//!   snake body with deferred growth, collision predicates, world state
//! - Key-event translation with the anti-reversal steering policy (input module)
//! - Sparse cell-buffer rendering over ratatui (render module)
//! - Session statistics for the header line (metrics module)
//! - The interactive play loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;

//! Core simulation module for Snake
//!
//! Everything in here is deterministic game logic with no I/O or rendering
//! dependencies: the grid math, the segment-following snake body, the
//! collision predicates, the world state machine, and the fixed-timestep
//! clock that paces it all.

pub mod clock;
pub mod collision;
pub mod config;
pub mod snake;
pub mod vec2;
pub mod world;

// Re-export commonly used types
pub use clock::FixedStepClock;
pub use config::GameConfig;
pub use snake::{Segment, Snake};
pub use vec2::Vec2;
pub use world::{Food, World};

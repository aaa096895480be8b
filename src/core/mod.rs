//! Core engine types: geometry and deterministic RNG.
//!
//! Nothing in here knows about a particular game; the runner and the
//! Breakout referee both build on these.

pub mod geometry;
pub mod rng;

pub use geometry::Position;
pub use rng::GameRng;

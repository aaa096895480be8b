//! # breakout-runner
//!
//! A solo game runner for puzzle bots, with a Breakout referee.
//!
//! ## Design Principles
//!
//! 1. **Referee-Agnostic Runner**: The runner drives turns, time limits and
//!    replays. Game rules plug in through the `Referee` trait.
//!
//! 2. **Line Protocol**: Agents read input lines and answer with output
//!    lines, exactly like a bot talking over stdin/stdout.
//!
//! 3. **Owned State**: Every game gets a fresh agent and referee. Nothing
//!    survives between runs.
//!
//! ## Modules
//!
//! - `core`: Geometry and deterministic RNG
//! - `runner`: Agents, test cases, the game manager and `SoloGameRunner`
//! - `game`: Breakout simulation, view and referee
//! - `agents`: Ready-made agents
//! - `skeleton`: The entry point wiring used by the `skeleton` binary
//! - `telemetry`: Tracing setup for binaries

pub mod core;
pub mod runner;
pub mod game;
pub mod agents;
pub mod skeleton;
pub mod telemetry;

// Re-export commonly used types
pub use crate::core::{GameRng, Position};

pub use crate::runner::{
    Agent, AgentError, GameReport, GameRunner, Outcome, Referee, RefereeError, RunnerConfig,
    RunnerError, SoloGameManager, SoloGameRunner, TestCase,
};

pub use crate::game::{BreakoutColor, BreakoutReferee, Simulation};

pub use crate::agents::{RandomAgent, TestPlayer};

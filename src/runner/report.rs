//! Game reports and replays.
//!
//! A report records a complete game: every turn's input, the agent's
//! answer, and the referee's frame, plus the final outcome.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::ReportError;
use super::manager::Outcome;

/// One recorded turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord<F> {
    /// Turn number (starts at 1).
    pub turn: u32,

    /// Lines sent to the agent.
    pub input: Vec<String>,

    /// Lines the agent answered. Empty if it failed.
    pub outputs: Vec<String>,

    /// Frame duration in milliseconds.
    pub frame_duration: u32,

    /// Referee frame after the turn.
    pub frame: F,
}

/// A completed game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameReport<F> {
    /// Test case name as passed to the runner.
    pub test_case: String,

    /// Type name of the agent.
    pub agent: String,

    /// How the game ended.
    pub outcome: Outcome,

    /// All played turns.
    pub turns: Vec<TurnRecord<F>>,

    /// Referee summary lines.
    pub summary: Vec<String>,
}

impl<F> GameReport<F> {
    /// Number of turns played.
    pub fn turns_played(&self) -> usize {
        self.turns.len()
    }

    /// Whether the agent won.
    pub fn is_win(&self) -> bool {
        self.outcome.is_win()
    }
}

impl<F: Serialize> GameReport<F> {
    /// Pretty JSON replay.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the JSON replay to `path`.
    pub fn write_json(&self, path: &Path) -> Result<(), ReportError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Compact binary replay.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ReportError> {
        Ok(bincode::serialize(self)?)
    }
}

impl<F: DeserializeOwned> GameReport<F> {
    /// Decode a binary replay.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ReportError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Decode a JSON replay.
    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        Ok(serde_json::from_str(json)?)
    }
}

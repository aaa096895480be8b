//! Runner configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for a [`SoloGameRunner`](super::SoloGameRunner).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Directory relative test case names are resolved against.
    pub test_case_dir: PathBuf,

    /// Lose the game when the agent exceeds its turn time.
    /// Disable when stepping through an agent in a debugger.
    pub enforce_timeouts: bool,

    /// Where to write the JSON replay after each game, if anywhere.
    pub replay_path: Option<PathBuf>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            test_case_dir: PathBuf::from("config"),
            enforce_timeouts: true,
            replay_path: None,
        }
    }
}

impl RunnerConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the test case directory.
    #[must_use]
    pub fn with_test_case_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.test_case_dir = dir.into();
        self
    }

    /// Enable or disable turn time limits.
    #[must_use]
    pub fn with_timeouts(mut self, enforced: bool) -> Self {
        self.enforce_timeouts = enforced;
        self
    }

    /// Write a JSON replay to `path` after each game.
    #[must_use]
    pub fn with_replay_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.replay_path = Some(path.into());
        self
    }
}

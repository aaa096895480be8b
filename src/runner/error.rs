//! Error types for the runner.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Failure raised by an agent while computing its turn.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    /// The agent could not make sense of its input.
    #[error("Unreadable input: {0}")]
    UnreadableInput(String),

    /// The agent gave up.
    #[error("Agent failed: {0}")]
    Failed(String),
}

/// Failure while executing the player for one turn.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    /// The agent answered after the turn limit.
    #[error("Timeout after {elapsed:?} (limit {limit:?})")]
    Timeout { elapsed: Duration, limit: Duration },

    /// The agent returned an error.
    #[error("Agent error: {0}")]
    Agent(#[from] AgentError),

    /// The agent produced fewer lines than expected.
    #[error("Expected {expected} output line(s), got {actual}")]
    MissingOutput { expected: usize, actual: usize },
}

impl PlayerError {
    /// Whether this failure is a timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, PlayerError::Timeout { .. })
    }
}

/// Failure while loading a test case fixture.
#[derive(Error, Debug)]
pub enum TestCaseError {
    /// No fixture at the resolved path.
    #[error("Test case not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The fixture could not be read.
    #[error("Failed to read test case {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The fixture is not valid JSON or misses `testIn`.
    #[error("Malformed test case {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The fixture has no input lines.
    #[error("Test case {} has no input", .0.display())]
    Empty(PathBuf),
}

/// Failure raised by a referee while setting up the game.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RefereeError {
    /// The test case input does not describe a valid game.
    #[error("Invalid test case input: {0}")]
    InvalidInput(String),
}

/// Failure to encode or decode a game report.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Binary encoding failed: {0}")]
    Binary(#[from] bincode::Error),

    #[error("Failed to write replay: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure to start or complete a game run.
#[derive(Error, Debug)]
pub enum RunnerError {
    /// `start` was called before `set_agent`.
    #[error("No agent set")]
    AgentNotSet,

    /// `start` was called before `set_test_case`.
    #[error("No test case set")]
    TestCaseNotSet,

    #[error("Test case error: {0}")]
    TestCase(#[from] TestCaseError),

    #[error("Referee error: {0}")]
    Referee(#[from] RefereeError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

//! Player handle: the referee's view of the agent under test.

use std::time::{Duration, Instant};

use tracing::warn;

use super::agent::Agent;
use super::error::PlayerError;

/// Wraps an agent with the line-based turn protocol.
///
/// The referee queues input lines, calls [`Player::execute`], then reads
/// [`Player::outputs`].
pub struct Player {
    agent: Box<dyn Agent>,
    pending_input: Vec<String>,
    last_input: Vec<String>,
    outputs: Vec<String>,
    expected_output_lines: usize,
    executions: u32,
    timeouts_enforced: bool,
}

impl Player {
    /// Wrap an agent.
    pub fn new(agent: Box<dyn Agent>) -> Self {
        Self {
            agent,
            pending_input: Vec::new(),
            last_input: Vec::new(),
            outputs: Vec::new(),
            expected_output_lines: 1,
            executions: 0,
            timeouts_enforced: true,
        }
    }

    /// Disable or enable the turn time limit.
    #[must_use]
    pub fn with_timeouts(mut self, enforced: bool) -> Self {
        self.timeouts_enforced = enforced;
        self
    }

    /// Queue a line for the next execution.
    pub fn send_input_line(&mut self, line: impl Into<String>) {
        self.pending_input.push(line.into());
    }

    /// Number of lines the agent must produce per turn.
    #[must_use]
    pub fn expected_output_lines(&self) -> usize {
        self.expected_output_lines
    }

    /// Set the number of lines the agent must produce per turn.
    pub fn set_expected_output_lines(&mut self, lines: usize) {
        self.expected_output_lines = lines;
    }

    /// Run the agent for one turn with the given time limit.
    ///
    /// Queued input is consumed even when the agent fails.
    pub fn execute(&mut self, limit: Duration) -> Result<(), PlayerError> {
        self.last_input = std::mem::take(&mut self.pending_input);
        self.outputs.clear();
        self.executions += 1;

        let started = Instant::now();
        let result = self.agent.turn(&self.last_input);
        let elapsed = started.elapsed();

        if self.timeouts_enforced && elapsed > limit {
            warn!(?elapsed, ?limit, "agent exceeded its turn time");
            return Err(PlayerError::Timeout { elapsed, limit });
        }

        let outputs = result.map_err(|err| {
            warn!(error = %err, "agent failed");
            PlayerError::from(err)
        })?;

        if outputs.len() < self.expected_output_lines {
            return Err(PlayerError::MissingOutput {
                expected: self.expected_output_lines,
                actual: outputs.len(),
            });
        }

        self.outputs = outputs;
        Ok(())
    }

    /// Outputs from the last successful execution.
    #[must_use]
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    /// Input consumed by the last execution.
    #[must_use]
    pub fn last_input(&self) -> &[String] {
        &self.last_input
    }

    /// Number of times the agent has been executed.
    #[must_use]
    pub fn executions(&self) -> u32 {
        self.executions
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("pending_input", &self.pending_input)
            .field("outputs", &self.outputs)
            .field("executions", &self.executions)
            .finish_non_exhaustive()
    }
}

//! Agent contract.
//!
//! An agent is the bot under test. Each turn it receives the lines the
//! referee sent and answers with its own lines, the way a puzzle bot reads
//! stdin and writes stdout.

use std::fmt;

use super::error::AgentError;

/// A player implementation driven by the runner.
pub trait Agent {
    /// Compute one turn.
    ///
    /// `input` holds every line sent since the previous turn.
    fn turn(&mut self, input: &[String]) -> Result<Vec<String>, AgentError>;
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn turn(&mut self, input: &[String]) -> Result<Vec<String>, AgentError> {
        (**self).turn(input)
    }
}

/// Builds fresh agent instances for a registered agent type.
///
/// The runner registers agents by type; every game gets its own instance.
pub struct AgentFactory {
    name: &'static str,
    build: Box<dyn Fn() -> Box<dyn Agent>>,
}

impl AgentFactory {
    /// Factory for the agent type `A`.
    #[must_use]
    pub fn of<A: Agent + Default + 'static>() -> Self {
        Self {
            name: std::any::type_name::<A>(),
            build: Box::new(|| Box::new(A::default())),
        }
    }

    /// Fully qualified type name of the agent.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Create a new agent instance.
    #[must_use]
    pub fn build(&self) -> Box<dyn Agent> {
        (self.build)()
    }
}

impl fmt::Debug for AgentFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentFactory").field("name", &self.name).finish()
    }
}

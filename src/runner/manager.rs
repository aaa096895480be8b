//! Game manager for single-player games.
//!
//! Owns everything the referee needs during a game: the test case input,
//! the player, the turn limits and the outcome.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::PlayerError;
use super::player::Player;

/// How a solo game ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The agent solved the test case.
    Win(String),
    /// The agent failed.
    Lose(String),
}

impl Outcome {
    /// Whether the agent won.
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Win(_))
    }

    /// Message attached to the outcome.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Outcome::Win(msg) | Outcome::Lose(msg) => msg,
        }
    }
}

/// State shared between the runner and the referee during one game.
#[derive(Debug)]
pub struct SoloGameManager {
    test_case_input: Vec<String>,
    player: Player,

    /// Maximum number of turns before the game is lost.
    pub max_turns: u32,

    /// Time limit for every turn but the first.
    pub turn_max_time: Duration,

    /// Time limit for the first turn.
    pub first_turn_max_time: Duration,

    /// Duration of the current frame, in milliseconds.
    pub frame_duration: u32,

    summaries: Vec<String>,
    outcome: Option<Outcome>,
}

impl SoloGameManager {
    /// Create a manager for the given input lines and player.
    pub fn new(test_case_input: Vec<String>, player: Player) -> Self {
        Self {
            test_case_input,
            player,
            max_turns: 200,
            turn_max_time: Duration::from_millis(50),
            first_turn_max_time: Duration::from_millis(1000),
            frame_duration: 1000,
            summaries: Vec::new(),
            outcome: None,
        }
    }

    /// Lines of the test case's `testIn` field.
    #[must_use]
    pub fn test_case_input(&self) -> &[String] {
        &self.test_case_input
    }

    /// The player under test.
    pub fn player(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Execute the player with the limit that applies to its next turn.
    pub fn execute_player(&mut self) -> Result<(), PlayerError> {
        let limit = if self.player.executions() == 0 {
            self.first_turn_max_time
        } else {
            self.turn_max_time
        };
        self.player.execute(limit)
    }

    /// Append a line to the game summary.
    pub fn add_to_game_summary(&mut self, line: impl Into<String>) {
        self.summaries.push(line.into());
    }

    /// Summary lines in order.
    #[must_use]
    pub fn game_summary(&self) -> &[String] {
        &self.summaries
    }

    /// End the game as a win. Ignored if the game already ended.
    pub fn win_game(&mut self, message: impl Into<String>) {
        self.end(Outcome::Win(message.into()));
    }

    /// End the game as a loss. Ignored if the game already ended.
    pub fn lose_game(&mut self, message: impl Into<String>) {
        self.end(Outcome::Lose(message.into()));
    }

    fn end(&mut self, outcome: Outcome) {
        if self.outcome.is_none() {
            info!(?outcome, "game ended");
            self.outcome = Some(outcome);
        }
    }

    /// Whether an outcome has been decided.
    #[must_use]
    pub fn is_game_end(&self) -> bool {
        self.outcome.is_some()
    }

    /// The outcome, once decided.
    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }
}

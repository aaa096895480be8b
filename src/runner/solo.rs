//! Solo game runner.
//!
//! Runs one agent against one test case and returns a [`GameReport`].
//!
//! ```rust,ignore
//! use breakout_runner::agents::TestPlayer;
//! use breakout_runner::runner::SoloGameRunner;
//!
//! let mut runner = SoloGameRunner::new();
//! runner.set_agent::<TestPlayer>();
//! runner.set_test_case("test1.json");
//! let report = runner.start()?;
//! ```

use std::marker::PhantomData;

use tracing::{debug, info};

use super::agent::{Agent, AgentFactory};
use super::config::RunnerConfig;
use super::error::RunnerError;
use super::manager::{Outcome, SoloGameManager};
use super::player::Player;
use super::referee::Referee;
use super::report::{GameReport, TurnRecord};
use super::test_case::TestCase;
use crate::game::BreakoutReferee;

/// Outcome message when no turn decided the game.
pub const MAX_TURNS_MESSAGE: &str = "Max turns reached";

/// Something that can be configured with an agent and a test case, then started.
///
/// [`SoloGameRunner`] is the real implementation; tests substitute recorders.
pub trait GameRunner {
    /// What a completed run produces.
    type Report;

    /// What a failed run produces.
    type Error;

    /// Register the agent type to play.
    fn set_agent<A: Agent + Default + 'static>(&mut self);

    /// Register the test case to play, by name.
    fn set_test_case(&mut self, name: &str);

    /// Play the game.
    fn start(&mut self) -> Result<Self::Report, Self::Error>;
}

/// Runs single-player games under a referee `R`.
pub struct SoloGameRunner<R: Referee = BreakoutReferee> {
    config: RunnerConfig,
    agent: Option<AgentFactory>,
    test_case: Option<String>,
    referee: PhantomData<fn() -> R>,
}

impl SoloGameRunner {
    /// Breakout runner with the default configuration.
    pub fn new() -> Self {
        Self::for_referee(RunnerConfig::default())
    }

    /// Breakout runner with a custom configuration.
    pub fn with_config(config: RunnerConfig) -> Self {
        Self::for_referee(config)
    }
}

impl Default for SoloGameRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Referee> SoloGameRunner<R> {
    /// Runner for any referee.
    pub fn for_referee(config: RunnerConfig) -> Self {
        Self {
            config,
            agent: None,
            test_case: None,
            referee: PhantomData,
        }
    }

    /// The runner configuration.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Register the agent type. Replaces any earlier registration.
    pub fn set_agent<A: Agent + Default + 'static>(&mut self) {
        self.agent = Some(AgentFactory::of::<A>());
    }

    /// Register the test case by name. Replaces any earlier registration.
    pub fn set_test_case(&mut self, name: impl Into<String>) {
        self.test_case = Some(name.into());
    }

    /// Play one game.
    ///
    /// Every call builds a new agent and referee, so the runner can be
    /// started repeatedly.
    pub fn start(&mut self) -> Result<GameReport<R::Frame>, RunnerError> {
        let factory = self.agent.as_ref().ok_or(RunnerError::AgentNotSet)?;
        let test_case_name = self.test_case.as_deref().ok_or(RunnerError::TestCaseNotSet)?;

        let test_case = TestCase::load(&self.config.test_case_dir, test_case_name)?;
        info!(
            test_case = test_case_name,
            title = test_case.display_title().unwrap_or_default(),
            agent = factory.name(),
            "starting game"
        );

        let player = Player::new(factory.build()).with_timeouts(self.config.enforce_timeouts);
        let mut game = SoloGameManager::new(test_case.input_lines(), player);
        let mut referee = R::default();
        referee.init(&mut game)?;

        let mut turns = Vec::new();
        for turn in 1..=game.max_turns {
            if game.is_game_end() {
                break;
            }

            referee.game_turn(&mut game, turn);

            let player = game.player();
            let record = TurnRecord {
                turn,
                input: player.last_input().to_vec(),
                outputs: player.outputs().to_vec(),
                frame_duration: game.frame_duration,
                frame: referee.frame(),
            };
            debug!(turn, outputs = ?record.outputs, "turn played");
            turns.push(record);
        }

        if !game.is_game_end() {
            game.lose_game(MAX_TURNS_MESSAGE);
        }
        let outcome = game
            .outcome()
            .cloned()
            .unwrap_or_else(|| Outcome::Lose(MAX_TURNS_MESSAGE.to_string()));

        info!(
            turns = turns.len(),
            win = outcome.is_win(),
            message = outcome.message(),
            "game finished"
        );

        let report = GameReport {
            test_case: test_case_name.to_string(),
            agent: factory.name().to_string(),
            outcome,
            turns,
            summary: game.game_summary().to_vec(),
        };

        if let Some(path) = &self.config.replay_path {
            report.write_json(path)?;
            debug!(path = %path.display(), "replay written");
        }

        Ok(report)
    }
}

impl<R: Referee> GameRunner for SoloGameRunner<R> {
    type Report = GameReport<R::Frame>;
    type Error = RunnerError;

    fn set_agent<A: Agent + Default + 'static>(&mut self) {
        SoloGameRunner::set_agent::<A>(self);
    }

    fn set_test_case(&mut self, name: &str) {
        SoloGameRunner::set_test_case(self, name);
    }

    fn start(&mut self) -> Result<Self::Report, Self::Error> {
        SoloGameRunner::start(self)
    }
}

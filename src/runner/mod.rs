//! Solo game runner.
//!
//! The runner plays one agent against one test case:
//!
//! - `agent`: the `Agent` trait bots implement
//! - `player`: line-based turn protocol with time limits
//! - `manager`: per-game state shared with the referee
//! - `referee`: the `Referee` trait games implement
//! - `test_case`: JSON fixtures
//! - `report`: game reports and replays
//! - `solo`: the `GameRunner` seam and `SoloGameRunner`

pub mod agent;
pub mod config;
pub mod error;
pub mod manager;
pub mod player;
pub mod referee;
pub mod report;
pub mod solo;
pub mod test_case;

pub use agent::{Agent, AgentFactory};
pub use config::RunnerConfig;
pub use error::{AgentError, PlayerError, RefereeError, ReportError, RunnerError, TestCaseError};
pub use manager::{Outcome, SoloGameManager};
pub use player::Player;
pub use referee::Referee;
pub use report::{GameReport, TurnRecord};
pub use solo::{GameRunner, SoloGameRunner, MAX_TURNS_MESSAGE};
pub use test_case::TestCase;

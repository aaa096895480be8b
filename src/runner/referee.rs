//! Referee trait for game implementations.
//!
//! Games implement `Referee` to define:
//! - How the test case input sets up the game
//! - What happens on each turn
//! - What the recorded frame looks like after a turn
//!
//! The runner drives the turn loop but never interprets game-specific
//! concepts directly.

use serde::Serialize;

use super::error::RefereeError;
use super::manager::SoloGameManager;

/// Referee trait.
///
/// A fresh referee is created with `Default` for every game.
///
/// ## Implementation Notes
///
/// - `init`: read `game.test_case_input()` and set turn limits
/// - `game_turn`: talk to `game.player()`, then call `win_game` or
///   `lose_game` when the game is decided
/// - `frame`: called after every turn, including the last
pub trait Referee: Default {
    /// Snapshot recorded in the replay after each turn.
    type Frame: Serialize + Clone;

    /// Set up the game from the test case input.
    fn init(&mut self, game: &mut SoloGameManager) -> Result<(), RefereeError>;

    /// Play turn `turn` (starting at 1).
    fn game_turn(&mut self, game: &mut SoloGameManager, turn: u32);

    /// Visual state after the last turn.
    fn frame(&self) -> Self::Frame;
}

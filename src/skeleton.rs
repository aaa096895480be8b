//! Entry point wiring: `TestPlayer` against `test1.json`.
//!
//! All behavior lives in the runner; this only configures and starts it.

use crate::agents::TestPlayer;
use crate::runner::GameRunner;

/// Fixture played by the skeleton.
pub const TEST_CASE: &str = "test1.json";

/// Register [`TestPlayer`] and [`TEST_CASE`] with `runner`, then start it.
///
/// Errors from the runner are returned unchanged.
pub fn run<R: GameRunner>(mut runner: R) -> Result<R::Report, R::Error> {
    runner.set_agent::<TestPlayer>();
    runner.set_test_case(TEST_CASE);
    runner.start()
}

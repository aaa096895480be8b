//! Ready-made Breakout agents.

mod random;
mod test_player;

pub use random::RandomAgent;
pub use test_player::TestPlayer;

use crate::runner::AgentError;

/// Parse the `<ball center x> <ball angle>` turn line.
fn parse_turn(input: &[String]) -> Result<(i32, i32), AgentError> {
    let line = input
        .last()
        .ok_or_else(|| AgentError::UnreadableInput("no input".into()))?;
    let unreadable = || AgentError::UnreadableInput(line.clone());

    let mut fields = line.split_whitespace();
    let x = fields.next().and_then(|f| f.parse().ok()).ok_or_else(unreadable)?;
    let angle = fields.next().and_then(|f| f.parse().ok()).ok_or_else(unreadable)?;
    Ok((x, angle))
}

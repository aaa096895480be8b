//! Agent that moves the paddle at random.

use super::parse_turn;
use crate::core::GameRng;
use crate::game::{PADDLE_WIDTH, SCREEN_WIDTH};
use crate::runner::{Agent, AgentError};

/// Seed used by `Default`.
const DEFAULT_SEED: u64 = 0x0B5E_55ED;

/// Picks a uniformly random paddle position every turn.
///
/// Useful as a baseline: it rarely catches the ball.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Agent for RandomAgent {
    fn turn(&mut self, input: &[String]) -> Result<Vec<String>, AgentError> {
        parse_turn(input)?;
        let x = self.rng.gen_range(0..SCREEN_WIDTH - PADDLE_WIDTH + 1);
        Ok(vec![x.to_string()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turns(agent: &mut RandomAgent, n: usize) -> Vec<i32> {
        (0..n)
            .map(|_| agent.turn(&["320 30".to_string()]).unwrap()[0].parse().unwrap())
            .collect()
    }

    #[test]
    fn test_positions_on_screen() {
        let mut agent = RandomAgent::new(1);
        for x in turns(&mut agent, 200) {
            assert!((0..=576).contains(&x));
        }
    }

    #[test]
    fn test_seeded_determinism() {
        let a = turns(&mut RandomAgent::new(9), 20);
        let b = turns(&mut RandomAgent::new(9), 20);
        let c = turns(&mut RandomAgent::new(10), 20);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_rejects_bad_input() {
        let mut agent = RandomAgent::default();
        assert!(agent.turn(&[]).is_err());
    }
}

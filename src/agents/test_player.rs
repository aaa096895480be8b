//! Agent used by the skeleton entry point.

use super::parse_turn;
use crate::game::{BALL_REST_Y, BALL_WIDTH, PADDLE_WIDTH, SCREEN_WIDTH};
use crate::runner::{Agent, AgentError};

/// Puts the paddle where the ball should land.
///
/// The prediction follows the ball up to the top border and back down,
/// reflecting off the side walls. Blocks are ignored, so a ball that bounces
/// off a low block lands somewhere else.
#[derive(Clone, Debug, Default)]
pub struct TestPlayer;

impl TestPlayer {
    /// Predicted ball center x when it comes back to paddle height.
    #[must_use]
    pub fn predict_landing(ball_center_x: i32, angle: i32) -> i32 {
        let rad = f64::from(angle).to_radians();
        // The ball turns around one pixel short of every border.
        let leg = f64::from(BALL_REST_Y - 1);

        // Rising balls go up and come back, falling ones only come back.
        let vertical = if rad.cos() > 0.0 { 2.0 * leg } else { leg };
        let horizontal = vertical * rad.tan().abs() * rad.sin().signum();
        let raw = f64::from(ball_center_x) + horizontal;

        let half = BALL_WIDTH / 2;
        let (low, high) = (1 + half, SCREEN_WIDTH - BALL_WIDTH - 1 + half);
        fold(raw, f64::from(low), f64::from(high)).round() as i32
    }
}

/// Reflect `value` into `[low, high]` as if it bounced off both ends.
fn fold(value: f64, low: f64, high: f64) -> f64 {
    let width = high - low;
    let offset = (value - low).rem_euclid(2.0 * width);
    low + if offset > width { 2.0 * width - offset } else { offset }
}

impl Agent for TestPlayer {
    fn turn(&mut self, input: &[String]) -> Result<Vec<String>, AgentError> {
        let (ball_x, angle) = parse_turn(input)?;
        let landing = Self::predict_landing(ball_x, angle);
        let paddle_x = (landing - PADDLE_WIDTH / 2).clamp(0, SCREEN_WIDTH - PADDLE_WIDTH);
        Ok(vec![paddle_x.to_string()])
    }
}

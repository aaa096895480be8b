//! Ball physics.
//!
//! The ball travels in straight lines between screen borders. Each line is
//! walked pixel by pixel; as soon as a corner of the ball touches the outline
//! of a live obstacle, the ball stops one pixel short and bounces.
//!
//! Angles are in degrees, clockwise, with 0 pointing up.

use im::Vector;
use smallvec::SmallVec;
use thiserror::Error;

use super::obstacle::{
    Block, Obstacle, BALL_HEIGHT, BALL_WIDTH, PADDLE_HEIGHT, PADDLE_WIDTH, SCREEN_HEIGHT,
    SCREEN_WIDTH,
};
use crate::core::Position;

/// Smallest absolute angle the ball leaves the paddle with.
pub const MIN_ABS_BALL_ANGLE: i32 = 10;

/// Largest absolute angle the ball leaves the paddle with.
pub const MAX_ABS_BALL_ANGLE: i32 = 70;

/// Bounces allowed in a single turn.
pub const MAX_BOUNCES: usize = 10_000;

/// `y` of the ball when it rests just above the bottom border.
pub const BALL_BOTTOM_Y: i32 = SCREEN_HEIGHT - BALL_HEIGHT - 1;

/// `y` of the ball when it rests on the paddle.
pub const BALL_REST_Y: i32 = SCREEN_HEIGHT - PADDLE_HEIGHT - BALL_HEIGHT - 1;

/// Simulation faults. None of these happen with well-formed input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("No hit points at {0}")]
    OutOfScreen(Position),

    #[error("Ball at {position} with angle {angle} reached the border without a collision")]
    NoCollision { position: Position, angle: i32 },

    #[error("Ball did not settle after {0} bounces")]
    Stalled(usize),
}

/// A bounce.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationPoint {
    /// Where the ball stopped before the collision.
    pub position: Position,

    /// Obstacles touched. Blocks carry their lives after this hit.
    pub hit: SmallVec<[Obstacle; 4]>,

    /// Pixels travelled since the previous bounce.
    pub distance: u32,
}

impl SimulationPoint {
    /// Whether the paddle was among the obstacles hit.
    #[must_use]
    pub fn hit_paddle(&self) -> bool {
        self.hit.iter().any(Obstacle::is_paddle)
    }
}

/// Result of one turn of simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationMetadata {
    pub points: Vec<SimulationPoint>,
    pub total_distance: u32,
    /// The paddle caught the ball.
    pub continue_game: bool,
}

/// Board state: ball, paddle and blocks.
///
/// Cloning is cheap; blocks live in a persistent vector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Simulation {
    paddle: Position,
    ball: Position,
    ball_angle: i32,
    blocks: Vector<Block>,
}

impl Simulation {
    /// Ball resting on the centred paddle, about to leave at `ball_angle`.
    pub fn new(ball_angle: i32, blocks: impl IntoIterator<Item = Block>) -> Self {
        Self {
            paddle: Position::new((SCREEN_WIDTH - PADDLE_WIDTH) / 2, SCREEN_HEIGHT - PADDLE_HEIGHT),
            ball: Position::new((SCREEN_WIDTH - BALL_WIDTH) / 2, BALL_REST_Y),
            ball_angle: normalize_angle(ball_angle),
            blocks: blocks.into_iter().collect(),
        }
    }

    /// Top-left corner of the ball.
    #[must_use]
    pub fn ball(&self) -> Position {
        self.ball
    }

    /// Horizontal center of the ball.
    #[must_use]
    pub fn ball_center_x(&self) -> i32 {
        self.ball.x + BALL_WIDTH / 2
    }

    #[must_use]
    pub fn ball_angle(&self) -> i32 {
        self.ball_angle
    }

    /// Top-left corner of the paddle.
    #[must_use]
    pub fn paddle(&self) -> Position {
        self.paddle
    }

    /// Move the paddle horizontally, keeping it on screen.
    pub fn set_paddle_x(&mut self, x: i32) {
        self.paddle.x = x.clamp(0, SCREEN_WIDTH - PADDLE_WIDTH);
    }

    /// All blocks, destroyed ones included.
    #[must_use]
    pub fn blocks(&self) -> &Vector<Block> {
        &self.blocks
    }

    /// Number of blocks still standing.
    #[must_use]
    pub fn blocks_remaining(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_alive()).count()
    }

    /// Rotate the ball by `by` degrees, then clamp it into the launch range.
    ///
    /// The ball keeps its horizontal direction and leaves upwards with an
    /// absolute angle in `MIN_ABS_BALL_ANGLE..=MAX_ABS_BALL_ANGLE`.
    pub fn change_ball_direction(&mut self, by: i32) {
        let angle = normalize_angle(self.ball_angle + by);
        let magnitude = angle.abs().clamp(MIN_ABS_BALL_ANGLE, MAX_ABS_BALL_ANGLE);
        self.ball_angle = if angle < 0 { -magnitude } else { magnitude };
    }

    fn obstacles(&self) -> Vec<Obstacle> {
        self.blocks
            .iter()
            .filter(|b| b.is_alive())
            .cloned()
            .map(Obstacle::Block)
            .chain([Obstacle::Screen, Obstacle::Paddle(self.paddle)])
            .collect()
    }

    /// Move the ball until it is caught, lost, or the last block breaks.
    pub fn simulate(&mut self) -> Result<SimulationMetadata, SimulationError> {
        let mut points: Vec<SimulationPoint> = Vec::new();
        let mut total_distance = 0;

        loop {
            if points.len() >= MAX_BOUNCES {
                return Err(SimulationError::Stalled(points.len()));
            }

            let point = self.advance()?;
            total_distance += point.distance;

            let keep_going = self.blocks_remaining() > 0
                && !point.hit_paddle()
                && point.position.y != BALL_BOTTOM_Y;
            points.push(point);

            if !keep_going {
                break;
            }
        }

        let continue_game = points.last().is_some_and(SimulationPoint::hit_paddle);
        if continue_game {
            self.change_ball_direction(0);
        }

        Ok(SimulationMetadata {
            points,
            total_distance,
            continue_game,
        })
    }

    /// Travel to the next collision and bounce.
    fn advance(&mut self) -> Result<SimulationPoint, SimulationError> {
        let target = find_collision_with_border(self.ball, self.ball_angle);
        let trajectory = bresenham_line(self.ball, target);
        let obstacles = self.obstacles();

        for (i, pair) in trajectory.windows(2).enumerate() {
            let (previous, point) = (pair[0], pair[1]);
            let corners = hit_points(point)?;

            let mut hit: SmallVec<[Obstacle; 4]> = obstacles
                .iter()
                .filter(|o| corners.iter().any(|&c| o.outline_contains(c)))
                .cloned()
                .collect();
            if hit.is_empty() {
                continue;
            }

            for obstacle in hit.iter_mut() {
                if let Obstacle::Block(block) = obstacle {
                    block.lives -= 1;
                    if let Some(stored) = self.blocks.iter_mut().find(|b| b.id == block.id) {
                        stored.lives = block.lives;
                    }
                }
            }

            let hits_x = hit
                .iter()
                .filter(|o| corners.iter().any(|&c| o.on_vertical_edge_line(c)))
                .count();
            let hits_y = hit
                .iter()
                .filter(|o| corners.iter().any(|&c| o.on_horizontal_edge_line(c)))
                .count();

            self.ball_angle = normalize_angle(bounce(self.ball_angle, hits_x, hits_y));
            self.ball = previous;

            return Ok(SimulationPoint {
                position: previous,
                hit,
                distance: (i + 1) as u32,
            });
        }

        Err(SimulationError::NoCollision {
            position: self.ball,
            angle: self.ball_angle,
        })
    }
}

/// New angle after touching `hits_x` vertical and `hits_y` horizontal edges.
fn bounce(angle: i32, hits_x: usize, hits_y: usize) -> i32 {
    match (hits_x, hits_y) {
        // corner of a single obstacle: treat like a top or bottom hit
        (1, 1) => 180 - angle,
        (0, _) => 180 - angle,
        (_, 0) => -angle,
        // inner corner formed by two or three obstacles
        _ => -(180 - angle),
    }
}

/// Map any angle into `(-180, 180]`.
#[must_use]
pub fn normalize_angle(angle: i32) -> i32 {
    let angle = angle.rem_euclid(360);
    if angle > 180 {
        angle - 360
    } else {
        angle
    }
}

/// First point where a ray from `start` at `angle` leaves the screen.
#[must_use]
pub fn find_collision_with_border(start: Position, angle: i32) -> Position {
    let rad = f64::from(angle).to_radians();
    let dx = rad.sin();
    let dy = -rad.cos();
    let (x, y) = (f64::from(start.x), f64::from(start.y));

    let t_right = if dx > 0.0 { (f64::from(SCREEN_WIDTH) - x) / dx } else { f64::INFINITY };
    let t_left = if dx < 0.0 { -x / dx } else { f64::INFINITY };
    let t_bottom = if dy > 0.0 { (f64::from(SCREEN_HEIGHT) - y) / dy } else { f64::INFINITY };
    let t_top = if dy < 0.0 { -y / dy } else { f64::INFINITY };

    let t = t_right.min(t_left).min(t_bottom).min(t_top);
    Position::new((x + dx * t).round() as i32, (y + dy * t).round() as i32)
}

/// Integer line from `from` to `to`, both ends included.
#[must_use]
pub fn bresenham_line(from: Position, to: Position) -> Vec<Position> {
    let dx = (to.x - from.x).abs();
    let dy = (to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };

    let mut points = Vec::with_capacity((dx.max(dy) + 1) as usize);
    let (mut x, mut y) = (from.x, from.y);
    let mut err = dx - dy;

    loop {
        points.push(Position::new(x, y));
        if x == to.x && y == to.y {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }

    points
}

/// Corners of the ball when its top-left corner is at `position`.
pub fn hit_points(position: Position) -> Result<[Position; 4], SimulationError> {
    let on_screen = (0..=SCREEN_WIDTH).contains(&position.x) && (0..=SCREEN_HEIGHT).contains(&position.y);
    if !on_screen {
        return Err(SimulationError::OutOfScreen(position));
    }

    Ok([
        position,
        position.offset(BALL_WIDTH, 0),
        position.offset(0, BALL_HEIGHT),
        position.offset(BALL_WIDTH, BALL_HEIGHT),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::color::BreakoutColor;

    fn block(id: u32, lives: i32) -> Block {
        Block::new(id, BreakoutColor::Grey, lives)
    }

    #[test]
    fn test_initial_layout() {
        let sim = Simulation::new(30, vec![block(0, 3)]);
        assert_eq!(sim.paddle(), Position::new(288, 448));
        assert_eq!(sim.ball(), Position::new(312, 431));
        assert_eq!(sim.ball_center_x(), 320);
        assert_eq!(sim.ball_angle(), 30);
        assert_eq!(sim.blocks_remaining(), 1);
    }

    #[test]
    fn test_set_paddle_x_clamps() {
        let mut sim = Simulation::new(0, vec![]);
        sim.set_paddle_x(-20);
        assert_eq!(sim.paddle().x, 0);
        sim.set_paddle_x(1000);
        assert_eq!(sim.paddle().x, 576);
        sim.set_paddle_x(100);
        assert_eq!(sim.paddle(), Position::new(100, 448));
    }

    #[test]
    fn test_normalize_angle() {
        assert_eq!(normalize_angle(0), 0);
        assert_eq!(normalize_angle(180), 180);
        assert_eq!(normalize_angle(-180), 180);
        assert_eq!(normalize_angle(190), -170);
        assert_eq!(normalize_angle(-190), 170);
        assert_eq!(normalize_angle(720 + 45), 45);
    }

    #[test]
    fn test_change_ball_direction() {
        let mut sim = Simulation::new(30, vec![]);
        sim.change_ball_direction(20);
        assert_eq!(sim.ball_angle(), 50);
        sim.change_ball_direction(40);
        assert_eq!(sim.ball_angle(), 70);
        sim.change_ball_direction(-65);
        assert_eq!(sim.ball_angle(), 10);
        sim.change_ball_direction(-40);
        assert_eq!(sim.ball_angle(), -30);
        sim.change_ball_direction(-100);
        assert_eq!(sim.ball_angle(), -70);
    }

    #[test]
    fn test_change_ball_direction_sends_ball_up() {
        let mut sim = Simulation::new(150, vec![]);
        sim.change_ball_direction(0);
        assert_eq!(sim.ball_angle(), 70);

        let mut sim = Simulation::new(0, vec![]);
        sim.change_ball_direction(0);
        assert_eq!(sim.ball_angle(), 10);
    }

    #[test]
    fn test_horizontal_ball_stalls() {
        for angle in [90, -90] {
            let mut sim = Simulation::new(angle, vec![block(0, 1)]);
            assert_eq!(sim.simulate(), Err(SimulationError::Stalled(MAX_BOUNCES)));
        }
    }

    #[test]
    fn test_bounce_rules() {
        assert_eq!(bounce(30, 0, 1), 150);
        assert_eq!(bounce(30, 1, 0), -30);
        assert_eq!(bounce(30, 1, 1), 150);
        assert_eq!(bounce(30, 2, 1), -150);
    }

    #[test]
    fn test_border_straight_up() {
        assert_eq!(find_collision_with_border(Position::new(312, 431), 0), Position::new(312, 0));
    }

    #[test]
    fn test_border_straight_down() {
        assert_eq!(find_collision_with_border(Position::new(312, 33), 180), Position::new(312, 480));
    }

    #[test]
    fn test_border_diagonal() {
        // 45 degrees from (600, 400): right border after 40 pixels.
        assert_eq!(find_collision_with_border(Position::new(600, 400), 45), Position::new(640, 360));
        assert_eq!(find_collision_with_border(Position::new(20, 400), -45), Position::new(0, 380));
    }

    #[test]
    fn test_bresenham_horizontal() {
        let line = bresenham_line(Position::new(0, 0), Position::new(3, 0));
        assert_eq!(
            line,
            vec![Position::new(0, 0), Position::new(1, 0), Position::new(2, 0), Position::new(3, 0)]
        );
    }

    #[test]
    fn test_bresenham_diagonal_backwards() {
        let line = bresenham_line(Position::new(2, 2), Position::new(0, 0));
        assert_eq!(line, vec![Position::new(2, 2), Position::new(1, 1), Position::new(0, 0)]);
    }

    #[test]
    fn test_bresenham_single_point() {
        let p = Position::new(5, 5);
        assert_eq!(bresenham_line(p, p), vec![p]);
    }

    #[test]
    fn test_hit_points() {
        let corners = hit_points(Position::new(10, 20)).unwrap();
        assert_eq!(
            corners,
            [Position::new(10, 20), Position::new(26, 20), Position::new(10, 36), Position::new(26, 36)]
        );
        assert_eq!(
            hit_points(Position::new(-1, 0)),
            Err(SimulationError::OutOfScreen(Position::new(-1, 0)))
        );
        assert!(hit_points(Position::new(0, 481)).is_err());
    }

    #[test]
    fn test_straight_shot_breaks_two_blocks() {
        // The ball's x-span 312..328 straddles blocks 4 (256..320) and 5 (320..384).
        let mut sim = Simulation::new(0, vec![block(4, 1), block(5, 1), block(20, 2)]);
        let meta = sim.simulate().unwrap();

        let first = &meta.points[0];
        assert_eq!(first.position, Position::new(312, 33));
        assert_eq!(first.distance, 399);
        assert_eq!(first.hit.len(), 2);
        assert!(first.hit.iter().all(|o| matches!(o, Obstacle::Block(b) if b.lives == 0)));

        assert_eq!(sim.blocks_remaining(), 1);
        // Back down onto the centred paddle.
        let last = meta.points.last().unwrap();
        assert!(last.hit_paddle());
        assert_eq!(last.position, Position::new(312, 431));
        assert!(meta.continue_game);
        assert_eq!(meta.points.len(), 2);
        assert_eq!(meta.total_distance, 399 + 399);
        assert_eq!(sim.ball(), Position::new(312, 431));
        assert_eq!(sim.ball_angle(), 10);
    }

    #[test]
    fn test_last_block_ends_simulation() {
        let mut sim = Simulation::new(0, vec![block(4, 1), block(5, 1)]);
        let meta = sim.simulate().unwrap();

        assert_eq!(meta.points.len(), 1);
        assert_eq!(sim.blocks_remaining(), 0);
        assert!(!meta.continue_game);
    }

    #[test]
    fn test_ball_lost() {
        let mut sim = Simulation::new(0, vec![block(0, 3)]);
        sim.set_paddle_x(0);
        let meta = sim.simulate().unwrap();

        // Top border, then straight down past the paddle.
        assert_eq!(meta.points.len(), 2);
        assert_eq!(meta.points[0].position, Position::new(312, 1));
        assert_eq!(meta.points[0].hit.as_slice(), &[Obstacle::Screen]);
        assert_eq!(meta.points[1].position, Position::new(312, BALL_BOTTOM_Y));
        assert!(!meta.continue_game);
        assert_eq!(sim.blocks()[0].lives, 3);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut sim = Simulation::new(0, vec![block(4, 2), block(5, 2)]);
        let snapshot = sim.clone();
        sim.simulate().unwrap();

        assert_eq!(snapshot.blocks()[0].lives, 2);
        assert_eq!(sim.blocks()[0].lives, 1);
        assert_ne!(snapshot, sim);
    }
}

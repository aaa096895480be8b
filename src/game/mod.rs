//! Breakout: bounce a ball off a paddle until every block is broken.
//!
//! - `simulation`: ball physics on a 640x480 screen
//! - `obstacle`: blocks, screen border and paddle
//! - `view`: recorded frames for replays
//! - `referee`: test case parsing and turn rules

mod color;
mod obstacle;
mod referee;
mod simulation;
mod view;

pub use color::{BreakoutColor, UnknownColor};
pub use obstacle::{
    Block, Obstacle, BALL_HEIGHT, BALL_WIDTH, BLOCK_HEIGHT, BLOCK_WIDTH, GRID_COLUMNS, GRID_ROWS,
    MAX_LIVES, PADDLE_HEIGHT, PADDLE_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH,
};
pub use referee::{
    parse_blocks, BreakoutReferee, BALL_LOST_MESSAGE, INVALID_OUTPUT_MESSAGE, TIMEOUT_MESSAGE,
    WIN_MESSAGE,
};
pub use simulation::{
    bresenham_line, find_collision_with_border, hit_points, normalize_angle, Simulation,
    SimulationError, SimulationMetadata, SimulationPoint, BALL_BOTTOM_Y, BALL_REST_Y,
    MAX_ABS_BALL_ANGLE, MAX_BOUNCES, MIN_ABS_BALL_ANGLE,
};
pub use view::{BreakoutView, BrickChange, BrickSprite, Frame, Keyframe, BOARD_HEIGHT, BOARD_WIDTH, SCALE};

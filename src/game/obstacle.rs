//! Things the ball can bounce off.

use serde::{Deserialize, Serialize};

use super::color::BreakoutColor;
use crate::core::Position;

pub const SCREEN_WIDTH: i32 = 640;
pub const SCREEN_HEIGHT: i32 = 480;
pub const PADDLE_WIDTH: i32 = 64;
pub const PADDLE_HEIGHT: i32 = 32;
pub const BALL_WIDTH: i32 = 16;
pub const BALL_HEIGHT: i32 = 16;
pub const BLOCK_WIDTH: i32 = 64;
pub const BLOCK_HEIGHT: i32 = 32;

/// Blocks are laid out on a grid of `GRID_COLUMNS` x `GRID_ROWS` cells.
pub const GRID_COLUMNS: u32 = 10;
pub const GRID_ROWS: u32 = 15;

/// Most hits a block can take.
pub const MAX_LIVES: i32 = 3;

/// A breakable block.
///
/// Its position follows from its id: column `id % 10`, row `id / 10`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: u32,
    pub color: BreakoutColor,
    pub lives: i32,
    pub position: Position,
}

impl Block {
    /// Create a block in the grid cell given by `id`.
    #[must_use]
    pub fn new(id: u32, color: BreakoutColor, lives: i32) -> Self {
        let column = (id % GRID_COLUMNS) as i32;
        let row = (id / GRID_COLUMNS) as i32;
        Self {
            id,
            color,
            lives,
            position: Position::new(column * BLOCK_WIDTH, row * BLOCK_HEIGHT),
        }
    }

    /// Whether the block can still be hit.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.lives > 0
    }
}

/// An axis-aligned rectangle the ball collides with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Obstacle {
    Block(Block),
    /// The screen border.
    Screen,
    /// The paddle, by its top-left corner.
    Paddle(Position),
}

impl Obstacle {
    /// Top-left corner.
    #[must_use]
    pub fn position(&self) -> Position {
        match self {
            Obstacle::Block(block) => block.position,
            Obstacle::Screen => Position::new(0, 0),
            Obstacle::Paddle(position) => *position,
        }
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        match self {
            Obstacle::Block(_) => BLOCK_WIDTH,
            Obstacle::Screen => SCREEN_WIDTH,
            Obstacle::Paddle(_) => PADDLE_WIDTH,
        }
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        match self {
            Obstacle::Block(_) => BLOCK_HEIGHT,
            Obstacle::Screen => SCREEN_HEIGHT,
            Obstacle::Paddle(_) => PADDLE_HEIGHT,
        }
    }

    #[must_use]
    pub fn is_paddle(&self) -> bool {
        matches!(self, Obstacle::Paddle(_))
    }

    /// Whether `point` lies on the outline of this rectangle (edges inclusive).
    #[must_use]
    pub fn outline_contains(&self, point: Position) -> bool {
        let Position { x, y } = self.position();
        let (right, bottom) = (x + self.width(), y + self.height());
        let within_x = (x..=right).contains(&point.x);
        let within_y = (y..=bottom).contains(&point.y);

        ((point.x == x || point.x == right) && within_y)
            || ((point.y == y || point.y == bottom) && within_x)
    }

    /// Whether `point` shares an x coordinate with the left or right edge.
    #[must_use]
    pub fn on_vertical_edge_line(&self, point: Position) -> bool {
        let x = self.position().x;
        point.x == x || point.x == x + self.width()
    }

    /// Whether `point` shares a y coordinate with the top or bottom edge.
    #[must_use]
    pub fn on_horizontal_edge_line(&self, point: Position) -> bool {
        let y = self.position().y;
        point.y == y || point.y == y + self.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_grid_position() {
        assert_eq!(Block::new(0, BreakoutColor::Grey, 3).position, Position::new(0, 0));
        assert_eq!(Block::new(13, BreakoutColor::Grey, 3).position, Position::new(192, 32));
        assert_eq!(Block::new(149, BreakoutColor::Grey, 3).position, Position::new(576, 448));
    }

    #[test]
    fn test_block_alive() {
        let mut block = Block::new(1, BreakoutColor::Red, 1);
        assert!(block.is_alive());
        block.lives -= 1;
        assert!(!block.is_alive());
    }

    #[test]
    fn test_outline_contains() {
        let block = Obstacle::Block(Block::new(11, BreakoutColor::Green, 2));
        // Block 11 spans (64, 32) to (128, 64).
        assert!(block.outline_contains(Position::new(64, 40)));
        assert!(block.outline_contains(Position::new(128, 64)));
        assert!(block.outline_contains(Position::new(100, 32)));
        assert!(!block.outline_contains(Position::new(100, 40)));
        assert!(!block.outline_contains(Position::new(63, 32)));
        assert!(!block.outline_contains(Position::new(64, 65)));
    }

    #[test]
    fn test_screen_outline() {
        assert!(Obstacle::Screen.outline_contains(Position::new(0, 200)));
        assert!(Obstacle::Screen.outline_contains(Position::new(640, 480)));
        assert!(!Obstacle::Screen.outline_contains(Position::new(1, 1)));
    }

    #[test]
    fn test_edge_lines() {
        let paddle = Obstacle::Paddle(Position::new(288, 448));
        assert!(paddle.is_paddle());
        assert!(paddle.on_vertical_edge_line(Position::new(352, 0)));
        assert!(!paddle.on_vertical_edge_line(Position::new(300, 448)));
        assert!(paddle.on_horizontal_edge_line(Position::new(0, 448)));
        assert!(paddle.on_horizontal_edge_line(Position::new(0, 480)));
    }
}

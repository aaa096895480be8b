//! Recorded visuals.
//!
//! Instead of drawing, the view keeps a scene description and produces one
//! [`Frame`] per turn: where the paddle sits, the ball's keyframes, and which
//! brick sprites disappear when. A replay viewer interpolates between them.
//!
//! The board is 10x15 cells of 128x64 pixels, twice the simulation scale,
//! centred horizontally and aligned to the bottom of a 1920x1080 world.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::color::BreakoutColor;
use super::obstacle::{Block, Obstacle, GRID_COLUMNS, GRID_ROWS, MAX_LIVES};
use super::simulation::{Simulation, SimulationMetadata};
use crate::core::Position;

pub const WORLD_WIDTH: i32 = 1920;
pub const WORLD_HEIGHT: i32 = 1080;

const CELL_WIDTH: i32 = 128;
const CELL_HEIGHT: i32 = 64;

pub const BOARD_WIDTH: i32 = CELL_WIDTH * GRID_COLUMNS as i32;
pub const BOARD_HEIGHT: i32 = CELL_HEIGHT * GRID_ROWS as i32;

/// Simulation pixels to world pixels.
pub const SCALE: i32 = 2;

/// Milliseconds of animation per simulated pixel.
pub const MS_PER_PIXEL: u32 = 5;

/// Ball position at a normalised time within a frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub t: f64,
    pub position: Position,
}

/// A brick sprite hidden at time `t`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrickChange {
    pub t: f64,
    pub id: u32,
    pub hardness: i32,
}

/// What changed on screen during one turn. Positions are board-relative.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub paddle: Position,
    pub ball: Vec<Keyframe>,
    pub bricks: Vec<BrickChange>,
}

/// One brick sprite: a block drawn at a given hardness level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickSprite {
    pub position: Position,
    pub color: BreakoutColor,
    pub visible: bool,
    pub tooltip: String,
}

/// Scene state and frame recorder.
#[derive(Clone, Debug)]
pub struct BreakoutView {
    board_origin: Position,
    paddle_color: BreakoutColor,
    ball_color: BreakoutColor,
    bricks: FxHashMap<(u32, i32), BrickSprite>,
    frame: Frame,
}

impl BreakoutView {
    /// Build the scene for a freshly set up board.
    pub fn new(paddle_color: BreakoutColor, ball_color: BreakoutColor, simulation: &Simulation) -> Self {
        let mut bricks = FxHashMap::default();
        for block in simulation.blocks() {
            for hardness in 1..=block.lives.min(MAX_LIVES) {
                bricks.insert((block.id, hardness), brick_sprite(block));
            }
        }

        let mut view = Self {
            board_origin: Position::new((WORLD_WIDTH - BOARD_WIDTH) / 2, WORLD_HEIGHT - BOARD_HEIGHT),
            paddle_color,
            ball_color,
            bricks,
            frame: Frame::default(),
        };
        view.update(simulation, None);
        view
    }

    /// Top-left of the board in world coordinates.
    #[must_use]
    pub fn board_origin(&self) -> Position {
        self.board_origin
    }

    #[must_use]
    pub fn paddle_color(&self) -> BreakoutColor {
        self.paddle_color
    }

    #[must_use]
    pub fn ball_color(&self) -> BreakoutColor {
        self.ball_color
    }

    /// The sprite for block `id` at `hardness`, if the block was that hard.
    #[must_use]
    pub fn brick(&self, id: u32, hardness: i32) -> Option<&BrickSprite> {
        self.bricks.get(&(id, hardness))
    }

    /// Number of visible sprites for block `id`.
    #[must_use]
    pub fn visible_layers(&self, id: u32) -> usize {
        self.bricks
            .iter()
            .filter(|((brick_id, _), sprite)| *brick_id == id && sprite.visible)
            .count()
    }

    /// The last recorded frame.
    #[must_use]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Record a new frame.
    ///
    /// Returns the frame duration in milliseconds when `metadata` is given.
    pub fn update(&mut self, simulation: &Simulation, metadata: Option<&SimulationMetadata>) -> Option<u32> {
        let mut frame = Frame {
            paddle: simulation.paddle().scale(SCALE),
            ball: Vec::new(),
            bricks: Vec::new(),
        };

        let duration = match metadata {
            Some(metadata) if metadata.total_distance > 0 => {
                let total = f64::from(metadata.total_distance);
                let mut travelled = 0u32;
                for point in &metadata.points {
                    travelled += point.distance;
                    let t = f64::from(travelled) / total - 0.001;
                    frame.ball.push(Keyframe {
                        t,
                        position: point.position.scale(SCALE),
                    });
                    for obstacle in &point.hit {
                        if let Obstacle::Block(block) = obstacle {
                            self.replace_brick(block.id, block.lives, t, &mut frame.bricks);
                        }
                    }
                }
                Some(metadata.total_distance * MS_PER_PIXEL)
            }
            _ => {
                frame.ball.push(Keyframe {
                    t: 1.0,
                    position: simulation.ball().scale(SCALE),
                });
                None
            }
        };

        self.frame = frame;
        duration
    }

    /// Hide every sprite of block `id` above `hardness`.
    fn replace_brick(&mut self, id: u32, hardness: i32, t: f64, changes: &mut Vec<BrickChange>) {
        for level in (hardness + 1).max(1)..=MAX_LIVES {
            if let Some(sprite) = self.bricks.get_mut(&(id, level)) {
                if sprite.visible {
                    sprite.visible = false;
                    changes.push(BrickChange { t, id, hardness: level });
                }
            }
        }
    }
}

fn brick_sprite(block: &Block) -> BrickSprite {
    BrickSprite {
        position: block.position.scale(SCALE),
        color: block.color,
        visible: true,
        tooltip: format!("{} - {} - {}", block.id, block.position.x, block.position.y),
    }
}

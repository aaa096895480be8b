//! Breakout referee.
//!
//! Test case input, one item per line:
//!
//! ```text
//! GREEN                    paddle color
//! RED                      ball color
//! 30                       initial ball angle, |angle| <= 70
//! 0-GREY-3;1-GREEN-2;...   blocks as id-COLOR-lives
//! ```
//!
//! Each turn the agent reads `<ball center x> <ball angle>` and answers with
//! the x coordinate for the left edge of the paddle. The ball then travels
//! until it comes back down.

use std::time::Duration;

use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use super::color::BreakoutColor;
use super::obstacle::{Block, GRID_COLUMNS, GRID_ROWS, MAX_LIVES};
use super::simulation::{Simulation, MAX_ABS_BALL_ANGLE};
use super::view::{BreakoutView, Frame};
use crate::runner::{RefereeError, Referee, SoloGameManager};

pub const WIN_MESSAGE: &str = "Congrats!";
pub const BALL_LOST_MESSAGE: &str = "Ball lost";
pub const TIMEOUT_MESSAGE: &str = "Timeout";
pub const INVALID_OUTPUT_MESSAGE: &str = "Invalid player output";

/// Everything set up by `init`.
#[derive(Debug)]
struct Board {
    simulation: Simulation,
    view: BreakoutView,
}

/// Referee for the Breakout puzzle.
#[derive(Debug, Default)]
pub struct BreakoutReferee {
    board: Option<Board>,
}

impl BreakoutReferee {
    /// Current board state, once initialised.
    pub fn simulation(&self) -> Option<&Simulation> {
        self.board.as_ref().map(|board| &board.simulation)
    }

    /// Scene state, once initialised.
    pub fn view(&self) -> Option<&BreakoutView> {
        self.board.as_ref().map(|board| &board.view)
    }
}

impl Referee for BreakoutReferee {
    type Frame = Frame;

    fn init(&mut self, game: &mut SoloGameManager) -> Result<(), RefereeError> {
        let input = game.test_case_input();
        if input.len() < 4 {
            return Err(RefereeError::InvalidInput(format!(
                "expected 4 lines, got {}",
                input.len()
            )));
        }

        let paddle_color = parse_color(&input[0])?;
        let ball_color = parse_color(&input[1])?;
        let ball_angle = parse_angle(&input[2])?;
        let blocks = parse_blocks(&input[3])?;

        game.first_turn_max_time = Duration::from_millis(2000);
        game.turn_max_time = Duration::from_millis(100);
        game.max_turns = 200;

        debug!(%paddle_color, %ball_color, ball_angle, blocks = blocks.len(), "board set up");

        let simulation = Simulation::new(ball_angle, blocks);
        let view = BreakoutView::new(paddle_color, ball_color, &simulation);
        self.board = Some(Board { simulation, view });
        Ok(())
    }

    fn game_turn(&mut self, game: &mut SoloGameManager, turn: u32) {
        let Some(board) = self.board.as_mut() else {
            game.lose_game("Referee not initialised");
            return;
        };
        let simulation = &mut board.simulation;

        game.player().send_input_line(format!(
            "{} {}",
            simulation.ball_center_x(),
            simulation.ball_angle()
        ));

        if let Err(err) = game.execute_player() {
            if err.is_timeout() {
                game.lose_game(TIMEOUT_MESSAGE);
            } else {
                warn!(turn, error = %err, "invalid agent turn");
                game.lose_game(INVALID_OUTPUT_MESSAGE);
            }
            return;
        }

        let paddle_x = match game.player().outputs().first().map(|line| line.trim().parse::<i32>()) {
            Some(Ok(x)) => x,
            _ => {
                warn!(turn, outputs = ?game.player().outputs(), "unparseable agent output");
                game.lose_game(INVALID_OUTPUT_MESSAGE);
                return;
            }
        };
        simulation.set_paddle_x(paddle_x);

        let metadata = match simulation.simulate() {
            Ok(metadata) => metadata,
            Err(err) => {
                warn!(turn, error = %err, "simulation fault");
                game.lose_game(err.to_string());
                return;
            }
        };

        if let Some(duration) = board.view.update(&board.simulation, Some(&metadata)) {
            game.frame_duration = duration;
        }

        let remaining = board.simulation.blocks_remaining();
        game.add_to_game_summary(format!(
            "Turn {turn}: paddle at {}, {} bounce(s), {remaining} block(s) left",
            board.simulation.paddle().x,
            metadata.points.len(),
        ));

        if remaining == 0 {
            game.win_game(WIN_MESSAGE);
        } else if !metadata.continue_game {
            game.lose_game(BALL_LOST_MESSAGE);
        }
    }

    fn frame(&self) -> Frame {
        self.view().map(|view| view.frame().clone()).unwrap_or_default()
    }
}

fn parse_color(line: &str) -> Result<BreakoutColor, RefereeError> {
    line.trim()
        .parse()
        .map_err(|err| RefereeError::InvalidInput(format!("{err}")))
}

fn parse_angle(line: &str) -> Result<i32, RefereeError> {
    let angle: i32 = line
        .trim()
        .parse()
        .map_err(|_| RefereeError::InvalidInput(format!("bad ball angle {line:?}")))?;
    if angle.abs() > MAX_ABS_BALL_ANGLE {
        return Err(RefereeError::InvalidInput(format!(
            "ball angle {angle} outside -{MAX_ABS_BALL_ANGLE}..={MAX_ABS_BALL_ANGLE}"
        )));
    }
    Ok(angle)
}

/// Parse `id-COLOR-lives` entries separated by `;`.
pub fn parse_blocks(line: &str) -> Result<Vec<Block>, RefereeError> {
    let mut seen = FxHashSet::default();
    let mut blocks = Vec::new();

    for entry in line.trim().split(';').map(str::trim).filter(|e| !e.is_empty()) {
        let invalid = || RefereeError::InvalidInput(format!("bad block {entry:?}"));

        let parts: Vec<&str> = entry.split('-').collect();
        let [id, color, lives] = parts.as_slice() else {
            return Err(invalid());
        };
        let id: u32 = id.parse().map_err(|_| invalid())?;
        let color: BreakoutColor = color.parse().map_err(|_| invalid())?;
        let lives: i32 = lives.parse().map_err(|_| invalid())?;

        if id >= GRID_COLUMNS * GRID_ROWS || !(1..=MAX_LIVES).contains(&lives) {
            return Err(invalid());
        }
        if !seen.insert(id) {
            return Err(RefereeError::InvalidInput(format!("duplicate block {id}")));
        }
        blocks.push(Block::new(id, color, lives));
    }

    if blocks.is_empty() {
        return Err(RefereeError::InvalidInput("no blocks".into()));
    }
    Ok(blocks)
}

//! Game state and core simulation types
//!
//! One `GameState` is a complete round: paddle, ball, brick grid, score,
//! lives, and the seeded RNG. The whole thing is rebuilt on every restart.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Rect;
use crate::config::Config;

/// Events emitted by the simulation for the loop driver / UI to consume
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A brick was destroyed (row-major grid coordinates)
    BrickDestroyed { row: u32, col: u32 },
    /// The ball bounced off the paddle at the given normalized offset
    PaddleHit { hit_pos: f32 },
    /// The ball fell out the bottom with lives to spare
    LifeLost { remaining: u8 },
    /// Lives exhausted; carries the final score. The state has already
    /// been reset to INITIAL when this is observed.
    GameOver { score: u64 },
    /// Every brick destroyed; carries the final score. Same reset
    /// semantics as `GameOver`.
    Win { score: u64 },
}

/// The player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    /// Left edge. Clamped to [0, surface_w - width] at all times.
    pub x: f32,
    /// Top edge (fixed for the lifetime of a round)
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Paddle centered on the surface, a fixed margin above the bottom
    pub fn centered(config: &Config) -> Self {
        Self {
            x: (config.surface_w - config.paddle_w) / 2.0,
            y: config.surface_h - config.paddle_margin,
            width: config.paddle_w,
            height: config.paddle_h,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Clamp x into the playable range, tolerating surfaces narrower
    /// than the paddle
    pub fn clamp_x(&mut self, surface_w: f32) {
        let max_x = (surface_w - self.width).max(0.0);
        self.x = self.x.clamp(0.0, max_x);
    }
}

/// The ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// A single brick cell
#[derive(Debug, Clone, Copy)]
pub struct Brick {
    pub rect: Rect,
    /// Destroyed bricks are inert: no collision, not drawn
    pub alive: bool,
}

/// Fixed rows x cols arrangement of bricks, stored row-major
#[derive(Debug, Clone)]
pub struct BrickGrid {
    pub rows: u32,
    pub cols: u32,
    bricks: Vec<Brick>,
}

impl BrickGrid {
    /// Build a full grid, horizontally centered below the top offset
    pub fn new(config: &Config) -> Self {
        let span = config.grid_cols as f32 * (config.brick_w + config.brick_padding)
            - config.brick_padding;
        let offset_left = (config.surface_w - span) / 2.0;

        let mut bricks = Vec::with_capacity((config.grid_rows * config.grid_cols) as usize);
        for row in 0..config.grid_rows {
            for col in 0..config.grid_cols {
                let x = offset_left + col as f32 * (config.brick_w + config.brick_padding);
                let y = config.grid_offset_top + row as f32 * (config.brick_h + config.brick_padding);
                bricks.push(Brick {
                    rect: Rect::new(x, y, config.brick_w, config.brick_h),
                    alive: true,
                });
            }
        }

        Self {
            rows: config.grid_rows,
            cols: config.grid_cols,
            bricks,
        }
    }

    pub fn get(&self, row: u32, col: u32) -> Option<&Brick> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.bricks.get((row * self.cols + col) as usize)
    }

    pub fn get_mut(&mut self, row: u32, col: u32) -> Option<&mut Brick> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.bricks.get_mut((row * self.cols + col) as usize)
    }

    /// Iterate bricks with their (row, col), in stable row-major order
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, &Brick)> {
        self.bricks.iter().enumerate().map(|(i, b)| {
            let i = i as u32;
            (i / self.cols, i % self.cols, b)
        })
    }

    /// Mutable row-major iteration, same order as `iter`
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (u32, u32, &mut Brick)> {
        let cols = self.cols;
        self.bricks.iter_mut().enumerate().map(move |(i, b)| {
            let i = i as u32;
            (i / cols, i % cols, b)
        })
    }

    pub fn alive_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.alive).count()
    }

    pub fn is_cleared(&self) -> bool {
        self.bricks.iter().all(|b| !b.alive)
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }
}

/// Complete game state for one round (deterministic)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Session RNG (serve direction); survives resets
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Score, 10 points per brick since the last reset
    pub score: u64,
    /// Remaining lives
    pub lives: u8,
    pub paddle: Paddle,
    pub ball: Ball,
    pub grid: BrickGrid,
    /// Active configuration, fixed for the lifetime of the state
    pub config: Config,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64, config: Config) -> Self {
        let config = config.sanitize();
        let paddle = Paddle::centered(&config);
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            score: 0,
            lives: config.start_lives,
            paddle,
            ball: Ball {
                pos: Vec2::ZERO,
                vel: Vec2::ZERO,
                radius: config.ball_radius,
            },
            grid: BrickGrid::new(&config),
            config,
        };
        state.serve_ball();
        state
    }

    /// Place the ball centered above the paddle, falling-ready: vertical
    /// velocity up at launch speed, horizontal sign drawn from the RNG
    pub fn serve_ball(&mut self) {
        let speed = self.config.ball_launch_speed;
        let vx = if self.rng.random::<bool>() { speed } else { -speed };
        self.ball = Ball {
            pos: Vec2::new(
                self.config.surface_w / 2.0,
                self.paddle.y - self.config.ball_serve_offset,
            ),
            vel: Vec2::new(vx, -speed),
            radius: self.config.ball_radius,
        };
    }

    /// Full reset to the INITIAL state: fresh grid, paddle centered, ball
    /// served, lives and score back to start. The RNG stream continues.
    pub fn reset_round(&mut self) {
        self.score = 0;
        self.lives = self.config.start_lives;
        self.paddle = Paddle::centered(&self.config);
        self.grid = BrickGrid::new(&self.config);
        self.serve_ball();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_layout_is_centered() {
        let config = Config::default();
        let grid = BrickGrid::new(&config);

        assert_eq!(grid.len(), 45);
        assert_eq!(grid.alive_count(), 45);

        // 9 columns of 60px bricks with 8px gaps span 604px on a 640px
        // surface, leaving 18px either side
        let first = grid.get(0, 0).unwrap();
        assert!((first.rect.left() - 18.0).abs() < 1e-4);
        assert!((first.rect.top() - 40.0).abs() < 1e-4);

        let last = grid.get(4, 8).unwrap();
        assert!((last.rect.right() - 622.0).abs() < 1e-4);
    }

    #[test]
    fn test_grid_iter_row_major() {
        let config = Config::default();
        let grid = BrickGrid::new(&config);

        let coords: Vec<(u32, u32)> = grid.iter().map(|(r, c, _)| (r, c)).collect();
        assert_eq!(coords[0], (0, 0));
        assert_eq!(coords[1], (0, 1));
        assert_eq!(coords[9], (1, 0));
        assert_eq!(coords[44], (4, 8));
    }

    #[test]
    fn test_new_state_is_initial() {
        let state = GameState::new(7, Config::default());

        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert!(!state.grid.is_cleared());
        // Paddle centered
        assert!((state.paddle.x - 270.0).abs() < 1e-4);
        // Ball served above the paddle, moving up
        assert!((state.ball.pos.x - 320.0).abs() < 1e-4);
        assert!((state.ball.pos.y - 430.0).abs() < 1e-4);
        assert!(state.ball.vel.y < 0.0);
        assert_eq!(state.ball.vel.x.abs(), 3.0);
    }

    #[test]
    fn test_serve_direction_is_seed_deterministic() {
        let a = GameState::new(42, Config::default());
        let b = GameState::new(42, Config::default());
        assert_eq!(a.ball.vel.x, b.ball.vel.x);
    }

    #[test]
    fn test_paddle_clamp_degenerate_surface() {
        let mut paddle = Paddle {
            x: 50.0,
            y: 10.0,
            width: 100.0,
            height: 12.0,
        };
        // Surface narrower than the paddle: pinned to the left edge,
        // no panic from an inverted clamp range
        paddle.clamp_x(60.0);
        assert_eq!(paddle.x, 0.0);
    }
}

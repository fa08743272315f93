//! Brick Breaker - a single-screen Breakout-style arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `render`: Scene building and the Canvas 2D backend
//! - `config`: Tunable game dimensions and speeds

pub mod config;
pub mod render;
pub mod sim;

pub use config::Config;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per reference frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Play surface dimensions
    pub const SURFACE_W: f32 = 640.0;
    pub const SURFACE_H: f32 = 480.0;

    /// Paddle defaults - sits a fixed distance above the bottom edge
    pub const PADDLE_W: f32 = 100.0;
    pub const PADDLE_H: f32 = 12.0;
    pub const PADDLE_BOTTOM_MARGIN: f32 = 40.0;
    /// Per-tick paddle displacement while a direction key is held
    pub const PADDLE_SPEED: f32 = 6.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Per-tick launch velocity components (vx sign randomized on serve)
    pub const BALL_LAUNCH_SPEED: f32 = 3.0;
    /// Serve height above the paddle top
    pub const BALL_SERVE_OFFSET: f32 = 10.0;
    /// Horizontal velocity at full paddle-edge deflection
    pub const PADDLE_STEER: f32 = 4.0;

    /// Brick grid defaults
    pub const GRID_ROWS: u32 = 5;
    pub const GRID_COLS: u32 = 9;
    pub const BRICK_W: f32 = 60.0;
    pub const BRICK_H: f32 = 18.0;
    pub const BRICK_PADDING: f32 = 8.0;
    pub const GRID_OFFSET_TOP: f32 = 40.0;

    /// Points awarded per destroyed brick
    pub const BRICK_SCORE: u64 = 10;
    /// Lives at the start of a round
    pub const START_LIVES: u8 = 3;
}

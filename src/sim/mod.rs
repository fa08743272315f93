//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (row-major over the brick grid)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, circle_rect_overlap, circle_segment_overlap};
pub use state::{Ball, Brick, BrickGrid, GameEvent, GameState, Paddle};
pub use tick::{TickInput, tick};

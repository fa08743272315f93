//! Rendering module
//!
//! `scene` builds a list of drawing primitives from the game state (pure,
//! testable); `canvas` replays them onto a Canvas 2D context on wasm32.

pub mod scene;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use scene::{DrawCmd, build_scene};

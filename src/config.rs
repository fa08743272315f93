//! Game configuration
//!
//! Tunable dimensions and speeds, persisted separately from any game
//! state in LocalStorage on the web build. Defaults reproduce the
//! classic layout in `consts`.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Tunable game dimensions and speeds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Play surface size
    pub surface_w: f32,
    pub surface_h: f32,

    /// Paddle geometry and speed
    pub paddle_w: f32,
    pub paddle_h: f32,
    /// Distance of the paddle top from the bottom edge
    pub paddle_margin: f32,
    /// Per-tick displacement while a direction key is held
    pub paddle_speed: f32,
    /// Horizontal velocity at full paddle-edge deflection
    pub paddle_steer: f32,

    /// Ball geometry and serve kinematics
    pub ball_radius: f32,
    pub ball_launch_speed: f32,
    pub ball_serve_offset: f32,

    /// Brick grid layout
    pub grid_rows: u32,
    pub grid_cols: u32,
    pub brick_w: f32,
    pub brick_h: f32,
    pub brick_padding: f32,
    pub grid_offset_top: f32,

    /// Scoring and lives
    pub brick_score: u64,
    pub start_lives: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface_w: consts::SURFACE_W,
            surface_h: consts::SURFACE_H,
            paddle_w: consts::PADDLE_W,
            paddle_h: consts::PADDLE_H,
            paddle_margin: consts::PADDLE_BOTTOM_MARGIN,
            paddle_speed: consts::PADDLE_SPEED,
            paddle_steer: consts::PADDLE_STEER,
            ball_radius: consts::BALL_RADIUS,
            ball_launch_speed: consts::BALL_LAUNCH_SPEED,
            ball_serve_offset: consts::BALL_SERVE_OFFSET,
            grid_rows: consts::GRID_ROWS,
            grid_cols: consts::GRID_COLS,
            brick_w: consts::BRICK_W,
            brick_h: consts::BRICK_H,
            brick_padding: consts::BRICK_PADDING,
            grid_offset_top: consts::GRID_OFFSET_TOP,
            brick_score: consts::BRICK_SCORE,
            start_lives: consts::START_LIVES,
        }
    }
}

impl Config {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "brick_breaker_config";

    /// Clamp degenerate values so the simulation stays well-defined.
    /// Zero-size surfaces are allowed (the output is degenerate but
    /// nothing panics); negative sizes and empty grids are not.
    pub fn sanitize(mut self) -> Self {
        self.surface_w = self.surface_w.max(0.0);
        self.surface_h = self.surface_h.max(0.0);
        self.paddle_w = self.paddle_w.max(0.0);
        self.paddle_h = self.paddle_h.max(0.0);
        self.paddle_margin = self.paddle_margin.max(0.0);
        self.ball_radius = self.ball_radius.max(0.0);
        self.brick_w = self.brick_w.max(0.0);
        self.brick_h = self.brick_h.max(0.0);
        self.brick_padding = self.brick_padding.max(0.0);
        self.grid_rows = self.grid_rows.max(1);
        self.grid_cols = self.grid_cols.max(1);
        self.start_lives = self.start_lives.max(1);
        self
    }

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage
            && let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY)
        {
            match serde_json::from_str::<Config>(&json) {
                Ok(config) => {
                    log::info!("Loaded config from LocalStorage");
                    return config.sanitize();
                }
                Err(err) => {
                    log::warn!("Stored config unreadable ({err}), using defaults");
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Save config to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage
            && let Ok(json) = serde_json::to_string(self)
        {
            let _ = storage.set_item(Self::STORAGE_KEY, &json);
            log::info!("Config saved");
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reproduces_classic_layout() {
        let config = Config::default();
        assert_eq!(config.grid_rows * config.grid_cols, 45);
        assert_eq!(config.paddle_w, 100.0);
        assert_eq!(config.start_lives, 3);
    }

    #[test]
    fn test_sanitize_clamps_degenerate_values() {
        let config = Config {
            surface_w: -100.0,
            grid_rows: 0,
            grid_cols: 0,
            start_lives: 0,
            ..Config::default()
        }
        .sanitize();

        assert_eq!(config.surface_w, 0.0);
        assert_eq!(config.grid_rows, 1);
        assert_eq!(config.grid_cols, 1);
        assert_eq!(config.start_lives, 1);
    }

    #[test]
    fn test_round_trips_through_json() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let back: Config = serde_json::from_str(r#"{"paddle_w": 80.0}"#).unwrap();
        assert_eq!(back.paddle_w, 80.0);
        assert_eq!(back.surface_w, Config::default().surface_w);
    }
}

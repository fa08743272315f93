//! Scene generation for 2D primitives
//!
//! Pure function of the game state: no mutation, no platform calls. The
//! backend (Canvas 2D on wasm32) replays the commands in order.

use glam::Vec2;

use crate::sim::collision::Rect;
use crate::sim::state::GameState;

/// Colors for game elements, RGBA in [0, 1]
pub mod colors {
    pub const PADDLE: [f32; 4] = [0.431, 0.906, 0.718, 1.0];
    pub const BALL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const HUD_TEXT: [f32; 4] = [0.604, 0.651, 0.698, 1.0];
}

/// Corner radius for brick rounded rects
const BRICK_CORNER: f32 = 6.0;
/// Corner radius for the paddle
const PADDLE_CORNER: f32 = 8.0;
/// HUD label inset from the surface edges
const HUD_INSET: f32 = 12.0;
/// Reserved width for the right-aligned score label
const HUD_SCORE_WIDTH: f32 = 100.0;

/// A single drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    RoundedRect {
        rect: Rect,
        corner_radius: f32,
        color: [f32; 4],
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    Text {
        pos: Vec2,
        text: String,
        color: [f32; 4],
    },
}

/// Convert HSL (hue in degrees, s/l in [0, 1]) to RGBA
pub fn hsl_to_rgba(hue: f32, s: f32, l: f32) -> [f32; 4] {
    let h = hue.rem_euclid(360.0) / 60.0;
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    [r + m, g + m, b + m, 1.0]
}

/// Brick color, keyed deterministically by grid position
///
/// Hue walks 30 degrees per row and 3 per column, at 70% saturation and
/// 50% lightness.
pub fn brick_color(row: u32, col: u32) -> [f32; 4] {
    hsl_to_rgba((row * 30 + col * 3) as f32, 0.7, 0.5)
}

/// Build the draw list for the current state
///
/// Order: live bricks (row-major), paddle, ball, then the two HUD labels.
pub fn build_scene(state: &GameState) -> Vec<DrawCmd> {
    let mut cmds = Vec::with_capacity(state.grid.len() + 4);

    for (row, col, brick) in state.grid.iter() {
        if !brick.alive {
            continue;
        }
        cmds.push(DrawCmd::RoundedRect {
            rect: brick.rect,
            corner_radius: BRICK_CORNER,
            color: brick_color(row, col),
        });
    }

    cmds.push(DrawCmd::RoundedRect {
        rect: state.paddle.rect(),
        corner_radius: PADDLE_CORNER,
        color: colors::PADDLE,
    });

    cmds.push(DrawCmd::Circle {
        center: state.ball.pos,
        radius: state.ball.radius,
        color: colors::BALL,
    });

    let baseline = state.config.surface_h - HUD_INSET;
    cmds.push(DrawCmd::Text {
        pos: Vec2::new(HUD_INSET, baseline),
        text: format!("Lives: {}", state.lives),
        color: colors::HUD_TEXT,
    });
    cmds.push(DrawCmd::Text {
        pos: Vec2::new(state.config.surface_w - HUD_SCORE_WIDTH, baseline),
        text: format!("Score: {}", state.score),
        color: colors::HUD_TEXT,
    });

    cmds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    #[test]
    fn test_hsl_primaries() {
        let red = hsl_to_rgba(0.0, 0.7, 0.5);
        assert!((red[0] - 0.85).abs() < 1e-4);
        assert!((red[1] - 0.15).abs() < 1e-4);
        assert!((red[2] - 0.15).abs() < 1e-4);

        let green = hsl_to_rgba(120.0, 0.7, 0.5);
        assert!((green[1] - 0.85).abs() < 1e-4);
        assert!((green[0] - 0.15).abs() < 1e-4);

        // Hue wraps
        assert_eq!(hsl_to_rgba(360.0, 0.7, 0.5), hsl_to_rgba(0.0, 0.7, 0.5));
    }

    #[test]
    fn test_brick_color_keyed_by_position() {
        // Row 2, col 5: hue 75
        assert_eq!(brick_color(2, 5), hsl_to_rgba(75.0, 0.7, 0.5));
        // Neighbors differ
        assert_ne!(brick_color(0, 0), brick_color(0, 1));
        assert_ne!(brick_color(0, 0), brick_color(1, 0));
    }

    #[test]
    fn test_full_scene_command_count() {
        let state = GameState::new(1, Config::default());
        let cmds = build_scene(&state);
        // 45 bricks + paddle + ball + 2 labels
        assert_eq!(cmds.len(), 49);
    }

    #[test]
    fn test_destroyed_bricks_not_drawn() {
        let mut state = GameState::new(1, Config::default());
        state.grid.get_mut(0, 0).unwrap().alive = false;
        state.grid.get_mut(3, 7).unwrap().alive = false;

        let cmds = build_scene(&state);
        assert_eq!(cmds.len(), 47);

        // The dead bricks' colors are absent from the draw list
        let gone = brick_color(0, 0);
        assert!(!cmds.iter().any(|c| matches!(
            c,
            DrawCmd::RoundedRect { color, .. } if *color == gone
        )));
    }

    #[test]
    fn test_specific_brick_draws_with_its_color() {
        let state = GameState::new(1, Config::default());
        let rect = state.grid.get(1, 4).unwrap().rect;

        let cmds = build_scene(&state);
        assert!(cmds.contains(&DrawCmd::RoundedRect {
            rect,
            corner_radius: 6.0,
            color: brick_color(1, 4),
        }));
    }

    #[test]
    fn test_hud_labels() {
        let mut state = GameState::new(1, Config::default());
        state.score = 230;
        state.lives = 2;

        let cmds = build_scene(&state);
        let texts: Vec<&str> = cmds
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["Lives: 2", "Score: 230"]);
    }
}

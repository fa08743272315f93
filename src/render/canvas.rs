//! Canvas 2D backend (wasm32)
//!
//! Replays a scene's draw commands onto a `CanvasRenderingContext2d`.
//! Rounded rects are traced with `arc_to` the same way the 2D API's own
//! `roundRect` does it.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::scene::DrawCmd;
use crate::sim::collision::Rect;

const HUD_FONT: &str = "14px Arial";

/// Thin wrapper owning the 2D context
pub struct CanvasBackend {
    ctx: CanvasRenderingContext2d,
}

impl CanvasBackend {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        ctx.set_font(HUD_FONT);
        Self { ctx }
    }

    /// Clear the surface and replay the commands in order
    pub fn draw(&self, cmds: &[DrawCmd], surface_w: f32, surface_h: f32) -> Result<(), JsValue> {
        self.ctx
            .clear_rect(0.0, 0.0, surface_w as f64, surface_h as f64);

        for cmd in cmds {
            match cmd {
                DrawCmd::RoundedRect {
                    rect,
                    corner_radius,
                    color,
                } => {
                    self.ctx.set_fill_style_str(&css_color(*color));
                    self.trace_rounded_rect(rect, *corner_radius as f64)?;
                    self.ctx.fill();
                }
                DrawCmd::Circle {
                    center,
                    radius,
                    color,
                } => {
                    self.ctx.set_fill_style_str(&css_color(*color));
                    self.ctx.begin_path();
                    self.ctx.arc(
                        center.x as f64,
                        center.y as f64,
                        *radius as f64,
                        0.0,
                        2.0 * PI,
                    )?;
                    self.ctx.fill();
                }
                DrawCmd::Text { pos, text, color } => {
                    self.ctx.set_fill_style_str(&css_color(*color));
                    self.ctx.set_font(HUD_FONT);
                    self.ctx.fill_text(text, pos.x as f64, pos.y as f64)?;
                }
            }
        }

        Ok(())
    }

    fn trace_rounded_rect(&self, rect: &Rect, r: f64) -> Result<(), JsValue> {
        let (x, y) = (rect.left() as f64, rect.top() as f64);
        let (w, h) = (rect.size.x as f64, rect.size.y as f64);

        self.ctx.begin_path();
        self.ctx.move_to(x + r, y);
        self.ctx.arc_to(x + w, y, x + w, y + h, r)?;
        self.ctx.arc_to(x + w, y + h, x, y + h, r)?;
        self.ctx.arc_to(x, y + h, x, y, r)?;
        self.ctx.arc_to(x, y, x + w, y, r)?;
        self.ctx.close_path();
        Ok(())
    }
}

/// RGBA in [0, 1] to a CSS `rgba()` string
fn css_color([r, g, b, a]: [f32; 4]) -> String {
    format!(
        "rgba({},{},{},{})",
        (r.clamp(0.0, 1.0) * 255.0).round() as u8,
        (g.clamp(0.0, 1.0) * 255.0).round() as u8,
        (b.clamp(0.0, 1.0) * 255.0).round() as u8,
        a.clamp(0.0, 1.0),
    )
}

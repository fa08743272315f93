//! Fixed timestep simulation tick
//!
//! Advances one frame: paddle intent, Euler integration, wall / paddle /
//! brick collisions, loss and win transitions. Outcomes the UI cares
//! about are appended to the caller's event buffer instead of being
//! reported modally.

use super::collision::{ball_brick_overlap, paddle_hit_pos};
use super::state::{GameEvent, GameState};

/// Input intent for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Left direction key held
    pub left: bool,
    /// Right direction key held
    pub right: bool,
    /// Absolute pointer x over the surface (one-shot per move event)
    pub pointer_x: Option<f32>,
    /// Restart the round (one-shot)
    pub restart: bool,
}

/// Advance the game state by one tick
///
/// Collision order matters and is fixed: walls, then paddle, then bricks
/// in row-major order, then the bottom-loss and win checks. Emitted
/// events are appended to `events`; after a `GameOver` or `Win` the state
/// has already been reset to INITIAL.
pub fn tick(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    if input.restart {
        log::info!("round restarted (score {})", state.score);
        state.reset_round();
        return;
    }

    state.time_ticks += 1;

    let surface_w = state.config.surface_w;
    let surface_h = state.config.surface_h;

    // Paddle intent: held keys move at a fixed per-tick speed, a pointer
    // position snaps directly. Pointer wins when both arrive in one tick.
    if input.left {
        state.paddle.x -= state.config.paddle_speed;
    }
    if input.right {
        state.paddle.x += state.config.paddle_speed;
    }
    if let Some(px) = input.pointer_x {
        state.paddle.x = px - state.paddle.width / 2.0;
    }
    state.paddle.clamp_x(surface_w);

    // Ball integration (per-tick unit displacement)
    let ball = &mut state.ball;
    ball.pos += ball.vel;

    // Wall reflection. The directional guard makes each crossing flip the
    // sign exactly once, so a ball that ends up past a wall cannot get
    // stuck re-flipping every tick.
    if ball.pos.x + ball.radius > surface_w && ball.vel.x > 0.0 {
        ball.vel.x = -ball.vel.x;
    }
    if ball.pos.x - ball.radius < 0.0 && ball.vel.x < 0.0 {
        ball.vel.x = -ball.vel.x;
    }
    if ball.pos.y - ball.radius < 0.0 && ball.vel.y < 0.0 {
        ball.vel.y = -ball.vel.y;
    }

    // Paddle collision: bottom edge reached the paddle top, center within
    // the paddle span, moving downward. The contact offset steers the
    // rebound; vertical speed is preserved, direction forced upward.
    let paddle_rect = state.paddle.rect();
    if ball.vel.y > 0.0
        && ball.pos.y + ball.radius > paddle_rect.top()
        && ball.pos.y - ball.radius < paddle_rect.bottom()
        && ball.pos.x > paddle_rect.left()
        && ball.pos.x < paddle_rect.right()
    {
        let hit_pos = paddle_hit_pos(ball.pos.x, &paddle_rect);
        ball.vel.x = state.config.paddle_steer * hit_pos;
        ball.vel.y = -ball.vel.y.abs();
        events.push(GameEvent::PaddleHit { hit_pos });
    }

    // Brick collisions, row-major scan. First hit wins: one brick, one
    // score bump, one vertical flip per tick.
    let mut destroyed: Option<(u32, u32)> = None;
    for (row, col, brick) in state.grid.iter_mut() {
        if !brick.alive {
            continue;
        }
        if ball_brick_overlap(ball.pos, ball.radius, &brick.rect) {
            brick.alive = false;
            ball.vel.y = -ball.vel.y;
            destroyed = Some((row, col));
            break;
        }
    }
    if let Some((row, col)) = destroyed {
        state.score += state.config.brick_score;
        events.push(GameEvent::BrickDestroyed { row, col });
    }

    // Bottom loss: the ball's top edge passed below the surface
    if state.ball.pos.y - state.ball.radius > surface_h {
        state.lives = state.lives.saturating_sub(1);
        if state.lives == 0 {
            let score = state.score;
            log::info!("game over, final score {score}");
            events.push(GameEvent::GameOver { score });
            state.reset_round();
            return;
        }
        events.push(GameEvent::LifeLost {
            remaining: state.lives,
        });
        state.serve_ball();
    }

    // Win: grid cleared
    if state.grid.is_cleared() {
        let score = state.score;
        log::info!("grid cleared, final score {score}");
        events.push(GameEvent::Win { score });
        state.reset_round();
    }
}

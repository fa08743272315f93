//! Collision detection for axis-aligned geometry
//!
//! Pure overlap predicates between the ball (a circle) and the rectangles
//! the rest of the game is made of. Everything here is side-effect free;
//! the response (velocity flips, scoring) lives in the tick.

use glam::Vec2;

/// An axis-aligned rectangle, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }
}

/// Check whether a circle overlaps an axis-aligned rectangle
///
/// Clamps the circle center onto the rectangle and compares the distance
/// to the closest point against the radius.
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = Vec2::new(
        center.x.clamp(rect.left(), rect.right()),
        center.y.clamp(rect.top(), rect.bottom()),
    );
    (center - closest).length_squared() <= radius * radius
}

/// Check whether a circle overlaps a line segment from `a` to `b`
///
/// Projects the circle center onto the segment and compares the distance
/// to the closest point against the radius. Degenerate (zero-length)
/// segments are treated as a point.
pub fn circle_segment_overlap(center: Vec2, radius: f32, a: Vec2, b: Vec2) -> bool {
    let seg = b - a;
    let to_center = center - a;
    let len_sq = seg.length_squared();

    let closest = if len_sq < 0.0001 {
        a
    } else {
        let t = (to_center.dot(seg) / len_sq).clamp(0.0, 1.0);
        a + seg * t
    };

    (center - closest).length_squared() <= radius * radius
}

/// The brick hit test: ball center strictly within the brick's horizontal
/// span, vertical extent overlapping the brick's vertical span
///
/// Deliberately looser than [`circle_rect_overlap`]: a ball grazing a
/// brick corner from the side does not count, which keeps the response a
/// plain vertical velocity flip.
pub fn ball_brick_overlap(center: Vec2, radius: f32, brick: &Rect) -> bool {
    center.x > brick.left()
        && center.x < brick.right()
        && center.y - radius < brick.bottom()
        && center.y + radius > brick.top()
}

/// Normalized horizontal offset of a ball-paddle contact point
///
/// 0 at the paddle center, -1/+1 at the edges. Geometry keeps the result
/// in [-1, 1] when the ball center is within the paddle span.
#[inline]
pub fn paddle_hit_pos(ball_x: f32, paddle: &Rect) -> f32 {
    (ball_x - paddle.center().x) / (paddle.size.x / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_rect_overlap_edges() {
        let rect = Rect::new(100.0, 100.0, 60.0, 18.0);

        // Touching the left edge
        assert!(circle_rect_overlap(Vec2::new(92.0, 109.0), 8.0, &rect));
        // Just clear of the left edge
        assert!(!circle_rect_overlap(Vec2::new(91.0, 109.0), 8.0, &rect));
        // Fully inside
        assert!(circle_rect_overlap(Vec2::new(130.0, 109.0), 8.0, &rect));
    }

    #[test]
    fn test_circle_rect_overlap_corner() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);

        // Diagonal from the corner: distance sqrt(32) ~ 5.66
        assert!(circle_rect_overlap(Vec2::new(14.0, 14.0), 6.0, &rect));
        assert!(!circle_rect_overlap(Vec2::new(14.0, 14.0), 5.0, &rect));
    }

    #[test]
    fn test_circle_segment_overlap() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(100.0, 0.0);

        // Above the middle of the segment
        assert!(circle_segment_overlap(Vec2::new(50.0, 7.0), 8.0, a, b));
        assert!(!circle_segment_overlap(Vec2::new(50.0, 9.0), 8.0, a, b));
        // Past the endpoint, within radius of it
        assert!(circle_segment_overlap(Vec2::new(105.0, 0.0), 8.0, a, b));
        assert!(!circle_segment_overlap(Vec2::new(109.0, 0.0), 8.0, a, b));
    }

    #[test]
    fn test_circle_segment_degenerate() {
        let p = Vec2::new(10.0, 10.0);
        assert!(circle_segment_overlap(Vec2::new(12.0, 10.0), 3.0, p, p));
        assert!(!circle_segment_overlap(Vec2::new(20.0, 10.0), 3.0, p, p));
    }

    #[test]
    fn test_ball_brick_overlap_requires_center_in_span() {
        let brick = Rect::new(100.0, 100.0, 60.0, 18.0);

        // Center inside the span, vertical extents overlapping
        assert!(ball_brick_overlap(Vec2::new(130.0, 95.0), 8.0, &brick));
        // Center exactly on the edge is out (strict comparison)
        assert!(!ball_brick_overlap(Vec2::new(100.0, 109.0), 8.0, &brick));
        // Center outside the span, even though the circle overlaps
        assert!(!ball_brick_overlap(Vec2::new(96.0, 109.0), 8.0, &brick));
        // Vertically clear
        assert!(!ball_brick_overlap(Vec2::new(130.0, 80.0), 8.0, &brick));
    }

    #[test]
    fn test_paddle_hit_pos() {
        let paddle = Rect::new(200.0, 440.0, 100.0, 12.0);

        assert!((paddle_hit_pos(250.0, &paddle)).abs() < 1e-6);
        assert!((paddle_hit_pos(300.0, &paddle) - 1.0).abs() < 1e-6);
        assert!((paddle_hit_pos(200.0, &paddle) + 1.0).abs() < 1e-6);
        assert!((paddle_hit_pos(275.0, &paddle) - 0.5).abs() < 1e-6);
    }
}

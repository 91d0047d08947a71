//! Screen ⇄ user coordinate conversion.

use crate::math::Point2;

/// Affine viewport mapping logical user coordinates to device pixels.
///
/// `origin` is the screen position of the user-space origin; `stretch_x` /
/// `stretch_y` are pixels per user unit. Screen y grows downward, user y
/// grows upward.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    origin_x: f64,
    origin_y: f64,
    stretch_x: f64,
    stretch_y: f64,
}

impl Viewport {
    /// Creates a viewport from an origin (in screen pixels) and per-axis
    /// stretch factors (pixels per user unit).
    #[must_use]
    pub fn new(origin_x: f64, origin_y: f64, stretch_x: f64, stretch_y: f64) -> Self {
        Self {
            origin_x,
            origin_y,
            stretch_x,
            stretch_y,
        }
    }

    /// Horizontal scale factor in pixels per user unit.
    #[must_use]
    pub fn stretch_x(&self) -> f64 {
        self.stretch_x
    }

    /// Vertical scale factor in pixels per user unit.
    #[must_use]
    pub fn stretch_y(&self) -> f64 {
        self.stretch_y
    }

    /// Converts a user-space point to screen pixels.
    #[must_use]
    pub fn user_to_screen(&self, p: Point2) -> (f64, f64) {
        (
            self.origin_x + p.x * self.stretch_x,
            self.origin_y - p.y * self.stretch_y,
        )
    }

    /// Converts screen pixels to a user-space point.
    #[must_use]
    pub fn screen_to_user(&self, x: f64, y: f64) -> Point2 {
        Point2::new(
            (x - self.origin_x) / self.stretch_x,
            (self.origin_y - y) / self.stretch_y,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(250.0, 250.0, 50.0, 50.0)
    }
}

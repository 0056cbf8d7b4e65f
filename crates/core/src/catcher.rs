//! The catcher: a horizontally movable receiver at the bottom of the surface.

use crate::config::GameConfig;

/// Horizontal receiver.
///
/// `x` is the left edge and is always within `[0, surface_width - width]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Catcher {
    x: f32,
    width: f32,
    max_x: f32,
}

impl Catcher {
    /// Create a catcher centered on the surface.
    pub fn new(config: &GameConfig) -> Self {
        let max_x = config.catcher_max_x();
        Self {
            x: (max_x / 2.0).clamp(0.0, max_x),
            width: config.catcher_width,
            max_x,
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn max_x(&self) -> f32 {
        self.max_x
    }

    /// Whether `x` lies within the catcher's span (both edges inclusive).
    pub fn covers(&self, x: f32) -> bool {
        self.x <= x && x <= self.x + self.width
    }

    /// Shift by `delta`; stops at the surface edges.
    pub fn move_by(&mut self, delta: f32) {
        self.set_x(self.x + delta);
    }

    /// Center the catcher on `target_center_x`.
    pub fn move_to_position(&mut self, target_center_x: f32) {
        self.set_x(target_center_x - self.width / 2.0);
    }

    /// Follow a drag: keep the grabbed point under the pointer.
    ///
    /// `pointer_x` is surface-relative; `grab_offset` is where the catcher
    /// was grabbed, measured from its left edge.
    pub fn track_pointer(&mut self, pointer_x: f32, grab_offset: f32) {
        self.set_x(pointer_x - grab_offset);
    }

    fn set_x(&mut self, x: f32) {
        // NaN never reaches the surface.
        self.x = if x.is_nan() { self.x } else { x.clamp(0.0, self.max_x) };
    }
}

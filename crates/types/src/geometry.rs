use serde::{Deserialize, Serialize};

/// Width of the tablet's drawing surface, in points.
pub const DEVICE_WIDTH: f32 = 1404.0;
/// Height of the tablet's drawing surface, in points.
pub const DEVICE_HEIGHT: f32 = 1872.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The native page size of the tablet.
    pub fn device() -> Self {
        Self {
            width: DEVICE_WIDTH,
            height: DEVICE_HEIGHT,
        }
    }

    /// Both dimensions are finite and strictly positive.
    pub fn is_drawable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::device()
    }
}

//! Shared geometry primitives.
//!
//! All window math is done in `f64` using a global top-left-origin
//! coordinate space (y increases downward), the same space the
//! platform layer reports screen bounds in.

use serde::{Deserialize, Serialize};

/// Position and size of a note window.
///
/// Dimensions are not validated; a caller that stores a negative
/// width gets it back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// X coordinate of the right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Y coordinate of the bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn origin(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Same size, different position.
    pub fn with_origin(&self, x: f64, y: f64) -> Self {
        Self { x, y, ..*self }
    }

    /// Overlapping region of two rectangles, if any.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if left < right && top < bottom {
            Some(Rect::new(left, top, right - left, bottom - top))
        } else {
            None
        }
    }
}

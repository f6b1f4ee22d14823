//! Geometry and measurement types shared between the host and widgets.

use serde::{Deserialize, Serialize};

/// A 2D size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// Whether either dimension is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A 2D point in widget-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// Constraint the host places on one axis when asking a widget for its size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureSpec {
    /// The widget must be exactly this size
    Exactly(f32),
    /// The widget may be at most this size
    AtMost(f32),
    /// No constraint; the widget picks its preferred size
    Unspecified,
}

impl MeasureSpec {
    /// Resolve against a preferred size, where `AtMost` yields the host's limit.
    ///
    /// Used for axes that want to fill whatever space they are offered.
    pub fn resolve_filling(&self, preferred: f32) -> f32 {
        match *self {
            MeasureSpec::Exactly(size) | MeasureSpec::AtMost(size) => size,
            MeasureSpec::Unspecified => preferred,
        }
    }

    /// Resolve against a preferred size, where `AtMost` shrinks to the preferred size.
    pub fn resolve_wrapping(&self, preferred: f32) -> f32 {
        match *self {
            MeasureSpec::Exactly(size) => size,
            MeasureSpec::AtMost(size) => preferred.min(size),
            MeasureSpec::Unspecified => preferred,
        }
    }
}

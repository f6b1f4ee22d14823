//! Text measurement utilities.
//!
//! Provides estimates of text dimensions based on font metrics. Widgets use
//! these during measurement and to center labels; a real text backend can
//! supply exact values through [`crate::Canvas::measure_text`].

use crate::constants::{CHAR_WIDTH_FACTOR, DEFAULT_TEXT_SIZE, LINE_HEIGHT_FACTOR};

/// Metrics for a specific font/size combination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    /// Font size in pixels
    pub size: f32,
    /// Average character width as a ratio of font size
    pub char_width_ratio: f32,
    /// Line height (ascent + descent) as a ratio of font size
    pub line_height_ratio: f32,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self::new(DEFAULT_TEXT_SIZE)
    }
}

impl TextMetrics {
    /// Create metrics for a specific font size.
    pub fn new(size: f32) -> Self {
        Self {
            size,
            char_width_ratio: CHAR_WIDTH_FACTOR,
            line_height_ratio: LINE_HEIGHT_FACTOR,
        }
    }

    /// Create metrics with custom ratios.
    pub fn custom(size: f32, char_width_ratio: f32, line_height_ratio: f32) -> Self {
        Self {
            size,
            char_width_ratio,
            line_height_ratio,
        }
    }

    /// Estimate the width of a single line of text.
    pub fn line_width(&self, text: &str) -> f32 {
        let char_count = text.chars().count() as f32;
        char_count * self.size * self.char_width_ratio
    }

    /// Get the line height.
    pub fn line_height(&self) -> f32 {
        self.size * self.line_height_ratio
    }
}

//! Configuration for the tick slider's appearance and behavior.
//!
//! Setters are chainable. The two settings with an invalid range, tick count
//! and thumb index, are checked at the setter and return a [`SliderError`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BAR_WIDTH, DEFAULT_MAX_LABEL, DEFAULT_MIN_LABEL, DEFAULT_TEXT_PADDING,
    DEFAULT_TEXT_SIZE, DEFAULT_THUMB_RADIUS, DEFAULT_TICK_COUNT, DEFAULT_TICK_HEIGHT,
    DEFAULT_WIDTH, MIN_TICK_COUNT, SNAP_DURATION,
};
use crate::{Color, Easing, SliderError};

/// Default thumb color, 0xff33b5e5.
fn default_thumb_color() -> Color {
    Color::from_argb(0xff33b5e5)
}

/// Texts drawn above the first and last tick. Empty strings are not drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeLabels {
    pub min: String,
    pub max: String,
}

impl Default for EdgeLabels {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LABEL, DEFAULT_MAX_LABEL)
    }
}

impl EdgeLabels {
    pub fn new(min: impl Into<String>, max: impl Into<String>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
        }
    }

    /// No labels at either end.
    pub fn none() -> Self {
        Self::new("", "")
    }
}

/// Configuration for the tick slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Number of ticks, at least 2
    tick_count: usize,
    /// Selected tick, always below `tick_count`
    thumb_index: usize,
    /// Height of each tick mark
    pub tick_height: f32,
    /// Stroke width of the bar and tick marks
    pub bar_width: f32,
    /// Color of the bar and tick marks
    pub bar_color: Color,
    /// Label font size
    pub text_size: f32,
    /// Label color
    pub text_color: Color,
    /// Gap between the top of a tick and its label baseline
    pub text_padding: f32,
    /// Edge label texts
    pub labels: EdgeLabels,
    /// Thumb radius
    pub thumb_radius: f32,
    /// Thumb color at rest
    pub thumb_color_normal: Color,
    /// Thumb color while held
    pub thumb_color_pressed: Color,
    /// Width requested when the host leaves width unconstrained
    pub default_width: f32,
    /// Whether releasing the thumb animates the snap to the nearest tick
    pub animate: bool,
    /// Length of the snap animation in milliseconds
    pub snap_duration_ms: u64,
    /// Timing curve of the snap animation
    pub easing: Easing,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            tick_count: DEFAULT_TICK_COUNT,
            thumb_index: 0,
            tick_height: DEFAULT_TICK_HEIGHT,
            bar_width: DEFAULT_BAR_WIDTH,
            bar_color: Color::LIGHT_GRAY,
            text_size: DEFAULT_TEXT_SIZE,
            text_color: Color::LIGHT_GRAY,
            text_padding: DEFAULT_TEXT_PADDING,
            labels: EdgeLabels::default(),
            thumb_radius: DEFAULT_THUMB_RADIUS,
            thumb_color_normal: default_thumb_color(),
            thumb_color_pressed: default_thumb_color(),
            default_width: DEFAULT_WIDTH,
            animate: true,
            snap_duration_ms: SNAP_DURATION.as_millis() as u64,
            easing: Easing::default(),
        }
    }
}

impl SliderConfig {
    /// Create a new slider configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ticks.
    pub fn ticks(&self) -> usize {
        self.tick_count
    }

    /// Selected tick index.
    pub fn index(&self) -> usize {
        self.thumb_index
    }

    /// Number of gaps between ticks.
    pub fn segments(&self) -> usize {
        self.tick_count.saturating_sub(1)
    }

    /// Snap animation length.
    pub fn snap_duration(&self) -> Duration {
        Duration::from_millis(self.snap_duration_ms)
    }

    /// Set the number of ticks.
    ///
    /// A selected index that no longer fits is moved to the last tick.
    pub fn tick_count(mut self, count: usize) -> Result<Self, SliderError> {
        if count < MIN_TICK_COUNT {
            log::error!("tick count {} less than {}", count, MIN_TICK_COUNT);
            return Err(SliderError::InvalidTickCount { count });
        }
        self.tick_count = count;
        if self.thumb_index >= count {
            log::warn!(
                "thumb index {} does not fit {} ticks, moving it to {}",
                self.thumb_index,
                count,
                count - 1
            );
            self.thumb_index = count - 1;
        }
        Ok(self)
    }

    /// Set the selected tick index, checked against the current tick count.
    pub fn thumb_index(mut self, index: usize) -> Result<Self, SliderError> {
        self.check_index(index)?;
        self.thumb_index = index;
        Ok(self)
    }

    /// Set the tick mark height.
    pub fn tick_height(mut self, height: f32) -> Self {
        self.tick_height = height;
        self
    }

    /// Set the bar stroke width.
    pub fn bar_width(mut self, width: f32) -> Self {
        self.bar_width = width;
        self
    }

    /// Set the bar color.
    pub fn bar_color(mut self, color: Color) -> Self {
        self.bar_color = color;
        self
    }

    /// Set the label font size.
    pub fn text_size(mut self, size: f32) -> Self {
        self.text_size = size;
        self
    }

    /// Set the label color.
    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Set the gap between tick and label.
    pub fn text_padding(mut self, padding: f32) -> Self {
        self.text_padding = padding;
        self
    }

    /// Set the edge label texts.
    pub fn labels(mut self, min: impl Into<String>, max: impl Into<String>) -> Self {
        self.labels = EdgeLabels::new(min, max);
        self
    }

    /// Draw no edge labels.
    pub fn without_labels(mut self) -> Self {
        self.labels = EdgeLabels::none();
        self
    }

    /// Set the thumb radius.
    pub fn thumb_radius(mut self, radius: f32) -> Self {
        self.thumb_radius = radius;
        self
    }

    /// Set the thumb color at rest.
    pub fn thumb_color_normal(mut self, color: Color) -> Self {
        self.thumb_color_normal = color;
        self
    }

    /// Set the thumb color while held.
    pub fn thumb_color_pressed(mut self, color: Color) -> Self {
        self.thumb_color_pressed = color;
        self
    }

    /// Set the width used when the host imposes none.
    pub fn default_width(mut self, width: f32) -> Self {
        self.default_width = width;
        self
    }

    /// Enable or disable the snap animation.
    pub fn with_animation(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    /// Set the snap animation length.
    pub fn with_snap_duration(mut self, duration: Duration) -> Self {
        self.snap_duration_ms = duration.as_millis() as u64;
        self
    }

    /// Set the snap animation timing curve.
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Check a configuration that did not come through the setters,
    /// e.g. one read from a file.
    pub fn validate(&self) -> Result<(), SliderError> {
        if self.tick_count < MIN_TICK_COUNT {
            return Err(SliderError::InvalidTickCount {
                count: self.tick_count,
            });
        }
        self.check_index(self.thumb_index)
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<(), SliderError> {
        if index >= self.tick_count {
            log::error!(
                "thumb index {} out of bounds for {} ticks",
                index,
                self.tick_count
            );
            return Err(SliderError::IndexOutOfRange {
                index,
                tick_count: self.tick_count,
            });
        }
        Ok(())
    }

    pub(crate) fn set_index_unchecked(&mut self, index: usize) {
        debug_assert!(index < self.tick_count);
        self.thumb_index = index;
    }
}

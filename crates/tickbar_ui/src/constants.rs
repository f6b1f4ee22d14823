//! Centralized constants for tickbar_ui
//!
//! Default values for the tick slider and the text measurement approximation
//! live here so widgets and tests agree on them.

use std::time::Duration;

// =============================================================================
// Typography
// =============================================================================

/// Default label font size
pub const DEFAULT_TEXT_SIZE: f32 = 16.0;

/// Approximate character width as a ratio of font size
/// Used for text measurement approximation
pub const CHAR_WIDTH_FACTOR: f32 = 0.6;

/// Line height as a ratio of font size
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;

// =============================================================================
// Track
// =============================================================================

/// Default number of ticks
pub const DEFAULT_TICK_COUNT: usize = 3;

/// Smallest tick count that still describes a track (two ends)
pub const MIN_TICK_COUNT: usize = 2;

/// Default height of a tick mark
pub const DEFAULT_TICK_HEIGHT: f32 = 24.0;

/// Default stroke width of the bar and tick marks
pub const DEFAULT_BAR_WIDTH: f32 = 3.0;

/// Default gap between a tick's top and its label baseline
pub const DEFAULT_TEXT_PADDING: f32 = 20.0;

/// Default label drawn at the first tick
pub const DEFAULT_MIN_LABEL: &str = "A-";

/// Default label drawn at the last tick
pub const DEFAULT_MAX_LABEL: &str = "A+";

// =============================================================================
// Thumb
// =============================================================================

/// Default thumb radius
pub const DEFAULT_THUMB_RADIUS: f32 = 20.0;

/// Thumbs smaller than this still get a touch zone of this half-size
pub const MIN_TOUCH_TOLERANCE: f32 = 50.0;

// =============================================================================
// Widget
// =============================================================================

/// Width requested when the host imposes no width constraint
pub const DEFAULT_WIDTH: f32 = 500.0;

/// Duration of the snap-to-tick animation
pub const SNAP_DURATION: Duration = Duration::from_millis(80);

/// Frame step used by hosts that drive animations at a fixed rate (~60 fps)
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tick_count_is_valid() {
        assert!(DEFAULT_TICK_COUNT >= MIN_TICK_COUNT);
    }

    #[test]
    fn test_snap_spans_several_frames() {
        assert!(SNAP_DURATION > FRAME_INTERVAL * 4);
    }
}

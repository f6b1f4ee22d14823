//! Error types for slider configuration.

use thiserror::Error;

/// Errors raised when a slider is configured with values it cannot represent.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderError {
    /// Fewer than two ticks were requested
    #[error("tick count {count} is less than 2")]
    InvalidTickCount {
        /// The rejected tick count
        count: usize,
    },

    /// A thumb index outside `0..tick_count` was requested
    #[error("thumb index {index} is out of bounds, expected 0..={max}", max = .tick_count.saturating_sub(1))]
    IndexOutOfRange {
        /// The rejected index
        index: usize,
        /// Tick count the index was checked against
        tick_count: usize,
    },
}

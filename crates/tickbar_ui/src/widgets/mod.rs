//! Widgets and their configuration.

mod config;
mod tick_slider;

pub use config::{EdgeLabels, SliderConfig};
pub use tick_slider::{
    tick_slider, IndexChanged, SliderId, SliderState, Thumb, TickSlider, Track,
};

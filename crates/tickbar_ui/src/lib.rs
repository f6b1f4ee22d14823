//! tickbar_ui - A discrete tick slider widget
//!
//! This crate provides a horizontal slider whose thumb snaps to evenly spaced
//! tick marks. The widget is independent of any windowing system: it measures
//! itself against [`MeasureSpec`]s, consumes [`Event`]s and draws into any
//! [`Canvas`]. The bundled [`Renderer`] records draw commands.

mod animation;
mod callback;
pub mod constants;
mod error;
mod event;
mod layout;
mod renderer;
mod text_metrics;
mod widget;
mod widgets;

pub use animation::{Easing, FrameClock, SnapAnimation};
pub use callback::Callback;
pub use error::SliderError;
pub use event::{Event, MouseButton, TouchPhase};
pub use layout::{MeasureSpec, Point, Size};
pub use renderer::{Canvas, Color, DrawCommand, Fill, Renderer, Stroke, TextStyle};
pub use text_metrics::TextMetrics;
pub use widget::Widget;

pub use widgets::{
    tick_slider, EdgeLabels, IndexChanged, SliderConfig, SliderId, SliderState, Thumb,
    TickSlider, Track,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::event::{Event, MouseButton};
    pub use crate::layout::{MeasureSpec, Point, Size};
    pub use crate::renderer::{Canvas, Color, DrawCommand, Renderer, TextStyle};
    pub use crate::widget::Widget;
    pub use crate::widgets::{tick_slider, IndexChanged, SliderConfig, SliderId, TickSlider};
    pub use crate::SliderError;
}

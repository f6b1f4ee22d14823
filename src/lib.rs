//! tickbar - font size picker demo
//!
//! Hosts a single [`tickbar_ui::TickSlider`] without a window: the
//! [`HeadlessHost`] lays it out, replays input and steps its snap animation,
//! and [`FontSizeApp`] turns the selected tick into a preview font size.

pub mod app;
pub mod config;
pub mod host;

pub use app::{FontSizeApp, Message};
pub use config::{AppConfig, ConfigError};
pub use host::{HeadlessHost, Pacing};

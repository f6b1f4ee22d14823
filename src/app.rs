//! Font size picker: one slider choosing the preview text size.

use tickbar_ui::prelude::*;

use crate::config::AppConfig;

/// ID of the font size slider.
pub const FONT_SIZE_SLIDER: SliderId = SliderId(1);

/// Messages that can be sent to update application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A slider settled on a different tick
    IndexChanged(IndexChanged),
}

/// The demo application state.
pub struct FontSizeApp {
    slider: TickSlider<Message>,
    font_sizes: Vec<f32>,
    font_size: f32,
    preview_text: String,
}

impl FontSizeApp {
    pub fn new(config: &AppConfig) -> Self {
        let slider = tick_slider(config.slider.clone())
            .id(FONT_SIZE_SLIDER)
            .on_index_change(Message::IndexChanged);
        let font_size = size_for(&config.font_sizes, config.slider.index());

        Self {
            slider,
            font_sizes: config.font_sizes.clone(),
            font_size,
            preview_text: "The quick brown fox".to_string(),
        }
    }

    pub fn title(&self) -> String {
        format!("Font size: {}", self.font_size)
    }

    /// Update the application state in response to a message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::IndexChanged(IndexChanged { id, index }) if id == FONT_SIZE_SLIDER => {
                self.font_size = size_for(&self.font_sizes, index);
                log::info!("Font size set to {} (tick {})", self.font_size, index);
            }
            Message::IndexChanged(change) => {
                log::warn!("Change from unknown slider {:?} ignored", change.id);
            }
        }
    }

    /// Draw the preview line above the slider.
    pub fn draw_preview(&self, canvas: &mut dyn Canvas) {
        let style = TextStyle::new(Color::WHITE, self.font_size);
        canvas.draw_text(&self.preview_text, Point::new(0.0, self.font_size), &style);
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn slider(&self) -> &TickSlider<Message> {
        &self.slider
    }

    pub fn slider_mut(&mut self) -> &mut TickSlider<Message> {
        &mut self.slider
    }
}

fn size_for(font_sizes: &[f32], index: usize) -> f32 {
    font_sizes
        .get(index)
        .copied()
        .unwrap_or(tickbar_ui::constants::DEFAULT_TEXT_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_font_size_follows_index() {
        let app = FontSizeApp::new(&AppConfig::default());
        assert_eq!(app.font_size(), 20.0);
        assert_eq!(app.slider().current_index(), 4);
        assert_eq!(app.title(), "Font size: 20");
    }

    #[test]
    fn test_update_sets_font_size() {
        let mut app = FontSizeApp::new(&AppConfig::default());
        app.update(Message::IndexChanged(IndexChanged {
            id: FONT_SIZE_SLIDER,
            index: 1,
        }));
        assert_eq!(app.font_size(), 14.0);
    }

    #[test]
    fn test_unknown_slider_ignored() {
        let mut app = FontSizeApp::new(&AppConfig::default());
        app.update(Message::IndexChanged(IndexChanged {
            id: SliderId(99),
            index: 0,
        }));
        assert_eq!(app.font_size(), 20.0);
    }

    #[test]
    fn test_preview_uses_font_size() {
        let app = FontSizeApp::new(&AppConfig::default());
        let mut renderer = Renderer::new();
        app.draw_preview(&mut renderer);
        match renderer.commands() {
            [DrawCommand::Text { style, .. }] => assert_eq!(style.size, 20.0),
            other => panic!("expected one text command, got {other:?}"),
        }
    }
}

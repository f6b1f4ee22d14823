//! A windowless host that drives the demo app.
//!
//! It does what a platform surface would: measures and lays out the slider,
//! delivers input, steps the snap animation frame by frame and collects the
//! draw commands of the latest frame.

use std::time::Duration;

use tickbar_ui::constants::FRAME_INTERVAL;
use tickbar_ui::prelude::*;
use tickbar_ui::FrameClock;

use crate::app::FontSizeApp;

/// Upper bound on frames stepped for one settle, in case a snap never ends.
const MAX_FRAMES: usize = 600;

/// How frame deltas are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Every frame advances by exactly [`FRAME_INTERVAL`]
    Fixed,
    /// Sleep one frame interval and measure the real elapsed time
    Realtime,
}

pub struct HeadlessHost {
    app: FontSizeApp,
    renderer: Renderer,
    clock: FrameClock,
    pacing: Pacing,
    width: f32,
    frames: usize,
}

impl HeadlessHost {
    pub fn new(app: FontSizeApp, width: f32) -> Self {
        let mut host = Self {
            app,
            renderer: Renderer::new(),
            clock: FrameClock::new(),
            pacing: Pacing::Fixed,
            width,
            frames: 0,
        };
        host.layout();
        host.redraw();
        host
    }

    pub fn pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn app(&self) -> &FontSizeApp {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut FontSizeApp {
        &mut self.app
    }

    /// Draw commands of the last rendered frame.
    pub fn commands(&self) -> &[DrawCommand] {
        self.renderer.commands()
    }

    /// Frames rendered so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Measure the slider at the surface width and give it the size it asks for.
    pub fn layout(&mut self) {
        let slider = self.app.slider_mut();
        let size = slider.measure(MeasureSpec::Exactly(self.width), MeasureSpec::Unspecified);
        log::debug!("Laying out slider at {}x{}", size.width, size.height);
        slider.resize(size);
    }

    /// Deliver one input event, then settle whatever it started.
    pub fn dispatch(&mut self, event: &Event) {
        if let Some(message) = self.app.slider_mut().on_event(event) {
            self.app.update(message);
        }
        if self.app.slider_mut().take_layout_request() {
            self.layout();
        }
        self.redraw();
        self.settle();
    }

    /// Press at `from`, move in `steps` even increments to `to`, release there.
    pub fn drag(&mut self, from: Point, to: Point, steps: usize) {
        self.dispatch(&Event::down(from.x, from.y));
        let steps = steps.max(1);
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            let x = from.x + (to.x - from.x) * t;
            let y = from.y + (to.y - from.y) * t;
            self.dispatch(&Event::moved(x, y));
        }
        self.dispatch(&Event::up(to.x, to.y));
    }

    /// Drag the thumb from where it rests to `x`.
    pub fn drag_thumb_to(&mut self, x: f32, steps: usize) {
        let Some(thumb) = self.app.slider().thumb() else {
            log::warn!("Slider not laid out, drag ignored");
            return;
        };
        let from = Point::new(thumb.x(), thumb.y());
        self.drag(from, Point::new(x, from.y), steps);
    }

    /// Step the snap animation until it finishes. Returns frames stepped.
    pub fn settle(&mut self) -> usize {
        if !self.app.slider().is_animating() {
            return 0;
        }
        self.clock.reset();
        self.clock.tick();

        let mut stepped = 0;
        while self.app.slider().is_animating() && stepped < MAX_FRAMES {
            let dt = self.next_delta();
            self.app.slider_mut().advance(dt);
            self.redraw();
            stepped += 1;
        }
        if stepped == MAX_FRAMES {
            log::warn!("Snap still running after {} frames", MAX_FRAMES);
        }
        log::trace!("Settled after {} frames", stepped);
        stepped
    }

    fn next_delta(&mut self) -> Duration {
        match self.pacing {
            Pacing::Fixed => FRAME_INTERVAL,
            Pacing::Realtime => {
                std::thread::sleep(FRAME_INTERVAL);
                self.clock.tick()
            }
        }
    }

    /// Render a frame if the slider asked for one.
    fn redraw(&mut self) {
        if !self.app.slider_mut().take_redraw_request() {
            return;
        }
        self.renderer.clear();
        self.app.draw_preview(&mut self.renderer);
        self.app.slider().draw(&mut self.renderer);
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn host(config: &AppConfig) -> HeadlessHost {
        HeadlessHost::new(FontSizeApp::new(config), config.surface_width)
    }

    #[test]
    fn test_initial_frame() {
        let host = host(&AppConfig::default());
        assert_eq!(host.frames(), 1);
        // preview, bar, 6 ticks, 2 labels, thumb
        assert_eq!(host.commands().len(), 11);
        assert_eq!(host.app().slider().thumb_x(), Some(382.0));
    }

    #[test]
    fn test_layout_uses_measured_height() {
        let host = host(&AppConfig::default());
        // 20 * 1.2 + 20 + 2 * 30 = 104, thumb rests one radius above the bottom
        assert_eq!(host.app().slider().thumb().map(|t| t.y()), Some(74.0));
    }

    #[test]
    fn test_drag_changes_font_size() {
        let mut host = host(&AppConfig::default());
        host.drag_thumb_to(100.0, 5);
        assert_eq!(host.app().slider().current_index(), 1);
        assert_eq!(host.app().font_size(), 14.0);
        assert_eq!(host.app().slider().thumb_x(), Some(118.0));
    }

    #[test]
    fn test_animated_drag_settles() {
        let mut config = AppConfig::default();
        config.slider = config.slider.with_animation(true);
        let mut host = host(&config);
        let before = host.frames();

        host.drag_thumb_to(330.0, 3);
        assert_eq!(host.app().slider().current_index(), 3);
        assert_eq!(host.app().font_size(), 18.0);
        assert!(!host.app().slider().is_animating());
        assert_eq!(host.app().slider().thumb_x(), Some(294.0));
        // press, 3 moves, release, 5 snap frames
        assert_eq!(host.frames() - before, 10);
    }

    #[test]
    fn test_tap_off_thumb_changes_nothing() {
        let mut host = host(&AppConfig::default());
        host.dispatch(&Event::down(100.0, 74.0));
        host.dispatch(&Event::up(100.0, 74.0));
        assert_eq!(host.app().slider().current_index(), 4);
        assert_eq!(host.app().font_size(), 20.0);
    }

    #[test]
    fn test_settle_without_animation_is_noop() {
        let mut host = host(&AppConfig::default());
        assert_eq!(host.settle(), 0);
    }
}

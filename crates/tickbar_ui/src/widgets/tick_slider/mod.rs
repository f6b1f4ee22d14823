//! A slider whose thumb snaps to one of a fixed number of evenly spaced ticks.
//!
//! The controller owns the configuration, the [`Track`] and the [`Thumb`]. It
//! is a plain state machine: the host feeds it sizes, events and frame deltas,
//! and reads back draw commands, redraw requests and index-change messages.

mod thumb;
mod track;


use std::time::Duration;

pub use thumb::Thumb;
pub use track::Track;

use crate::widgets::config::SliderConfig;
use crate::{
    Callback, Canvas, Event, MeasureSpec, Point, Size, SliderError, SnapAnimation, TextMetrics,
    TouchPhase, Widget,
};

/// Identifies which slider produced a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SliderId(pub u32);

/// Reported when the user moves the selection to a different tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexChanged {
    /// The slider that changed
    pub id: SliderId,
    /// The newly committed tick index
    pub index: usize,
}

/// Observable interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderState {
    /// Thumb at rest on its tick
    Idle,
    /// Thumb held by a touch
    Pressed,
    /// Thumb gliding to its tick after release
    Animating,
}

#[derive(Debug, Clone, Copy)]
enum Interaction {
    Idle,
    Pressed,
    Animating(SnapAnimation),
}

/// A horizontal slider with discrete positions.
pub struct TickSlider<M> {
    id: SliderId,
    config: SliderConfig,
    size: Option<Size>,
    track: Option<Track>,
    thumb: Option<Thumb>,
    interaction: Interaction,
    visible: bool,
    enabled: bool,
    needs_redraw: bool,
    needs_layout: bool,
    on_index_change: Callback<IndexChanged, M>,
}

impl<M> TickSlider<M> {
    /// Create a slider. Nothing is laid out until the host calls [`Widget::resize`].
    pub fn new(config: SliderConfig) -> Self {
        Self {
            id: SliderId::default(),
            config,
            size: None,
            track: None,
            thumb: None,
            interaction: Interaction::Idle,
            visible: true,
            enabled: true,
            needs_redraw: false,
            needs_layout: false,
            on_index_change: Callback::none(),
        }
    }

    /// Set the slider ID reported in [`IndexChanged`].
    pub fn id(mut self, id: SliderId) -> Self {
        self.id = id;
        self
    }

    /// Set the callback fired when a drag ends on a different tick.
    pub fn on_index_change<F>(mut self, f: F) -> Self
    where
        F: Fn(IndexChanged) -> M + 'static,
    {
        self.on_index_change = Callback::new(f);
        self
    }

    pub fn slider_id(&self) -> SliderId {
        self.id
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Replace the configuration. Takes effect on [`TickSlider::apply`].
    pub fn set_config(&mut self, config: SliderConfig) -> Result<&mut Self, SliderError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Select a tick programmatically. Takes effect on [`TickSlider::apply`].
    ///
    /// Does not notify the index-change callback.
    pub fn set_thumb_index(&mut self, index: usize) -> Result<&mut Self, SliderError> {
        self.config.check_index(index)?;
        self.config.set_index_unchecked(index);
        Ok(self)
    }

    /// Rebuild the layout from the current configuration and ask the host to
    /// measure and draw again.
    pub fn apply(&mut self) {
        log::debug!(
            "Applying slider {:?}: {} ticks, index {}",
            self.id,
            self.config.ticks(),
            self.config.index()
        );
        self.rebuild_layout();
        self.needs_layout = true;
        self.needs_redraw = true;
    }

    /// The committed tick index.
    pub fn current_index(&self) -> usize {
        self.config.index()
    }

    pub fn state(&self) -> SliderState {
        match self.interaction {
            Interaction::Idle => SliderState::Idle,
            Interaction::Pressed => SliderState::Pressed,
            Interaction::Animating(_) => SliderState::Animating,
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.interaction, Interaction::Animating(_))
    }

    /// Thumb position, once laid out.
    pub fn thumb_x(&self) -> Option<f32> {
        self.thumb.as_ref().map(Thumb::x)
    }

    pub fn track(&self) -> Option<&Track> {
        self.track.as_ref()
    }

    pub fn thumb(&self) -> Option<&Thumb> {
        self.thumb.as_ref()
    }

    /// Returns whether a redraw was requested since the last call, and clears it.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Returns whether a re-measure was requested since the last call, and clears it.
    pub fn take_layout_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_layout)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// A disabled slider ignores input but still draws.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the slider.
    ///
    /// Hiding cancels a running snap where it stands, drops any grab and
    /// releases paints. Showing again restores paints and puts the thumb back
    /// on the committed tick.
    pub fn set_visible(&mut self, visible: bool) {
        if visible == self.visible {
            return;
        }
        self.visible = visible;

        if visible {
            if let Some(track) = self.track.as_mut() {
                track.restore_paints(&self.config);
            }
            if let Some(thumb) = self.thumb.as_mut() {
                thumb.restore_paints();
            }
            self.snap_to_index();
            self.needs_redraw = true;
        } else {
            self.cancel_animation();
            if let Some(thumb) = self.thumb.as_mut() {
                thumb.release();
            }
            self.interaction = Interaction::Idle;
            self.release_paints();
        }
    }

    /// The slider was removed from its surface. Cancels any snap and drops the
    /// track and thumb; the selected index is kept.
    pub fn detach(&mut self) {
        self.cancel_animation();
        self.release_paints();
        self.track = None;
        self.thumb = None;
        self.size = None;
        self.interaction = Interaction::Idle;
        log::debug!("Slider {:?} detached", self.id);
    }

    /// Advance a running snap animation by one frame.
    ///
    /// Returns true if the thumb moved and a redraw was requested.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let Interaction::Animating(animation) = &mut self.interaction else {
            return false;
        };
        let x = animation.advance(dt);
        let finished = animation.is_finished();

        if let Some(thumb) = self.thumb.as_mut() {
            thumb.set_x(x);
        }
        self.needs_redraw = true;

        if finished {
            log::trace!("Snap finished at x={}", x);
            self.interaction = Interaction::Idle;
        }
        true
    }

    fn min_height(&self) -> f32 {
        let font_height = TextMetrics::new(self.config.text_size).line_height();
        (font_height + self.config.text_padding + self.config.thumb_radius * 2.0).floor()
    }

    /// Discard the track and thumb and build new ones for the current size.
    fn rebuild_layout(&mut self) {
        self.cancel_animation();
        self.interaction = Interaction::Idle;
        self.track = None;
        self.thumb = None;

        let Some(size) = self.size else {
            log::trace!("Slider {:?} has no size yet, layout deferred", self.id);
            return;
        };

        let radius = self.config.thumb_radius;
        let origin = Point::new(radius, size.height - radius);
        let length = size.width - 2.0 * radius;
        if length <= 0.0 {
            log::warn!(
                "Slider {:?} is {}px wide, too narrow for a {}px thumb",
                self.id,
                size.width,
                radius
            );
            return;
        }

        let track = match Track::new(origin, length, &self.config) {
            Ok(track) => track,
            Err(e) => {
                log::error!("Cannot lay out slider {:?}: {}", self.id, e);
                return;
            }
        };
        let thumb = Thumb::new(
            track.tick_coordinate(self.config.index()),
            origin.y,
            self.config.thumb_color_normal,
            self.config.thumb_color_pressed,
            radius,
        );
        self.track = Some(track);
        self.thumb = Some(thumb);

        if !self.visible {
            self.release_paints();
        }
        self.needs_redraw = true;
    }

    fn release_paints(&mut self) {
        if let Some(track) = self.track.as_mut() {
            track.dispose();
        }
        if let Some(thumb) = self.thumb.as_mut() {
            thumb.dispose();
        }
    }

    fn snap_to_index(&mut self) {
        if let (Some(track), Some(thumb)) = (self.track.as_ref(), self.thumb.as_mut()) {
            thumb.set_x(track.tick_coordinate(self.config.index()));
        }
    }

    /// Start gliding the thumb from `from` to `to`, replacing any running snap.
    fn start_snap(&mut self, from: f32, to: f32) {
        self.cancel_animation();
        let animation = SnapAnimation::new(from, to, self.config.snap_duration())
            .with_easing(self.config.easing);
        log::trace!("Snapping from x={} to x={}", from, to);
        self.interaction = Interaction::Animating(animation);
    }

    /// Stop a running snap, leaving the thumb where it is.
    fn cancel_animation(&mut self) {
        if let Interaction::Animating(animation) = self.interaction {
            log::debug!(
                "Cancelling snap to x={} at {:.0}%",
                animation.target(),
                animation.progress() * 100.0
            );
            self.interaction = Interaction::Idle;
        }
    }

    fn handle_down(&mut self, position: Point) {
        let Some(thumb) = self.thumb.as_mut() else {
            return;
        };
        if !thumb.is_pressed() && thumb.is_in_touch_zone(position.x, position.y) {
            thumb.press();
            self.interaction = Interaction::Pressed;
            self.needs_redraw = true;
            log::debug!("Slider {:?} thumb pressed at x={}", self.id, position.x);
        }
    }

    fn handle_move(&mut self, x: f32) {
        let (Some(track), Some(thumb)) = (self.track.as_ref(), self.thumb.as_mut()) else {
            return;
        };
        if !thumb.is_pressed() {
            return;
        }
        if track.contains_x(x) {
            thumb.set_x(x);
            self.needs_redraw = true;
        } else {
            log::trace!(
                "Drag to x={} outside [{}, {}] dropped",
                x,
                track.left_x(),
                track.right_x()
            );
        }
    }

    fn handle_release(&mut self) -> Option<M> {
        let (track, thumb) = (self.track.as_ref()?, self.thumb.as_ref()?);
        if !thumb.is_pressed() {
            return None;
        }

        let start = thumb.x();
        let index = track.nearest_tick_index(start);
        let end = track.tick_coordinate(index);
        debug_assert!(index < self.config.ticks());

        let mut message = None;
        if index != self.config.index() {
            log::debug!(
                "Slider {:?} index {} -> {}",
                self.id,
                self.config.index(),
                index
            );
            self.config.set_index_unchecked(index);
            message = self.on_index_change.call(IndexChanged { id: self.id, index });
        }

        if self.config.animate {
            self.start_snap(start, end);
        } else {
            if let Some(thumb) = self.thumb.as_mut() {
                thumb.set_x(end);
            }
            self.interaction = Interaction::Idle;
        }
        self.needs_redraw = true;

        if let Some(thumb) = self.thumb.as_mut() {
            thumb.release();
        }
        message
    }
}

impl<M> Widget<M> for TickSlider<M> {
    fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Size {
        Size::new(
            width.resolve_filling(self.config.default_width),
            height.resolve_wrapping(self.min_height()),
        )
    }

    fn resize(&mut self, size: Size) {
        log::debug!("Slider {:?} resized to {}x{}", self.id, size.width, size.height);
        self.size = Some(size);
        self.rebuild_layout();
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        if !self.visible {
            return;
        }
        if let Some(track) = self.track.as_ref() {
            track.draw(canvas);
        }
        if let Some(thumb) = self.thumb.as_ref() {
            thumb.draw(canvas);
        }
    }

    fn on_event(&mut self, event: &Event) -> Option<M> {
        let (phase, position) = event.touch_phase()?;

        if !self.enabled || !self.visible {
            log::trace!("Slider {:?} inactive, ignoring {:?}", self.id, phase);
            return None;
        }
        if self.is_animating() {
            log::trace!("Slider {:?} snapping, ignoring {:?}", self.id, phase);
            return None;
        }

        match phase {
            TouchPhase::Down => {
                self.handle_down(position);
                None
            }
            TouchPhase::Move => {
                self.handle_move(position.x);
                None
            }
            TouchPhase::Up | TouchPhase::Cancel => self.handle_release(),
        }
    }
}

/// Helper function to create a tick slider.
pub fn tick_slider<M>(config: SliderConfig) -> TickSlider<M> {
    TickSlider::new(config)
}

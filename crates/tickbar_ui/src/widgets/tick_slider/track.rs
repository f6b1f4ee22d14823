//! The bar, its tick marks and the edge labels.

use crate::constants::MIN_TICK_COUNT;
use crate::widgets::config::{EdgeLabels, SliderConfig};
use crate::{Canvas, Point, SliderError, Stroke, TextStyle};

/// Paint descriptors derived from configuration. Dropped on dispose.
#[derive(Debug, Clone, Copy)]
struct TrackPaints {
    bar: Stroke,
    text: TextStyle,
}

/// Geometry and rendering of the horizontal bar with evenly spaced ticks.
#[derive(Debug, Clone)]
pub struct Track {
    left_x: f32,
    right_x: f32,
    y: f32,
    segments: usize,
    tick_distance: f32,
    tick_start_y: f32,
    tick_end_y: f32,
    text_padding: f32,
    labels: EdgeLabels,
    paints: Option<TrackPaints>,
}

impl Track {
    /// Lay out a track starting at `origin` and spanning `width` pixels.
    pub fn new(origin: Point, width: f32, config: &SliderConfig) -> Result<Self, SliderError> {
        let tick_count = config.ticks();
        if tick_count < MIN_TICK_COUNT {
            return Err(SliderError::InvalidTickCount { count: tick_count });
        }

        let segments = tick_count - 1;
        let half_tick = config.tick_height / 2.0;

        Ok(Self {
            left_x: origin.x,
            right_x: origin.x + width,
            y: origin.y,
            segments,
            tick_distance: width / segments as f32,
            tick_start_y: origin.y - half_tick,
            tick_end_y: origin.y + half_tick,
            text_padding: config.text_padding,
            labels: config.labels.clone(),
            paints: Some(Self::paints_for(config)),
        })
    }

    fn paints_for(config: &SliderConfig) -> TrackPaints {
        TrackPaints {
            bar: Stroke::new(config.bar_color, config.bar_width),
            text: TextStyle::new(config.text_color, config.text_size),
        }
    }

    /// Leftmost legal thumb position.
    pub fn left_x(&self) -> f32 {
        self.left_x
    }

    /// Rightmost legal thumb position.
    pub fn right_x(&self) -> f32 {
        self.right_x
    }

    /// Baseline the bar is drawn on.
    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn segments(&self) -> usize {
        self.segments
    }

    /// Horizontal distance between neighbouring ticks.
    pub fn tick_distance(&self) -> f32 {
        self.tick_distance
    }

    /// Whether `x` lies within the drag bounds, inclusive.
    pub fn contains_x(&self, x: f32) -> bool {
        x >= self.left_x && x <= self.right_x
    }

    /// Index of the tick closest to `x`.
    ///
    /// A position exactly halfway between two ticks resolves to the lower one.
    /// Positions left of the track yield 0; positions right of it are not
    /// clamped, so callers keep `x` within half a tick of the track.
    pub fn nearest_tick_index(&self, x: f32) -> usize {
        let ticks = (x - self.left_x) / self.tick_distance;
        (ticks - 0.5).ceil().max(0.0) as usize
    }

    /// Position of the tick closest to `x`.
    pub fn nearest_tick_coordinate(&self, x: f32) -> f32 {
        self.tick_coordinate(self.nearest_tick_index(x))
    }

    /// Position of tick `index`.
    pub fn tick_coordinate(&self, index: usize) -> f32 {
        self.left_x + index as f32 * self.tick_distance
    }

    /// Draw the bar, then each tick with its label.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let Some(paints) = self.paints.as_ref() else {
            log::warn!("Track drawn after dispose, skipping");
            return;
        };

        canvas.draw_line(
            Point::new(self.left_x, self.y),
            Point::new(self.right_x, self.y),
            &paints.bar,
        );

        for i in 0..=self.segments {
            let x = self.tick_coordinate(i);
            canvas.draw_line(
                Point::new(x, self.tick_start_y),
                Point::new(x, self.tick_end_y),
                &paints.bar,
            );

            let label = if i == 0 {
                self.labels.min.as_str()
            } else if i == self.segments {
                self.labels.max.as_str()
            } else {
                ""
            };
            if !label.is_empty() {
                let width = canvas.measure_text(label, &paints.text);
                canvas.draw_text(
                    label,
                    Point::new(x - width / 2.0, self.tick_start_y - self.text_padding),
                    &paints.text,
                );
            }
        }
    }

    /// Recreate paint descriptors after a dispose.
    pub(crate) fn restore_paints(&mut self, config: &SliderConfig) {
        self.paints = Some(Self::paints_for(config));
    }

    /// Release paint descriptors. Geometry stays queryable.
    pub fn dispose(&mut self) {
        self.paints = None;
    }

    pub fn is_disposed(&self) -> bool {
        self.paints.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, DrawCommand, Renderer};

    /// tickCount 6 over a 500px widget with a 30px thumb: left 30, distance 88.
    fn six_tick_track() -> Track {
        let config = SliderConfig::new().tick_count(6).unwrap().thumb_radius(30.0);
        Track::new(Point::new(30.0, 100.0), 440.0, &config).unwrap()
    }

    #[test]
    fn test_geometry() {
        let track = six_tick_track();
        assert_eq!(track.left_x(), 30.0);
        assert_eq!(track.right_x(), 470.0);
        assert_eq!(track.segments(), 5);
        assert!((track.tick_distance() - 88.0).abs() < 0.001);
        assert!((track.tick_coordinate(4) - 382.0).abs() < 0.001);
    }

    #[test]
    fn test_nearest_index_in_range() {
        for tick_count in 2..=12 {
            let config = SliderConfig::new().tick_count(tick_count).unwrap();
            let track = Track::new(Point::new(20.0, 50.0), 457.0, &config).unwrap();
            let mut x = track.left_x();
            while x <= track.right_x() {
                let index = track.nearest_tick_index(x);
                assert!(index < tick_count, "x={x} gave {index} for {tick_count} ticks");
                x += 0.75;
            }
            assert_eq!(track.nearest_tick_index(track.right_x()), tick_count - 1);
        }
    }

    #[test]
    fn test_round_trip_every_tick() {
        let track = six_tick_track();
        for i in 0..=track.segments() {
            assert_eq!(track.nearest_tick_index(track.tick_coordinate(i)), i);
        }
    }

    #[test]
    fn test_snapping_is_idempotent() {
        let track = six_tick_track();
        for x in [31.0, 100.0, 250.0, 350.0, 469.0] {
            let index = track.nearest_tick_index(x);
            let snapped = track.nearest_tick_coordinate(x);
            assert_eq!(track.nearest_tick_index(snapped), index);
            assert_eq!(track.nearest_tick_coordinate(snapped), snapped);
        }
    }

    #[test]
    fn test_midpoint_resolves_to_lower_tick() {
        let track = six_tick_track();
        // Midpoints between ticks at 30, 118, 206, 294, 382, 470
        for (i, mid) in [74.0, 162.0, 250.0, 338.0, 426.0].into_iter().enumerate() {
            assert_eq!(track.nearest_tick_index(mid), i);
            assert_eq!(track.nearest_tick_index(mid + 0.01), i + 1);
        }
    }

    #[test]
    fn test_nearest_index_scenario() {
        let track = six_tick_track();
        assert_eq!(track.nearest_tick_index(350.0), 4);
        assert!((track.nearest_tick_coordinate(350.0) - 382.0).abs() < 0.001);
    }

    #[test]
    fn test_left_of_track_saturates() {
        let track = six_tick_track();
        assert_eq!(track.nearest_tick_index(0.0), 0);
        assert_eq!(track.nearest_tick_index(-500.0), 0);
    }

    #[test]
    fn test_rejects_single_tick() {
        let config: SliderConfig = serde_json::from_str(r#"{ "tick_count": 1 }"#).unwrap();
        let err = Track::new(Point::zero(), 100.0, &config).unwrap_err();
        assert_eq!(err, SliderError::InvalidTickCount { count: 1 });
    }

    #[test]
    fn test_draw_sequence() {
        let config = SliderConfig::new()
            .tick_count(3)
            .unwrap()
            .tick_height(20.0)
            .text_size(10.0)
            .text_padding(5.0)
            .bar_color(Color::MAGENTA)
            .labels("lo", "hi");
        let track = Track::new(Point::new(10.0, 50.0), 200.0, &config).unwrap();
        let mut renderer = Renderer::new();
        track.draw(&mut renderer);
        let commands = renderer.commands();

        // bar + 3 ticks + 2 labels
        assert_eq!(commands.len(), 6);
        match &commands[0] {
            DrawCommand::Line { from, to, stroke } => {
                assert_eq!(*from, Point::new(10.0, 50.0));
                assert_eq!(*to, Point::new(210.0, 50.0));
                assert_eq!(stroke.color, Color::MAGENTA);
            }
            other => panic!("expected bar line, got {other:?}"),
        }
        match &commands[1] {
            DrawCommand::Line { from, to, .. } => {
                assert_eq!(*from, Point::new(10.0, 40.0));
                assert_eq!(*to, Point::new(10.0, 60.0));
            }
            other => panic!("expected tick, got {other:?}"),
        }
        match &commands[2] {
            DrawCommand::Text { text, position, .. } => {
                assert_eq!(text, "lo");
                // "lo" is 2 * 10 * 0.6 = 12 wide
                assert!((position.x - 4.0).abs() < 0.001);
                assert!((position.y - 35.0).abs() < 0.001);
            }
            other => panic!("expected min label, got {other:?}"),
        }
        // Middle tick has no label
        assert!(matches!(commands[3], DrawCommand::Line { .. }));
        assert!(matches!(commands[4], DrawCommand::Line { .. }));
        match &commands[5] {
            DrawCommand::Text { text, position, .. } => {
                assert_eq!(text, "hi");
                assert!((position.x - 204.0).abs() < 0.001);
            }
            other => panic!("expected max label, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_labels_not_drawn() {
        let config = SliderConfig::new().tick_count(4).unwrap().without_labels();
        let track = Track::new(Point::new(0.0, 10.0), 90.0, &config).unwrap();
        let mut renderer = Renderer::new();
        track.draw(&mut renderer);
        assert_eq!(renderer.commands().len(), 5);
        assert!(renderer
            .commands()
            .iter()
            .all(|c| matches!(c, DrawCommand::Line { .. })));
    }

    #[test]
    fn test_disposed_track_draws_nothing() {
        let mut track = six_tick_track();
        track.dispose();
        assert!(track.is_disposed());
        let mut renderer = Renderer::new();
        track.draw(&mut renderer);
        assert!(renderer.commands().is_empty());
        // Geometry still answers queries
        assert_eq!(track.nearest_tick_index(382.0), 4);
    }
}

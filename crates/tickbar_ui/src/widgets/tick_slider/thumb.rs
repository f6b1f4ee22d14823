//! The draggable circle.

use crate::constants::MIN_TOUCH_TOLERANCE;
use crate::{Canvas, Color, Fill, Point};

#[derive(Debug, Clone, Copy)]
struct ThumbPaints {
    normal: Fill,
    pressed: Fill,
}

/// The thumb owns its continuous x position and pressed state.
///
/// It performs no clamping; the controller keeps `x` within the track.
#[derive(Debug, Clone)]
pub struct Thumb {
    x: f32,
    y: f32,
    radius: f32,
    touch_tolerance: f32,
    pressed: bool,
    color_normal: Color,
    color_pressed: Color,
    paints: Option<ThumbPaints>,
}

impl Thumb {
    pub fn new(x: f32, y: f32, color_normal: Color, color_pressed: Color, radius: f32) -> Self {
        Self {
            x,
            y,
            radius,
            touch_tolerance: radius.max(MIN_TOUCH_TOLERANCE),
            pressed: false,
            color_normal,
            color_pressed,
            paints: Some(ThumbPaints {
                normal: Fill::new(color_normal),
                pressed: Fill::new(color_pressed),
            }),
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn set_x(&mut self, x: f32) {
        self.x = x;
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Half-size of the square hit zone around the center.
    pub fn touch_tolerance(&self) -> f32 {
        self.touch_tolerance
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn press(&mut self) {
        self.pressed = true;
    }

    pub fn release(&mut self) {
        self.pressed = false;
    }

    /// Whether a touch at (x, y) should grab the thumb.
    pub fn is_in_touch_zone(&self, x: f32, y: f32) -> bool {
        (x - self.x).abs() <= self.touch_tolerance && (y - self.y).abs() <= self.touch_tolerance
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let Some(paints) = self.paints.as_ref() else {
            log::warn!("Thumb drawn after dispose, skipping");
            return;
        };
        let fill = if self.pressed {
            &paints.pressed
        } else {
            &paints.normal
        };
        canvas.fill_circle(Point::new(self.x, self.y), self.radius, fill);
    }

    pub(crate) fn restore_paints(&mut self) {
        self.paints = Some(ThumbPaints {
            normal: Fill::new(self.color_normal),
            pressed: Fill::new(self.color_pressed),
        });
    }

    /// Release paint descriptors. Position and state are kept.
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
    use crate::{DrawCommand, Renderer};

    #[test]
    fn test_touch_tolerance_minimum() {
        let small = Thumb::new(0.0, 0.0, Color::WHITE, Color::BLACK, 20.0);
        assert_eq!(small.touch_tolerance(), 50.0);

        let large = Thumb::new(0.0, 0.0, Color::WHITE, Color::BLACK, 80.0);
        assert_eq!(large.touch_tolerance(), 80.0);
    }

    #[test]
    fn test_touch_zone_is_square() {
        let thumb = Thumb::new(100.0, 100.0, Color::WHITE, Color::BLACK, 20.0);
        assert!(thumb.is_in_touch_zone(100.0, 100.0));
        assert!(thumb.is_in_touch_zone(150.0, 50.0));
        // Corner of the square lies outside a circle of the same size
        assert!(thumb.is_in_touch_zone(149.0, 149.0));
        assert!(!thumb.is_in_touch_zone(150.5, 100.0));
        assert!(!thumb.is_in_touch_zone(100.0, 49.0));
    }

    #[test]
    fn test_press_release() {
        let mut thumb = Thumb::new(0.0, 0.0, Color::WHITE, Color::BLACK, 20.0);
        assert!(!thumb.is_pressed());
        thumb.press();
        assert!(thumb.is_pressed());
        thumb.release();
        assert!(!thumb.is_pressed());
    }

    #[test]
    fn test_set_x_does_not_clamp() {
        let mut thumb = Thumb::new(0.0, 0.0, Color::WHITE, Color::BLACK, 20.0);
        thumb.set_x(-40.0);
        assert_eq!(thumb.x(), -40.0);
    }

    #[test]
    fn test_draw_color_follows_state() {
        let mut thumb = Thumb::new(30.0, 70.0, Color::CYAN, Color::GREEN, 30.0);
        let mut renderer = Renderer::new();

        thumb.draw(&mut renderer);
        thumb.press();
        thumb.draw(&mut renderer);

        let colors: Vec<Color> = renderer
            .commands()
            .iter()
            .map(|c| match c {
                DrawCommand::Circle {
                    center,
                    radius,
                    fill,
                } => {
                    assert_eq!(*center, Point::new(30.0, 70.0));
                    assert_eq!(*radius, 30.0);
                    fill.color
                }
                other => panic!("expected circle, got {other:?}"),
            })
            .collect();
        assert_eq!(colors, vec![Color::CYAN, Color::GREEN]);
    }

    #[test]
    fn test_dispose_and_restore() {
        let mut thumb = Thumb::new(30.0, 70.0, Color::CYAN, Color::GREEN, 30.0);
        thumb.dispose();
        let mut renderer = Renderer::new();
        thumb.draw(&mut renderer);
        assert!(renderer.commands().is_empty());

        thumb.restore_paints();
        thumb.draw(&mut renderer);
        assert_eq!(renderer.commands().len(), 1);
    }
}

use crate::Point;

/// Events that widgets can respond to.
///
/// Positions are in the widget's local coordinate space.
#[derive(Debug, Clone)]
pub enum Event {
    /// Finger touched down.
    TouchDown { position: Point },
    /// Finger moved while down. May repeat.
    TouchMove { position: Point },
    /// Finger lifted.
    TouchUp { position: Point },
    /// The gesture was taken away by the host.
    TouchCancel { position: Point },
    /// Mouse button pressed.
    MousePressed {
        button: MouseButton,
        position: Point,
    },
    /// Mouse button released.
    MouseReleased {
        button: MouseButton,
        position: Point,
    },
    /// Mouse moved.
    MouseMoved { position: Point },
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// The phase of a pointer gesture, independent of the input device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Down,
    Move,
    Up,
    Cancel,
}

impl Event {
    /// Shorthand for a touch-down event.
    pub fn down(x: f32, y: f32) -> Self {
        Event::TouchDown {
            position: Point::new(x, y),
        }
    }

    /// Shorthand for a touch-move event.
    pub fn moved(x: f32, y: f32) -> Self {
        Event::TouchMove {
            position: Point::new(x, y),
        }
    }

    /// Shorthand for a touch-up event.
    pub fn up(x: f32, y: f32) -> Self {
        Event::TouchUp {
            position: Point::new(x, y),
        }
    }

    /// Shorthand for a touch-cancel event.
    pub fn cancel(x: f32, y: f32) -> Self {
        Event::TouchCancel {
            position: Point::new(x, y),
        }
    }

    /// Normalize this event into a gesture phase and position.
    ///
    /// The left mouse button behaves like a finger. Other buttons produce `None`.
    pub fn touch_phase(&self) -> Option<(TouchPhase, Point)> {
        match *self {
            Event::TouchDown { position } => Some((TouchPhase::Down, position)),
            Event::TouchMove { position } | Event::MouseMoved { position } => {
                Some((TouchPhase::Move, position))
            }
            Event::TouchUp { position } => Some((TouchPhase::Up, position)),
            Event::TouchCancel { position } => Some((TouchPhase::Cancel, position)),
            Event::MousePressed {
                button: MouseButton::Left,
                position,
            } => Some((TouchPhase::Down, position)),
            Event::MouseReleased {
                button: MouseButton::Left,
                position,
            } => Some((TouchPhase::Up, position)),
            Event::MousePressed { .. } | Event::MouseReleased { .. } => None,
        }
    }
}

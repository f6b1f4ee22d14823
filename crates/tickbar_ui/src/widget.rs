//! Widget trait and related types

use crate::event::Event;
use crate::layout::{MeasureSpec, Size};
use crate::renderer::Canvas;

/// The core widget trait.
///
/// A host drives a widget through measure, resize, draw and event handling. The
/// widget never talks to a window directly; it asks for redraws through its own
/// state and reports changes as messages of type `M`.
pub trait Widget<M> {
    /// Calculate the size this widget wants under the host's constraints
    fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Size;

    /// The host assigned a new size; derived layout must be rebuilt
    fn resize(&mut self, size: Size);

    /// Draw the widget onto the canvas
    fn draw(&self, canvas: &mut dyn Canvas);

    /// Handle an event, optionally producing a message
    fn on_event(&mut self, event: &Event) -> Option<M> {
        let _ = event;
        None
    }
}

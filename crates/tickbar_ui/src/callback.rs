//! Callback abstraction for widget event handlers
//!
//! Widgets report changes by turning them into application messages. Instead of
//! writing `Option<Box<dyn Fn(T) -> M>>` in every widget, they hold a
//! `Callback<T, M>`.
//!
//! # Examples
//!
//! ```
//! use tickbar_ui::Callback;
//!
//! #[derive(Debug, PartialEq)]
//! enum Message {
//!     Picked(usize),
//! }
//!
//! let callback = Callback::new(Message::Picked);
//! assert_eq!(callback.call(3), Some(Message::Picked(3)));
//!
//! let empty: Callback<usize, Message> = Callback::none();
//! assert_eq!(empty.call(3), None);
//! ```

use std::fmt;

/// An optional event handler producing messages of type `M` from values of type `T`.
pub struct Callback<T, M> {
    f: Option<Box<dyn Fn(T) -> M>>,
}

impl<T, M> Callback<T, M> {
    /// Create a new callback from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) -> M + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Create an empty callback (no handler).
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Call the callback with a value, if it exists.
    ///
    /// Returns `Some(message)` if the callback is set, or `None` if no callback is registered.
    pub fn call(&self, value: T) -> Option<M> {
        self.f.as_ref().map(|f| f(value))
    }

    /// Check if the callback is set.
    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }

    /// Check if the callback is not set.
    pub fn is_none(&self) -> bool {
        self.f.is_none()
    }
}

impl<T, M> Default for Callback<T, M> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T, M> fmt::Debug for Callback<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("set", &self.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_callback_produces_message() {
        let cb: Callback<usize, String> = Callback::new(|i| format!("index {i}"));
        assert!(cb.is_some());
        assert_eq!(cb.call(2).as_deref(), Some("index 2"));
    }

    #[test]
    fn test_default_is_empty() {
        let cb: Callback<usize, ()> = Callback::default();
        assert!(cb.is_none());
        assert!(cb.call(0).is_none());
    }
}

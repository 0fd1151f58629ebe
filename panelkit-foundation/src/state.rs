//! Shared mutable state handles.
//!
//! A [`State`] is a cheaply cloneable handle to a single widget
//! controller or screen model. Handles are cloned into callbacks so a
//! commit can update the owning screen's value without borrowing the
//! widget that produced it. Access always goes through [`State::with`]
//! or [`State::with_mut`]; the closure scope keeps lock guards from
//! escaping into callback chains.

use std::sync::Arc;

use parking_lot::RwLock;

/// A shared handle to a mutable value.
pub struct State<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> State<T> {
    /// Wraps a value in a new shared handle.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Runs a closure with read access to the value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.read())
    }

    /// Runs a closure with exclusive access to the value.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// Replaces the value.
    pub fn set(&self, value: T) {
        *self.inner.write() = value;
    }
}

impl<T: Clone> State<T> {
    /// Returns a clone of the current value.
    pub fn get(&self) -> T {
        self.inner.read().clone()
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> PartialEq for State<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for State<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("State").field(&*self.inner.read()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_share_the_value() {
        let a = State::new(2usize);
        let b = a.clone();
        b.with_mut(|v| *v += 3);
        assert_eq!(a.get(), 5);
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_states_are_not_equal() {
        assert_ne!(State::new(1), State::new(1));
    }
}

//! Pointer event model.
//!
//! Hosts translate whatever input source they have (touch panel, mouse,
//! a scripted driver) into a serial stream of [`CursorEvent`]s with
//! positions relative to the widget that receives them. Widgets consume
//! the stream synchronously; there is no event queue here because the
//! kit assumes a single active pointer.

use std::time::Instant;

use crate::px::PxPosition;

/// Which key produced a press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressKeyEventType {
    /// Primary key (left mouse button or a touch contact).
    Left,
    /// Secondary key.
    Right,
    /// Middle key.
    Middle,
}

/// The kind of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorEventContent {
    /// A key or touch contact went down.
    Pressed(PressKeyEventType),
    /// A key or touch contact lifted.
    Released(PressKeyEventType),
    /// The pointer moved while tracked.
    Moved,
}

/// A single pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorEvent {
    /// When the event was produced.
    pub timestamp: Instant,
    /// Pointer position relative to the receiving widget.
    pub position: PxPosition,
    /// What happened.
    pub content: CursorEventContent,
}

impl CursorEvent {
    /// A primary-key press at the given position.
    pub fn pressed(position: PxPosition) -> Self {
        Self {
            timestamp: Instant::now(),
            position,
            content: CursorEventContent::Pressed(PressKeyEventType::Left),
        }
    }

    /// A move to the given position.
    pub fn moved(position: PxPosition) -> Self {
        Self {
            timestamp: Instant::now(),
            position,
            content: CursorEventContent::Moved,
        }
    }

    /// A primary-key release at the given position.
    pub fn released(position: PxPosition) -> Self {
        Self {
            timestamp: Instant::now(),
            position,
            content: CursorEventContent::Released(PressKeyEventType::Left),
        }
    }
}

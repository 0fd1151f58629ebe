//! Uniform pointer-driving surface for the draggable widgets.
//!
//! Hosts (screens, scripted drivers, tests) that replay pointer traces
//! don't care which slider variant they are feeding; this trait gives
//! them one dispatch point for events and frame ticks.

use std::time::Instant;

use panelkit_foundation::CursorEvent;

use crate::{mode_slider::ModeSlider, slider::Slider};

/// A widget that consumes pointer events and frame ticks.
pub trait InputTarget {
    /// Dispatches one pointer event.
    fn handle_event(&mut self, event: &CursorEvent);

    /// Advances animations to `now`.
    fn tick(&mut self, now: Instant);
}

impl InputTarget for Slider {
    fn handle_event(&mut self, event: &CursorEvent) {
        Slider::handle_event(self, event);
    }

    fn tick(&mut self, now: Instant) {
        Slider::tick(self, now);
    }
}

impl InputTarget for ModeSlider {
    fn handle_event(&mut self, event: &CursorEvent) {
        ModeSlider::handle_event(self, event);
    }

    fn tick(&mut self, now: Instant) {
        ModeSlider::tick(self, now);
    }
}

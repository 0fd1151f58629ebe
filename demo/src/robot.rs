//! Scripted pointer driver.
//!
//! Replays pointer traces against the draggable widgets the way a
//! finger would produce them: a press, interleaved moves and frame
//! ticks, a release, and idle frames while snap animations play out.
//! The robot owns the frame clock so every screen's session advances
//! on the same 16ms cadence.

use std::time::{Duration, Instant};

use panelkit_components::input::InputTarget;
use panelkit_foundation::{CursorEvent, Px, PxPosition};

const FRAME: Duration = Duration::from_millis(16);
const SETTLE_FRAMES: usize = 240;

/// The pointer robot.
pub struct Robot {
    clock: Instant,
    pointer_y: Px,
}

impl Robot {
    /// Creates a robot with a fresh frame clock.
    pub fn new() -> Self {
        Self {
            clock: Instant::now(),
            pointer_y: Px(16),
        }
    }

    fn at(&self, x: i32) -> PxPosition {
        PxPosition::new(Px(x), self.pointer_y)
    }

    /// Advances `count` frames, ticking the target each frame.
    pub fn frames(&mut self, target: &mut impl InputTarget, count: usize) {
        for _ in 0..count {
            self.clock += FRAME;
            target.tick(self.clock);
        }
    }

    /// A quick tap at `x`.
    pub fn tap(&mut self, target: &mut impl InputTarget, x: i32) {
        target.handle_event(&CursorEvent::pressed(self.at(x)));
        self.frames(target, 2);
        target.handle_event(&CursorEvent::released(self.at(x)));
    }

    /// A drag from `from` to `to` in `steps` evenly spaced moves.
    pub fn drag(&mut self, target: &mut impl InputTarget, from: i32, to: i32, steps: usize) {
        target.handle_event(&CursorEvent::pressed(self.at(from)));
        let steps = steps.max(1) as i32;
        for step in 1..=steps {
            let x = from + (to - from) * step / steps;
            target.handle_event(&CursorEvent::moved(self.at(x)));
            self.frames(target, 1);
        }
        target.handle_event(&CursorEvent::released(self.at(to)));
    }

    /// Idle frames while a snap or sync animation plays out.
    pub fn settle(&mut self, target: &mut impl InputTarget) {
        self.frames(target, SETTLE_FRAMES);
    }
}

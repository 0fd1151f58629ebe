//! Slider screen: the step slider inside a card.
//!
//! Wires a six-slot snap slider to screen state the way the panel
//! does: the commit callback writes the committed slot back into the
//! screen's value, and the session log shows what a user dragging the
//! card would see.

use closure::closure;
use panelkit_components::slider::{Slider, SliderArgs, SliderDefaults};
use panelkit_foundation::{Px, State};
use tracing::info;

use crate::robot::Robot;

const TRACK_WIDTH: Px = Px(1200);

/// The step slider screen.
pub struct SliderScreen {
    slider: Slider,
    active_index: State<usize>,
}

impl SliderScreen {
    /// Creates the screen with the panel's slider configuration.
    pub fn new() -> Self {
        let active_index = State::new(SliderDefaults::INITIAL_INDEX);
        let args = SliderArgs::default().on_change(closure!(clone active_index, |index| {
            active_index.set(index);
            info!(index, "slider committed");
        }));
        Self {
            slider: Slider::new(&args),
            active_index,
        }
    }

    /// One scripted session: a tap onto a far slot, then a drag back.
    pub fn run(&mut self, robot: &mut Robot) {
        self.slider.set_track_width(TRACK_WIDTH);

        // Tap over slot 4 and let the snap play out.
        robot.tap(&mut self.slider, 810);
        robot.settle(&mut self.slider);
        info!(
            index = self.active_index.get(),
            thumb = self.slider.thumb_offset().raw(),
            fill = self.slider.filled_width().raw(),
            "after tap"
        );

        // Grab the thumb and drag it back toward the start.
        robot.drag(&mut self.slider, 810, 150, 8);
        robot.settle(&mut self.slider);
        info!(
            index = self.active_index.get(),
            thumb = self.slider.thumb_offset().raw(),
            "after drag"
        );
    }
}

//! Air conditioner screen: one selected mode, two picker styles.
//!
//! The mode can be chosen through a row of circle buttons or through
//! the segmented mode slider; both write into the same screen state,
//! and switching styles syncs the newly shown picker to the current
//! selection.

use closure::closure;
use panelkit_components::{
    button_group::{ButtonGroup, ButtonGroupArgs, SelectorItem},
    mode_slider::{ModeOption, ModeSlider, ModeSliderArgs},
};
use panelkit_foundation::{Px, State};
use tracing::info;

use crate::robot::Robot;

const TRACK_WIDTH: Px = Px(400);

/// Which picker the screen currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerStyle {
    /// The circle button row.
    Buttons,
    /// The segmented mode slider.
    Slider,
}

fn mode_options() -> Vec<ModeOption> {
    vec![
        ModeOption::new("cool", "Cool", "❄"),
        ModeOption::new("heat", "Heat", "☀"),
        ModeOption::new("dehumidify", "Dehumidify", "💧"),
        ModeOption::new("fan", "Fan", "💨"),
    ]
}

/// The air conditioner screen.
pub struct AirConditionerScreen {
    selected_mode: State<usize>,
    style: PickerStyle,
    mode_buttons: ButtonGroup,
    mode_slider: ModeSlider,
}

impl AirConditionerScreen {
    /// Creates the screen with both pickers wired to one selection.
    pub fn new() -> Self {
        let selected_mode = State::new(0usize);

        let items = mode_options()
            .into_iter()
            .enumerate()
            .map(|(index, option)| {
                let mut item = SelectorItem::new(option.label).glyph(option.glyph);
                item.selected = index == 0;
                item
            })
            .collect::<Vec<_>>();
        let mode_buttons = ButtonGroup::new(
            &ButtonGroupArgs::default().items(items).on_item_press(
                closure!(clone selected_mode, |index| {
                    selected_mode.set(index);
                    info!(index, "mode picked via buttons");
                }),
            ),
        );

        let mode_slider = ModeSlider::new(
            &ModeSliderArgs::default()
                .options(mode_options())
                .on_change(closure!(clone selected_mode, |index| {
                    selected_mode.set(index);
                    info!(index, "mode picked via slider");
                })),
        );

        Self {
            selected_mode,
            style: PickerStyle::Buttons,
            mode_buttons,
            mode_slider,
        }
    }

    fn switch_style(&mut self, style: PickerStyle) {
        if self.style == style {
            return;
        }
        self.style = style;
        let selected = self.selected_mode.get();
        // The picker coming into view catches up with the selection.
        match style {
            PickerStyle::Buttons => self.mode_buttons.select(selected),
            PickerStyle::Slider => self.mode_slider.sync_selected(selected),
        }
        info!(?style, selected, "picker style switched");
    }

    /// One scripted session across both picker styles.
    pub fn run(&mut self, robot: &mut Robot) {
        self.mode_slider.set_track_width(TRACK_WIDTH);

        // Button phase: pick "Heat".
        self.mode_buttons.press(1);

        // Slider phase: the capsule starts on the synced mode, then a
        // press jumps it to "Dehumidify" and a drag lands on "Fan".
        self.switch_style(PickerStyle::Slider);
        robot.settle(&mut self.mode_slider);
        robot.tap(&mut self.mode_slider, 250);
        robot.settle(&mut self.mode_slider);
        robot.drag(&mut self.mode_slider, 250, 390, 6);
        robot.settle(&mut self.mode_slider);

        // Back to buttons: the row catches up with the slider's pick.
        self.switch_style(PickerStyle::Buttons);
        info!(
            selected = self.selected_mode.get(),
            buttons = self.mode_buttons.selected_index(),
            capsule = self.mode_slider.capsule_offset().raw(),
            "air conditioner final"
        );
    }
}

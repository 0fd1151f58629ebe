//! Button group screen: circle groups, toggle rows and a square
//! group stacked in cards.

use closure::closure;
use panelkit_components::{
    button_group::{ButtonGroup, ButtonGroupArgs, ButtonShape, SelectorItem},
    toggle_button::{ToggleButtonGroup, ToggleButtonGroupArgs, ToggleItem},
};
use panelkit_foundation::State;
use tracing::info;

fn selector_items(labels: &[(&str, &str)]) -> Vec<SelectorItem> {
    labels
        .iter()
        .enumerate()
        .map(|(index, (label, glyph))| {
            let mut item = SelectorItem::new(*label).glyph(*glyph);
            item.selected = index == 0;
            item
        })
        .collect()
}

/// The button group screen.
pub struct ButtonGroupScreen {
    mode_group: ButtonGroup,
    level_group: ButtonGroup,
    square_group: ButtonGroup,
    toggles: ToggleButtonGroup,
    last_press: State<Option<usize>>,
}

impl ButtonGroupScreen {
    /// Creates the screen with the panel's group data.
    pub fn new() -> Self {
        let last_press = State::new(None);
        let report = closure!(clone last_press, |index| {
            last_press.set(Some(index));
        });

        let mode_group = ButtonGroup::new(
            &ButtonGroupArgs::default()
                .items(selector_items(&[
                    ("Cool", "❄"),
                    ("Heat", "☀"),
                    ("Dehumidify", "💧"),
                    ("Fan", "💨"),
                    ("Auto", "🌀"),
                    ("Sleep", "🌙"),
                ]))
                .on_item_press_shared(report),
        );
        let level_group = ButtonGroup::new(
            &ButtonGroupArgs::default().items(selector_items(&[
                ("Low", "·"),
                ("Medium", "··"),
                ("High", "···"),
            ])),
        );
        let square_group = ButtonGroup::new(
            &ButtonGroupArgs::default()
                .shape(ButtonShape::Square)
                .items(selector_items(&[
                    ("Morning", "🌅"),
                    ("Day", "🌞"),
                    ("Evening", "🌆"),
                    ("Night", "🌃"),
                ])),
        );
        let toggles = ToggleButtonGroup::new(
            &ToggleButtonGroupArgs::default()
                .items(vec![
                    ToggleItem::new("toggle-1", "Airflow", "Dual soft").enabled(true),
                    ToggleItem::new("toggle-2", "Vertical sweep", "Dual soft"),
                    ToggleItem::new("toggle-3", "Horizontal sweep", "Dual soft"),
                ])
                .on_item_press(|id| info!(%id, "toggle row pressed"))
                .on_item_title_press(|id| info!(%id, "toggle row title pressed")),
        );

        Self {
            mode_group,
            level_group,
            square_group,
            toggles,
            last_press,
        }
    }

    /// One scripted session across the stacked cards.
    pub fn run(&mut self) {
        // Six circle buttons wrap into two rows of four slots.
        info!(rows = self.mode_group.rows().len(), "mode group layout");

        self.mode_group.press(3);
        self.mode_group.press(3);
        info!(
            selected = self.mode_group.selected_index(),
            last_press = self.last_press.get(),
            "mode group after presses"
        );

        self.level_group.press(2);
        info!(selected = self.level_group.selected_index(), "level group");

        self.square_group.press(1);
        info!(selected = self.square_group.selected_index(), "square group");

        // Toggle the middle row on, open its detail, toggle it back.
        self.toggles.press(1);
        self.toggles.title_press(1);
        self.toggles.press(1);
        info!(
            enabled = self.toggles.is_enabled("toggle-2"),
            "toggle rows after presses"
        );
    }
}

//! Control title screen: titled rows with device pills and embedded
//! switches, plus the centered variants.

use std::time::{Duration, Instant};

use closure::closure;
use panelkit_components::control_title::{
    ControlTitle, ControlTitleArgs, ControlTitleCenter, RightAccessory,
};
use panelkit_foundation::State;
use tracing::info;

/// Comfortably past the switch's 180ms thumb transition.
const SWITCH_SETTLE: Duration = Duration::from_millis(250);

/// The control title screen.
pub struct ControlTitleScreen {
    device_row: ControlTitle,
    switch_row: ControlTitle,
    controlled_row: ControlTitle,
    host_value: State<bool>,
    center_rows: Vec<ControlTitleCenter>,
}

impl ControlTitleScreen {
    /// Creates the screen with the panel's row data.
    pub fn new() -> Self {
        let device_row = ControlTitle::new(
            &ControlTitleArgs::default()
                .title("Lighting".to_string())
                .subtitle("Living room".to_string())
                .subtitle_enabled(true)
                .right_text("3 devices".to_string()),
        );
        let switch_row = ControlTitle::new(
            &ControlTitleArgs::default()
                .title("Night mode".to_string())
                .right_mode(RightAccessory::Switch)
                .on_switch_change(|value| info!(value, "night mode requested")),
        );

        let host_value = State::new(false);
        let controlled_row = ControlTitle::new(
            &ControlTitleArgs::default()
                .title("Away guard".to_string())
                .right_mode(RightAccessory::Switch)
                .switch_value(Some(false))
                .on_switch_change(closure!(clone host_value, |value| {
                    host_value.set(value);
                    info!(value, "away guard requested");
                })),
        );

        let mut with_subtitle = ControlTitleCenter::new("Bedroom", "2 devices");
        with_subtitle.subtitle_enabled = true;
        let center_rows = vec![with_subtitle, ControlTitleCenter::new("Kitchen", "")];

        Self {
            device_row,
            switch_row,
            controlled_row,
            host_value,
            center_rows,
        }
    }

    /// One scripted session over the rows.
    pub fn run(&mut self) {
        info!(
            title = self.device_row.title(),
            subtitle = self.device_row.subtitle(),
            pill = self.device_row.right_text(),
            "device row"
        );

        // The uncontrolled switch flips itself.
        self.switch_row.press_switch();
        self.switch_row.tick(Instant::now() + SWITCH_SETTLE);
        info!(on = self.switch_row.is_on(), "night mode row");

        // The controlled switch waits for the host echo.
        self.controlled_row.press_switch();
        info!(
            on = self.controlled_row.is_on(),
            requested = self.host_value.get(),
            "away guard before echo"
        );
        let echoed = self.host_value.get();
        self.controlled_row.set_switch_value(echoed);
        self.controlled_row.tick(Instant::now() + SWITCH_SETTLE);
        info!(on = self.controlled_row.is_on(), "away guard after echo");

        for row in &self.center_rows {
            info!(
                title = row.title.as_str(),
                height = row.height().0,
                "center row"
            );
        }
    }
}

//! Titled control rows.
//!
//! The header row above a control surface: title and optional subtitle
//! on the left, and on the right either a device label pill or an
//! embedded switch. The embedded switch runs controlled (the host owns
//! the value and echoes it back) or uncontrolled (the row keeps its
//! own state); both report changes through `on_switch_change`. A
//! centered variant carries only the text.

use derive_setters::Setters;
use panelkit_foundation::{CallbackWith, Dp};

use crate::{
    switch::{Switch, SwitchArgs},
    theme::TOKENS,
};

/// What the row shows on its right side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RightAccessory {
    /// A device label pill.
    #[default]
    Device,
    /// An embedded switch.
    Switch,
}

/// Arguments for constructing a [`ControlTitle`].
#[derive(Clone, PartialEq, Setters)]
pub struct ControlTitleArgs {
    /// Title text.
    pub title: String,
    /// Subtitle text.
    pub subtitle: String,
    /// Whether the subtitle is shown.
    pub subtitle_enabled: bool,
    /// Right-side accessory.
    pub right_mode: RightAccessory,
    /// Label for the device pill.
    pub right_text: String,
    /// Controlled switch value; `Some` hands value ownership to the
    /// host, `None` keeps it in the row.
    pub switch_value: Option<bool>,
    /// Fired with the requested value when the switch is pressed.
    #[setters(skip)]
    pub on_switch_change: Option<CallbackWith<bool>>,
}

impl ControlTitleArgs {
    /// Sets the switch-change handler.
    pub fn on_switch_change<F>(mut self, on_switch_change: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.on_switch_change = Some(CallbackWith::new(on_switch_change));
        self
    }
}

impl Default for ControlTitleArgs {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            subtitle_enabled: false,
            right_mode: RightAccessory::default(),
            right_text: String::new(),
            switch_value: None,
            on_switch_change: None,
        }
    }
}

/// The left-aligned titled row.
pub struct ControlTitle {
    title: String,
    subtitle: String,
    subtitle_enabled: bool,
    right_mode: RightAccessory,
    right_text: String,
    controlled: bool,
    switch: Switch,
    on_switch_change: Option<CallbackWith<bool>>,
}

impl ControlTitle {
    /// Creates a row from its arguments.
    pub fn new(args: &ControlTitleArgs) -> Self {
        Self {
            title: args.title.clone(),
            subtitle: args.subtitle.clone(),
            subtitle_enabled: args.subtitle_enabled,
            right_mode: args.right_mode,
            right_text: args.right_text.clone(),
            controlled: args.switch_value.is_some(),
            switch: Switch::new(&SwitchArgs::default().checked(args.switch_value.unwrap_or(false))),
            on_switch_change: args.on_switch_change.clone(),
        }
    }

    /// A press on the embedded switch. No-op for device rows. In
    /// uncontrolled mode the row toggles itself; in controlled mode it
    /// only requests the change and waits for
    /// [`set_switch_value`](Self::set_switch_value).
    pub fn press_switch(&mut self) {
        if self.right_mode != RightAccessory::Switch {
            return;
        }
        let next = !self.switch.is_checked();
        if !self.controlled {
            self.switch.sync_checked(next);
        }
        if let Some(on_switch_change) = &self.on_switch_change {
            on_switch_change.call(next);
        }
    }

    /// Echoes the controlled value back into the row, animating the
    /// embedded switch.
    pub fn set_switch_value(&mut self, value: bool) {
        self.switch.sync_checked(value);
    }

    /// Whether the embedded switch is on.
    pub fn is_on(&self) -> bool {
        self.switch.is_checked()
    }

    /// Advances the embedded switch's animation.
    pub fn tick(&mut self, now: std::time::Instant) {
        self.switch.tick(now);
    }

    /// Read access to the embedded switch for visual placement.
    pub fn switch(&self) -> &Switch {
        &self.switch
    }

    /// Title text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Subtitle text, if enabled.
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle_enabled.then_some(self.subtitle.as_str())
    }

    /// The right-side accessory kind.
    pub fn right_mode(&self) -> RightAccessory {
        self.right_mode
    }

    /// Device pill label.
    pub fn right_text(&self) -> &str {
        &self.right_text
    }

    /// Row height from the token table.
    pub fn height(&self) -> Dp {
        TOKENS.sizes.control_title_height
    }
}

/// The centered titled row.
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct ControlTitleCenter {
    /// Title text.
    pub title: String,
    /// Subtitle text.
    pub subtitle: String,
    /// Whether the subtitle is shown.
    pub subtitle_enabled: bool,
}

impl ControlTitleCenter {
    /// Creates a centered row.
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            subtitle_enabled: false,
        }
    }

    /// Subtitle text, if enabled.
    pub fn visible_subtitle(&self) -> Option<&str> {
        self.subtitle_enabled.then_some(self.subtitle.as_str())
    }

    /// Row height from the token table; taller with a subtitle.
    pub fn height(&self) -> Dp {
        if self.subtitle_enabled {
            TOKENS.sizes.control_title_center_height_with_subtitle
        } else {
            TOKENS.sizes.control_title_center_height
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn switch_row(controlled: Option<bool>) -> (Arc<Mutex<Vec<bool>>>, ControlTitle) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let args = ControlTitleArgs::default()
            .title("Living room".to_string())
            .right_mode(RightAccessory::Switch)
            .switch_value(controlled)
            .on_switch_change({
                let log = log.clone();
                move |value| log.lock().expect("switch log").push(value)
            });
        (log, ControlTitle::new(&args))
    }

    #[test]
    fn uncontrolled_rows_keep_their_own_state() {
        let (log, mut row) = switch_row(None);
        row.press_switch();
        assert!(row.is_on());
        row.press_switch();
        assert!(!row.is_on());
        assert_eq!(log.lock().expect("log").as_slice(), &[true, false]);
    }

    #[test]
    fn controlled_rows_wait_for_the_host_echo() {
        let (log, mut row) = switch_row(Some(false));
        row.press_switch();
        // Only the request went out; the value did not move.
        assert!(!row.is_on());
        assert_eq!(log.lock().expect("log").as_slice(), &[true]);

        row.set_switch_value(true);
        assert!(row.is_on());
    }

    #[test]
    fn device_rows_ignore_switch_presses() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let args = ControlTitleArgs::default()
            .right_text("3 devices".to_string())
            .on_switch_change({
                let log = log.clone();
                move |value| log.lock().expect("switch log").push(value)
            });
        let mut row = ControlTitle::new(&args);
        row.press_switch();
        assert!(log.lock().expect("log").is_empty());
    }

    #[test]
    fn center_row_height_follows_the_subtitle() {
        let mut row = ControlTitleCenter::new("Bedroom", "2 devices");
        assert_eq!(row.height(), TOKENS.sizes.control_title_center_height);
        row.subtitle_enabled = true;
        assert_eq!(
            row.height(),
            TOKENS.sizes.control_title_center_height_with_subtitle
        );
        assert_eq!(row.visible_subtitle(), Some("2 devices"));
    }
}

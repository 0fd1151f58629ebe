//! An on/off toggle switch with a timed thumb transition.
//!
//! The switch used in control rows: a capsule track whose thumb slides
//! its travel in 180 ms with a cubic ease, while the track color fades
//! between the off and accent tokens. Interaction is a single press;
//! there is no thumb dragging on this control.

use std::time::{Duration, Instant};

use derive_setters::Setters;
use panelkit_foundation::{CallbackWith, Color, Dp};
use tracing::debug;

use crate::{animation::easing, theme::TOKENS};

const ANIMATION_DURATION: Duration = Duration::from_millis(180);

/// Reference dimensions of the switch.
pub struct SwitchDefaults;

impl SwitchDefaults {
    /// Track width.
    pub const TRACK_WIDTH: Dp = Dp(50.0);
    /// Track height.
    pub const TRACK_HEIGHT: Dp = Dp(28.0);
    /// Horizontal padding between track edge and thumb.
    pub const TRACK_PADDING: Dp = Dp(4.0);
    /// Thumb diameter.
    pub const THUMB_SIZE: Dp = Dp(20.0);
}

/// Arguments for constructing a [`Switch`].
#[derive(Clone, PartialEq, Setters)]
pub struct SwitchArgs {
    /// Initial checked state.
    pub checked: bool,
    /// Whether the switch reacts to presses.
    pub enabled: bool,
    /// Track width.
    pub track_width: Dp,
    /// Track height.
    pub track_height: Dp,
    /// Padding between track edge and thumb.
    pub track_padding: Dp,
    /// Thumb diameter.
    pub thumb_size: Dp,
    /// Callback fired with the new state after each toggle.
    #[setters(skip)]
    pub on_toggle: Option<CallbackWith<bool>>,
}

impl SwitchArgs {
    /// Sets the toggle handler.
    pub fn on_toggle<F>(mut self, on_toggle: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.on_toggle = Some(CallbackWith::new(on_toggle));
        self
    }

    /// Sets the toggle handler from a shared callback.
    pub fn on_toggle_shared(mut self, on_toggle: impl Into<CallbackWith<bool>>) -> Self {
        self.on_toggle = Some(on_toggle.into());
        self
    }
}

impl Default for SwitchArgs {
    fn default() -> Self {
        Self {
            checked: false,
            enabled: true,
            track_width: SwitchDefaults::TRACK_WIDTH,
            track_height: SwitchDefaults::TRACK_HEIGHT,
            track_padding: SwitchDefaults::TRACK_PADDING,
            thumb_size: SwitchDefaults::THUMB_SIZE,
            on_toggle: None,
        }
    }
}

/// The toggle switch widget.
pub struct Switch {
    checked: bool,
    progress: f32,
    last_toggle: Option<Instant>,
    enabled: bool,
    track_width: Dp,
    track_padding: Dp,
    thumb_size: Dp,
    on_toggle: Option<CallbackWith<bool>>,
}

impl Switch {
    /// Creates a switch from its arguments.
    pub fn new(args: &SwitchArgs) -> Self {
        Self {
            checked: args.checked,
            progress: if args.checked { 1.0 } else { 0.0 },
            last_toggle: None,
            enabled: args.enabled,
            track_width: args.track_width,
            track_padding: args.track_padding,
            thumb_size: args.thumb_size,
            on_toggle: args.on_toggle.clone(),
        }
    }

    /// Whether the switch is currently on.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Whether the switch reacts to presses.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables interaction.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Sets the state directly, skipping the animation.
    pub fn set_checked(&mut self, checked: bool) {
        if self.checked != checked {
            self.checked = checked;
            self.progress = if checked { 1.0 } else { 0.0 };
            self.last_toggle = None;
        }
    }

    /// External sync: animates toward `checked` if it differs.
    pub fn sync_checked(&mut self, checked: bool) {
        if self.checked != checked {
            self.checked = checked;
            self.last_toggle = Some(Instant::now());
        }
    }

    /// A press on the switch: toggles and reports the new state.
    /// Ignored while disabled.
    pub fn press(&mut self) {
        if !self.enabled {
            return;
        }
        self.checked = !self.checked;
        self.last_toggle = Some(Instant::now());
        debug!(checked = self.checked, "switch toggle");
        if let Some(on_toggle) = &self.on_toggle {
            on_toggle.call(self.checked);
        }
    }

    /// Advances the thumb timeline to `now`.
    pub fn tick(&mut self, now: Instant) {
        let Some(last_toggle) = self.last_toggle else {
            return;
        };
        let elapsed = now.saturating_duration_since(last_toggle);
        let fraction = (elapsed.as_secs_f32() / ANIMATION_DURATION.as_secs_f32()).min(1.0);
        self.progress = if self.checked { fraction } else { 1.0 - fraction };
        if fraction >= 1.0 {
            self.progress = if self.checked { 1.0 } else { 0.0 };
            self.last_toggle = None;
        }
    }

    /// Linear animation progress in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Whether the thumb transition is still running.
    pub fn is_animating(&self) -> bool {
        self.last_toggle.is_some()
    }

    /// Current thumb offset from the track's left edge.
    pub fn thumb_offset(&self) -> Dp {
        let travel =
            self.track_width.0 - 2.0 * self.track_padding.0 - self.thumb_size.0;
        Dp(self.track_padding.0 + travel.max(0.0) * easing(self.progress) as f64)
    }

    /// Current track color, fading from the off token to the accent.
    pub fn track_color(&self) -> Color {
        TOKENS
            .colors
            .switch_off
            .lerp(TOKENS.colors.main_color, easing(self.progress))
    }
}

//! Drag-to-position slider with snap-to-step and continuous modes.
//!
//! One gesture/coordinate engine behind two configurations. In snap
//! mode the thumb tracks the pointer 1:1 and, on release, spring-snaps
//! to the nearest of `steps` slots, committing the slot index through
//! `on_change` when it changed. In continuous mode there is no
//! quantization: every move and the release report a trailing-edge
//! ratio in `0.0..=1.0` through `on_value_change`, for live values like
//! volume or brightness.
//!
//! The widget is headless: the host feeds it pointer events relative to
//! the track, reports layout widths through
//! [`set_track_width`](Slider::set_track_width), advances animations
//! with [`tick`](Slider::tick) and places the visuals by reading
//! [`thumb_offset`](Slider::thumb_offset) /
//! [`filled_width`](Slider::filled_width).

use std::time::Instant;

use derive_setters::Setters;
use panelkit_foundation::{CallbackWith, CursorEvent, CursorEventContent, Dp, Px};

use crate::animation::AnimatedOffset;

use interaction::DragPhase;

pub use geometry::TrackGeometry;
pub(crate) use interaction::DragSession;

mod geometry;
mod interaction;

/// Reference dimensions of the step slider.
pub struct SliderDefaults;

impl SliderDefaults {
    /// Width of the circular thumb.
    pub const THUMB_SIZE: Dp = Dp(32.0);
    /// Diameter of the thumb's inner dot.
    pub const THUMB_INNER_SIZE: Dp = Dp(20.0);
    /// Height of the track capsule.
    pub const TRACK_HEIGHT: Dp = Dp(32.0);
    /// Vertical padding around the track.
    pub const WRAPPER_PADDING_V: Dp = Dp(2.0);
    /// Default number of discrete slots.
    pub const STEP_COUNT: usize = 6;
    /// Default initial slot.
    pub const INITIAL_INDEX: usize = 2;
}

/// Behavior variant, chosen once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderMode {
    /// Snap to one of `step_count` slots on release; commits indices.
    Discrete {
        /// Number of slots, at least 1.
        step_count: usize,
    },
    /// Free dragging; reports trailing-edge ratios live.
    Continuous,
}

/// The externally visible committed value.
#[derive(Debug, Clone, Copy, PartialEq)]
enum CommittedPosition {
    Index(usize),
    Ratio(f32),
}

/// Arguments for constructing a [`Slider`].
#[derive(Clone, PartialEq, Setters)]
pub struct SliderArgs {
    /// Number of discrete slots (snap mode only). Values below 1 are
    /// clamped to 1.
    pub steps: usize,
    /// Initial slot, clamped into `[0, steps - 1]`.
    pub initial_index: usize,
    /// `true` selects snap mode, `false` continuous mode.
    pub snap_enabled: bool,
    /// Thumb width.
    pub thumb_size: Dp,
    /// Inner track padding (used by the segmented variant's geometry;
    /// zero for the plain step slider).
    pub track_padding: Dp,
    /// Commit callback for snap mode, fired only when the committed
    /// slot changes.
    #[setters(skip)]
    pub on_change: Option<CallbackWith<usize>>,
    /// Live-value callback for continuous mode, fired on every move
    /// and once on release.
    #[setters(skip)]
    pub on_value_change: Option<CallbackWith<f32>>,
}

impl SliderArgs {
    /// Sets the commit handler.
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.on_change = Some(CallbackWith::new(on_change));
        self
    }

    /// Sets the commit handler from a shared callback.
    pub fn on_change_shared(mut self, on_change: impl Into<CallbackWith<usize>>) -> Self {
        self.on_change = Some(on_change.into());
        self
    }

    /// Sets the live-value handler.
    pub fn on_value_change<F>(mut self, on_value_change: F) -> Self
    where
        F: Fn(f32) + Send + Sync + 'static,
    {
        self.on_value_change = Some(CallbackWith::new(on_value_change));
        self
    }

    /// Sets the live-value handler from a shared callback.
    pub fn on_value_change_shared(
        mut self,
        on_value_change: impl Into<CallbackWith<f32>>,
    ) -> Self {
        self.on_value_change = Some(on_value_change.into());
        self
    }
}

impl Default for SliderArgs {
    fn default() -> Self {
        Self {
            steps: SliderDefaults::STEP_COUNT,
            initial_index: SliderDefaults::INITIAL_INDEX,
            snap_enabled: true,
            thumb_size: SliderDefaults::THUMB_SIZE,
            track_padding: Dp::ZERO,
            on_change: None,
            on_value_change: None,
        }
    }
}

/// The slider widget.
pub struct Slider {
    mode: SliderMode,
    geometry: TrackGeometry,
    offset: AnimatedOffset,
    session: Option<DragSession>,
    phase: DragPhase,
    committed: CommittedPosition,
    on_change: Option<CallbackWith<usize>>,
    on_value_change: Option<CallbackWith<f32>>,
}

impl Slider {
    /// Creates a slider from its arguments. The track is unmeasured
    /// until the host calls [`set_track_width`](Self::set_track_width);
    /// presses are ignored until then.
    pub fn new(args: &SliderArgs) -> Self {
        let step_count = args.steps.max(1);
        let (mode, committed) = if args.snap_enabled {
            (
                SliderMode::Discrete { step_count },
                CommittedPosition::Index(args.initial_index.min(step_count - 1)),
            )
        } else {
            let ratio = (args.initial_index as f32 / step_count as f32).clamp(0.0, 1.0);
            (SliderMode::Continuous, CommittedPosition::Ratio(ratio))
        };
        Self {
            mode,
            geometry: TrackGeometry::new(Px::ZERO, args.thumb_size.to_px(), args.track_padding.to_px()),
            offset: AnimatedOffset::new(0.0),
            session: None,
            phase: DragPhase::Idle,
            committed,
            on_change: args.on_change.clone(),
            on_value_change: args.on_value_change.clone(),
        }
    }

    /// Layout measurement callback. The host must call this with every
    /// rendered track width, including after resizes. Repositions the
    /// indicator to the committed value without animation; a width of
    /// zero parks the indicator at 0 and disables interaction.
    pub fn set_track_width(&mut self, width: Px) {
        self.geometry.width = width;
        if !self.geometry.is_measured() {
            self.offset.snap_to(0.0);
            return;
        }
        if self.session.is_none() {
            let pixel = self.committed_pixel();
            self.offset.snap_to(pixel);
        }
    }

    /// External sync for snap mode: animates the indicator to `index`
    /// when the externally owned committed value changed. Ignored
    /// while a drag is in progress (the drag's release wins) and in
    /// continuous mode. Does not fire `on_change`.
    pub fn sync_index(&mut self, index: usize) {
        let SliderMode::Discrete { step_count } = self.mode else {
            return;
        };
        if self.phase != DragPhase::Idle {
            return;
        }
        let index = index.min(step_count - 1);
        self.committed = CommittedPosition::Index(index);
        if self.geometry.is_measured() {
            self.offset
                .animate_to(self.geometry.index_to_pixel(index, step_count));
        }
    }

    /// External sync for continuous mode: animates the indicator so
    /// its trailing edge sits at `ratio`. Ignored while dragging and
    /// in snap mode. Does not fire `on_value_change`.
    pub fn sync_ratio(&mut self, ratio: f32) {
        if self.mode != SliderMode::Continuous {
            return;
        }
        if self.phase != DragPhase::Idle {
            return;
        }
        let ratio = ratio.clamp(0.0, 1.0);
        self.committed = CommittedPosition::Ratio(ratio);
        if self.geometry.is_measured() {
            self.offset.animate_to(self.geometry.ratio_to_pixel(ratio));
        }
    }

    /// Dispatches a pointer event to the gesture state machine.
    pub fn handle_event(&mut self, event: &CursorEvent) {
        match event.content {
            CursorEventContent::Pressed(_) => self.on_press(event.position.x),
            CursorEventContent::Moved => self.on_move(event.position.x),
            CursorEventContent::Released(_) => self.on_release(),
        }
    }

    /// Advances the snap/sync animation to `now`.
    pub fn tick(&mut self, now: Instant) {
        self.offset.tick(now);
    }

    /// Current pixel offset of the thumb's leading edge.
    pub fn thumb_offset(&self) -> Px {
        Px::saturating_from_f32(self.offset.value().round())
    }

    /// Length of the filled track portion: the thumb offset plus the
    /// thumb width (the fill runs to the thumb's trailing edge).
    pub fn filled_width(&self) -> Px {
        self.thumb_offset().saturating_add(self.geometry.thumb_size)
    }

    /// Whether a drag is currently tracking the pointer.
    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// Whether a snap or sync animation is in flight.
    pub fn is_animating(&self) -> bool {
        self.offset.is_animating()
    }

    /// The committed slot, if in snap mode.
    pub fn committed_index(&self) -> Option<usize> {
        match self.committed {
            CommittedPosition::Index(index) => Some(index),
            CommittedPosition::Ratio(_) => None,
        }
    }

    /// The committed trailing-edge ratio, if in continuous mode.
    pub fn committed_ratio(&self) -> Option<f32> {
        match self.committed {
            CommittedPosition::Ratio(ratio) => Some(ratio),
            CommittedPosition::Index(_) => None,
        }
    }

    /// The behavior variant.
    pub fn mode(&self) -> SliderMode {
        self.mode
    }

    /// The current track geometry.
    pub fn geometry(&self) -> TrackGeometry {
        self.geometry
    }

    fn committed_pixel(&self) -> f32 {
        match self.committed {
            CommittedPosition::Index(index) => match self.mode {
                SliderMode::Discrete { step_count } => {
                    self.geometry.index_to_pixel(index, step_count)
                }
                SliderMode::Continuous => 0.0,
            },
            CommittedPosition::Ratio(ratio) => self.geometry.ratio_to_pixel(ratio),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_clamps_configuration() {
        let slider = Slider::new(&SliderArgs::default().steps(0).initial_index(99));
        assert_eq!(slider.mode(), SliderMode::Discrete { step_count: 1 });
        assert_eq!(slider.committed_index(), Some(0));

        let slider = Slider::new(&SliderArgs::default().initial_index(99));
        assert_eq!(slider.committed_index(), Some(5));
    }

    #[test]
    fn defaults_match_the_documented_surface() {
        let args = SliderArgs::default();
        assert_eq!(args.steps, 6);
        assert_eq!(args.initial_index, 2);
        assert!(args.snap_enabled);

        let slider = Slider::new(&args);
        assert_eq!(slider.committed_index(), Some(2));
        assert!(!slider.is_dragging());
    }

    #[test]
    fn layout_positions_the_committed_slot_without_animation() {
        let mut slider = Slider::new(&SliderArgs::default());
        slider.set_track_width(Px(1200));
        // Slot 2 of 6 on a 1200px track sits at 400px.
        assert_eq!(slider.thumb_offset(), Px(400));
        assert!(!slider.is_animating());
        assert_eq!(slider.filled_width(), Px(432));
    }

    #[test]
    fn resize_keeps_the_committed_slot() {
        let mut slider = Slider::new(&SliderArgs::default());
        slider.set_track_width(Px(1200));
        slider.set_track_width(Px(600));
        assert_eq!(slider.thumb_offset(), Px(200));
    }

    #[test]
    fn sync_index_animates_toward_the_new_slot() {
        let mut slider = Slider::new(&SliderArgs::default());
        slider.set_track_width(Px(1200));
        slider.sync_index(5);
        assert_eq!(slider.committed_index(), Some(5));
        assert!(slider.is_animating());
        // The indicator has not teleported.
        assert_eq!(slider.thumb_offset(), Px(400));
    }

    #[test]
    fn sync_is_mode_gated() {
        let mut slider = Slider::new(&SliderArgs::default());
        slider.set_track_width(Px(1200));
        slider.sync_ratio(0.9);
        assert_eq!(slider.committed_index(), Some(2));

        let mut continuous = Slider::new(&SliderArgs::default().snap_enabled(false));
        continuous.set_track_width(Px(300));
        continuous.sync_index(4);
        assert!(continuous.committed_ratio().is_some());
    }
}

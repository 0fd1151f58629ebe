//! Segmented mode slider: a capsule thumb that snaps between labeled
//! segments.
//!
//! The air-conditioner style mode picker. The track is divided into
//! one segment per option; a press anywhere snap-jumps the capsule to
//! the pressed segment and commits the selection immediately, a drag
//! tracks 1:1 over the padded travel span, and a release settles on
//! the nearest segment anchor. Unlike the step slider's slot mapping,
//! anchors here span `width - 2*padding - thumb_width` with both ends
//! included.

use std::time::Instant;

use derive_setters::Setters;
use panelkit_foundation::{CallbackWith, CursorEvent, CursorEventContent, Dp, Px};
use tracing::{debug, trace};

use crate::{
    animation::AnimatedOffset,
    slider::{DragSession, TrackGeometry},
};

/// Reference dimensions of the mode slider.
pub struct ModeSliderDefaults;

impl ModeSliderDefaults {
    /// Width of the capsule thumb.
    pub const THUMB_WIDTH: Dp = Dp(80.0);
    /// Height of the track.
    pub const TRACK_HEIGHT: Dp = Dp(52.0);
    /// Inner padding on each end of the track.
    pub const TRACK_PADDING: Dp = Dp(4.0);
}

/// One selectable mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeOption {
    /// Stable identifier reported in logs.
    pub id: String,
    /// Display label under the track.
    pub label: String,
    /// Glyph shown in the segment and inside the capsule.
    pub glyph: String,
}

impl ModeOption {
    /// Creates an option from its parts.
    pub fn new(id: impl Into<String>, label: impl Into<String>, glyph: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            glyph: glyph.into(),
        }
    }
}

/// Arguments for constructing a [`ModeSlider`].
#[derive(Clone, PartialEq, Setters)]
pub struct ModeSliderArgs {
    /// The selectable modes, one segment each.
    pub options: Vec<ModeOption>,
    /// Initially selected option, clamped to the option count.
    pub initial_index: usize,
    /// Capsule thumb width.
    pub thumb_width: Dp,
    /// Track height.
    pub track_height: Dp,
    /// Inner track padding.
    pub track_padding: Dp,
    /// Selection-change callback, fired only when the selection
    /// actually changes (press-jump or release-snap).
    #[setters(skip)]
    pub on_change: Option<CallbackWith<usize>>,
}

impl ModeSliderArgs {
    /// Sets the selection-change handler.
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.on_change = Some(CallbackWith::new(on_change));
        self
    }

    /// Sets the selection-change handler from a shared callback.
    pub fn on_change_shared(mut self, on_change: impl Into<CallbackWith<usize>>) -> Self {
        self.on_change = Some(on_change.into());
        self
    }
}

impl Default for ModeSliderArgs {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            initial_index: 0,
            thumb_width: ModeSliderDefaults::THUMB_WIDTH,
            track_height: ModeSliderDefaults::TRACK_HEIGHT,
            track_padding: ModeSliderDefaults::TRACK_PADDING,
            on_change: None,
        }
    }
}

/// The segmented mode slider widget.
pub struct ModeSlider {
    options: Vec<ModeOption>,
    geometry: TrackGeometry,
    offset: AnimatedOffset,
    session: Option<DragSession>,
    dragging: bool,
    selected: usize,
    on_change: Option<CallbackWith<usize>>,
}

impl ModeSlider {
    /// Creates a mode slider from its arguments. Presses are ignored
    /// until the host reports a track width.
    pub fn new(args: &ModeSliderArgs) -> Self {
        let selected = if args.options.is_empty() {
            0
        } else {
            args.initial_index.min(args.options.len() - 1)
        };
        Self {
            options: args.options.clone(),
            geometry: TrackGeometry::new(
                Px::ZERO,
                args.thumb_width.to_px(),
                args.track_padding.to_px(),
            ),
            offset: AnimatedOffset::new(0.0),
            session: None,
            dragging: false,
            selected,
            on_change: args.on_change.clone(),
        }
    }

    fn count(&self) -> usize {
        self.options.len()
    }

    /// Layout measurement callback; repositions the capsule onto the
    /// selected anchor without animation.
    pub fn set_track_width(&mut self, width: Px) {
        self.geometry.width = width;
        if !self.geometry.is_measured() {
            self.offset.snap_to(0.0);
            return;
        }
        if self.session.is_none() {
            let anchor = self.geometry.span_anchor(self.selected, self.count());
            self.offset.snap_to(anchor);
        }
    }

    /// Dispatches a pointer event.
    pub fn handle_event(&mut self, event: &CursorEvent) {
        match event.content {
            CursorEventContent::Pressed(_) => self.on_press(event.position.x),
            CursorEventContent::Moved => self.on_move(event.position.x),
            CursorEventContent::Released(_) => self.on_release(),
        }
    }

    /// Pointer-down: snap-jump to the pressed segment (committing the
    /// selection if it changed) and prime a drag anchored there.
    pub fn on_press(&mut self, x: Px) {
        if self.count() == 0 || !self.geometry.is_measured() {
            return;
        }
        let x = x.to_f32().clamp(0.0, self.geometry.width.to_f32());
        let current = self.offset.halt();
        let thumb = self.geometry.thumb_size.to_f32();
        let padding = self.geometry.padding.to_f32();

        let hit = self.geometry.segment_hit(x, self.count());
        self.choose(hit);

        let anchor = self.geometry.span_anchor(hit, self.count());
        self.session = Some(DragSession {
            origin_pixel: anchor,
            pointer_offset: x - anchor,
            dragging_thumb: x >= padding + current && x <= padding + current + thumb,
        });
        self.dragging = false;
    }

    /// Pointer-move: 1:1 capsule tracking over the travel span.
    pub fn on_move(&mut self, x: Px) {
        let Some(session) = self.session else {
            return;
        };
        if !self.geometry.is_measured() {
            return;
        }
        let target = self
            .geometry
            .clamp_span(x.to_f32() - session.pointer_offset);
        self.offset.snap_to(target);
        self.dragging = true;
    }

    /// Pointer-up: settle on the nearest segment anchor, committing
    /// the selection if the drag changed it.
    pub fn on_release(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        let was_dragging = self.dragging;
        self.dragging = false;
        if self.count() == 0 || !self.geometry.is_measured() {
            return;
        }
        if was_dragging {
            let nearest = self
                .geometry
                .nearest_span_index(self.offset.value(), self.count());
            trace!(from_thumb = session.dragging_thumb, nearest, "mode slider release");
            self.choose(nearest);
        }
    }

    /// External selection sync: animates the capsule onto `index`
    /// without firing `on_change`. Ignored while a drag is active.
    pub fn sync_selected(&mut self, index: usize) {
        if self.count() == 0 || self.session.is_some() {
            return;
        }
        self.selected = index.min(self.count() - 1);
        if self.geometry.is_measured() {
            let anchor = self.geometry.span_anchor(self.selected, self.count());
            self.offset.animate_to(anchor);
        }
    }

    /// Advances the snap animation to `now`.
    pub fn tick(&mut self, now: Instant) {
        self.offset.tick(now);
    }

    /// Pixel offset of the capsule's leading edge, including the track
    /// padding.
    pub fn capsule_offset(&self) -> Px {
        self.geometry.padding + Px::saturating_from_f32(self.offset.value().round())
    }

    /// Index of the selected option.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The selected option, if any exist.
    pub fn selected_option(&self) -> Option<&ModeOption> {
        self.options.get(self.selected)
    }

    /// The configured options.
    pub fn options(&self) -> &[ModeOption] {
        &self.options
    }

    /// Whether the capsule is tracking the pointer.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether a snap or sync animation is in flight.
    pub fn is_animating(&self) -> bool {
        self.offset.is_animating()
    }

    fn choose(&mut self, index: usize) {
        let anchor = self.geometry.span_anchor(index, self.count());
        self.offset.animate_to(anchor);
        if index != self.selected {
            self.selected = index;
            if let Some(option) = self.options.get(index) {
                debug!(index, id = %option.id, "mode slider commit");
            }
            if let Some(on_change) = &self.on_change {
                on_change.call(index);
            }
        }
    }
}

//! Gesture state machine for the slider family.
//!
//! Transitions run synchronously inside the host's pointer handlers:
//! Idle -> Pressed (hit-test, tap-to-jump) -> Dragging (1:1 tracking)
//! -> Released (snap/commit) -> Idle. The one ordering rule that
//! everything else leans on: a press must halt any in-flight animation
//! *before* hit-testing, so the gesture anchors to the pixel actually
//! under the pointer, never to an abandoned animation target.

use panelkit_foundation::Px;
use tracing::{debug, trace};

use super::{CommittedPosition, Slider, SliderMode};

/// Where the gesture machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DragPhase {
    /// No pointer contact.
    Idle,
    /// Contact down, no movement yet.
    Pressed,
    /// Contact down and tracking the pointer.
    Dragging,
}

/// Ephemeral record of one press-to-release interaction.
///
/// Created on press, consumed on release. Holding the anchor and the
/// pointer's offset within the thumb here (instead of re-deriving them
/// per move) is what keeps tracking stable when the thumb was grabbed
/// off-center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DragSession {
    /// Thumb offset the session started from.
    pub origin_pixel: f32,
    /// Horizontal distance from the thumb's leading edge to the
    /// pointer at press time.
    pub pointer_offset: f32,
    /// Whether the press landed on the thumb itself.
    pub dragging_thumb: bool,
}

impl Slider {
    /// Pointer-down at `x` (track-relative).
    ///
    /// On the thumb: anchor a drag there. On empty track: jump the
    /// indicator to the thumb-centered clamped target and anchor the
    /// drag at the jump target with a centered pointer offset. Either
    /// way any in-flight animation stops first and its frozen value is
    /// what gets hit-tested. Ignored while the track is unmeasured.
    pub fn on_press(&mut self, x: Px) {
        if !self.geometry.is_measured() {
            return;
        }
        let x = x.to_f32().clamp(0.0, self.geometry.width.to_f32());
        let current = self.offset.halt();
        let thumb = self.geometry.thumb_size.to_f32();

        let session = if x >= current && x <= current + thumb {
            DragSession {
                origin_pixel: current,
                pointer_offset: x - current,
                dragging_thumb: true,
            }
        } else {
            let jump = self.geometry.clamp_pixel(x - thumb / 2.0);
            self.offset.snap_to(jump);
            trace!(pixel = jump, "slider tap-to-jump");
            DragSession {
                origin_pixel: jump,
                pointer_offset: thumb / 2.0,
                dragging_thumb: false,
            }
        };

        self.session = Some(session);
        self.phase = DragPhase::Pressed;
    }

    /// Pointer-move to `x` while pressed.
    ///
    /// Tracks 1:1 with no easing; in continuous mode also reports the
    /// live trailing-edge ratio on every move. A move without a
    /// session (orphan event) is a no-op.
    pub fn on_move(&mut self, x: Px) {
        let Some(session) = self.session else {
            return;
        };
        if !self.geometry.is_measured() {
            return;
        }

        let raw = self
            .geometry
            .clamp_pixel(x.to_f32() - session.pointer_offset);
        self.offset.snap_to(raw);
        self.phase = DragPhase::Dragging;

        if self.mode == SliderMode::Continuous
            && let Some(on_value_change) = &self.on_value_change
        {
            on_value_change.call(self.geometry.pixel_to_ratio(raw));
        }
    }

    /// Pointer-up.
    ///
    /// Snap mode: quantize to the nearest slot, spring-animate the
    /// indicator onto it and commit the index if it changed.
    /// Continuous mode: report the exact released ratio once more. A
    /// release with no session is a no-op.
    pub fn on_release(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        let was_dragging = self.phase == DragPhase::Dragging;
        self.phase = DragPhase::Idle;

        if !self.geometry.is_measured() {
            return;
        }

        // A press that never moved resolves at its anchor; a drag
        // resolves at the live tracking value.
        let final_pixel = if was_dragging {
            self.offset.value()
        } else {
            session.origin_pixel
        };

        match self.mode {
            SliderMode::Discrete { step_count } => {
                let next = self.geometry.pixel_to_index(final_pixel, step_count);
                self.offset
                    .animate_to(self.geometry.index_to_pixel(next, step_count));
                if self.committed != CommittedPosition::Index(next) {
                    self.committed = CommittedPosition::Index(next);
                    debug!(index = next, from_thumb = session.dragging_thumb, "slider commit");
                    if let Some(on_change) = &self.on_change {
                        on_change.call(next);
                    }
                }
            }
            SliderMode::Continuous => {
                let ratio = self.geometry.pixel_to_ratio(final_pixel);
                self.committed = CommittedPosition::Ratio(ratio);
                if let Some(on_value_change) = &self.on_value_change {
                    on_value_change.call(ratio);
                }
            }
        }
    }
}

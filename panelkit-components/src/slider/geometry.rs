//! Pixel/step coordinate mapping for the slider family.
//!
//! Pure functions over an explicit [`TrackGeometry`]; no hidden state,
//! so every mapping can be unit-tested in isolation. Two mappings
//! coexist:
//!
//! - the *slot* mapping of the step slider: the track is divided into
//!   `step_count` equal slots and the thumb's left edge lands on slot
//!   boundaries (`index * width / step_count`);
//! - the *span* mapping of the segmented mode slider: a capsule thumb
//!   travels over `width - 2*padding - thumb_size`, anchored at
//!   `index / (count - 1)` fractions of that span.
//!
//! Ratios are measured at the thumb's trailing edge
//! (`(pixel + thumb_size) / width`), not its leading edge or center.
//! The filled portion of the track runs up to the trailing edge, and
//! the reported ratio must agree with what the fill shows.

use panelkit_foundation::Px;

/// Resolved geometry of a slider track.
///
/// Re-derived whenever the host reports a new layout width. A width of
/// zero means "not measured yet": every mapping returns 0 and the
/// interaction layer treats presses as no-ops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    /// Full track width as laid out by the host.
    pub width: Px,
    /// Width of the draggable thumb.
    pub thumb_size: Px,
    /// Inner padding on each end of the track (segmented variant).
    pub padding: Px,
}

impl TrackGeometry {
    /// Creates a geometry from its parts.
    pub const fn new(width: Px, thumb_size: Px, padding: Px) -> Self {
        Self {
            width,
            thumb_size,
            padding,
        }
    }

    /// Whether the host has reported a usable width.
    pub fn is_measured(&self) -> bool {
        self.width.0 > 0
    }

    /// The largest legal thumb offset, `width - thumb_size`, floored
    /// at 0 when the thumb is wider than the track.
    pub fn max_offset(&self) -> f32 {
        (self.width.0 - self.thumb_size.0).max(0) as f32
    }

    /// Clamps a raw pixel offset into `[0, max_offset]`.
    pub fn clamp_pixel(&self, pixel: f32) -> f32 {
        pixel.clamp(0.0, self.max_offset())
    }

    /// Slot mapping: pixel offset of the thumb for a step index.
    ///
    /// `step_count <= 1` degenerates to a single position at 0.
    pub fn index_to_pixel(&self, index: usize, step_count: usize) -> f32 {
        if step_count <= 1 || !self.is_measured() {
            return 0.0;
        }
        let slot = self.width.to_f32() / step_count as f32;
        self.clamp_pixel(index as f32 * slot)
    }

    /// Slot mapping: nearest step index for a pixel offset.
    ///
    /// Rounds half-up (ties go to the higher index) and always lands
    /// inside `[0, step_count - 1]`, whatever the raw input.
    pub fn pixel_to_index(&self, pixel: f32, step_count: usize) -> usize {
        if step_count <= 1 || !self.is_measured() {
            return 0;
        }
        let slot = self.width.to_f32() / step_count as f32;
        let raw = (pixel / slot).round();
        if raw <= 0.0 {
            0
        } else {
            (raw as usize).min(step_count - 1)
        }
    }

    /// Trailing-edge ratio of a pixel offset, clamped to `[0, 1]`.
    pub fn pixel_to_ratio(&self, pixel: f32) -> f32 {
        if !self.is_measured() {
            return 0.0;
        }
        ((pixel + self.thumb_size.to_f32()) / self.width.to_f32()).clamp(0.0, 1.0)
    }

    /// Inverse of [`pixel_to_ratio`](Self::pixel_to_ratio): pixel
    /// offset whose trailing edge sits at `ratio`.
    pub fn ratio_to_pixel(&self, ratio: f32) -> f32 {
        if !self.is_measured() {
            return 0.0;
        }
        self.clamp_pixel(ratio.clamp(0.0, 1.0) * self.width.to_f32() - self.thumb_size.to_f32())
    }

    /// Travel span of the segmented variant's capsule thumb:
    /// `width - 2*padding - thumb_size`, floored at 0.
    pub fn usable_width(&self) -> f32 {
        (self.width.0 - 2 * self.padding.0 - self.thumb_size.0).max(0) as f32
    }

    /// Clamps a capsule offset into `[0, usable_width]`.
    pub fn clamp_span(&self, pixel: f32) -> f32 {
        pixel.clamp(0.0, self.usable_width())
    }

    /// Span mapping: capsule offset anchoring segment `index` out of
    /// `count` evenly spaced anchors (both ends included).
    pub fn span_anchor(&self, index: usize, count: usize) -> f32 {
        if count <= 1 {
            return 0.0;
        }
        let last = (count - 1) as f32;
        (index.min(count - 1) as f32 / last) * self.usable_width()
    }

    /// Span mapping: nearest anchor index for a capsule offset.
    pub fn nearest_span_index(&self, pixel: f32, count: usize) -> usize {
        if count <= 1 {
            return 0;
        }
        let usable = self.usable_width();
        if usable <= 0.0 {
            return 0;
        }
        let ratio = (pixel / usable).clamp(0.0, 1.0);
        (ratio * (count - 1) as f32).round() as usize
    }

    /// Which of `count` equal segments a press x-coordinate falls in.
    pub fn segment_hit(&self, x: f32, count: usize) -> usize {
        if count == 0 || !self.is_measured() {
            return 0;
        }
        let segment = self.width.to_f32() / count as f32;
        ((x / segment).floor().max(0.0) as usize).min(count - 1)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn geom(width: i32, thumb: i32) -> TrackGeometry {
        TrackGeometry::new(Px(width), Px(thumb), Px::ZERO)
    }

    #[test]
    fn slot_mapping_matches_the_reference_track() {
        // 1200px track, 32px thumb, 6 steps: 200px slots.
        let g = geom(1200, 32);
        assert_eq!(g.index_to_pixel(0, 6), 0.0);
        assert_eq!(g.index_to_pixel(4, 6), 800.0);
        assert_eq!(g.pixel_to_index(800.0, 6), 4);
        // Slightly off-boundary positions round to the nearest slot.
        assert_eq!(g.pixel_to_index(890.0, 6), 4);
        assert_eq!(g.pixel_to_index(910.0, 6), 5);
    }

    #[test]
    fn half_slot_ties_round_up() {
        let g = geom(1200, 32);
        // 900 sits exactly between slot 4 (800) and slot 5 (1000).
        assert_eq!(g.pixel_to_index(900.0, 6), 5);
    }

    #[test]
    fn single_step_always_maps_to_zero() {
        let g = geom(1200, 32);
        assert_eq!(g.index_to_pixel(0, 1), 0.0);
        assert_eq!(g.index_to_pixel(5, 1), 0.0);
        assert_eq!(g.pixel_to_index(640.0, 1), 0);
        assert_eq!(g.index_to_pixel(3, 0), 0.0);
    }

    #[test]
    fn index_output_is_clamped_for_wild_pixels() {
        let g = geom(1200, 32);
        assert_eq!(g.pixel_to_index(-1.0e6, 6), 0);
        assert_eq!(g.pixel_to_index(1.0e6, 6), 5);
        assert_eq!(g.pixel_to_index(f32::NAN, 6), 0);
    }

    #[test]
    fn trailing_edge_ratio() {
        // width 300, thumb 80: offset 110 -> (110 + 80) / 300.
        let g = geom(300, 80);
        let ratio = g.pixel_to_ratio(110.0);
        assert!((ratio - 190.0 / 300.0).abs() < 1.0e-6);
        assert_eq!(g.pixel_to_ratio(-500.0), 0.0);
        assert_eq!(g.pixel_to_ratio(5000.0), 1.0);
    }

    #[test]
    fn ratio_pixel_inverse() {
        let g = geom(300, 80);
        let pixel = 110.0;
        let back = g.ratio_to_pixel(g.pixel_to_ratio(pixel));
        assert!((back - pixel).abs() < 1.0e-3);
    }

    #[test]
    fn degenerate_geometry_clamps_everything_to_zero() {
        let g = geom(0, 32);
        assert!(!g.is_measured());
        assert_eq!(g.clamp_pixel(500.0), 0.0);
        assert_eq!(g.index_to_pixel(3, 6), 0.0);
        assert_eq!(g.pixel_to_index(500.0, 6), 0);
        assert_eq!(g.pixel_to_ratio(500.0), 0.0);

        // Thumb wider than the track behaves the same way.
        let narrow = geom(20, 32);
        assert_eq!(narrow.clamp_pixel(10.0), 0.0);
    }

    #[test]
    fn span_mapping_matches_the_mode_track() {
        // The air-conditioner configuration: 4 segments, 80px capsule,
        // 4px padding, 400px track -> 312px of travel.
        let g = TrackGeometry::new(Px(400), Px(80), Px(4));
        assert_eq!(g.usable_width(), 312.0);
        assert_eq!(g.span_anchor(0, 4), 0.0);
        assert_eq!(g.span_anchor(3, 4), 312.0);
        assert_eq!(g.span_anchor(1, 4), 104.0);
        assert_eq!(g.nearest_span_index(104.0, 4), 1);
        assert_eq!(g.nearest_span_index(140.0, 4), 1);
        assert_eq!(g.nearest_span_index(170.0, 4), 2);
        assert_eq!(g.segment_hit(50.0, 4), 0);
        assert_eq!(g.segment_hit(150.0, 4), 1);
        assert_eq!(g.segment_hit(1.0e6, 4), 3);
    }

    proptest! {
        // Round-trip is exact whenever the thumb fits inside one slot,
        // because no index's pixel gets clamped away from its boundary.
        #[test]
        fn round_trip_is_exact_at_step_boundaries(
            step_count in 1usize..24,
            width in 64i32..2048,
            index_seed in 0usize..64,
            thumb_frac in 0.05f32..0.9,
        ) {
            let slot = width as f32 / step_count as f32;
            let thumb = ((slot * thumb_frac) as i32).max(1);
            prop_assume!((thumb as f32) < slot);
            let g = geom(width, thumb);
            let index = index_seed % step_count;
            prop_assert_eq!(
                g.pixel_to_index(g.index_to_pixel(index, step_count), step_count),
                index
            );
        }

        #[test]
        fn index_to_pixel_is_monotonic(
            step_count in 2usize..24,
            width in 64i32..2048,
            thumb in 1i32..64,
        ) {
            prop_assume!(width > thumb);
            let g = geom(width, thumb);
            let mut last = g.index_to_pixel(0, step_count);
            for index in 1..step_count {
                let next = g.index_to_pixel(index, step_count);
                prop_assert!(next >= last);
                last = next;
            }
        }

        #[test]
        fn pixel_to_index_never_escapes_bounds(
            step_count in 1usize..24,
            width in 1i32..2048,
            thumb in 1i32..128,
            pixel in -1.0e7f32..1.0e7,
        ) {
            let g = geom(width, thumb);
            let index = g.pixel_to_index(pixel, step_count);
            prop_assert!(index < step_count);
        }

        #[test]
        fn ratio_stays_normalized(
            width in 1i32..2048,
            thumb in 1i32..256,
            pixel in -1.0e7f32..1.0e7,
        ) {
            let g = geom(width, thumb);
            let ratio = g.pixel_to_ratio(pixel);
            prop_assert!((0.0..=1.0).contains(&ratio));
        }
    }
}

//! Density-independent pixels.
//!
//! Widget dimensions are declared in [`Dp`] and resolved to physical
//! pixels through a process-wide scale factor. The factor defaults to
//! 1.0 until the host reports the display density via
//! [`set_scale_factor`].

use std::{
    ops::{Add, Div, Mul, Sub},
    sync::OnceLock,
};

use parking_lot::RwLock;

use crate::px::Px;

/// Global dp-to-pixel scale factor.
///
/// Initialized lazily; reads before the host sets a density fall back
/// to 1.0 (one dp equals one physical pixel).
pub static SCALE_FACTOR: OnceLock<RwLock<f64>> = OnceLock::new();

/// Sets the global scale factor, creating the slot on first use.
pub fn set_scale_factor(factor: f64) {
    let lock = SCALE_FACTOR.get_or_init(|| RwLock::new(1.0));
    *lock.write() = factor;
}

fn scale_factor() -> f64 {
    SCALE_FACTOR.get().map(|lock| *lock.read()).unwrap_or(1.0)
}

/// A density-independent length.
///
/// Stores the dp measurement as `f64`; conversion to [`Px`] applies the
/// current [`SCALE_FACTOR`].
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dp(pub f64);

impl Dp {
    /// Zero dp.
    pub const ZERO: Self = Self(0.0);

    /// Converts to physical pixels, rounding to the nearest pixel.
    pub fn to_px(self) -> Px {
        Px((self.0 * scale_factor()).round() as i32)
    }

    /// Converts to physical pixels as `f32` without rounding.
    pub fn to_pixels_f32(self) -> f32 {
        (self.0 * scale_factor()) as f32
    }

    /// Creates a dp value from a physical pixel measurement.
    pub fn from_pixels_f32(pixels: f32) -> Self {
        Self(pixels as f64 / scale_factor())
    }
}

impl Add for Dp {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Dp {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul<f64> for Dp {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl Div<f64> for Dp {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self(self.0 / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_scale_round_trip() {
        // The default factor is 1.0, so dp and px coincide.
        assert_eq!(Dp(32.0).to_px(), Px(32));
        assert_eq!(Dp::from_pixels_f32(48.0).0, 48.0);
    }

    #[test]
    fn dp_arithmetic() {
        assert_eq!(Dp(16.0) + Dp(8.0), Dp(24.0));
        assert_eq!(Dp(16.0) - Dp(8.0), Dp(8.0));
        assert_eq!(Dp(16.0) * 2.0, Dp(32.0));
        assert_eq!(Dp(16.0) / 2.0, Dp(8.0));
    }
}

//! Animation primitives shared by the widgets.
//!
//! Two kinds of motion exist in the catalog: spring-driven positions
//! (slider thumbs snapping to a step) and short timed transitions
//! (switch thumbs). [`Spring`] integrates a damped point mass;
//! [`AnimatedOffset`] pairs one with a frame clock so widgets can be
//! ticked with wall-clock instants. The essential property of both is
//! interruptibility: [`Spring::halt`] freezes the value mid-flight so a
//! new gesture starts from what is actually on screen, never from the
//! abandoned target.

use std::time::Instant;

/// Largest integration step, in seconds. Longer frame gaps are clamped
/// so a stalled frame cannot catapult the spring past its target.
const MAX_DT: f32 = 0.05;

/// Displacement and velocity below which the spring is considered at
/// rest and locked onto its target.
const REST_THRESHOLD: f32 = 0.01;

const FALLBACK_FRAME_DT: f32 = 1.0 / 60.0;

/// Cubic ease-in-out mapping from linear progress to eased progress,
/// both in `0.0..=1.0`.
pub fn easing(progress: f32) -> f32 {
    let t = progress.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Stiffness/damping pair for a [`Spring`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    /// Restoring force per unit displacement.
    pub stiffness: f32,
    /// Opposing force per unit velocity.
    pub damping: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        // The snap feel used throughout the panel: slightly under
        // critical damping, settles without visible oscillation.
        Self {
            stiffness: 60.0,
            damping: 10.0,
        }
    }
}

/// A damped spring tracking a scalar target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    value: f32,
    velocity: f32,
    target: f32,
    params: SpringParams,
}

impl Spring {
    /// Creates a spring at rest at `value`.
    pub fn new(value: f32) -> Self {
        Self::with_params(value, SpringParams::default())
    }

    /// Creates a spring at rest at `value` with explicit parameters.
    pub fn with_params(value: f32, params: SpringParams) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            params,
        }
    }

    /// The current (possibly in-flight) value.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// The value the spring is heading toward.
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Starts animating toward `target` from the current value.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jumps to `value` with no animation.
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Stops any in-flight animation, freezing the value where it is.
    ///
    /// Returns the frozen value. This is the read a new gesture must
    /// use: the true current position, not the abandoned target.
    pub fn halt(&mut self) -> f32 {
        self.target = self.value;
        self.velocity = 0.0;
        self.value
    }

    /// Whether the spring is still moving toward its target.
    pub fn is_animating(&self) -> bool {
        (self.value - self.target).abs() >= REST_THRESHOLD
            || self.velocity.abs() >= REST_THRESHOLD
    }

    /// Advances the simulation by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        let dt = dt.clamp(0.0, MAX_DT);
        if self.params.stiffness <= 0.0 {
            self.snap_to(self.target);
            return;
        }

        let displacement = self.value - self.target;
        let acceleration =
            -self.params.stiffness * displacement - self.params.damping * self.velocity;

        self.velocity += acceleration * dt;
        self.value += self.velocity * dt;

        if (self.value - self.target).abs() < REST_THRESHOLD
            && self.velocity.abs() < REST_THRESHOLD
        {
            self.snap_to(self.target);
        }
    }
}

/// A spring-driven pixel offset with its own frame clock.
///
/// This owns the live position of a moving indicator. External code
/// never writes the value directly; it either snaps (layout passes,
/// 1:1 drag tracking), animates (release snap, external sync) or halts
/// (a new press interrupting an animation).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedOffset {
    spring: Spring,
    last_tick: Option<Instant>,
}

impl AnimatedOffset {
    /// Creates an offset at rest at `value`.
    pub fn new(value: f32) -> Self {
        Self {
            spring: Spring::new(value),
            last_tick: None,
        }
    }

    /// Creates an offset with explicit spring parameters.
    pub fn with_params(value: f32, params: SpringParams) -> Self {
        Self {
            spring: Spring::with_params(value, params),
            last_tick: None,
        }
    }

    /// The current pixel value.
    pub fn value(&self) -> f32 {
        self.spring.value()
    }

    /// The pixel value being animated toward.
    pub fn target(&self) -> f32 {
        self.spring.target()
    }

    /// Animates toward `target` from the current value.
    pub fn animate_to(&mut self, target: f32) {
        self.spring.set_target(target);
    }

    /// Jumps to `value` without animation.
    pub fn snap_to(&mut self, value: f32) {
        self.spring.snap_to(value);
    }

    /// Stops any in-flight animation and returns the frozen value.
    pub fn halt(&mut self) -> f32 {
        self.spring.halt()
    }

    /// Whether an animation is in flight.
    pub fn is_animating(&self) -> bool {
        self.spring.is_animating()
    }

    /// Advances the animation to `now`.
    pub fn tick(&mut self, now: Instant) {
        let dt = match self.last_tick {
            Some(last) => now.saturating_duration_since(last).as_secs_f32(),
            None => FALLBACK_FRAME_DT,
        };
        self.last_tick = Some(now);
        self.spring.update(dt);
    }
}

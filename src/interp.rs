//! Keyframe easing functions.
//!
//! Each function maps an animation frame lying between two keyframes
//! `(f1, v1)` and `(f2, v2)` to an in-between value. The normalized
//! position `fac = (frame - f1) / (f2 - f1)` is warped by the easing and
//! then mixes `v1` toward `v2`; at the keyframes themselves every easing
//! lands on `v1` and `v2` exactly.

use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, PI};

/// Hold `v1` across the whole span.
#[inline]
pub fn constant(_f1: f32, _f2: f32, v1: f32, _v2: f32, _frame: f32) -> f32 {
    v1
}

/// Straight-line blend from `v1` at `f1` to `v2` at `f2`.
///
/// Frames outside the span extrapolate. Equal keyframes divide by zero
/// and the non-finite result propagates per IEEE rules; callers own that
/// precondition.
#[inline]
pub fn linear(f1: f32, f2: f32, v1: f32, v2: f32, frame: f32) -> f32 {
    let fac = (frame - f1) / (f2 - f1);
    v1 * (1.0 - fac) + v2 * fac
}

/// Sinusoidal ease-in-out: flat at both keyframes, steepest midway.
#[inline]
pub fn sine(f1: f32, f2: f32, v1: f32, v2: f32, frame: f32) -> f32 {
    let fac = (frame - f1) / (f2 - f1);
    // Half a sine period shifted to run 0..1 over the span.
    let eased = ((PI * fac - FRAC_PI_2).sin() + 1.0) / 2.0;
    v1 * (1.0 - eased) + v2 * eased
}

/// Easing curve for one keyframe span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    Constant,
    Linear,
    /// The default: animations ease in and out unless told otherwise.
    #[default]
    Sine,
}

impl Easing {
    /// Evaluate this easing for `frame` between `(f1, v1)` and `(f2, v2)`.
    pub fn apply(self, f1: f32, f2: f32, v1: f32, v2: f32, frame: f32) -> f32 {
        match self {
            Easing::Constant => constant(f1, f2, v1, v2, frame),
            Easing::Linear => linear(f1, f2, v1, v2, frame),
            Easing::Sine => sine(f1, f2, v1, v2, frame),
        }
    }
}

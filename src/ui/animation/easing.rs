//! Easing curves
//!
//! Pure functions mapping linear progress `t ∈ [0, 1]` to eased progress.
//! Kept free of any clock so that they can be evaluated in tests.

use std::f32::consts::{FRAC_PI_2, PI};

/// Newton iterations before falling back to bisection
const NEWTON_ITERATIONS: usize = 8;
const NEWTON_EPSILON: f32 = 1e-6;
const BISECTION_ITERATIONS: usize = 32;

/// Easing curve for a timed animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// Symmetric in/out version of [`Easing::EASE`], the default for timed animations
    EaseInOut,
    /// CSS-style cubic bezier through `(0,0)`, `(x1,y1)`, `(x2,y2)`, `(1,1)`
    CubicBezier(f32, f32, f32, f32),
    /// Damped spring overshoot, parameterised by bounciness
    Elastic(f32),
}

impl Easing {
    /// Slow start, quick end
    pub const EASE: Self = Self::CubicBezier(0.42, 0.0, 1.0, 1.0);
    /// Used by the controller bar reveal
    pub const STANDARD: Self = Self::CubicBezier(0.25, 0.1, 0.25, 1.0);

    /// Evaluate the curve at `t` (clamped to `[0, 1]`)
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOut => in_out(t, |x| cubic_bezier(0.42, 0.0, 1.0, 1.0, x)),
            Self::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
            Self::Elastic(bounciness) => elastic(bounciness, t),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::EaseInOut
    }
}

/// Mirror an ease-in curve so it eases both in and out
fn in_out(t: f32, curve: impl Fn(f32) -> f32) -> f32 {
    if t < 0.5 {
        curve(t * 2.0) / 2.0
    } else {
        1.0 - curve((1.0 - t) * 2.0) / 2.0
    }
}

fn elastic(bounciness: f32, t: f32) -> f32 {
    let p = bounciness * PI;
    1.0 - (t * FRAC_PI_2).cos().powi(3) * (t * p).cos()
}

/// One coordinate of the bezier polynomial for control values `a`, `b`
fn bezier_axis(a: f32, b: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
}

fn bezier_axis_slope(a: f32, b: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * a + 6.0 * inv * s * (b - a) + 3.0 * s * s * (1.0 - b)
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let s = solve_parameter(x1, x2, t);
    bezier_axis(y1, y2, s)
}

/// Find the curve parameter whose x coordinate equals `x`
fn solve_parameter(x1: f32, x2: f32, x: f32) -> f32 {
    let mut s = x;
    for _ in 0..NEWTON_ITERATIONS {
        let error = bezier_axis(x1, x2, s) - x;
        if error.abs() < NEWTON_EPSILON {
            return s;
        }
        let slope = bezier_axis_slope(x1, x2, s);
        if slope.abs() < NEWTON_EPSILON {
            break;
        }
        s -= error / slope;
    }

    // Newton stalled on a flat segment
    let (mut low, mut high) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..BISECTION_ITERATIONS {
        let current = bezier_axis(x1, x2, s);
        if (current - x).abs() < NEWTON_EPSILON {
            break;
        }
        if current < x {
            low = s;
        } else {
            high = s;
        }
        s = (low + high) / 2.0;
    }
    s
}

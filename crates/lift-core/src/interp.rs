//! Numeric helpers shared by the motion and scheduling crates: range
//! clamping, tolerant float comparison, and the easing curves used by
//! boarding/alighting animations.

/// Clamp `num` into `[min, max]`.
#[inline]
pub fn clamp_number(num: f64, min: f64, max: f64) -> f64 {
    num.clamp(min, max)
}

/// Float equality within 1e-8 — the tolerance used for "is the elevator
/// exactly on a floor" checks.
#[inline]
pub fn epsilon_equals(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-8
}

/// Straight-line blend from `value0` to `value1` at parameter `x` in [0, 1].
#[inline]
pub fn linear_interpolate(value0: f64, value1: f64, x: f64) -> f64 {
    value0 + (value1 - value0) * x
}

/// Sigmoid-shaped blend: slow start, fast middle, slow end.  Exponent `a`
/// controls the steepness of the middle section.
#[inline]
fn pow_interpolate(value0: f64, value1: f64, x: f64, a: f64) -> f64 {
    value0 + (value1 - value0) * x.powf(a) / (x.powf(a) + (1.0 - x).powf(a))
}

/// The default easing for boarding animations (power 1.3).
#[inline]
pub fn cool_interpolate(value0: f64, value1: f64, x: f64) -> f64 {
    pow_interpolate(value0, value1, x, 1.3)
}

/// Which easing curve a tween uses.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Interpolation {
    Linear,
    /// `cool_interpolate` — the default for boarding movements.
    #[default]
    Cool,
}

impl Interpolation {
    /// Apply the curve at parameter `x` in [0, 1].
    #[inline]
    pub fn apply(self, value0: f64, value1: f64, x: f64) -> f64 {
        match self {
            Interpolation::Linear => linear_interpolate(value0, value1, x),
            Interpolation::Cool   => cool_interpolate(value0, value1, x),
        }
    }
}

//! Sign, comparison and interpolation helpers.

use crate::{Float, MinMax, One, Scalar, Zero};

/// Returns the absolute value of `x`.
///
/// The most negative value of a signed integer type saturates to [`Scalar::MAX`].
///
/// # Examples
///
/// ```
/// # use dvm_math::*;
/// assert_eq!(abs(-3i32), 3);
/// assert_eq!(abs(i8::MIN), i8::MAX);
/// assert_eq!(abs(-0.5f32), 0.5);
/// ```
pub fn abs<T: Scalar>(x: T) -> T {
    if x >= T::ZERO {
        x
    } else if x == T::MIN {
        T::MAX
    } else {
        T::ZERO - x
    }
}

/// Returns `-1`, `0` or `1` depending on the sign of `x`.
///
/// Zeros (including `-0.0`) and NaN are returned unchanged.
///
/// # Examples
///
/// ```
/// # use dvm_math::*;
/// assert_eq!(sign(-7i32), -1);
/// assert_eq!(sign(0i32), 0);
/// assert_eq!(sign(0.25f64), 1.0);
/// ```
pub fn sign<T: Scalar>(x: T) -> T {
    if x > T::ZERO {
        T::ONE
    } else if x < T::ZERO {
        T::ZERO - T::ONE
    } else {
        x
    }
}

/// Returns the smaller of `x` and `y`.
///
/// For floats, a NaN operand is ignored in favor of the other one.
pub fn min<T: Scalar>(x: T, y: T) -> T {
    MinMax::min(x, y)
}

/// Returns the larger of `x` and `y`.
///
/// For floats, a NaN operand is ignored in favor of the other one.
pub fn max<T: Scalar>(x: T, y: T) -> T {
    MinMax::max(x, y)
}

/// Clamps `x` to the range `[lo, hi]`, computed as `min(max(x, lo), hi)`.
///
/// No check is performed that `lo <= hi`; if it isn't, the result is `hi`.
///
/// # Examples
///
/// ```
/// # use dvm_math::*;
/// assert_eq!(clamp(5, 0, 3), 3);
/// assert_eq!(clamp(-0.5f32, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(2, 5, 1), 1);
/// ```
pub fn clamp<T: Scalar>(x: T, lo: T, hi: T) -> T {
    MinMax::clamp(x, lo, hi)
}

/// Returns `0` if `x < edge`, and `1` otherwise.
///
/// # Examples
///
/// ```
/// # use dvm_math::*;
/// assert_eq!(step(1.0f32, 0.5), 0.0);
/// assert_eq!(step(1.0f32, 1.0), 1.0);
/// ```
pub fn step<T: Scalar>(edge: T, x: T) -> T {
    if x < edge {
        T::ZERO
    } else {
        T::ONE
    }
}

/// Performs Hermite interpolation between `0` and `1` as `x` moves from `edge0` to `edge1`.
///
/// With `t = clamp((x - edge0) / (edge1 - edge0), 0, 1)`, this returns `t² (3 - 2t)`. If both
/// edges are equal, this is [`step`]`(edge0, x)`.
///
/// # Examples
///
/// ```
/// # use dvm_math::*;
/// assert_eq!(smoothstep(0.0f32, 1.0, 0.5), 0.5);
/// assert_eq!(smoothstep(0.0f32, 1.0, -3.0), 0.0);
/// assert_eq!(smoothstep(0.0f32, 1.0, 3.0), 1.0);
/// assert_eq!(smoothstep(2.0f32, 2.0, 3.0), 1.0);
/// ```
pub fn smoothstep<T: Scalar>(edge0: T, edge1: T, x: T) -> T {
    if edge0 == edge1 {
        return step(edge0, x);
    }

    let (e0, e1, x) = (edge0.to_float(), edge1.to_float(), x.to_float());
    let t = MinMax::clamp((x - e0) / (e1 - e0), T::Float::ZERO, T::Float::ONE);
    let three = T::Float::TWO + T::Float::ONE;
    T::from_float(t * t * (three - T::Float::TWO * t))
}

/// Blends `x` and `y` with weight `a`, returning `x * a + y * (1 - a)`.
///
/// `a` is clamped to `[0, 1]` first, so `a == 1` yields `x` and `a == 0` yields `y`.
///
/// # Examples
///
/// ```
/// # use dvm_math::*;
/// assert_eq!(mix(10.0f32, 20.0, 1.0), 10.0);
/// assert_eq!(mix(10.0f32, 20.0, 0.0), 20.0);
/// assert_eq!(mix(10.0f32, 20.0, 0.25), 17.5);
/// assert_eq!(mix(10i32, 20, 5.0), 10);
/// ```
pub fn mix<T: Scalar>(x: T, y: T, a: T::Float) -> T {
    let a = MinMax::clamp(a, T::Float::ZERO, T::Float::ONE);
    T::from_float(x.to_float() * a + y.to_float() * (T::Float::ONE - a))
}

/// Returns `true` if `x` is NaN. Always `false` for integer types.
pub fn is_nan<T: Scalar>(x: T) -> bool {
    !T::IS_INTEGER && x.to_float().is_nan()
}

/// Returns `true` if `x` is positive or negative infinity. Always `false` for integer types.
pub fn is_inf<T: Scalar>(x: T) -> bool {
    let x = x.to_float();
    !T::IS_INTEGER && !x.is_finite() && !x.is_nan()
}

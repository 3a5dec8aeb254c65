//! Rounding and remainders.
//!
//! All floating-point functions here truncate through an [`i64`] and correct the result, so they
//! only touch values small enough to have a fractional part. Anything at or above
//! [`Float::INTEGRAL_THRESHOLD`] in magnitude, as well as infinities and NaN, is already integral
//! (or has no sensible rounding) and is returned as-is.

use crate::{DomainError, Float, Guarded, Scalar};

pub mod guarded {
    use super::*;

    /// Computes `x mod y`, reporting a zero divisor.
    ///
    /// See [`modulo`][crate::modulo] for details.
    pub fn modulo<T: Scalar>(x: T, y: T) -> Guarded<T> {
        if y == T::ZERO {
            return Guarded::sentinel(T::ZERO, DomainError::ZeroDivisor);
        }

        if T::IS_INTEGER {
            let Some(quotient) = x.checked_div(y) else {
                // `MIN / -1`, which divides evenly.
                return Guarded::ok(T::ZERO);
            };
            let rem = x - quotient * y;
            // Truncated remainder to floored remainder.
            if rem != T::ZERO && (rem < T::ZERO) != (y < T::ZERO) {
                return Guarded::ok(rem + y);
            }
            return Guarded::ok(rem);
        }

        let (x, y) = (x.to_float(), y.to_float());
        Guarded::ok(T::from_float(x - y * floor_float(x / y)))
    }
}

/// Rounds `x` towards negative infinity.
///
/// # Examples
///
/// ```
/// # use dvm_math::*;
/// assert_eq!(floor(2.7f32), 2.0);
/// assert_eq!(floor(-2.5f32), -3.0);
/// assert_eq!(floor(-3.0f64), -3.0);
/// assert_eq!(floor(7u8), 7);
/// ```
pub fn floor<T: Scalar>(x: T) -> T {
    if T::IS_INTEGER {
        return x;
    }
    T::from_float(floor_float(x.to_float()))
}

/// Rounds `x` towards positive infinity.
///
/// # Examples
///
/// ```
/// # use dvm_math::*;
/// assert_eq!(ceil(2.1f32), 3.0);
/// assert_eq!(ceil(-2.5f64), -2.0);
/// assert_eq!(ceil(4.0f64), 4.0);
/// ```
pub fn ceil<T: Scalar>(x: T) -> T {
    if T::IS_INTEGER {
        return x;
    }
    T::from_float(ceil_float(x.to_float()))
}

/// Rounds `x` to the nearest integer.
///
/// A fractional part of exactly one half rounds down, towards negative infinity.
///
/// # Examples
///
/// ```
/// # use dvm_math::*;
/// assert_eq!(round(2.6f32), 3.0);
/// assert_eq!(round(2.5f32), 2.0);
/// assert_eq!(round(-2.6f64), -3.0);
/// assert_eq!(round(-2.4f64), -2.0);
/// ```
pub fn round<T: Scalar>(x: T) -> T {
    if T::IS_INTEGER {
        return x;
    }

    let x = x.to_float();
    let floor = floor_float(x);
    if x - floor > T::Float::HALF {
        T::from_float(ceil_float(x))
    } else {
        T::from_float(floor)
    }
}

/// Rounds `x` towards zero.
///
/// # Examples
///
/// ```
/// # use dvm_math::*;
/// assert_eq!(trunc(2.7f32), 2.0);
/// assert_eq!(trunc(-2.7f32), -2.0);
/// ```
pub fn trunc<T: Scalar>(x: T) -> T {
    if T::IS_INTEGER {
        return x;
    }
    let x = x.to_float();
    if !has_fraction(x) {
        return T::from_float(x);
    }
    T::from_float(T::Float::from_i64(x.to_i64()))
}

/// Returns the fractional part of `x`, `x - floor(x)`.
///
/// The result is always in `[0, 1)` for finite inputs, and `0` for integer types.
///
/// # Examples
///
/// ```
/// # use dvm_math::*;
/// assert_eq!(fract(2.25f32), 0.25);
/// assert_eq!(fract(-2.25f32), 0.75);
/// assert_eq!(fract(9i32), 0);
/// ```
pub fn fract<T: Scalar>(x: T) -> T {
    if T::IS_INTEGER {
        return T::ZERO;
    }
    let x = x.to_float();
    T::from_float(x - floor_float(x))
}

/// Computes `x - y * floor(x / y)`.
///
/// The result has the sign of `y`. A zero divisor yields `0`.
///
/// # Examples
///
/// ```
/// # use dvm_math::*;
/// assert_eq!(modulo(7i32, 3), 1);
/// assert_eq!(modulo(-7i32, 3), 2);
/// assert_eq!(modulo(5.5f32, 2.0), 1.5);
/// assert_eq!(modulo(-1.0f64, 4.0), 3.0);
/// assert_eq!(modulo(5u8, 0), 0);
/// ```
pub fn modulo<T: Scalar>(x: T, y: T) -> T {
    guarded::modulo(x, y).value()
}

/// Returns `true` if `x` is a finite float that may have a non-zero fractional part.
fn has_fraction<F: Float>(x: F) -> bool {
    x.is_finite() && x < F::INTEGRAL_THRESHOLD && x > -F::INTEGRAL_THRESHOLD
}

pub(crate) fn floor_float<F: Float>(x: F) -> F {
    if !has_fraction(x) {
        return x;
    }
    let truncated = F::from_i64(x.to_i64());
    if truncated > x {
        truncated - F::ONE
    } else {
        truncated
    }
}

pub(crate) fn ceil_float<F: Float>(x: F) -> F {
    if !has_fraction(x) {
        return x;
    }
    let truncated = F::from_i64(x.to_i64());
    if truncated < x {
        truncated + F::ONE
    } else {
        truncated
    }
}

pub(crate) fn is_integral<F: Float>(x: F) -> bool {
    floor_float(x) == x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_ceil_negative() {
        assert_eq!(floor(-0.5f32), -1.0);
        assert_eq!(ceil(-0.5f32), 0.0);
        assert_eq!(floor(-1.0f32), -1.0);
        assert_eq!(ceil(-1.0f32), -1.0);
        assert_eq!(floor(-1e-30f64), -1.0);
        assert_eq!(ceil(1e-30f64), 1.0);
    }

    #[test]
    fn large_and_special() {
        let big = 1e20f64;
        assert_eq!(floor(big), big);
        assert_eq!(ceil(-big), -big);
        assert_eq!(round(8388609.0f32), 8388609.0);
        assert_eq!(floor(8388607.5f32), 8388607.0);
        assert_eq!(floor(f32::INFINITY), f32::INFINITY);
        assert_eq!(ceil(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert!(floor(f32::NAN).is_nan());
        assert!(round(f64::NAN).is_nan());
        assert_eq!(trunc(f32::MAX), f32::MAX);
    }

    #[test]
    fn rounding() {
        for i in -100..100 {
            let x = i as f64 * 0.1;
            assert!(floor(x) <= x && x - floor(x) < 1.0, "floor({x})");
            assert!(ceil(x) >= x && ceil(x) - x < 1.0, "ceil({x})");
            assert!((round(x) - x).abs() <= 0.5, "round({x})");
            assert!(trunc(x).abs() <= x.abs(), "trunc({x})");
            assert!((0.0..1.0).contains(&fract(x)), "fract({x})");
        }
        assert_eq!(round(-2.5f32), -3.0);
        assert_eq!(round(0.49f32), 0.0);
        assert_eq!(round(0.51f32), 1.0);
    }

    #[test]
    fn integers_unchanged() {
        assert_eq!(floor(-7i32), -7);
        assert_eq!(ceil(u64::MAX), u64::MAX);
        assert_eq!(round(i8::MIN), i8::MIN);
        assert_eq!(trunc(3i16), 3);
        assert_eq!(fract(3u32), 0);
    }

    #[test]
    fn modulo_values() {
        assert_eq!(modulo(7i32, -3), -2);
        assert_eq!(modulo(-7i32, -3), -1);
        assert_eq!(modulo(6i32, 3), 0);
        assert_eq!(modulo(-6i32, 3), 0);
        assert_eq!(modulo(i32::MIN, -1), 0);
        assert_eq!(modulo(200u8, 7), 4);
        assert_eq!(modulo(7.5f64, -2.0), -0.5);
        assert_eq!(modulo(0.0f32, 3.0), 0.0);
    }

    #[test]
    fn modulo_zero() {
        assert_eq!(modulo(5i32, 0), 0);
        assert_eq!(modulo(5.0f32, 0.0), 0.0);
        assert_eq!(
            guarded::modulo(5.0f32, 0.0).error(),
            Some(DomainError::ZeroDivisor)
        );
        assert_eq!(guarded::modulo(5.0f32, 2.0).error(), None);
    }
}

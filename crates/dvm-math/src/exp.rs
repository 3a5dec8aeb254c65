//! Exponential, logarithm and power functions.

use crate::{abs, round::is_integral, DomainError, Float, Guarded, Scalar, Zero};

/// Number of `atanh` series terms summed by [`log`].
const LOG_SERIES_TERMS: u32 = 100;

/// Cap on each of the range reduction loops in [`log`].
///
/// Reducing the smallest [`f64`] subnormal takes 745 steps, so this only matters for inputs that
/// defeat the comparisons.
const MAX_LOG_REDUCTION_STEPS: u32 = 2048;

pub mod guarded {
    use super::*;

    /// Computes the natural logarithm of `x`, reporting non-positive inputs.
    ///
    /// See [`log`][crate::log] for details.
    pub fn log<T: Scalar>(x: T) -> Guarded<T> {
        if x <= T::ZERO {
            return Guarded::sentinel(T::from_i64(-1), DomainError::NonPositiveLog);
        }
        Guarded::ok(T::from_float(ln(log_argument(x))))
    }

    /// Computes the base-2 logarithm of `x`, reporting non-positive inputs.
    ///
    /// See [`log2`][crate::log2] for details.
    pub fn log2<T: Scalar>(x: T) -> Guarded<T> {
        if x <= T::ZERO {
            return Guarded::sentinel(T::from_i64(-1), DomainError::NonPositiveLog);
        }
        Guarded::ok(T::from_float(ln(log_argument(x)) / T::Float::LN_2))
    }

    /// Raises `base` to the power of `exponent`, reporting undefined combinations.
    ///
    /// See [`pow`][crate::pow] for details.
    pub fn pow<T: Scalar>(base: T, exponent: T) -> Guarded<T> {
        if T::IS_INTEGER {
            return powi(base, exponent.to_i64());
        }

        let (b, e) = (base.to_float(), exponent.to_float());
        if e == T::Float::ZERO {
            return Guarded::ok(T::ONE);
        }
        if b == T::Float::ZERO {
            return Guarded::ok(if e > T::Float::ZERO {
                T::ZERO
            } else {
                T::from_float(T::Float::INFINITY)
            });
        }
        let mut b = b;
        if b < T::Float::ZERO {
            if !is_integral(e) {
                return Guarded::sentinel(T::ZERO, DomainError::NegativePowBase);
            }
            if abs(e) < T::Float::INTEGRAL_THRESHOLD {
                return powi(base, e.to_i64());
            }
            // Floats this large are all even, and may not fit in an `i64`.
            b = -b;
        }

        Guarded::ok(T::from_float(taylor_exp(e * ln(b))))
    }

    /// Raises `base` to the integer power `exponent` by repeated squaring.
    ///
    /// Reports integer results that would require a division by zero.
    ///
    /// See [`powi`][crate::powi] for details.
    pub fn powi<T: Scalar>(base: T, exponent: i64) -> Guarded<T> {
        let magnitude = pow_unsigned(base, exponent.unsigned_abs());
        if exponent >= 0 {
            return Guarded::ok(magnitude);
        }
        match T::ONE.checked_div(magnitude) {
            Some(reciprocal) => Guarded::ok(reciprocal),
            None => Guarded::sentinel(T::ZERO, DomainError::ZeroDivisor),
        }
    }
}

/// Computes `e^x` by summing its Taylor series.
///
/// The computation is performed in the [`Scalar::Float`] representative of `T`; integer results
/// are truncated.
///
/// # Examples
///
/// ```
/// # use dvm_math::*;
/// assert_eq!(exp(0.0f64), 1.0);
/// assert!((exp(1.0f64) - std::f64::consts::E).abs() < 1e-14);
/// assert_eq!(exp(2i32), 7);
/// ```
pub fn exp<T: Scalar>(x: T) -> T {
    T::from_float(taylor_exp(x.to_float()))
}

/// Computes `2^x`.
///
/// Integer types use exact repeated doubling, saturating at [`Scalar::MAX`]. Negative integer
/// exponents yield `0`.
///
/// # Examples
///
/// ```
/// # use dvm_math::*;
/// assert_eq!(exp2(10u32), 1024);
/// assert_eq!(exp2(9u8), 255);
/// assert_eq!(exp2(-1i32), 0);
/// assert!((exp2(0.5f32) - std::f32::consts::SQRT_2).abs() < 1e-6);
/// ```
pub fn exp2<T: Scalar>(x: T) -> T {
    if T::IS_INTEGER {
        let n = x.to_i64();
        if n < 0 {
            return T::ZERO;
        }
        return pow_unsigned(T::ONE + T::ONE, n.unsigned_abs());
    }

    T::from_float(taylor_exp(x.to_float() * T::Float::LN_2))
}

/// Computes the natural logarithm of `x`.
///
/// Zero and negative inputs yield `-1` (saturated to `0` for unsigned types). `+∞` and NaN are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// # use dvm_math::*;
/// assert_eq!(log(1.0f32), 0.0);
/// assert!((log(std::f64::consts::E) - 1.0).abs() < 1e-14);
/// assert_eq!(log(0.0f32), -1.0);
/// assert_eq!(log(-5i32), -1);
/// ```
pub fn log<T: Scalar>(x: T) -> T {
    guarded::log(x).value()
}

/// Computes the base-2 logarithm of `x`.
///
/// Like [`log`], zero and negative inputs yield `-1`.
///
/// # Examples
///
/// ```
/// # use dvm_math::*;
/// assert!((log2(8.0f64) - 3.0).abs() < 1e-14);
/// assert_eq!(log2(-8.0f64), -1.0);
/// ```
pub fn log2<T: Scalar>(x: T) -> T {
    guarded::log2(x).value()
}

/// Raises `base` to the power of `exponent`.
///
/// For integer types, this is [`powi`]. For floating-point types:
///
/// - A zero exponent yields `1` (including for a zero base).
/// - A zero base yields `0` for positive exponents and `+∞` for negative ones.
/// - A negative base is allowed if the exponent is integral; the result then carries the right
///   sign. Fractional exponents of negative bases yield `0`.
/// - Everything else is computed as `exp(exponent * log(base))`.
///
/// # Examples
///
/// ```
/// # use dvm_math::*;
/// assert_eq!(pow(2i32, 10), 1024);
/// assert_eq!(pow(0.0f32, 0.0), 1.0);
/// assert_eq!(pow(-2.0f64, 3.0), -8.0);
/// assert_eq!(pow(-2.0f64, 0.5), 0.0);
/// assert!((pow(9.0f64, 0.5) - 3.0).abs() < 1e-14);
/// ```
pub fn pow<T: Scalar>(base: T, exponent: T) -> T {
    guarded::pow(base, exponent).value()
}

/// Raises `base` to the integer power `exponent`.
///
/// Negative exponents yield the reciprocal of the positive power. Integer types saturate instead
/// of overflowing, and yield `0` when the reciprocal would divide by zero.
///
/// # Examples
///
/// ```
/// # use dvm_math::*;
/// assert_eq!(powi(3i32, 4), 81);
/// assert_eq!(powi(2.0f32, -2), 0.25);
/// assert_eq!(powi(10i8, 3), i8::MAX);
/// assert_eq!(powi(0i32, -1), 0);
/// ```
pub fn powi<T: Scalar>(base: T, exponent: i64) -> T {
    guarded::powi(base, exponent).value()
}

pub(crate) fn pow_unsigned<T: Scalar>(mut base: T, mut exponent: u64) -> T {
    let mut result = T::ONE;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = result.saturating_mul(base);
        }
        exponent >>= 1;
        if exponent > 0 {
            base = base.saturating_mul(base);
        }
    }
    result
}

fn taylor_exp<F: Float>(x: F) -> F {
    if x < F::ZERO {
        // The alternating series cancels catastrophically for negative arguments.
        return F::ONE / taylor_exp(-x);
    }

    let mut sum = F::ONE;
    let mut term = F::ONE;
    let mut n = F::ONE;
    loop {
        term = term * (x / n);
        // A non-finite sum also covers NaN input.
        if term == F::ZERO || !sum.is_finite() {
            return sum;
        }
        sum = sum + term;
        n = n + F::ONE;
    }
}

/// Converts a positive `x` for [`ln`].
///
/// Integers beyond the range of their float representative are clamped to its largest value.
fn log_argument<T: Scalar>(x: T) -> T::Float {
    let value = x.to_float();
    if T::IS_INTEGER && !value.is_finite() {
        return T::Float::MAX;
    }
    value
}

/// Natural logarithm of a positive float.
pub(crate) fn ln<F: Float>(x: F) -> F {
    if x == F::ONE {
        return F::ZERO;
    }
    if !x.is_finite() {
        return x;
    }

    // Bring `x` into `[e, e²]`, where the series below converges quickly.
    let e2 = F::E * F::E;
    let mut x = x;
    let mut shift = F::ZERO;
    let mut steps = 0;
    while x < F::E && steps < MAX_LOG_REDUCTION_STEPS {
        x = x * F::E;
        shift = shift - F::ONE;
        steps += 1;
    }
    steps = 0;
    while x > e2 && steps < MAX_LOG_REDUCTION_STEPS {
        x = x / F::E;
        shift = shift + F::ONE;
        steps += 1;
    }

    // ln(x) = 2 atanh((x - 1) / (x + 1))
    let t = (x - F::ONE) / (x + F::ONE);
    let t2 = t * t;
    let mut power = t;
    let mut sum = F::ZERO;
    for k in 0..LOG_SERIES_TERMS {
        sum = sum + power / F::from_i64(i64::from(2 * k + 1));
        power = power * t2;
    }

    F::TWO * sum + shift
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn exp_values() {
        assert_eq!(exp(0.0f32), 1.0);
        assert_relative_eq!(exp(1.0f64), std::f64::consts::E, max_relative = 1e-15);
        assert_relative_eq!(exp(1.0f32), std::f32::consts::E, max_relative = 1e-6);
        assert_relative_eq!(exp(10.0f64), 22026.465794806718, max_relative = 1e-14);
        assert_relative_eq!(exp(-1.0f64), 1.0 / std::f64::consts::E, max_relative = 1e-15);
        assert_relative_eq!(exp(-20.0f64), 2.061153622438558e-9, max_relative = 1e-13);
        assert_relative_eq!(exp(700.0f64), 1.0142320547350045e304, max_relative = 1e-12);
    }

    #[test]
    fn exp_edges() {
        assert_relative_eq!(exp(709.0f64), 8.218407461554972e307, max_relative = 1e-11);
        assert_relative_eq!(exp(88.0f32), 1.6516363e38, max_relative = 1e-4);
        assert_eq!(exp(1000.0f64), f64::INFINITY);
        assert_eq!(exp(100.0f32), f32::INFINITY);
        assert_eq!(exp(-1000.0f64), 0.0);
        assert_eq!(exp(f32::INFINITY), f32::INFINITY);
        assert_eq!(exp(f32::NEG_INFINITY), 0.0);
        assert!(exp(f64::NAN).is_nan());
        assert_eq!(exp(1u8), 2);
        assert_eq!(exp(0i64), 1);
    }

    #[test]
    fn exp2_values() {
        assert_eq!(exp2(0u32), 1);
        assert_eq!(exp2(31u32), 1 << 31);
        assert_eq!(exp2(62i64), 1 << 62);
        assert_eq!(exp2(63i64), i64::MAX);
        assert_eq!(exp2(7i8), i8::MAX);
        assert_eq!(exp2(i64::MAX), i64::MAX);
        assert_eq!(exp2(-3i16), 0);
        assert_relative_eq!(exp2(3.0f64), 8.0, max_relative = 1e-14);
        assert_relative_eq!(exp2(-1.0f32), 0.5, max_relative = 1e-6);
    }

    #[test]
    fn log_values() {
        assert_eq!(log(1.0f64), 0.0);
        assert_relative_eq!(log(2.0f64), std::f64::consts::LN_2, max_relative = 1e-14);
        assert_relative_eq!(log(10.0f64), std::f64::consts::LN_10, max_relative = 1e-14);
        assert_relative_eq!(log(0.5f32), -std::f32::consts::LN_2, max_relative = 1e-5);
        assert_relative_eq!(log(1e-10f64), -23.025850929940457, max_relative = 1e-13);
        assert_relative_eq!(log(1e100f64), 230.25850929940458, max_relative = 1e-13);
        assert_abs_diff_eq!(log(std::f64::consts::E * std::f64::consts::E), 2.0, epsilon = 1e-14);
        assert_eq!(log(100i32), 4);
        assert_eq!(log(1u8), 0);
    }

    #[test]
    fn log_of_huge_integers() {
        assert_eq!(log(u128::MAX), 88);
        assert_eq!(log(i128::MAX), 88);
        assert!((127..=128).contains(&log2(u128::MAX)));
        assert_eq!(guarded::log(u128::MAX).error(), None);
    }

    #[test]
    fn log_extremes_terminate() {
        assert_relative_eq!(log(f64::MAX), 709.782712893384, max_relative = 1e-12);
        assert_relative_eq!(log(f64::MIN_POSITIVE), -708.3964185322641, max_relative = 1e-12);
        assert_relative_eq!(log(f32::MAX), 88.72284, max_relative = 1e-5);
        // Subnormals lose precision in the first reduction steps.
        assert_relative_eq!(log(f64::from_bits(1)), -744.4400719213812, max_relative = 1e-3);
        assert_relative_eq!(log(f32::from_bits(1)), -103.27893, max_relative = 1e-3);
    }

    #[test]
    fn log_edges() {
        assert_eq!(log(0.0f32), -1.0);
        assert_eq!(log(-0.0f32), -1.0);
        assert_eq!(log(-2.0f64), -1.0);
        assert_eq!(log(0u32), 0);
        assert_eq!(log(f64::INFINITY), f64::INFINITY);
        assert_eq!(log(f64::NEG_INFINITY), -1.0);
        assert!(log(f32::NAN).is_nan());
        assert_eq!(guarded::log(0.0f32).error(), Some(DomainError::NonPositiveLog));
        assert_eq!(guarded::log(0.5f32).error(), None);
    }

    #[test]
    fn log2_values() {
        assert_relative_eq!(log2(1024.0f64), 10.0, max_relative = 1e-14);
        assert_relative_eq!(log2(0.125f32), -3.0, max_relative = 1e-5);
        assert_eq!(log2(0.0f64), -1.0);
        assert_eq!(guarded::log2(-1.0f64).error(), Some(DomainError::NonPositiveLog));
    }

    #[test]
    fn exp_log_inverse() {
        for i in 1..100 {
            let x = i as f64 * 0.73;
            assert_relative_eq!(exp(log(x)), x, max_relative = 1e-13);
            assert_relative_eq!(log(exp(x)), x, max_relative = 1e-13);
        }
    }

    #[test]
    fn pow_floats() {
        assert_eq!(pow(5.0f32, 0.0), 1.0);
        assert_eq!(pow(0.0f32, 0.0), 1.0);
        assert_eq!(pow(0.0f64, 3.0), 0.0);
        assert_eq!(pow(0.0f64, -3.0), f64::INFINITY);
        assert_eq!(pow(-2.0f64, 3.0), -8.0);
        assert_eq!(pow(-2.0f64, -2.0), 0.25);
        assert_relative_eq!(pow(2.0f64, 0.5), std::f64::consts::SQRT_2, max_relative = 1e-14);
        assert_relative_eq!(pow(10.0f64, 3.0), 1000.0, max_relative = 1e-13);
        assert_relative_eq!(pow(4.0f32, -0.5), 0.5, max_relative = 1e-5);
    }

    #[test]
    fn pow_domain() {
        assert_eq!(pow(-2.0f64, 0.5), 0.0);
        assert_eq!(
            guarded::pow(-2.0f64, 0.5).error(),
            Some(DomainError::NegativePowBase)
        );
        assert_eq!(guarded::pow(-2.0f64, 2.0).error(), None);
    }

    #[test]
    fn pow_negative_base_huge_exponent() {
        assert_eq!(pow(-1.0f64, 1e20), 1.0);
        assert_eq!(pow(-1.0f64, -1e20), 1.0);
        assert_eq!(pow(-2.0f64, 1e20), f64::INFINITY);
        assert_eq!(pow(-0.5f64, 1e20), 0.0);
        assert_eq!(pow(-1.0f32, 3e10), 1.0);
        assert_eq!(pow(-1.0f64, 9007199254740991.0), -1.0);
    }

    #[test]
    fn pow_integers() {
        assert_eq!(pow(2u32, 10), 1024);
        assert_eq!(pow(-3i32, 3), -27);
        assert_eq!(pow(7i64, 0), 1);
        assert_eq!(pow(2u8, 100), u8::MAX);
        assert_eq!(pow(-2i8, 9), i8::MIN);
    }

    #[test]
    fn powi_values() {
        assert_eq!(powi(2.0f64, 10), 1024.0);
        assert_eq!(powi(2.0f64, -3), 0.125);
        assert_eq!(powi(-1.5f32, 2), 2.25);
        assert_eq!(powi(1i32, -5), 1);
        assert_eq!(powi(-1i32, -5), -1);
        assert_eq!(powi(2i32, -1), 0);
        assert_eq!(powi(0i32, -2), 0);
        assert_eq!(guarded::powi(0i32, -2).error(), Some(DomainError::ZeroDivisor));
        assert_eq!(guarded::powi(2i32, -1).error(), None);
        assert_eq!(powi(0.0f32, -1), f32::INFINITY);
        assert_eq!(powi(3u64, i64::MAX), u64::MAX);
        assert_eq!(powi(1u64, i64::MIN), 1);
    }
}

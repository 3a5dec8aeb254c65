use crate::{DomainError, Float, Guarded, Scalar};

/// Upper bound on Newton-Raphson steps.
///
/// Seeding with the input itself means large values first halve their way down towards the root,
/// which takes about 512 steps for the largest finite [`f64`].
const MAX_ITERATIONS: usize = 520;

pub mod guarded {
    use super::*;

    /// Computes the square root of `value`, reporting negative inputs.
    ///
    /// See [`sqrt`][crate::sqrt] for details.
    pub fn sqrt<T: Scalar>(value: T) -> Guarded<T> {
        if value < T::ZERO {
            return Guarded::sentinel(T::ZERO, DomainError::NegativeSqrt);
        }
        Guarded::ok(positive_root(value))
    }

    /// Computes `1 / sqrt(value)`, reporting non-positive inputs.
    ///
    /// See [`inverse_sqrt`][crate::inverse_sqrt] for details.
    pub fn inverse_sqrt<T: Scalar>(value: T) -> Guarded<T> {
        if value <= T::ZERO {
            return Guarded::sentinel(T::ZERO, DomainError::NonPositiveInverseSqrt);
        }
        Guarded::ok(T::ONE / positive_root(value))
    }
}

/// Computes the square root of `value` via Newton-Raphson iteration.
///
/// Negative inputs yield `0`. For integer types, the result is the largest integer whose square
/// does not exceed `value` (ie. `⌊√value⌋`), and is computed without overflow for every input.
///
/// # Examples
///
/// ```
/// # use dvm_math::*;
/// assert_eq!(sqrt(16.0f32), 4.0);
/// assert_eq!(sqrt(15u32), 3);
/// assert_eq!(sqrt(-4i32), 0);
/// assert!((sqrt(0.25f64) - 0.5).abs() < 1e-15);
/// ```
pub fn sqrt<T: Scalar>(value: T) -> T {
    guarded::sqrt(value).value()
}

/// Computes `1 / sqrt(value)`.
///
/// Zero and negative inputs yield `0`.
///
/// # Examples
///
/// ```
/// # use dvm_math::*;
/// assert_eq!(inverse_sqrt(4.0f32), 0.5);
/// assert_eq!(inverse_sqrt(0.0f32), 0.0);
/// ```
pub fn inverse_sqrt<T: Scalar>(value: T) -> T {
    guarded::inverse_sqrt(value).value()
}

fn positive_root<T: Scalar>(value: T) -> T {
    if value == T::ZERO {
        return value;
    }
    // Integers never leave their own type, even when they exceed the float range.
    if !T::IS_INTEGER && !value.to_float().is_finite() {
        // Passes NaN and +inf through.
        return value;
    }

    if value < T::ONE {
        // Only reachable for floats.
        let reciprocal = T::ONE / value;
        if reciprocal.to_float().is_finite() {
            return T::ONE / newton(reciprocal, reciprocal);
        }
        // Tiny subnormals: the root lies in `(value, 1)`, so 1 is an upper bound to seed with.
        return newton(value, T::ONE);
    }

    newton(value, value)
}

/// Runs Newton's method from `seed`, which must not be below the root.
fn newton<T: Scalar>(value: T, seed: T) -> T {
    let tolerance = T::EPSILON * value;
    let mut result = seed;
    for _ in 0..MAX_ITERATIONS {
        if !result.square_exceeds(value, tolerance) {
            break;
        }
        result = result.average(value / result);
    }
    result
}

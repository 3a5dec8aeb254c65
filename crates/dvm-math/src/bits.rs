//! Bit reinterpretation and mantissa/exponent decomposition.

use crate::{exp::ln, exp::pow_unsigned, round::floor_float, Float};

/// Largest power-of-two exponent applied in a single scaling step.
///
/// `2^60` is a normal number in both [`f32`] and [`f64`].
const SCALE_CHUNK: i32 = 60;

/// Reinterprets the bits of an [`f32`] as an [`i32`].
///
/// # Examples
///
/// ```
/// # use dvm_math::*;
/// assert_eq!(float_bits_to_int(1.0), 0x3f80_0000);
/// assert_eq!(float_bits_to_int(-0.0), i32::MIN);
/// ```
#[inline]
pub fn float_bits_to_int(value: f32) -> i32 {
    bytemuck::cast(value)
}

/// Reinterprets the bits of an [`f32`] as a [`u32`].
///
/// # Examples
///
/// ```
/// # use dvm_math::*;
/// assert_eq!(float_bits_to_uint(-2.0), 0xc000_0000);
/// ```
#[inline]
pub fn float_bits_to_uint(value: f32) -> u32 {
    bytemuck::cast(value)
}

/// Reinterprets the bits of an [`i32`] as an [`f32`].
#[inline]
pub fn int_bits_to_float(value: i32) -> f32 {
    bytemuck::cast(value)
}

/// Reinterprets the bits of a [`u32`] as an [`f32`].
#[inline]
pub fn uint_bits_to_float(value: u32) -> f32 {
    bytemuck::cast(value)
}

/// Splits `x` into a fraction in `[0.5, 1)` (in magnitude) and a power of two.
///
/// Returns `(fraction, exponent)` such that `x == fraction * 2^exponent`. Zero is returned as
/// `(x, 0)`, as are infinities and NaN.
///
/// # Examples
///
/// ```
/// # use dvm_math::*;
/// assert_eq!(frexp(8.0f32), (0.5, 4));
/// assert_eq!(frexp(-3.0f64), (-0.75, 2));
/// assert_eq!(frexp(0.0f32), (0.0, 0));
/// ```
pub fn frexp<F: Float>(x: F) -> (F, i32) {
    if x == F::ZERO || !x.is_finite() {
        return (x, 0);
    }

    let magnitude = if x < F::ZERO { -x } else { x };
    // The estimate can be off by one near powers of two; that is fixed up below.
    let mut exponent = floor_float(ln(magnitude) / F::LN_2).to_i64() as i32 + 1;
    let mut fraction = scale(x, -exponent);
    loop {
        let magnitude = if fraction < F::ZERO { -fraction } else { fraction };
        if magnitude >= F::ONE {
            fraction = fraction * F::HALF;
            exponent += 1;
        } else if magnitude < F::HALF {
            fraction = fraction * F::TWO;
            exponent -= 1;
        } else {
            return (fraction, exponent);
        }
    }
}

/// Computes `x * 2^exp`.
///
/// Overflow yields an infinity, and underflow yields zero.
///
/// # Examples
///
/// ```
/// # use dvm_math::*;
/// assert_eq!(ldexp(0.75f32, 3), 6.0);
/// assert_eq!(ldexp(3.0f64, -1), 1.5);
/// assert_eq!(ldexp(1.0f32, 1000), f32::INFINITY);
/// ```
#[doc(alias = "idexp")]
pub fn ldexp<F: Float>(x: F, exp: i32) -> F {
    let (fraction, exponent) = frexp(x);
    scale(fraction, exponent.saturating_add(exp))
}

/// Multiplies `x` by `2^exp` in steps that never overflow the scale factor itself.
fn scale<F: Float>(mut x: F, mut exp: i32) -> F {
    let chunk = pow_unsigned(F::TWO, SCALE_CHUNK.unsigned_abs().into());
    while exp > SCALE_CHUNK {
        if x == F::ZERO || !x.is_finite() {
            return x;
        }
        x = x * chunk;
        exp -= SCALE_CHUNK;
    }
    while exp < -SCALE_CHUNK {
        if x == F::ZERO || !x.is_finite() {
            return x;
        }
        x = x / chunk;
        exp += SCALE_CHUNK;
    }
    let factor = pow_unsigned(F::TWO, exp.unsigned_abs().into());
    if exp < 0 {
        x / factor
    } else {
        x * factor
    }
}

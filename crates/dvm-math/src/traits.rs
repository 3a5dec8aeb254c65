//! Numeric traits shared by the kernel and the linear algebra types.

use std::{fmt, ops};

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`] and [`f32::max`] functions
/// ([`f64::min`] and [`f64::max`] respectively). Built-in integer types implement it in terms of
/// [`Ord::min`] and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for signed numeric types that support basic arithmetic operations.
///
/// This is what matrix algebra needs: cofactor signs require negation, so unsigned integers are
/// not [`Number`]s.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// A fixed-width primitive number the scalar kernel can operate on.
///
/// Implemented for every built-in integer type as well as [`f32`] and [`f64`].
pub trait Scalar:
    Zero
    + One
    + MinMax
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialOrd
    + Copy
    + fmt::Debug
{
    /// The floating-point type used for intermediate fractional computations on this type.
    ///
    /// This is [`f64`] for [`f64`], and [`f32`] for every other type.
    type Float: Float;

    /// Tolerance used for convergence and equality checks.
    ///
    /// `1e-7` for [`f32`], `1e-16` for [`f64`], and zero for integers.
    const EPSILON: Self;

    /// The smallest value of this type.
    const MIN: Self;

    /// The largest finite value of this type.
    const MAX: Self;

    /// Whether this is an integer type.
    const IS_INTEGER: bool;

    /// Converts `self` to its canonical floating-point representative.
    fn to_float(self) -> Self::Float;

    /// Converts a floating-point value back, truncating toward zero for integer types.
    ///
    /// Out-of-range values saturate; NaN maps to zero for integer types.
    fn from_float(value: Self::Float) -> Self;

    /// Converts `self` to an [`i64`], truncating toward zero and saturating at the [`i64`] range.
    fn to_i64(self) -> i64;

    /// Converts an [`i64`] to `Self`, saturating at the range of `Self`.
    fn from_i64(value: i64) -> Self;

    /// Multiplies two values, saturating at [`Scalar::MIN`] and [`Scalar::MAX`] for integers.
    ///
    /// Floating-point types overflow to infinity as usual.
    fn saturating_mul(self, rhs: Self) -> Self;

    /// Divides `self` by `rhs`, returning [`None`] if the division is not defined for integers.
    ///
    /// For floating-point types this always succeeds.
    fn checked_div(self, rhs: Self) -> Option<Self>;

    /// Returns the average of `self` and `other`.
    ///
    /// For integers, this rounds toward zero and never overflows.
    fn average(self, other: Self) -> Self;

    /// Returns whether `self * self - value` exceeds `tolerance`.
    ///
    /// For non-negative integers, this is evaluated without forming the (possibly overflowing)
    /// square.
    fn square_exceeds(self, value: Self, tolerance: Self) -> bool;
}

/// Floating-point [`Scalar`]s.
pub trait Float: Scalar<Float = Self> + ops::Neg<Output = Self> {
    /// `0.5`
    const HALF: Self;
    /// `2.0`
    const TWO: Self;
    /// Euler's number.
    const E: Self;
    /// The natural logarithm of 2.
    const LN_2: Self;
    /// Positive infinity.
    const INFINITY: Self;
    /// Negative infinity.
    const NEG_INFINITY: Self;
    /// Magnitude at and above which every value of this type is an integer.
    const INTEGRAL_THRESHOLD: Self;

    fn is_nan(self) -> bool;
    fn is_finite(self) -> bool;
}

macro_rules! ord_min_max {
    ($($types:ty),+) => {
        $(
            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )+
    };
}
ord_min_max!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl MinMax for f32 {
    fn min(self, other: Self) -> Self {
        self.min(other)
    }

    fn max(self, other: Self) -> Self {
        self.max(other)
    }
}
impl MinMax for f64 {
    fn min(self, other: Self) -> Self {
        self.min(other)
    }

    fn max(self, other: Self) -> Self {
        self.max(other)
    }
}

macro_rules! identities {
    ($zero:literal, $one:literal: $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }
            impl One for $types {
                const ONE: Self = $one;
            }
        )+
    };
}
identities!(0, 1: u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
identities!(0.0, 1.0: f32, f64);

macro_rules! integer_scalar {
    ($($types:ty),+) => {
        $(
            impl Scalar for $types {
                type Float = f32;

                const EPSILON: Self = 0;
                const MIN: Self = <$types>::MIN;
                const MAX: Self = <$types>::MAX;
                const IS_INTEGER: bool = true;

                #[inline]
                fn to_float(self) -> f32 {
                    self as f32
                }

                #[inline]
                fn from_float(value: f32) -> Self {
                    // `as` truncates, saturates, and maps NaN to 0.
                    value as Self
                }

                #[inline]
                fn to_i64(self) -> i64 {
                    let saturated = if self < <$types as Zero>::ZERO { i64::MIN } else { i64::MAX };
                    i64::try_from(self).unwrap_or(saturated)
                }

                #[inline]
                fn from_i64(value: i64) -> Self {
                    Self::try_from(value).unwrap_or(if value < 0 { Self::MIN } else { Self::MAX })
                }

                #[inline]
                fn saturating_mul(self, rhs: Self) -> Self {
                    <$types>::saturating_mul(self, rhs)
                }

                #[inline]
                fn checked_div(self, rhs: Self) -> Option<Self> {
                    <$types>::checked_div(self, rhs)
                }

                #[inline]
                fn average(self, other: Self) -> Self {
                    // (a + b) / 2 without the intermediate sum.
                    self / 2 + other / 2 + (self % 2 + other % 2) / 2
                }

                #[inline]
                fn square_exceeds(self, value: Self, tolerance: Self) -> bool {
                    let limit = value.saturating_add(tolerance);
                    if self == 0 {
                        return limit < <$types as Zero>::ZERO;
                    }
                    // `self * self > limit` iff `self > limit / self`, for positive `self`.
                    self > limit / self
                }
            }
        )+
    };
}
integer_scalar!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! float_scalar {
    ($t:ident, $epsilon:literal, $mantissa_bits:literal) => {
        impl Scalar for $t {
            type Float = $t;

            const EPSILON: Self = $epsilon;
            const MIN: Self = $t::MIN;
            const MAX: Self = $t::MAX;
            const IS_INTEGER: bool = false;

            #[inline]
            fn to_float(self) -> $t {
                self
            }

            #[inline]
            fn from_float(value: $t) -> Self {
                value
            }

            #[inline]
            fn to_i64(self) -> i64 {
                self as i64
            }

            #[inline]
            fn from_i64(value: i64) -> Self {
                value as $t
            }

            #[inline]
            fn saturating_mul(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline]
            fn checked_div(self, rhs: Self) -> Option<Self> {
                Some(self / rhs)
            }

            #[inline]
            fn average(self, other: Self) -> Self {
                Self::HALF * (self + other)
            }

            #[inline]
            fn square_exceeds(self, value: Self, tolerance: Self) -> bool {
                self * self - value > tolerance
            }
        }

        impl Float for $t {
            const HALF: Self = 0.5;
            const TWO: Self = 2.0;
            const E: Self = std::$t::consts::E;
            const LN_2: Self = std::$t::consts::LN_2;
            const INFINITY: Self = $t::INFINITY;
            const NEG_INFINITY: Self = $t::NEG_INFINITY;
            const INTEGRAL_THRESHOLD: Self = (1u64 << $mantissa_bits) as $t;

            #[inline]
            fn is_nan(self) -> bool {
                self.is_nan()
            }

            #[inline]
            fn is_finite(self) -> bool {
                self.is_finite()
            }
        }
    };
}
float_scalar!(f32, 1e-7, 23);
float_scalar!(f64, 1e-16, 52);

//! Element-wise versions of the [`dvm_math`] kernel functions.

use dvm_math::Scalar;

use super::Vector;

macro_rules! unary {
    ($($(#[$attr:meta])* $name:ident;)+) => {
        $(
            $(#[$attr])*
            #[inline]
            pub fn $name(self) -> Self {
                self.map(dvm_math::$name)
            }
        )+
    };
}

macro_rules! binary {
    ($($(#[$attr:meta])* $name:ident, $scalar_name:ident;)+) => {
        $(
            $(#[$attr])*
            #[inline]
            pub fn $name(self, other: Self) -> Self {
                Self::from_fn(|i| dvm_math::$name(self[i], other[i]))
            }

            /// Like the vector version, but with the same right-hand value for every element.
            #[inline]
            pub fn $scalar_name(self, other: T) -> Self {
                self.map(|elem| dvm_math::$name(elem, other))
            }
        )+
    };
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    unary! {
        /// Element-wise absolute value.
        ///
        /// # Examples
        ///
        /// ```
        /// # use dvm_linalg::*;
        /// assert_eq!(vec3(-1, 0, 4).abs(), vec3(1, 0, 4));
        /// ```
        abs;
        /// Element-wise sign (`-1`, `0` or `1`).
        sign;
        /// Element-wise [`dvm_math::floor`].
        ///
        /// # Examples
        ///
        /// ```
        /// # use dvm_linalg::*;
        /// assert_eq!(vec2(-1.5, 2.5).floor(), vec2(-2.0, 2.0));
        /// ```
        floor;
        /// Element-wise [`dvm_math::ceil`].
        ceil;
        /// Element-wise [`dvm_math::round`].
        round;
        /// Element-wise [`dvm_math::trunc`].
        trunc;
        /// Element-wise fractional part, `x - floor(x)`.
        fract;
        /// Element-wise `e^x`.
        exp;
        /// Element-wise `2^x`.
        exp2;
        /// Element-wise natural logarithm. Non-positive elements become `-1`.
        log;
        /// Element-wise base-2 logarithm. Non-positive elements become `-1`.
        log2;
        /// Element-wise square root. Negative elements become `0`.
        ///
        /// # Examples
        ///
        /// ```
        /// # use dvm_linalg::*;
        /// assert_eq!(vec3(4.0, 9.0, -1.0).sqrt(), vec3(2.0, 3.0, 0.0));
        /// ```
        sqrt;
        /// Element-wise `1 / sqrt(x)`. Non-positive elements become `0`.
        inverse_sqrt;
    }

    binary! {
        /// Element-wise floored remainder. Elements divided by zero become `0`.
        ///
        /// # Examples
        ///
        /// ```
        /// # use dvm_linalg::*;
        /// assert_eq!(vec3(7, -7, 3).modulo(vec3(3, 3, 0)), vec3(1, 2, 0));
        /// assert_eq!(vec2(5.5, -0.5).modulo_scalar(2.0), vec2(1.5, 1.5));
        /// ```
        modulo, modulo_scalar;
        /// Element-wise power.
        pow, pow_scalar;
    }

    /// Element-wise minimum of `self` and the scalar `other`.
    pub fn min_scalar(self, other: T) -> Self {
        self.map(|elem| dvm_math::min(elem, other))
    }

    /// Element-wise maximum of `self` and the scalar `other`.
    pub fn max_scalar(self, other: T) -> Self {
        self.map(|elem| dvm_math::max(elem, other))
    }

    /// Clamps every element to the range `[min, max]`.
    pub fn clamp_scalar(self, min: T, max: T) -> Self {
        self.map(|elem| dvm_math::clamp(elem, min, max))
    }

    /// Computes `step(edge, x)` for each element, with `self` as the edge.
    ///
    /// The result is `0` where `x` is below the edge, and `1` everywhere else.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dvm_linalg::*;
    /// assert_eq!(vec3(1.0, 2.0, 3.0).step(Vector::splat(2.0)), vec3(1.0, 1.0, 0.0));
    /// ```
    pub fn step(self, x: Self) -> Self {
        Self::from_fn(|i| dvm_math::step(self[i], x[i]))
    }

    /// Like [`Vector::step`], but with the same `x` for every element.
    pub fn step_scalar(self, x: T) -> Self {
        self.map(|edge| dvm_math::step(edge, x))
    }

    /// Hermite interpolation of each element of `x` between `self` and `edge1`.
    pub fn smoothstep(self, edge1: Self, x: Self) -> Self {
        Self::from_fn(|i| dvm_math::smoothstep(self[i], edge1[i], x[i]))
    }

    /// Blends `self` and `other` with weight `a` on `self`, see [`dvm_math::mix`].
    pub fn mix(self, other: Self, a: T::Float) -> Self {
        Self::from_fn(|i| dvm_math::mix(self[i], other[i], a))
    }

    /// Returns which elements are NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dvm_linalg::*;
    /// assert_eq!(vec2(f32::NAN, 1.0).is_nan(), vec2(true, false));
    /// ```
    pub fn is_nan(self) -> Vector<bool, N> {
        self.map(dvm_math::is_nan)
    }

    /// Returns which elements are infinite.
    pub fn is_inf(self) -> Vector<bool, N> {
        self.map(dvm_math::is_inf)
    }
}

impl<const N: usize> Vector<f32, N> {
    /// Reinterprets the bits of each element as an [`i32`].
    pub fn float_bits_to_int(self) -> Vector<i32, N> {
        self.map(dvm_math::float_bits_to_int)
    }

    /// Reinterprets the bits of each element as a [`u32`].
    pub fn float_bits_to_uint(self) -> Vector<u32, N> {
        self.map(dvm_math::float_bits_to_uint)
    }
}

impl<const N: usize> Vector<i32, N> {
    /// Reinterprets the bits of each element as an [`f32`].
    pub fn int_bits_to_float(self) -> Vector<f32, N> {
        self.map(dvm_math::int_bits_to_float)
    }
}

impl<const N: usize> Vector<u32, N> {
    /// Reinterprets the bits of each element as an [`f32`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use dvm_linalg::*;
    /// let v = vec2(1.0f32, -2.5);
    /// assert_eq!(v.float_bits_to_uint().uint_bits_to_float(), v);
    /// ```
    pub fn uint_bits_to_float(self) -> Vector<f32, N> {
        self.map(dvm_math::uint_bits_to_float)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::{vec2, vec3, vec4, Vec3f};

    #[test]
    fn rounding() {
        let v = vec4(-1.5f32, -0.25, 0.5, 2.75);
        assert_eq!(v.floor(), vec4(-2.0, -1.0, 0.0, 2.0));
        assert_eq!(v.ceil(), vec4(-1.0, -0.0, 1.0, 3.0));
        assert_eq!(v.trunc(), vec4(-1.0, 0.0, 0.0, 2.0));
        assert_eq!(v.round(), vec4(-2.0, 0.0, 0.0, 3.0));
        assert_eq!(v.fract(), vec4(0.5, 0.75, 0.5, 0.75));
        assert_eq!(vec3(1, -2, 3).floor(), vec3(1, -2, 3));
    }

    #[test]
    fn sign_abs() {
        assert_eq!(vec3(-3.0, 0.0, 2.0).sign(), vec3(-1.0, 0.0, 1.0));
        assert_eq!(vec3(-3, 0, 2).sign(), vec3(-1, 0, 1));
        assert_eq!(vec2(i8::MIN, -1).abs(), vec2(i8::MAX, 1));
    }

    #[test]
    fn bounds() {
        let v = vec3(-2, 5, 1);
        assert_eq!(v.min_scalar(0), vec3(-2, 0, 0));
        assert_eq!(v.max_scalar(0), vec3(0, 5, 1));
        assert_eq!(v.clamp_scalar(0, 3), vec3(0, 3, 1));
        assert_eq!(v.min(vec3(0, 6, 0)), vec3(-2, 5, 0));
    }

    #[test]
    fn interpolation() {
        let edge = Vec3f::splat(0.5);
        assert_eq!(edge.step(vec3(0.0, 0.5, 1.0)), vec3(0.0, 1.0, 1.0));
        assert_eq!(vec3(0.0, 1.0, 2.0).step_scalar(1.0), vec3(1.0, 1.0, 0.0));

        let s = Vec3f::ZERO.smoothstep(Vec3f::splat(1.0), vec3(-1.0, 0.5, 2.0));
        assert_eq!(s, vec3(0.0, 0.5, 1.0));

        let m = vec2(10.0f32, 0.0).mix(vec2(20.0, 4.0), 0.25);
        assert_relative_eq!(m, vec2(17.5, 3.0));
    }

    #[test]
    fn exponential() {
        let v = vec3(0.0f64, 1.0, 2.0);
        let e = std::f64::consts::E;
        assert_relative_eq!(v.exp(), vec3(1.0, e, e * e), epsilon = 1e-13);
        assert_relative_eq!(v.exp2(), vec3(1.0, 2.0, 4.0), epsilon = 1e-13);
        assert_relative_eq!(vec2(1.0f64, 8.0).log2(), vec2(0.0, 3.0), epsilon = 1e-13);
        assert_eq!(vec2(0.0f32, -1.0).log(), vec2(-1.0, -1.0));
        assert_eq!(vec3(2, 3, 4).pow(vec3(3, 2, 0)), vec3(8, 9, 1));
        assert_eq!(vec2(2, -3).pow_scalar(2), vec2(4, 9));
    }

    #[test]
    fn roots() {
        assert_eq!(vec3(16u32, 17, 0).sqrt(), vec3(4, 4, 0));
        assert_relative_eq!(vec2(4.0f32, 0.25).inverse_sqrt(), vec2(0.5, 2.0), epsilon = 1e-6);
        assert_eq!(vec2(0.0f32, -4.0).inverse_sqrt(), vec2(0.0, 0.0));
    }

    #[test]
    fn classify() {
        let v = vec3(f32::INFINITY, f32::NAN, 1.0);
        assert_eq!(v.is_nan(), vec3(false, true, false));
        assert_eq!(v.is_inf(), vec3(true, false, false));
        assert_eq!(vec2(i32::MAX, 0).is_inf(), vec2(false, false));
    }

    #[test]
    fn bits() {
        let v = vec2(1.0f32, -0.0);
        assert_eq!(v.float_bits_to_uint(), vec2(0x3f80_0000, 0x8000_0000));
        assert_eq!(v.float_bits_to_int(), vec2(0x3f80_0000, i32::MIN));
        assert_eq!(vec2(0x3f80_0000, i32::MIN).int_bits_to_float(), v);
    }
}

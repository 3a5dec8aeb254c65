use std::{array, fmt};

use dvm_math::{MinMax, Number, One, Scalar, Zero};

mod math;
mod ops;
mod view;

/// A 1-dimensional vector.
pub type Vec1<T> = Vector<T, 1>;
/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 1-dimensional [`f32`] vector.
pub type Vec1f = Vec1<f32>;
/// A 2-dimensional [`f32`] vector.
pub type Vec2f = Vec2<f32>;
/// A 3-dimensional [`f32`] vector.
pub type Vec3f = Vec3<f32>;
/// A 4-dimensional [`f32`] vector.
pub type Vec4f = Vec4<f32>;

/// A column vector of `N` elements of type `T`.
///
/// Vectors are built with [`vec1`] through [`vec4`], [`Vector::splat`], [`Vector::from_fn`], or
/// from an `[T; N]` array. Elements are read through indexing, or for up to 4 elements through the
/// `x`/`y`/`z`/`w` and `r`/`g`/`b`/`a` fields.
///
/// All arithmetic operators work element-wise, and scalar `*` and `/` scale every element. Each
/// function of the scalar kernel in [`dvm_math`] has a same-named element-wise method, such as
/// [`Vector::sqrt`] or [`Vector::floor`].
///
/// The type is `#[repr(transparent)]` over `[T; N]` and implements [`bytemuck::Pod`] when `T` does.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// The zero vector.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

macro_rules! unit_vectors {
    ($($n:literal { $($axis:ident: [$($elem:ident),+]),+ })+) => {
        $(
            impl<T: Zero + One> Vector<T, $n> {
                $(
                    #[doc = concat!("The unit vector along the ", stringify!($axis), " axis.")]
                    pub const $axis: Self = Self([$(T::$elem),+]);
                )+
            }
        )+
    };
}

unit_vectors! {
    1 { X: [ONE] }
    2 { X: [ONE, ZERO], Y: [ZERO, ONE] }
    3 { X: [ONE, ZERO, ZERO], Y: [ZERO, ONE, ZERO], Z: [ZERO, ZERO, ONE] }
    4 {
        X: [ONE, ZERO, ZERO, ZERO],
        Y: [ZERO, ONE, ZERO, ZERO],
        Z: [ZERO, ZERO, ONE, ZERO],
        W: [ZERO, ZERO, ZERO, ONE]
    }
}

impl<T, const N: usize> Vector<T, N> {
    /// Returns a vector with every element set to `elem`.
    ///
    /// ```
    /// # use dvm_linalg::*;
    /// assert_eq!(Vector::splat(7u8), vec3(7, 7, 7));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Builds a vector by calling `cb` with the index of each element, in order.
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Transforms every element with `f`.
    ///
    /// ```
    /// # use dvm_linalg::*;
    /// assert_eq!(vec2(1.5f32, -2.0).map(|v| v as i32), vec2(1, -2));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Returns the elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Unwraps the underlying array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Sums the products of corresponding elements.
    ///
    /// ```
    /// # use dvm_linalg::*;
    /// assert_eq!(vec3(2, -1, 0).dot(vec3(3, 4, 9)), 2);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Scalar,
    {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns `self.dot(self)`, the length without the square root.
    pub fn length2(&self) -> T
    where
        T: Scalar,
    {
        self.dot(*self)
    }

    /// Returns the Euclidean length.
    ///
    /// The square root is computed by [`dvm_math::sqrt`], so integer vectors yield the truncated
    /// length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dvm_linalg::*;
    /// assert_eq!(Vec3f::Z.length(), 1.0);
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// assert_eq!(vec2(3, 5).length(), 5);
    /// ```
    pub fn length(&self) -> T
    where
        T: Scalar,
    {
        dvm_math::sqrt(self.length2())
    }

    /// Returns the distance between the points `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dvm_linalg::*;
    /// assert_eq!(vec2(1.0, 1.0).distance(vec2(4.0, 5.0)), 5.0);
    /// assert_eq!(vec2(4u32, 5).distance(vec2(1, 1)), 5);
    /// ```
    pub fn distance(self, other: Self) -> T
    where
        T: Scalar,
    {
        // Not `self - other`, which would underflow for unsigned types.
        Self::from_fn(|i| {
            let (a, b) = (self[i], other[i]);
            if a > b {
                a - b
            } else {
                b - a
            }
        })
        .length()
    }

    /// Scales the vector to length 1.
    ///
    /// The computation runs in the [`Scalar::Float`] representative of `T`. Vectors shorter than
    /// that type's epsilon have no usable direction and normalize to the zero vector.
    ///
    /// ```
    /// # use dvm_linalg::*;
    /// assert_eq!(vec3(0.0, -3.0, 0.0).normalize(), vec3(0.0, -1.0, 0.0));
    /// assert_eq!(Vec2f::ZERO.normalize(), Vec2f::ZERO);
    /// assert_eq!(vec2(0, -7).normalize(), vec2(0, -1));
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Scalar,
    {
        let floats = self.map(T::to_float);
        let length = floats.length();
        if length < T::Float::EPSILON || length == T::Float::ZERO {
            return Self::ZERO;
        }
        floats.map(|elem| T::from_float(elem / length))
    }

    /// Returns the element-wise minimum of `self` and `other`.
    ///
    /// NaN elements lose against numbers, like [`f32::min`].
    ///
    /// ```
    /// # use dvm_linalg::*;
    /// let v = vec3(-1.0, 2.0, f32::NAN).min(vec3(3.0, f32::NEG_INFINITY, 0.0));
    /// assert_eq!(v, vec3(-1.0, f32::NEG_INFINITY, 0.0));
    /// ```
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].min(other[i]))
    }

    /// Returns the element-wise maximum of `self` and `other`.
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].max(other[i]))
    }

    /// Clamps each element of `self` to the range given by the matching elements of `lo` and `hi`.
    ///
    /// ```
    /// # use dvm_linalg::*;
    /// assert_eq!(vec3(-1, 5, 2).clamp(vec3(0, 0, 0), vec3(3, 3, 1)), vec3(0, 3, 1));
    /// ```
    pub fn clamp(self, lo: Self, hi: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].clamp(lo[i], hi[i]))
    }
}

macro_rules! grow_shrink {
    ($($small:literal => $big:literal: $($elem:ident),+;)+) => {
        $(
            impl<T> Vector<T, $small> {
                /// Appends `value` as the new last element.
                pub fn extend(self, value: T) -> Vector<T, $big> {
                    let [$($elem),+] = self.0;
                    Vector([$($elem,)+ value])
                }
            }

            impl<T> Vector<T, $big> {
                /// Removes the last element.
                pub fn truncate(self) -> Vector<T, $small> {
                    let [$($elem,)+ _] = self.0;
                    Vector([$($elem),+])
                }
            }
        )+
    };
}

grow_shrink! {
    1 => 2: x;
    2 => 3: x, y;
    3 => 4: x, y, z;
}

impl<T> Vector<T, 3> {
    /// Returns the cross product `self × other`.
    ///
    /// The result is orthogonal to both inputs and follows the right-hand rule, so swapping the
    /// operands negates it.
    ///
    /// ```
    /// # use dvm_linalg::*;
    /// assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
    /// assert_eq!(Vec3f::Z.cross(Vec3f::Y), -Vec3f::X);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = other.0;
        vec3(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(elems: [T; N]) -> Self {
        Self(elems)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> Self {
        v.0
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.0).finish()
    }
}

/// Formats the elements as a tuple, passing the format options on to each element.
impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        let mut sep = "";
        for elem in &self.0 {
            f.write_str(sep)?;
            elem.fmt(f)?;
            sep = ", ";
        }
        f.write_str(")")
    }
}

/// Creates a [`Vec1`].
#[inline]
pub const fn vec1<T>(x: T) -> Vec1<T> {
    Vector([x])
}

/// Creates a [`Vec2`].
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Creates a [`Vec3`].
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Creates a [`Vec4`].
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

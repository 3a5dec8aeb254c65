//! Operator overloads and `approx` comparisons for [`Vector`].

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.0[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.0[i]
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N> {
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for Vector<T, N> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.0 == *other
    }
}

impl<T: Eq, const N: usize> Eq for Vector<T, N> {}

impl<T, const N: usize> Vector<T, N> {
    fn all_pairs(&self, other: &Self, mut pred: impl FnMut(&T, &T) -> bool) -> bool {
        self.0.iter().zip(&other.0).all(|(a, b)| pred(a, b))
    }
}

impl<T, const N: usize> AbsDiffEq for Vector<T, N>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.all_pairs(other, |a, b| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> RelativeEq for Vector<T, N>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.all_pairs(other, |a, b| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const N: usize> UlpsEq for Vector<T, N>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T::Epsilon, max_ulps: u32) -> bool {
        self.all_pairs(other, |a, b| a.ulps_eq(b, epsilon, max_ulps))
    }
}

impl<T: Neg<Output = T>, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(T::neg)
    }
}

/// Element-wise `vector op vector`, plus its compound assignment form.
macro_rules! elementwise {
    ($($op:ident::$method:ident, $assign:ident::$assign_method:ident => $sym:tt;)+) => {
        $(
            impl<T: $op<Output = T> + Copy, const N: usize> $op for Vector<T, N> {
                type Output = Self;

                fn $method(self, rhs: Self) -> Self {
                    Self::from_fn(|i| self.0[i] $sym rhs.0[i])
                }
            }

            impl<T: $op<Output = T> + Copy, const N: usize> $assign for Vector<T, N> {
                fn $assign_method(&mut self, rhs: Self) {
                    *self = *self $sym rhs;
                }
            }
        )+
    };
}

elementwise! {
    Add::add, AddAssign::add_assign => +;
    Sub::sub, SubAssign::sub_assign => -;
    Mul::mul, MulAssign::mul_assign => *;
    Div::div, DivAssign::div_assign => /;
}

/// `vector op scalar`, applying the scalar to every element.
macro_rules! scaling {
    ($($op:ident::$method:ident, $assign:ident::$assign_method:ident => $sym:tt;)+) => {
        $(
            impl<T: $op<Output = T> + Copy, const N: usize> $op<T> for Vector<T, N> {
                type Output = Self;

                fn $method(self, rhs: T) -> Self {
                    self.map(|elem| elem $sym rhs)
                }
            }

            impl<T: $op<Output = T> + Copy, const N: usize> $assign<T> for Vector<T, N> {
                fn $assign_method(&mut self, rhs: T) {
                    *self = *self $sym rhs;
                }
            }
        )+
    };
}

scaling! {
    Mul::mul, MulAssign::mul_assign => *;
    Div::div, DivAssign::div_assign => /;
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_ne, assert_ulps_eq};

    use crate::{vec2, vec3, Vec3f};

    #[test]
    fn arithmetic() {
        let a = vec3(1, 2, 3);
        let b = vec3(4, 5, 6);
        assert_eq!(a + b, vec3(5, 7, 9));
        assert_eq!(b - a, vec3(3, 3, 3));
        assert_eq!(a * b, vec3(4, 10, 18));
        assert_eq!(b / a, vec3(4, 2, 2));
        assert_eq!(a * 2, vec3(2, 4, 6));
        assert_eq!(b / 2, vec3(2, 2, 3));
        assert_eq!(-a, vec3(-1, -2, -3));

        let mut c = a;
        c += b;
        c -= vec3(1, 1, 1);
        c *= 2;
        c /= vec3(2, 2, 4);
        assert_eq!(c, vec3(4, 6, 4));
    }

    #[test]
    fn compare_with_arrays() {
        assert_eq!(vec2(1u8, 2), [1, 2]);
        assert_ne!(vec3(1, 2, 3), [1, 2, 4]);
        assert_eq!(vec2(1.0f32, 2.0), vec2(1.0f32, 2.0));
    }

    #[test]
    fn approx() {
        let a = vec3(1.0f32, 2.0, 3.0);
        let b = a + Vec3f::splat(1e-7);
        assert_abs_diff_eq!(a, b, epsilon = 1e-6);
        assert_ulps_eq!(a, a);
        assert_relative_ne!(a, vec3(1.0, 2.0, 3.1));
    }
}

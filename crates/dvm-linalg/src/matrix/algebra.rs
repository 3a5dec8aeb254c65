//! Determinants, cofactors and inverses of square matrices.
//!
//! Everything here works on arbitrary `N`: minors are formed by copying the remaining elements
//! into the top-left corner of an `N`x`N` scratch matrix and tracking how much of it is in use,
//! rather than by creating matrices of size `N - 1` (which const generics can't express yet).
//! The cost of a determinant is factorial in `N`.

use std::fmt;

use dvm_math::{DomainError, Guarded, Number};

use crate::Matrix;

impl<T: Number, const N: usize> Matrix<T, N, N> {
    /// Evaluating this fails the build for 0x0 matrices, which have no meaningful inverse.
    const NONEMPTY: () = assert!(N > 0, "matrix algebra requires a dimension of at least 1");

    /// Returns the [determinant] of the matrix.
    ///
    /// 1x1 and 2x2 matrices are handled directly; larger matrices use a cofactor expansion along
    /// the first column.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    ///
    /// # Examples
    ///
    /// ```
    /// # use dvm_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [0, 1, 4],
    ///     [5, 6, 0],
    /// ]);
    /// assert_eq!(mat.determinant(), 1);
    /// assert_eq!(Mat4f::IDENTITY.determinant(), 1.0);
    /// ```
    pub fn determinant(&self) -> T {
        let () = Self::NONEMPTY;
        active_determinant(self, N)
    }

    /// Returns the determinant of the matrix obtained by removing row `row` and column `col`.
    ///
    /// The minor of a 1x1 matrix is empty, and its determinant is 1.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dvm_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    ///     [7, 8, 10],
    /// ]);
    /// assert_eq!(mat.minor_determinant(0, 0), 5 * 10 - 6 * 8);
    /// assert_eq!(mat.minor_determinant(1, 2), 1 * 8 - 2 * 7);
    /// ```
    pub fn minor_determinant(&self, row: usize, col: usize) -> T {
        let () = Self::NONEMPTY;
        assert!(
            row < N && col < N,
            "minor ({row}, {col}) out of bounds for {N}x{N} matrix"
        );
        if N == 1 {
            return T::ONE;
        }

        let mut minor = Self::ZERO;
        fill_minor(self, &mut minor, N, row, col);
        active_determinant(&minor, N - 1)
    }

    /// Returns the cofactor of the element at `(row, col)`.
    ///
    /// This is the [`minor_determinant`][Self::minor_determinant], negated if `row + col` is odd.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    pub fn cofactor(&self, row: usize, col: usize) -> T {
        let minor = self.minor_determinant(row, col);
        if (row + col) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }

    /// Returns the adjugate of the matrix (the transpose of its cofactor matrix).
    ///
    /// # Examples
    ///
    /// ```
    /// # use dvm_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.adjugate(), Matrix::from_rows([
    ///     [4, -2],
    ///     [-3, 1],
    /// ]));
    /// ```
    pub fn adjugate(&self) -> Self {
        Self::from_fn(|row, col| self.cofactor(col, row))
    }

    /// Returns whether the matrix has an inverse, ie. whether its determinant is non-zero.
    ///
    /// The determinant is compared against exactly zero; nearly singular floating-point matrices
    /// count as invertible.
    pub fn is_invertible(&self) -> bool {
        self.determinant() != T::ZERO
    }

    /// Computes the inverse of the matrix, reporting singular matrices.
    ///
    /// The inverse is the [`adjugate`][Self::adjugate] scaled by the reciprocal of the
    /// determinant. For integer element types, that reciprocal truncates to zero unless the
    /// determinant is `1` or `-1`.
    ///
    /// If the determinant is exactly zero, the result holds the [zero matrix][Self::ZERO] along
    /// with [`DomainError::SingularMatrix`].
    pub fn guarded_inverse(&self) -> Guarded<Self>
    where
        T: fmt::Debug,
    {
        let det = self.determinant();
        if det == T::ZERO {
            return Guarded::sentinel(Self::ZERO, DomainError::SingularMatrix);
        }

        Guarded::ok(self.adjugate() * (T::ONE / det))
    }

    /// Computes the inverse of the matrix.
    ///
    /// Singular matrices (whose determinant is zero) yield the [zero matrix][Self::ZERO]. Use
    /// [`try_inverse`][Self::try_inverse] or [`guarded_inverse`][Self::guarded_inverse] to detect
    /// that case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dvm_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [2.0, 1.0],
    ///     [2.0, 3.0],
    /// ]);
    /// assert_eq!(mat.inverse(), Matrix::from_rows([
    ///     [0.75, -0.25],
    ///     [-0.5, 0.5],
    /// ]));
    ///
    /// let singular = Matrix::from_rows([
    ///     [1.0, 2.0],
    ///     [2.0, 4.0],
    /// ]);
    /// assert_eq!(singular.inverse(), Mat2::<f64>::ZERO);
    /// ```
    pub fn inverse(&self) -> Self
    where
        T: fmt::Debug,
    {
        self.guarded_inverse().value()
    }

    /// Computes the inverse of the matrix, or returns [`DomainError::SingularMatrix`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use dvm_linalg::*;
    /// # use dvm_math::DomainError;
    /// assert_eq!(Mat3f::IDENTITY.try_inverse(), Ok(Mat3f::IDENTITY));
    /// assert_eq!(Mat3f::ZERO.try_inverse(), Err(DomainError::SingularMatrix));
    /// ```
    pub fn try_inverse(&self) -> Result<Self, DomainError>
    where
        T: fmt::Debug,
    {
        self.guarded_inverse().into_result()
    }
}

/// Computes the determinant of the top-left `n`x`n` part of `mat`.
fn active_determinant<T: Number, const N: usize>(mat: &Matrix<T, N, N>, n: usize) -> T {
    match n {
        1 => mat[(0, 0)],
        2 => mat[(0, 0)] * mat[(1, 1)] - mat[(0, 1)] * mat[(1, 0)],
        _ => {
            let mut minor = Matrix::ZERO;
            let mut det = T::ZERO;
            let mut sign = T::ONE;
            for row in 0..n {
                fill_minor(mat, &mut minor, n, row, 0);
                det = det + sign * mat[(row, 0)] * active_determinant(&minor, n - 1);
                sign = -sign;
            }
            det
        }
    }
}

/// Writes the top-left `n`x`n` part of `mat`, without `skip_row` and `skip_col`, into the top-left
/// `n-1`x`n-1` part of `minor`.
fn fill_minor<T: Copy, const N: usize>(
    mat: &Matrix<T, N, N>,
    minor: &mut Matrix<T, N, N>,
    n: usize,
    skip_row: usize,
    skip_col: usize,
) {
    for row in 0..n - 1 {
        let src_row = if row < skip_row { row } else { row + 1 };
        for col in 0..n - 1 {
            let src_col = if col < skip_col { col } else { col + 1 };
            minor[(row, col)] = mat[(src_row, src_col)];
        }
    }
}

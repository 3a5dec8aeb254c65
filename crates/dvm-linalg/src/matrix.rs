use std::{array, fmt};

use dvm_math::{Number, One, Zero};

use crate::Vector;

mod algebra;
mod ops;

/// A square 1x1 matrix.
pub type Mat1<T> = Matrix<T, 1, 1>;
/// A square 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A square 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A square 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 1x1 [`f32`] matrix.
pub type Mat1f = Mat1<f32>;
/// A 2x2 [`f32`] matrix.
pub type Mat2f = Mat2<f32>;
/// A 3x3 [`f32`] matrix.
pub type Mat3f = Mat3<f32>;
/// A 4x4 [`f32`] matrix.
pub type Mat4f = Mat4<f32>;

/// 2 rows, 3 columns.
pub type Mat2x3<T> = Matrix<T, 2, 3>;
/// 2 rows, 4 columns.
pub type Mat2x4<T> = Matrix<T, 2, 4>;
/// 3 rows, 2 columns.
pub type Mat3x2<T> = Matrix<T, 3, 2>;
/// 3 rows, 4 columns.
pub type Mat3x4<T> = Matrix<T, 3, 4>;
/// 4 rows, 2 columns.
pub type Mat4x2<T> = Matrix<T, 4, 2>;
/// 4 rows, 3 columns.
pub type Mat4x3<T> = Matrix<T, 4, 3>;

/// An `R`x`C` matrix (`R` rows, `C` columns) of `T`, stored column by column.
///
/// Elements are addressed as `(row, col)`, both 0-based, through indexing (which panics when out
/// of bounds) or through [`Matrix::get`] and [`Matrix::get_mut`]:
///
/// ```
/// # use dvm_linalg::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1, 2],
///     [3, 4, 5],
/// ]);
/// mat[(1, 0)] = 9;
/// assert_eq!(mat.get(1, 0), Some(&9));
/// assert_eq!(mat.get(2, 0), None);
/// assert_eq!(mat.row(1), [9, 4, 5]);
/// assert_eq!(mat.column(2), [2, 5]);
/// ```
///
/// Matrices are built with [`Matrix::from_rows`], [`Matrix::from_columns`], [`Matrix::from_fn`],
/// [`Matrix::from_diagonal`] or [`Matrix::outer_product`], or start out as [`Matrix::ZERO`] or
/// [`Matrix::IDENTITY`].
///
/// `*` is the matrix product (and the matrix-vector product); [`Matrix::component_mul`] multiplies
/// element by element. Square matrices additionally have a [`determinant`], [`adjugate`] and
/// [`inverse`].
///
/// [`determinant`]: Matrix::determinant
/// [`adjugate`]: Matrix::adjugate
/// [`inverse`]: Matrix::inverse
#[derive(Clone, Copy, Hash)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; R]; C]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The matrix with every element set to 0.
    pub const ZERO: Self = Self([[T::ZERO; R]; C]);
}

impl<T: Zero + One + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// 1 on the main diagonal, 0 everywhere else.
    ///
    /// Non-square matrices get ones on the diagonal starting at `(0, 0)`.
    pub const IDENTITY: Self = {
        let mut columns = [[T::ZERO; R]; C];
        let mut i = 0;
        while i < R && i < C {
            columns[i][i] = T::ONE;
            i += 1;
        }
        Self(columns)
    };
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Builds a matrix from `R` rows of `C` elements.
    ///
    /// ```
    /// # use dvm_linalg::*;
    /// let rows = Matrix::from_rows([[0, 1], [2, 3]]);
    /// let columns = Matrix::from_columns([[0, 2], [1, 3]]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self
    where
        T: Copy,
    {
        let rows = rows.map(|row| row.into());
        Self::from_fn(|row, col| rows[row][col])
    }

    /// Builds a matrix from `C` columns of `R` elements.
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        Self(columns.map(|col| col.into().into_array()))
    }

    /// Builds a matrix by calling `cb` with the `(row, col)` of each element.
    ///
    /// Elements are produced column by column.
    ///
    /// ```
    /// # use dvm_linalg::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|col| array::from_fn(|row| cb(row, col))))
    }

    /// Transforms every element with `f`.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(&mut f)))
    }

    /// Returns the transpose, whose element `(i, j)` is element `(j, i)` of `self`.
    ///
    /// ```
    /// # use dvm_linalg::*;
    /// let mat = Matrix::from_rows([[0, 1, 2], [3, 4, 5]]);
    /// assert_eq!(mat.transpose(), Matrix::from_rows([[0, 3], [1, 4], [2, 5]]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| self[(col, row)])
    }

    /// Returns the element at `(row, col)`, or [`None`] if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(col)?.get(row)
    }

    /// Mutable version of [`Matrix::get`].
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(col)?.get_mut(row)
    }

    /// Returns the column at index `col` as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    pub fn column(&self, col: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        self.0[col].into()
    }

    /// Returns the row at index `row` as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dvm_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.row(1), [3, 4, 5]);
    /// assert_eq!(mat.column(1), [1, 4]);
    /// ```
    pub fn row(&self, row: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        Vector::from_fn(|col| self[(row, col)])
    }

    /// Multiplies `self` and `other` element by element.
    ///
    /// This is *not* the matrix product; use the `*` operator for that.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dvm_linalg::*;
    /// let a = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(a.component_mul(a), Matrix::from_rows([
    ///     [1, 4],
    ///     [9, 16],
    /// ]));
    /// ```
    pub fn component_mul(self, other: Self) -> Self
    where
        T: Number,
    {
        Self::from_fn(|row, col| self[(row, col)] * other[(row, col)])
    }

    /// Computes the outer product of the column vector `column` and the row vector `row`.
    ///
    /// Element `(i, j)` of the result is `column[i] * row[j]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dvm_linalg::*;
    /// let mat = Matrix::outer_product(vec2(1, 2), vec3(3, 4, 5));
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [3, 4, 5],
    ///     [6, 8, 10],
    /// ]));
    /// ```
    pub fn outer_product(column: Vector<T, R>, row: Vector<T, C>) -> Self
    where
        T: Number,
    {
        Self::from_fn(|i, j| column[i] * row[j])
    }
}

/// Lists the rows in reading order; `{:#?}` puts each row on its own line.
impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rows = f.debug_list();
        for row in 0..R {
            let elems: [&T; C] = array::from_fn(|col| &self[(row, col)]);
            rows.entry(&format_args!("{:?}", elems));
        }
        rows.finish()
    }
}

/// Prints one row per line, with the columns aligned.
///
/// # Examples
///
/// ```
/// # use dvm_linalg::*;
/// let mat = Matrix::from_rows([
///     [1, -20],
///     [300, 4],
/// ]);
/// assert_eq!(mat.to_string(), "|   1 -20 |\n| 300   4 |");
/// ```
impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = Matrix::<String, R, C>::from_fn(|row, col| {
            let elem = &self[(row, col)];
            match f.precision() {
                Some(precision) => format!("{elem:.precision$}"),
                None => elem.to_string(),
            }
        });
        let width = cells.0.iter().flatten().map(|s| s.len()).max().unwrap_or(0);

        for row in 0..R {
            if row != 0 {
                writeln!(f)?;
            }
            write!(f, "|")?;
            for col in 0..C {
                write!(f, " {:>width$}", cells[(row, col)])?;
            }
            write!(f, " |")?;
        }
        Ok(())
    }
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Returns the main diagonal.
    ///
    /// ```
    /// # use dvm_linalg::*;
    /// assert_eq!(Matrix::from_rows([[1, 2], [3, 4]]).into_diagonal(), [1, 4]);
    /// ```
    pub fn into_diagonal(self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self[(i, i)])
    }

    /// Builds a diagonal matrix, with zeroes everywhere off the diagonal.
    ///
    /// ```
    /// # use dvm_linalg::*;
    /// assert_eq!(
    ///     Matrix::from_diagonal([1, 2, 3]),
    ///     Matrix::from_rows([[1, 0, 0], [0, 2, 0], [0, 0, 3]]),
    /// );
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero + Copy,
    {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }

    /// Sums the elements on the main diagonal.
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self[(i, i)])
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3};

    use super::*;

    #[test]
    fn construction() {
        let by_rows = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(by_rows, Mat2x3::from_columns([vec2(1, 4), vec2(2, 5), vec2(3, 6)]));
        assert_eq!(by_rows, Matrix::from_fn(|row, col| 3 * row + col + 1));
        assert_eq!(by_rows.map(|v| v % 2 == 0).row(1), [true, false, true]);
    }

    #[test]
    fn diagonal() {
        let mat = Matrix::from_diagonal(vec3(7, 8, 9));
        assert_eq!(mat[(1, 1)], 8);
        assert_eq!(mat[(0, 2)], 0);
        assert_eq!(mat.into_diagonal(), [7, 8, 9]);
        assert_eq!(mat.trace(), 24);
        assert_eq!(Mat3f::IDENTITY.trace(), 3.0);
    }

    #[test]
    fn checked_access() {
        let mut mat = Mat3x2::from_rows([[1, 2], [3, 4], [5, 6]]);
        assert_eq!(mat.get(2, 1), Some(&6));
        assert_eq!(mat.get(1, 2), None);
        *mat.get_mut(0, 1).unwrap() = -2;
        assert_eq!(mat[(0, 1)], -2);
        assert!(mat.get_mut(3, 0).is_none());
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[5, 6], [7, 8]]);
        assert_eq!(format!("{:?}", mat), "[[5, 6], [7, 8]]");
        assert_eq!(format!("{:#?}", mat), "[\n    [5, 6],\n    [7, 8],\n]");

        let mat = Matrix::from_rows([[0.5, -1.0], [2.0, 3.0]]);
        assert_eq!(format!("{:.1}", mat), "|  0.5 -1.0 |\n|  2.0  3.0 |");
    }

    #[test]
    fn constants() {
        assert_eq!(Mat2f::ZERO, Matrix::from_rows([[0.0, 0.0], [0.0, 0.0]]));
        assert_eq!(Mat2f::IDENTITY, Matrix::from_rows([[1.0, 0.0], [0.0, 1.0]]));
        assert_eq!(
            Mat2x3::<i32>::IDENTITY,
            Matrix::from_rows([[1, 0, 0], [0, 1, 0]])
        );
        assert_eq!(
            Mat3x2::<i32>::IDENTITY,
            Matrix::from_rows([[1, 0], [0, 1], [0, 0]])
        );
    }

    #[test]
    fn rows_and_columns() {
        let mat = Mat3x2::from_rows([[1, 2], [3, 4], [5, 6]]);
        assert_eq!(mat.row(2), vec2(5, 6));
        assert_eq!(mat.column(0), vec3(1, 3, 5));
        assert_eq!(mat.transpose().row(0), mat.column(0));
    }

    #[test]
    fn component_mul() {
        let a = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]);
        let b = Mat2x3::from_rows([[0, -1, 2], [1, 0, -2]]);
        assert_eq!(
            a.component_mul(b),
            Mat2x3::from_rows([[0, -2, 6], [4, 0, -12]])
        );
        assert_eq!(a.component_mul(Matrix::ZERO), Mat2x3::<i32>::ZERO);
    }

    #[test]
    fn outer_product() {
        let u = vec3(1, 0, -1);
        let v = vec2(2, 3);
        let outer = Mat3x2::outer_product(u, v);
        assert_eq!(outer, Mat3x2::from_rows([[2, 3], [0, 0], [-2, -3]]));
        assert_eq!(outer.transpose(), Matrix::outer_product(v, u));
    }

    #[test]
    fn mat_vec_mul() {
        let mat = Mat2x3::from_rows([[1, 0, -1], [2, 3, 4]]);
        assert_eq!(mat * vec3(5, 6, 7), vec2(-2, 56));
        assert_eq!(Mat3f::IDENTITY * vec3(1.5, -2.0, 0.0), vec3(1.5, -2.0, 0.0));
    }

    #[test]
    fn mat_mat_mul() {
        let a = Mat3x2::from_rows([[1, 2], [0, -1], [3, 1]]);
        let b = Mat2x3::from_rows([[2, 0, 1], [1, 4, -2]]);
        assert_eq!(
            a * b,
            Mat3::from_rows([[4, 8, -3], [-1, -4, 2], [7, 4, 1]])
        );
        assert_eq!(b * a, Mat2::from_rows([[5, 5], [-5, -4]]));
    }
}

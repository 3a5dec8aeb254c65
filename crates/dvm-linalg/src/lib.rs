//! Fixed-size vectors and matrices for DVM.
//!
//! # Goals & Non-Goals
//!
//! - Vector and matrix dimensions are const generics. There are no dynamically-sized types, and
//!   dimension mismatches are compile errors rather than runtime errors.
//! - Matrices use a single, column-major, unpadded data layout.
//! - Be generic over the element type: every type implementing [`Scalar`] can be stored, and the
//!   algebraic operations (determinant, inverse) are available for every signed [`Number`].
//! - All math is done by the first-principles kernel in [`dvm_math`]; nothing here calls into the
//!   platform math library.
//! - Decompositions other than the cofactor-based inverse (LU, QR, SVD) are out of scope.
//!
//! # Singular Matrices
//!
//! [`Matrix::inverse`] returns the zero matrix when the determinant is exactly zero. The
//! [`Matrix::guarded_inverse`] and [`Matrix::try_inverse`] variants report
//! [`DomainError::SingularMatrix`] instead, and can be combined with an
//! [`ErrorPolicy`](dvm_math::ErrorPolicy) just like the kernel functions.

mod matrix;
mod vector;

pub use dvm_math::{DomainError, Float, MinMax, Number, One, Scalar, Zero};
pub use matrix::*;
pub use vector::*;

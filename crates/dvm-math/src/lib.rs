//! Scalar math kernel for DVM.
//!
//! This crate implements the elementary functions needed by DVM's vector and matrix types without
//! calling into the platform math library: square roots are computed via Newton-Raphson iteration,
//! exponentials via their Taylor series, logarithms via range reduction and an `atanh` series, and
//! rounding via integer truncation.
//!
//! Every function is generic over [`Scalar`], which is implemented for all built-in integer types
//! as well as [`f32`] and [`f64`]. Fractional intermediate results are computed in the type's
//! [`Scalar::Float`] representative.
//!
//! # Domain Errors
//!
//! Functions never panic on inputs outside their mathematical domain. Instead, they return a
//! documented sentinel value (for example, `sqrt(-1.0) == 0.0` and `log(0.0) == -1.0`). The
//! functions in the [`guarded`] module compute the same values, but also report the
//! [`DomainError`] that caused a sentinel to be returned. An [`ErrorPolicy`] can be used to turn
//! those into [`Result`]s; [`ErrorPolicy::global`] reads the process-wide policy from the
//! `DVM_ERROR_POLICY` environment variable.

mod bits;
mod common;
mod error;
mod exp;
mod policy;
mod round;
mod sqrt;
mod traits;

pub use bits::*;
pub use common::*;
pub use error::*;
pub use exp::{exp, exp2, log, log2, pow, powi};
pub use policy::{ErrorPolicy, Guarded, POLICY_VAR};
pub use round::{ceil, floor, fract, modulo, round, trunc};
pub use sqrt::{inverse_sqrt, sqrt};
pub use traits::*;

/// Variants of the kernel functions that report domain violations.
///
/// Each function returns a [`Guarded`] value holding the same result as the function of the same
/// name at the crate root, plus the [`DomainError`] if the sentinel had to be substituted.
///
/// # Examples
///
/// ```
/// use dvm_math::{guarded, DomainError};
///
/// let root = guarded::sqrt(-2.0f32);
/// assert_eq!(root.error(), Some(DomainError::NegativeSqrt));
/// assert_eq!(root.value(), 0.0);
///
/// assert_eq!(guarded::log(1.0f64).into_result(), Ok(0.0));
/// ```
pub mod guarded {
    pub use crate::exp::guarded::*;
    pub use crate::round::guarded::*;
    pub use crate::sqrt::guarded::*;
}

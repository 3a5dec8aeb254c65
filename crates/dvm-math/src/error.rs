use std::{error::Error, fmt};

/// A numeric domain violation detected by a kernel or matrix function.
///
/// By default these are not surfaced: the affected function returns a documented sentinel value
/// instead. See [`Guarded`][crate::Guarded] and [`ErrorPolicy`][crate::ErrorPolicy] for how to
/// observe them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DomainError {
    /// Square root of a negative value (sentinel: `0`).
    NegativeSqrt,
    /// Inverse square root of zero or a negative value (sentinel: `0`).
    NonPositiveInverseSqrt,
    /// Logarithm of zero or a negative value (sentinel: `-1`).
    NonPositiveLog,
    /// A negative base raised to a non-integral exponent (sentinel: `0`).
    NegativePowBase,
    /// Integer division by zero, or a modulo by zero (sentinel: `0`).
    ZeroDivisor,
    /// Inverse of a matrix whose determinant is zero (sentinel: the zero matrix).
    SingularMatrix,
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NegativeSqrt => write!(f, "square root of a negative value"),
            DomainError::NonPositiveInverseSqrt => {
                write!(f, "inverse square root of a non-positive value")
            }
            DomainError::NonPositiveLog => write!(f, "logarithm of a non-positive value"),
            DomainError::NegativePowBase => {
                write!(f, "negative base raised to a non-integral exponent")
            }
            DomainError::ZeroDivisor => write!(f, "division by zero"),
            DomainError::SingularMatrix => write!(f, "attempt to invert a singular matrix"),
        }
    }
}

impl Error for DomainError {}

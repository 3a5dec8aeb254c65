//! DVM: fixed-size vectors and matrices with a first-principles scalar math kernel.
//!
//! This crate re-exports [`dvm_linalg`] (vectors, matrices, determinants and inverses) and makes
//! the scalar kernel available as the [`math`] module.
//!
//! # Environment Variables
//!
//! * `DVM_ERROR_POLICY`: Configures how [`ErrorPolicy::global`] reports numeric domain errors
//!   (square roots of negative numbers, logarithms of non-positive numbers, singular matrices, etc.).
//!   Allowed values are:
//!   * `sentinel` (or `silent`): the default. Affected operations return a documented sentinel
//!     value, such as `0` for `sqrt(-1)` or the zero matrix for the inverse of a singular matrix.
//!   * `signal` (or `error`): resolving a guarded result returns the [`DomainError`] instead.
//! * `RUST_LOG`: Overrides the log filter set up by [`init_logger!`].

use log::LevelFilter;

pub use dvm_linalg::*;
pub use dvm_math as math;
pub use dvm_math::{guarded, ErrorPolicy, Guarded};

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = if cfg!(debug_assertions) {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .filter(Some("dvm_math"), log_level)
        .filter(Some("dvm_linalg"), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// If `cfg!(debug_assertions)` is enabled, the calling crate and DVM will log at *trace* level.
/// Otherwise, they will log at *debug* level.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn reexports() {
        init_logger!();
        init_logger!();

        let mat = Mat2f::from_rows([[2.0, 0.0], [0.0, 4.0]]);
        assert_eq!(mat.inverse(), Mat2f::from_diagonal([0.5, 0.25]));
        assert_relative_eq!(math::sqrt(2.0f64), std::f64::consts::SQRT_2, epsilon = 1e-14);
        assert_eq!(
            ErrorPolicy::Signal.resolve(Mat2f::ZERO.guarded_inverse()),
            Err(DomainError::SingularMatrix)
        );
        assert_eq!(
            ErrorPolicy::Sentinel.resolve(guarded::log(0.0f32)),
            Ok(-1.0)
        );
    }
}

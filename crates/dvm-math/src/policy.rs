//! Sentinel values, explicit domain errors, and the switch between them.
//!
//! Every function with a numeric domain edge (negative square root, non-positive logarithm,
//! singular matrix inverse, ...) is implemented exactly once, returning a [`Guarded`] value. The
//! plain functions of this crate unwrap that into the sentinel, which is what most callers want.
//! Callers that need to know about the violation can use the `guarded` variants directly, or
//! resolve them through an [`ErrorPolicy`].

use std::{
    env::{self, VarError},
    fmt,
};

use once_cell::sync::Lazy;

use crate::DomainError;

/// The name of the environment variable consulted by [`ErrorPolicy::global`].
pub const POLICY_VAR: &str = "DVM_ERROR_POLICY";

static POLICY: Lazy<ErrorPolicy> = Lazy::new(|| {
    let policy = ErrorPolicy::from_var(env::var(POLICY_VAR));
    log::debug!("using error policy {:?}", policy);
    policy
});

/// The result of a computation with a numeric domain edge.
///
/// Holds the computed value, which is the documented sentinel if the input was outside the domain
/// of the function, along with the [`DomainError`] describing the violation (if any).
#[derive(Debug, Clone, Copy, PartialEq)]
#[must_use]
pub struct Guarded<T> {
    value: T,
    error: Option<DomainError>,
}

impl<T> Guarded<T> {
    /// Wraps a value computed from an in-domain input.
    #[inline]
    pub fn ok(value: T) -> Self {
        Self { value, error: None }
    }

    /// Wraps the `sentinel` returned for an input outside the function's domain.
    pub fn sentinel(sentinel: T, error: DomainError) -> Self
    where
        T: fmt::Debug,
    {
        log::trace!("{error}; substituting sentinel {sentinel:?}");
        Self {
            value: sentinel,
            error: Some(error),
        }
    }

    /// Returns `true` if the input was inside the function's domain.
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Returns the domain violation, if there was one.
    #[inline]
    pub fn error(&self) -> Option<DomainError> {
        self.error
    }

    /// Returns the computed value, or the sentinel if there was a domain violation.
    #[inline]
    pub fn value(self) -> T {
        self.value
    }

    /// Converts this into a [`Result`], discarding the sentinel on domain violations.
    #[inline]
    pub fn into_result(self) -> Result<T, DomainError> {
        match self.error {
            None => Ok(self.value),
            Some(e) => Err(e),
        }
    }

    /// Applies `f` to the contained value, keeping the domain violation (if any).
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Guarded<U> {
        Guarded {
            value: f(self.value),
            error: self.error,
        }
    }
}

/// How domain violations are reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Silently return the sentinel value (the default).
    #[default]
    Sentinel,
    /// Return the [`DomainError`] instead of the sentinel.
    Signal,
}

impl ErrorPolicy {
    /// Resolves a [`Guarded`] value according to this policy.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dvm_math::*;
    /// assert_eq!(ErrorPolicy::Sentinel.resolve(guarded::sqrt(-4.0)), Ok(0.0));
    /// assert_eq!(
    ///     ErrorPolicy::Signal.resolve(guarded::sqrt(-4.0)),
    ///     Err(DomainError::NegativeSqrt),
    /// );
    /// assert_eq!(ErrorPolicy::Signal.resolve(guarded::sqrt(4.0)), Ok(2.0));
    /// ```
    pub fn resolve<T>(self, guarded: Guarded<T>) -> Result<T, DomainError> {
        match self {
            ErrorPolicy::Sentinel => Ok(guarded.value()),
            ErrorPolicy::Signal => guarded.into_result(),
        }
    }

    /// Parses a policy name.
    ///
    /// Accepts `sentinel` (or `silent`) and `signal` (or `error`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sentinel" | "silent" => Some(ErrorPolicy::Sentinel),
            "signal" | "error" => Some(ErrorPolicy::Signal),
            _ => None,
        }
    }

    /// Returns the process-wide policy configured via the `DVM_ERROR_POLICY` environment variable.
    ///
    /// The variable is read once; later changes to the environment have no effect. If it is unset
    /// or invalid, [`ErrorPolicy::Sentinel`] is used.
    pub fn global() -> Self {
        *POLICY
    }

    /// Interprets the value of the `DVM_ERROR_POLICY` variable, warning about invalid values.
    fn from_var(var: Result<String, VarError>) -> Self {
        match var.as_deref() {
            Ok(name) => Self::from_name(name).unwrap_or_else(|| {
                log::warn!(
                    "invalid value set for `{POLICY_VAR}` variable: '{name}'; using sentinels"
                );
                ErrorPolicy::default()
            }),
            Err(VarError::NotPresent) => ErrorPolicy::default(),
            Err(VarError::NotUnicode(s)) => {
                log::warn!(
                    "invalid value set for `{POLICY_VAR}` variable: {}; using sentinels",
                    s.to_string_lossy()
                );
                ErrorPolicy::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guarded() {
        let ok = Guarded::ok(1.5);
        assert!(ok.is_ok());
        assert_eq!(ok.error(), None);
        assert_eq!(ok.into_result(), Ok(1.5));

        let bad = Guarded::sentinel(0.0, DomainError::NegativeSqrt);
        assert!(!bad.is_ok());
        assert_eq!(bad.error(), Some(DomainError::NegativeSqrt));
        assert_eq!(bad.value(), 0.0);
        assert_eq!(bad.into_result(), Err(DomainError::NegativeSqrt));
        assert_eq!(
            bad.map(|v| v + 1.0).into_result(),
            Err(DomainError::NegativeSqrt)
        );
    }

    #[test]
    fn resolve() {
        let bad = Guarded::sentinel(-1.0, DomainError::NonPositiveLog);
        assert_eq!(ErrorPolicy::Sentinel.resolve(bad), Ok(-1.0));
        assert_eq!(
            ErrorPolicy::Signal.resolve(bad),
            Err(DomainError::NonPositiveLog)
        );
        assert_eq!(ErrorPolicy::default(), ErrorPolicy::Sentinel);
    }

    #[test]
    fn names() {
        assert_eq!(ErrorPolicy::from_name("sentinel"), Some(ErrorPolicy::Sentinel));
        assert_eq!(ErrorPolicy::from_name("silent"), Some(ErrorPolicy::Sentinel));
        assert_eq!(ErrorPolicy::from_name("signal"), Some(ErrorPolicy::Signal));
        assert_eq!(ErrorPolicy::from_name("error"), Some(ErrorPolicy::Signal));
        assert_eq!(ErrorPolicy::from_name("Signal"), None);
        assert_eq!(ErrorPolicy::from_name(""), None);
    }

    #[test]
    fn environment_values() {
        let var = |v: &str| Ok(v.to_string());
        assert_eq!(ErrorPolicy::from_var(var("signal")), ErrorPolicy::Signal);
        assert_eq!(ErrorPolicy::from_var(var("silent")), ErrorPolicy::Sentinel);
        assert_eq!(ErrorPolicy::from_var(var("loud")), ErrorPolicy::Sentinel);
        assert_eq!(
            ErrorPolicy::from_var(Err(VarError::NotPresent)),
            ErrorPolicy::Sentinel
        );
        assert_eq!(ErrorPolicy::global(), ErrorPolicy::global());
    }

    #[test]
    fn display() {
        assert_eq!(
            DomainError::NegativeSqrt.to_string(),
            "square root of a negative value"
        );
        assert_eq!(
            DomainError::SingularMatrix.to_string(),
            "attempt to invert a singular matrix"
        );
    }
}

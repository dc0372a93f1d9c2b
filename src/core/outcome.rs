//! The two-variant outcome type at the heart of the railway.
//!
//! An `Outcome` holds exactly one of a success value or a failure value.
//! It is immutable once constructed: every combinator consumes its input
//! and produces a new outcome, so a value flows through a chain by a
//! single line of ownership.

use super::error::ContractViolation;
use serde::{Deserialize, Serialize};

/// A value that is either a success carrying `S` or a failure carrying `F`.
///
/// The enum makes the inactive payload structurally unreachable: pattern
/// matching is exhaustive and there is no slot for the other variant's
/// value. Domain failures travel through `Failure` as ordinary data and
/// are never raised as language-level errors by this library.
///
/// # Example
///
/// ```rust
/// use railway::Outcome;
///
/// fn parse_port(raw: &str) -> Outcome<u16, String> {
///     match raw.parse() {
///         Ok(port) => Outcome::succeeded(port),
///         Err(_) => Outcome::failed(format!("not a port: {raw}")),
///     }
/// }
///
/// assert!(parse_port("8080").is_success());
/// assert!(parse_port("eighty").is_failure());
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Outcome<S, F> {
    /// The operation produced a value.
    Success(S),
    /// The operation failed with a descriptive value.
    Failure(F),
}

impl<S, F> Outcome<S, F> {
    /// Construct a success outcome carrying `value`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use railway::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::succeeded(42);
    /// assert!(outcome.is_success());
    /// assert_eq!(outcome.success_value(), &42);
    /// ```
    pub fn succeeded(value: S) -> Self {
        Outcome::Success(value)
    }

    /// Construct a failure outcome carrying `value`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use railway::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::failed("boom".to_string());
    /// assert!(outcome.is_failure());
    /// ```
    pub fn failed(value: F) -> Self {
        Outcome::Failure(value)
    }

    /// Construct a success outcome from optional data, failing fast when
    /// the value is absent.
    ///
    /// Rust's type system already rules out an absent payload in
    /// [`Outcome::succeeded`]; this constructor covers callers arriving
    /// from optional data who would otherwise be tempted to unwrap first.
    ///
    /// # Example
    ///
    /// ```rust
    /// use railway::{ContractViolation, Outcome};
    ///
    /// let present = Outcome::<i32, String>::try_succeeded(Some(7));
    /// assert!(present.is_ok());
    ///
    /// let absent = Outcome::<i32, String>::try_succeeded(None);
    /// assert_eq!(absent.unwrap_err(), ContractViolation::AbsentSuccess);
    /// ```
    pub fn try_succeeded(value: Option<S>) -> Result<Self, ContractViolation> {
        value
            .map(Outcome::Success)
            .ok_or(ContractViolation::AbsentSuccess)
    }

    /// Construct a failure outcome from optional data, failing fast when
    /// the value is absent.
    pub fn try_failed(value: Option<F>) -> Result<Self, ContractViolation> {
        value
            .map(Outcome::Failure)
            .ok_or(ContractViolation::AbsentFailure)
    }

    /// Check whether this outcome is a success.
    ///
    /// Exactly one of `is_success` and `is_failure` is true for any
    /// outcome.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Check whether this outcome is a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Borrow the success payload, or `None` if this is a failure.
    pub fn success(&self) -> Option<&S> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Borrow the failure payload, or `None` if this is a success.
    pub fn failure(&self) -> Option<&F> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(value) => Some(value),
        }
    }

    /// Borrow the success payload.
    ///
    /// Callers must check the discriminant first; prefer pattern matching
    /// or [`Outcome::success`] where the variant is not already known.
    ///
    /// # Panics
    ///
    /// Panics if this outcome is a failure. That is a contract violation
    /// by the caller, not a recoverable condition, so it is not converted
    /// into a domain failure.
    pub fn success_value(&self) -> &S {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => {
                panic!("success_value() called on a failure outcome")
            }
        }
    }

    /// Borrow the failure payload.
    ///
    /// # Panics
    ///
    /// Panics if this outcome is a success; see [`Outcome::success_value`].
    pub fn failure_value(&self) -> &F {
        match self {
            Outcome::Success(_) => {
                panic!("failure_value() called on a success outcome")
            }
            Outcome::Failure(value) => value,
        }
    }
}

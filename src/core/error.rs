//! Contract violation errors for outcome construction.

use thiserror::Error;

/// Errors raised when a caller breaks the construction contract.
///
/// These represent programmer errors, not domain failures. A domain failure
/// is data and travels through `Outcome::Failure`; a contract violation is
/// reported immediately so a half-valid outcome can never enter a chain.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ContractViolation {
    #[error("Cannot construct a success outcome from an absent value")]
    AbsentSuccess,

    #[error("Cannot construct a failure outcome from an absent value")]
    AbsentFailure,
}

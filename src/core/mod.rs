//! The outcome type and its construction contract.
//!
//! This module contains the pure core of the railway:
//! - The `Outcome` sum type (success XOR failure)
//! - Fail-fast construction from optional data
//! - Discriminant checks and payload accessors
//!
//! Everything here is pure (no side effects); combinators that operate on
//! outcomes live in [`crate::combinators`].

mod error;
mod outcome;

pub use error::ContractViolation;
pub use outcome::Outcome;

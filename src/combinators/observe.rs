//! Observation combinators for interleaving side effects into a chain.
//!
//! `tee` lets a caller watch a success value (for logging, metrics) while
//! the outcome itself flows on unchanged. `match_success` and
//! `match_failure` are the terminal one-sided forms. None of these ever
//! alter the discriminant or payload.

use crate::core::Outcome;

impl<S, F> Outcome<S, F> {
    /// Observe the success payload for its side effect, then return the
    /// original outcome unchanged.
    ///
    /// `f` receives a reference; its return value is discarded. On a
    /// failure `f` is never invoked and the outcome passes through
    /// untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use railway::Outcome;
    ///
    /// let mut log = Vec::new();
    /// let outcome: Outcome<i32, String> = Outcome::succeeded(12);
    ///
    /// let same = outcome.tee(|n| log.push(*n)).map(|n| n + 1);
    ///
    /// assert_eq!(same, Outcome::succeeded(13));
    /// assert_eq!(log, vec![12]);
    /// ```
    pub fn tee(self, f: impl FnOnce(&S)) -> Self {
        if let Outcome::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Run `f` with the success payload if present; do nothing on a
    /// failure.
    pub fn match_success(self, f: impl FnOnce(S)) {
        if let Outcome::Success(value) = self {
            f(value);
        }
    }

    /// Run `f` with the failure payload if present; do nothing on a
    /// success.
    pub fn match_failure(self, f: impl FnOnce(F)) {
        if let Outcome::Failure(failure) = self {
            f(failure);
        }
    }
}

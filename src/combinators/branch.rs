//! Branching combinators that dispatch on the discriminant.
//!
//! `either` selects one of two functions and hands it the whole outcome;
//! `handle` is the effectful terminal form that unwraps the payload.
//! Exactly one callback runs in every case, never both, never neither.

use crate::core::Outcome;

impl<S, F> Outcome<S, F> {
    /// Invoke exactly one of the two functions, selected by the
    /// discriminant.
    ///
    /// Both callbacks receive the whole outcome rather than the unwrapped
    /// payload, so a callback may re-inspect or re-wrap it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use railway::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::succeeded(2);
    /// let doubled = outcome.either(
    ///     |o| o.map(|n| n * 2),
    ///     |o| o,
    /// );
    /// assert_eq!(doubled, Outcome::succeeded(4));
    /// ```
    pub fn either<R>(
        self,
        on_success: impl FnOnce(Outcome<S, F>) -> R,
        on_failure: impl FnOnce(Outcome<S, F>) -> R,
    ) -> R {
        if self.is_success() {
            on_success(self)
        } else {
            on_failure(self)
        }
    }

    /// Terminal dispatch: run `on_success` with the success payload or
    /// `on_failure` with the failure payload.
    ///
    /// # Example
    ///
    /// ```rust
    /// use railway::Outcome;
    ///
    /// let mut seen = None;
    /// let outcome: Outcome<i32, String> = Outcome::failed("late".to_string());
    /// outcome.handle(
    ///     |n| println!("shipped {n}"),
    ///     |reason| seen = Some(reason),
    /// );
    /// assert_eq!(seen, Some("late".to_string()));
    /// ```
    pub fn handle(self, on_success: impl FnOnce(S), on_failure: impl FnOnce(F)) {
        match self {
            Outcome::Success(value) => on_success(value),
            Outcome::Failure(failure) => on_failure(failure),
        }
    }
}

//! Transformation and chaining combinators.
//!
//! `map` reshapes the success payload; `bind` chains a fallible step.
//! Both short-circuit on failure: once a chain carries a failure, later
//! steps pass it through without running their functions.

use crate::core::Outcome;

impl<S, F> Outcome<S, F> {
    /// Apply `f` to the success payload, passing a failure through
    /// untouched.
    ///
    /// `f` is assumed total over `S`; if the step itself can fail, use
    /// [`Outcome::bind`] instead.
    ///
    /// # Example
    ///
    /// ```rust
    /// use railway::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::succeeded(20);
    /// assert_eq!(outcome.map(|n| n * 2), Outcome::succeeded(40));
    ///
    /// let failure: Outcome<i32, String> = Outcome::failed("bad".to_string());
    /// assert_eq!(failure.map(|n| n * 2), Outcome::failed("bad".to_string()));
    /// ```
    pub fn map<S2>(self, f: impl FnOnce(S) -> S2) -> Outcome<S2, F> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Chain a fallible step, delegating entirely to `f`'s result on
    /// success.
    ///
    /// On failure `f` is never invoked and the failure propagates
    /// unchanged. This is the short-circuit mechanism: after the first
    /// failure in a chain, every later `bind` is a pass-through.
    ///
    /// Satisfies the associativity law
    /// `x.bind(f).bind(g) == x.bind(|v| f(v).bind(g))`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use railway::Outcome;
    ///
    /// fn halve(n: i32) -> Outcome<i32, String> {
    ///     if n % 2 == 0 {
    ///         Outcome::succeeded(n / 2)
    ///     } else {
    ///         Outcome::failed(format!("{n} is odd"))
    ///     }
    /// }
    ///
    /// let chained = Outcome::succeeded(8).bind(halve).bind(halve);
    /// assert_eq!(chained, Outcome::succeeded(2));
    ///
    /// let short_circuited = Outcome::succeeded(6).bind(halve).bind(halve);
    /// assert_eq!(short_circuited, Outcome::failed("3 is odd".to_string()));
    /// ```
    pub fn bind<S2>(self, f: impl FnOnce(S) -> Outcome<S2, F>) -> Outcome<S2, F> {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(failure) => Outcome::Failure(failure),
        }
    }
}

//! Aggregation combinators that collect every failure, not just the first.
//!
//! Built for running N independent fallible checks (field validations,
//! preflight probes) and ending with either all N success values or the
//! full list of collected failures. The failure side is an
//! order-preserving multiset: insertion order is processing order and
//! duplicates are kept.

use crate::core::Outcome;

impl<S, F> Outcome<S, Vec<F>> {
    // Normalizes a single outcome to its failure contribution: a success
    // contributes nothing. Private so an "empty failure" never exists as
    // a constructible outcome.
    fn into_failure_items(self) -> Vec<F> {
        match self {
            Outcome::Success(_) => Vec::new(),
            Outcome::Failure(failures) => failures,
        }
    }
}

impl<S, F> Outcome<Vec<S>, Vec<F>> {
    /// Fold one more outcome into an accumulator.
    ///
    /// If both sides are successes, `next`'s value is appended to the
    /// accumulated successes. Otherwise the result is a failure holding
    /// the accumulator's failures followed by `next`'s failures; a
    /// success on either side contributes nothing to that list, and no
    /// failure is ever discarded.
    ///
    /// # Example
    ///
    /// ```rust
    /// use railway::Outcome;
    ///
    /// let acc: Outcome<Vec<i32>, Vec<String>> = Outcome::succeeded(vec![1]);
    /// let merged = acc.merge(Outcome::succeeded(2));
    /// assert_eq!(merged, Outcome::succeeded(vec![1, 2]));
    ///
    /// let merged = merged.merge(Outcome::failed(vec!["too big".to_string()]));
    /// assert_eq!(merged, Outcome::failed(vec!["too big".to_string()]));
    /// ```
    pub fn merge(self, next: Outcome<S, Vec<F>>) -> Outcome<Vec<S>, Vec<F>> {
        match (self, next) {
            (Outcome::Success(mut values), Outcome::Success(value)) => {
                values.push(value);
                Outcome::Success(values)
            }
            (accumulator, next) => {
                let mut failures = accumulator.into_failure_items();
                failures.extend(next.into_failure_items());
                Outcome::Failure(failures)
            }
        }
    }
}

/// Aggregate a sequence of outcomes into one.
///
/// A left fold of [`Outcome::merge`] seeded with an empty success: the
/// result is a success carrying every value in input order iff every item
/// succeeded, otherwise a failure carrying every collected failure in
/// input order.
///
/// # Example
///
/// ```rust
/// use railway::{aggregate, Outcome};
///
/// let checks: Vec<Outcome<i32, Vec<String>>> = vec![
///     Outcome::succeeded(1),
///     Outcome::failed(vec!["name missing".to_string()]),
///     Outcome::succeeded(2),
/// ];
///
/// assert_eq!(
///     aggregate(checks),
///     Outcome::failed(vec!["name missing".to_string()]),
/// );
/// ```
pub fn aggregate<S, F, I>(items: I) -> Outcome<Vec<S>, Vec<F>>
where
    I: IntoIterator<Item = Outcome<S, Vec<F>>>,
{
    items
        .into_iter()
        .fold(Outcome::succeeded(Vec::new()), Outcome::merge)
}

impl<S, F> FromIterator<Outcome<S, Vec<F>>> for Outcome<Vec<S>, Vec<F>> {
    /// Collect an iterator of outcomes into the aggregate outcome;
    /// equivalent to [`aggregate`].
    fn from_iter<I: IntoIterator<Item = Outcome<S, Vec<F>>>>(iter: I) -> Self {
        aggregate(iter)
    }
}

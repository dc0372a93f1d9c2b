//! Asynchronous counterparts of the synchronous combinators.
//!
//! Each function sequences over a single pending outcome the caller
//! already owns: it awaits the incoming computation fully, then — only on
//! the branch mandated by the discriminant — awaits the caller-supplied
//! async function. Nothing here spawns tasks, races computations, or
//! shares state; cancellation and timeouts belong to whatever drives the
//! futures.

use crate::core::Outcome;
use std::future::Future;

/// Async [`Outcome::map`]: await `outcome`, then apply `f` on the success
/// branch.
///
/// The incoming computation resolves fully before `f` starts; on a
/// failure `f` is never invoked.
///
/// # Example
///
/// ```rust
/// use railway::{future::map_async, Outcome};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let pending = async { Outcome::<i32, String>::succeeded(21) };
/// let mapped = map_async(pending, |n| async move { n * 2 }).await;
/// assert_eq!(mapped, Outcome::succeeded(42));
/// # }
/// ```
pub async fn map_async<S, F, S2, In, Map, Fut>(outcome: In, f: Map) -> Outcome<S2, F>
where
    In: Future<Output = Outcome<S, F>>,
    Map: FnOnce(S) -> Fut,
    Fut: Future<Output = S2>,
{
    match outcome.await {
        Outcome::Success(value) => Outcome::Success(f(value).await),
        Outcome::Failure(failure) => Outcome::Failure(failure),
    }
}

/// Async [`Outcome::bind`]: await `outcome`, then delegate to `f`'s
/// pending result on the success branch.
///
/// A resolved failure propagates unchanged without invoking `f`.
pub async fn bind_async<S, F, S2, In, Step, Fut>(outcome: In, f: Step) -> Outcome<S2, F>
where
    In: Future<Output = Outcome<S, F>>,
    Step: FnOnce(S) -> Fut,
    Fut: Future<Output = Outcome<S2, F>>,
{
    match outcome.await {
        Outcome::Success(value) => f(value).await,
        Outcome::Failure(failure) => Outcome::Failure(failure),
    }
}

/// Async [`Outcome::either`]: await `outcome`, then await exactly one of
/// the two functions, selected by the discriminant. Both receive the
/// whole resolved outcome.
pub async fn either_async<S, F, R, In, OnSuccess, OnFailure, SuccessFut, FailureFut>(
    outcome: In,
    on_success: OnSuccess,
    on_failure: OnFailure,
) -> R
where
    In: Future<Output = Outcome<S, F>>,
    OnSuccess: FnOnce(Outcome<S, F>) -> SuccessFut,
    OnFailure: FnOnce(Outcome<S, F>) -> FailureFut,
    SuccessFut: Future<Output = R>,
    FailureFut: Future<Output = R>,
{
    let resolved = outcome.await;
    if resolved.is_success() {
        on_success(resolved).await
    } else {
        on_failure(resolved).await
    }
}

/// Async [`Outcome::tee`]: await `outcome`, observe a success by
/// reference, and return the resolved outcome unchanged.
pub async fn tee_async<S, F, In, Observe, Fut>(outcome: In, f: Observe) -> Outcome<S, F>
where
    In: Future<Output = Outcome<S, F>>,
    Observe: FnOnce(&S) -> Fut,
    Fut: Future<Output = ()>,
{
    let resolved = outcome.await;
    if let Outcome::Success(value) = &resolved {
        f(value).await;
    }
    resolved
}

/// Async [`Outcome::match_success`]: await `outcome`, then await `f` with
/// the success payload if present.
pub async fn match_success_async<S, F, In, Observe, Fut>(outcome: In, f: Observe)
where
    In: Future<Output = Outcome<S, F>>,
    Observe: FnOnce(S) -> Fut,
    Fut: Future<Output = ()>,
{
    if let Outcome::Success(value) = outcome.await {
        f(value).await;
    }
}

/// Async [`Outcome::match_failure`]: await `outcome`, then await `f` with
/// the failure payload if present.
pub async fn match_failure_async<S, F, In, Observe, Fut>(outcome: In, f: Observe)
where
    In: Future<Output = Outcome<S, F>>,
    Observe: FnOnce(F) -> Fut,
    Fut: Future<Output = ()>,
{
    if let Outcome::Failure(failure) = outcome.await {
        f(failure).await;
    }
}

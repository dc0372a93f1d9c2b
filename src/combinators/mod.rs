//! Combinators over [`Outcome`](crate::core::Outcome) values.
//!
//! The railway style: a pipeline of fallible steps expressed as chained
//! combinators that short-circuit on the first failure, with aggregation
//! for the cases where every failure should be collected instead.
//!
//! - Transformation and chaining: `map`, `bind`
//! - Branching: `either`, `handle`
//! - Observation: `tee`, `match_success`, `match_failure`
//! - Aggregation: `merge`, [`aggregate`]
//! - Asynchronous counterparts in [`future`]

mod branch;
mod observe;
mod transform;

pub mod aggregate;
pub mod future;

pub use aggregate::aggregate;

//! Railway: a railway oriented outcome type for composing fallible steps
//!
//! Railway models every fallible step as an [`Outcome`]: a value that is
//! exactly one of a success or a failure. Steps are composed with
//! combinators instead of nested conditionals — once a step fails, the
//! rest of the chain passes the failure through without running.
//!
//! # Core Concepts
//!
//! - **Outcome**: the immutable success-XOR-failure value
//! - **Chaining**: `map` and `bind` short-circuit on the first failure
//! - **Aggregation**: `merge` and `aggregate` collect *every* failure
//!   from independent checks instead of stopping at the first
//!
//! # Example
//!
//! ```rust
//! use railway::{aggregate, Outcome};
//!
//! fn check_name(name: &str) -> Outcome<String, Vec<String>> {
//!     if name.is_empty() {
//!         Outcome::failed(vec!["name must not be empty".to_string()])
//!     } else {
//!         Outcome::succeeded(name.to_string())
//!     }
//! }
//!
//! fn check_len(name: &str) -> Outcome<String, Vec<String>> {
//!     if name.len() > 8 {
//!         Outcome::failed(vec![format!("{name} is too long")])
//!     } else {
//!         Outcome::succeeded(name.to_string())
//!     }
//! }
//!
//! let report = aggregate(vec![check_name(""), check_len("propagation")]);
//! assert_eq!(
//!     report,
//!     Outcome::failed(vec![
//!         "name must not be empty".to_string(),
//!         "propagation is too long".to_string(),
//!     ])
//! );
//! ```

pub mod combinators;
pub mod core;

// Re-export commonly used items
pub use combinators::future;
pub use combinators::aggregate::aggregate;
pub use core::{ContractViolation, Outcome};

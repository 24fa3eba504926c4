//! Sift - first-match structural pattern dispatch over runtime values.
//!
//! This crate provides:
//! - Runtime value types (`Value`, `Heap`, `RecordValue`)
//! - A pattern vocabulary (`Pattern` and its sentinel constants)
//! - A recursive structural matcher (`match_value`, `match_list`, `match_map`)
//! - First-match-wins dispatch (`match_first`, `match_all`)
//!
//! # Dispatch model
//!
//! A dispatch is an ordered list of arms, each pairing a pattern with an
//! action. Arms are tried in declaration order; the first pattern that
//! matches wins, and its action runs with the match's captures applied
//! positionally. A pattern that matches nothing is a clean no-match and
//! moves on to the next arm; exhausting the arm list is a fault. Actions
//! may themselves call back into dispatch, so recursive definitions fall
//! out naturally.
//!
//! # Value Types
//!
//! Subjects, captures, and pattern literals all share one closed `Value`
//! algebra with enforced Arc usage:
//! - All heap allocations go through `Value::` factory methods
//! - The `Heap<T>` wrapper enforces this invariant
//! - Matching never mutates a subject; captures are cheap clones
//!
//! # Example
//!
//! ```
//! use sift::{match_first, MatchArm, Pattern, Value, NUMBER, WILDCARD};
//!
//! let subject = Value::list(vec![Value::int(1), Value::int(2), Value::int(3)]);
//! let result = match_first(
//!     &subject,
//!     &[
//!         MatchArm::handler(
//!             Pattern::List(vec![Pattern::lit(1), WILDCARD, NUMBER]),
//!             2,
//!             |caps| {
//!                 let a = caps[0].as_int().unwrap_or(0);
//!                 let b = caps[1].as_int().unwrap_or(0);
//!                 Ok(Value::int(a + b))
//!             },
//!         ),
//!         MatchArm::literal(WILDCARD, "unrecognized"),
//!     ],
//! )?;
//! assert_eq!(result, Value::int(5));
//! # Ok::<(), sift::MatchError>(())
//! ```

mod dispatch;
mod errors;
mod matcher;
mod pattern;
mod value;

#[cfg(test)]
mod tests;

pub use dispatch::{match_all, match_first, Action, HandlerFn, MatchArm};
pub use errors::{MatchError, MatchErrorKind, MatchResult};
pub use matcher::{match_list, match_map, match_value, Captures};
pub use pattern::{
    GuardFn, Pattern, ANY, CALLABLE, LIST, NUMBER, PAD, REST, STRING, TAIL, WILDCARD,
};
pub use value::{Heap, NativeFn, RecordValue, Value};

// Re-export error constructors for callers building their own arms
pub use errors::{handler_arity_mismatch, misplaced_tail, non_exhaustive};

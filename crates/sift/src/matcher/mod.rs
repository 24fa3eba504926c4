//! Structural matcher: a recursive predicate over (pattern, subject) pairs.
//!
//! Matching is total over captures: a successful match returns every
//! capture in depth-first, left-to-right pattern order; a failed match
//! returns no captures at all. Non-matches are `Ok(None)` — only
//! pattern-shape faults and raising guards produce an `Err`.

mod list;
mod map;


use crate::errors::{misplaced_tail, MatchError};
use crate::pattern::Pattern;
use crate::value::Value;
use smallvec::{smallvec, SmallVec};

pub use list::match_list;
pub use map::match_map;

/// Ordered captures produced by a successful match.
pub type Captures = SmallVec<[Value; 4]>;

/// Match one pattern against one subject.
///
/// Returns `Ok(Some(captures))` on a match and `Ok(None)` on a clean
/// no-match. Literal matches capture nothing; wildcard, type-tag, guard,
/// and instance matches capture the subject; list and map patterns
/// accumulate the captures of their sub-patterns in order.
pub fn match_value(pattern: &Pattern, value: &Value) -> Result<Option<Captures>, MatchError> {
    match pattern {
        Pattern::Literal(lit) => Ok(lit.equals(value).then(SmallVec::new)),
        // A padded-away slot satisfies nothing.
        Pattern::Pad => Ok(None),
        Pattern::Wildcard => Ok(Some(capture(value))),
        Pattern::AnyStr => Ok(matches!(value, Value::Str(_)).then(|| capture(value))),
        Pattern::AnyNum => {
            Ok(matches!(value, Value::Int(_) | Value::Float(_)).then(|| capture(value)))
        }
        Pattern::AnyList => Ok(matches!(value, Value::List(_)).then(|| capture(value))),
        Pattern::AnyCallable => Ok(matches!(value, Value::Native(..)).then(|| capture(value))),
        Pattern::Instance(name) => {
            let matched = matches!(value, Value::Record(r) if *r.type_name == *name);
            Ok(matched.then(|| capture(value)))
        }
        Pattern::Guard(pred) => {
            // A raising guard is a fault, never a no-match.
            Ok(pred(value)?.then(|| capture(value)))
        }
        Pattern::List(patterns) => match value {
            Value::List(items) => match_list(patterns, items),
            _ => Ok(None),
        },
        Pattern::Map(entries) => match_map(entries, value),
        Pattern::Tail => Err(misplaced_tail()),
    }
}

fn capture(value: &Value) -> Captures {
    smallvec![value.clone()]
}

//! Pattern vocabulary.
//!
//! Patterns are a closed sum type: one variant per matchable category,
//! with the sentinel markers (`Wildcard`, `Tail`, `Pad`) as unit variants
//! of the same enum. Sentinel recognition is therefore ordinary variant
//! dispatch, and ordinary data can never collide with a marker.
//!
//! The unit variants are exported as constants, with the conventional
//! alias pairs (`WILDCARD`/`ANY`, `TAIL`/`REST`) both provided.

use crate::errors::MatchError;
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// Single-argument predicate over a subject value.
///
/// `Ok(true)` is a match and captures the subject; `Ok(false)` is a
/// no-match. An `Err` is a fault and propagates unchanged — it is never
/// read as a no-match.
pub type GuardFn = Arc<dyn Fn(&Value) -> Result<bool, MatchError> + Send + Sync>;

/// Structural pattern.
#[derive(Clone)]
pub enum Pattern {
    /// Literal value; matches by structural equality and captures nothing.
    Literal(Value),
    /// Matches any subject and captures it.
    Wildcard,
    /// Matches any string subject and captures it.
    AnyStr,
    /// Matches any numeric subject (int or float) and captures it.
    AnyNum,
    /// Matches any list subject and captures it whole.
    AnyList,
    /// Matches any native callable subject and captures it.
    AnyCallable,
    /// Matches a record of the named nominal type and captures it.
    Instance(String),
    /// Predicate pattern; a true result captures the subject.
    Guard(GuardFn),
    /// Ordered sub-patterns matched elementwise against a list subject.
    List(Vec<Pattern>),
    /// Key/value sub-pattern entries matched against a map subject.
    Map(Vec<(Pattern, Pattern)>),
    /// Captures the remaining suffix of a list subject as a single list.
    /// Only valid as the final element of a list pattern.
    Tail,
    /// Alignment filler paired with missing elements when list lengths
    /// differ. Never present in user patterns and never matches.
    Pad,
}

/// Wildcard sentinel: matches anything and captures the subject.
pub const WILDCARD: Pattern = Pattern::Wildcard;
/// Alias for [`WILDCARD`].
pub const ANY: Pattern = Pattern::Wildcard;
/// String type tag: matches any string, capturing it.
pub const STRING: Pattern = Pattern::AnyStr;
/// Number type tag: matches any int or float, capturing it.
pub const NUMBER: Pattern = Pattern::AnyNum;
/// List type tag: matches any list, capturing it whole.
pub const LIST: Pattern = Pattern::AnyList;
/// Callable type tag: matches any native callable, capturing it.
pub const CALLABLE: Pattern = Pattern::AnyCallable;
/// Tail sentinel: captures everything remaining in a list; must be the
/// final element of a list pattern.
pub const TAIL: Pattern = Pattern::Tail;
/// Alias for [`TAIL`].
pub const REST: Pattern = Pattern::Tail;
/// Padding sentinel. Internal to list alignment; exported for
/// introspection and tests only — it never matches anything.
pub const PAD: Pattern = Pattern::Pad;

impl Pattern {
    /// Literal pattern from anything convertible to a value.
    pub fn lit(value: impl Into<Value>) -> Self {
        Pattern::Literal(value.into())
    }

    /// Predicate pattern.
    pub fn guard(f: impl Fn(&Value) -> Result<bool, MatchError> + Send + Sync + 'static) -> Self {
        Pattern::Guard(Arc::new(f))
    }

    /// Nominal instance pattern for records of `type_name`.
    pub fn instance(type_name: impl Into<String>) -> Self {
        Pattern::Instance(type_name.into())
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Literal(v) => write!(f, "Literal({v:?})"),
            Pattern::Wildcard => write!(f, "Wildcard"),
            Pattern::AnyStr => write!(f, "AnyStr"),
            Pattern::AnyNum => write!(f, "AnyNum"),
            Pattern::AnyList => write!(f, "AnyList"),
            Pattern::AnyCallable => write!(f, "AnyCallable"),
            Pattern::Instance(name) => write!(f, "Instance({name})"),
            Pattern::Guard(_) => write!(f, "Guard(<fn>)"),
            Pattern::List(items) => write!(f, "List({items:?})"),
            Pattern::Map(entries) => write!(f, "Map({entries:?})"),
            Pattern::Tail => write!(f, "Tail"),
            Pattern::Pad => write!(f, "Pad"),
        }
    }
}

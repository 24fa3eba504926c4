//! Error types for structural matching.
//!
//! Non-matches are not errors: a failed `match_value`/`match_list`/
//! `match_map` call returns `Ok(None)` with no partial captures. The
//! faults here are fatal pattern-shape or configuration problems; nothing
//! recovers from them internally and they propagate unchanged to the
//! caller of `match_first`/`match_all`.
//!
//! Factory functions (e.g. `misplaced_tail()`) are the public API; they
//! populate both `kind` and `message`.

use crate::value::Value;
use std::fmt;

/// Result of running a dispatch.
pub type MatchResult = Result<Value, MatchError>;

/// Typed fault category.
///
/// Each variant carries the structured data for the condition, enabling
/// programmatic matching instead of string parsing. The `Display` impl
/// produces the message the factory functions store on `MatchError`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchErrorKind {
    /// A tail marker somewhere other than the final slot of a list pattern.
    MisplacedTail,
    /// No arm's pattern matched the subject.
    NonExhaustive { subject: String },
    /// A handler's declared arity differs from the capture count.
    HandlerArity { expected: usize, got: usize },
    /// A fault raised by a caller-supplied guard or handler.
    Custom { message: String },
}

impl fmt::Display for MatchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MisplacedTail => {
                write!(f, "tail marker must be the last element of a list pattern")
            }
            Self::NonExhaustive { subject } => {
                write!(f, "no wildcard arm provided; subject {subject} not handled")
            }
            Self::HandlerArity { expected, got } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                write!(f, "handler expects {expected} {arg_word}, match captured {got}")
            }
            Self::Custom { message } => write!(f, "{message}"),
        }
    }
}

/// Matching fault.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchError {
    /// Structured fault category.
    pub kind: MatchErrorKind,
    /// Human-readable message; for factory-created errors this equals
    /// `kind.to_string()`.
    pub message: String,
}

impl MatchError {
    /// Create a fault with just a message.
    ///
    /// Uses the `Custom` kind. Guards and handlers use this to raise
    /// their own faults through the engine.
    pub fn new(message: impl Into<String>) -> Self {
        let msg = message.into();
        Self {
            kind: MatchErrorKind::Custom {
                message: msg.clone(),
            },
            message: msg,
        }
    }

    /// Create a fault from a structured kind.
    ///
    /// The message is computed from the kind's `Display` impl.
    fn from_kind(kind: MatchErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for MatchError {}

/// Tail marker found in a non-final pattern position (or outside a list
/// pattern entirely).
#[cold]
pub fn misplaced_tail() -> MatchError {
    MatchError::from_kind(MatchErrorKind::MisplacedTail)
}

/// No arm matched the subject.
#[cold]
pub fn non_exhaustive(subject: &Value) -> MatchError {
    MatchError::from_kind(MatchErrorKind::NonExhaustive {
        subject: subject.to_string(),
    })
}

/// Handler arity does not equal the number of captures produced.
#[cold]
pub fn handler_arity_mismatch(expected: usize, got: usize) -> MatchError {
    MatchError::from_kind(MatchErrorKind::HandlerArity { expected, got })
}

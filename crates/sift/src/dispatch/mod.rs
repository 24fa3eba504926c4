//! First-match-wins dispatch over (pattern, action) arms.
//!
//! Arms are tried strictly in declaration order; the first arm whose
//! pattern matches the subject runs its action with the captures applied
//! positionally. No arm matching is an exhaustiveness fault — callers
//! wanting total coverage end with a `WILDCARD` arm.

#[cfg(test)]
mod tests;

use crate::errors::{handler_arity_mismatch, non_exhaustive, MatchError, MatchResult};
use crate::matcher::match_value;
use crate::pattern::Pattern;
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// Handler invoked with the captures of a successful match, positionally.
pub type HandlerFn = Arc<dyn Fn(&[Value]) -> MatchResult + Send + Sync>;

/// What to do when an arm's pattern matches.
#[derive(Clone)]
pub enum Action {
    /// Return this value unchanged; captures are discarded.
    Literal(Value),
    /// Invoke the handler with the captures as positional arguments.
    ///
    /// `arity` is the handler's declared argument count. Dispatch raises
    /// an arity fault when it differs from the capture count rather than
    /// silently dropping or padding arguments.
    Handler {
        /// Declared positional argument count.
        arity: usize,
        /// The handler itself.
        run: HandlerFn,
    },
}

impl Action {
    /// Literal result action.
    pub fn literal(value: impl Into<Value>) -> Self {
        Action::Literal(value.into())
    }

    /// Handler action with its declared positional arity.
    pub fn handler(
        arity: usize,
        run: impl Fn(&[Value]) -> MatchResult + Send + Sync + 'static,
    ) -> Self {
        Action::Handler {
            arity,
            run: Arc::new(run),
        }
    }

    fn run(&self, captures: &[Value]) -> MatchResult {
        match self {
            Action::Literal(value) => Ok(value.clone()),
            Action::Handler { arity, run } => {
                if captures.len() != *arity {
                    return Err(handler_arity_mismatch(*arity, captures.len()));
                }
                run(captures)
            }
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Literal(value) => write!(f, "Literal({value:?})"),
            Action::Handler { arity, .. } => write!(f, "Handler(arity {arity})"),
        }
    }
}

/// One (pattern, action) pair.
#[derive(Clone, Debug)]
pub struct MatchArm {
    /// Pattern tried against the subject.
    pub pattern: Pattern,
    /// Action run when the pattern matches.
    pub action: Action,
}

impl MatchArm {
    /// Arm from a pattern and an explicit action.
    pub fn new(pattern: Pattern, action: Action) -> Self {
        MatchArm { pattern, action }
    }

    /// Arm returning a literal value.
    pub fn literal(pattern: Pattern, value: impl Into<Value>) -> Self {
        MatchArm::new(pattern, Action::literal(value))
    }

    /// Arm invoking a handler with the declared arity.
    pub fn handler(
        pattern: Pattern,
        arity: usize,
        run: impl Fn(&[Value]) -> MatchResult + Send + Sync + 'static,
    ) -> Self {
        MatchArm::new(pattern, Action::handler(arity, run))
    }
}

/// Try arms in declaration order and run the first one whose pattern
/// matches the subject.
///
/// Faults (misplaced tail, raising guard, handler arity mismatch)
/// propagate unchanged; an exhausted arm list is an exhaustiveness fault
/// naming the subject.
#[tracing::instrument(level = "trace", skip_all)]
pub fn match_first(subject: &Value, arms: &[MatchArm]) -> MatchResult {
    for (index, arm) in arms.iter().enumerate() {
        if let Some(captures) = match_value(&arm.pattern, subject)? {
            tracing::trace!(arm = index, captures = captures.len(), "arm matched");
            return arm.action.run(&captures);
        }
    }
    Err(non_exhaustive(subject))
}

/// Apply the same arms independently to each subject.
///
/// Pure fan-out: one result per subject, in input order, with no state
/// shared between elements and no failure isolation — the first
/// per-element fault aborts the whole batch.
pub fn match_all(subjects: &[Value], arms: &[MatchArm]) -> Result<Vec<Value>, MatchError> {
    subjects
        .iter()
        .map(|subject| match_first(subject, arms))
        .collect()
}

//! Map matching: greedy any-order key/value pairing.

use super::{match_value, Captures};
use crate::errors::MatchError;
use crate::pattern::Pattern;
use crate::value::Value;
use rustc_hash::FxHashSet;

/// Match key/value pattern entries against a map subject.
///
/// Pattern entries are processed in declared order. Each searches the
/// still-unconsumed subject entries in insertion order and consumes the
/// first whose key matches the key pattern and whose value matches the
/// value pattern; key captures precede value captures. A pattern entry
/// with no available candidate fails the whole match. Subject entries
/// left unconsumed are ignored.
///
/// The search is greedy and never backtracks: an ambiguous entry (a
/// wildcard key, say) takes the first available candidate and can starve
/// a later, more specific entry of its only one. The result is
/// deterministic either way, which is the point.
pub fn match_map(
    entries: &[(Pattern, Pattern)],
    subject: &Value,
) -> Result<Option<Captures>, MatchError> {
    let Value::Map(fields) = subject else {
        return Ok(None);
    };
    // Subject keys lifted to values once; key patterns match against these.
    let keys: Vec<Value> = fields
        .iter()
        .map(|(k, _)| Value::string(k.clone()))
        .collect();
    let mut consumed: FxHashSet<usize> = FxHashSet::default();
    let mut captures = Captures::new();
    for (key_pattern, value_pattern) in entries {
        let mut found = false;
        for (idx, ((_, value), key)) in fields.iter().zip(&keys).enumerate() {
            if consumed.contains(&idx) {
                continue;
            }
            let Some(key_caps) = match_value(key_pattern, key)? else {
                continue;
            };
            let Some(value_caps) = match_value(value_pattern, value)? else {
                continue;
            };
            consumed.insert(idx);
            captures.extend(key_caps);
            captures.extend(value_caps);
            found = true;
            break;
        }
        if !found {
            return Ok(None);
        }
    }
    Ok(Some(captures))
}

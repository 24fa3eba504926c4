//! List matching with pad alignment and tail capture.

use super::{match_value, Captures};
use crate::errors::{misplaced_tail, MatchError};
use crate::pattern::Pattern;
use crate::value::Value;

/// Match an ordered pattern slice elementwise against a list subject.
///
/// The shorter side is padded up to the longer side's length, so length
/// mismatches surface as explicit pad slots instead of silent truncation:
/// an exhausted pattern side behaves as `Pattern::Pad` (which matches
/// nothing), and an exhausted subject side satisfies no real pattern.
/// Either way a length mismatch without a trailing tail is a no-match.
///
/// A `Tail` slot must be the final real pattern element — anything other
/// than padding after it is a structural fault. On success it captures
/// the remaining suffix of the original, unpadded subject as a single
/// list and ends the walk.
pub fn match_list(patterns: &[Pattern], values: &[Value]) -> Result<Option<Captures>, MatchError> {
    let mut captures = Captures::new();
    let pad = Pattern::Pad;
    let aligned = patterns.len().max(values.len());
    for i in 0..aligned {
        let slot = patterns.get(i).unwrap_or(&pad);
        if matches!(slot, Pattern::Tail) {
            // Only padding may follow a tail marker.
            if i + 1 < patterns.len() {
                return Err(misplaced_tail());
            }
            let suffix = values.get(i..).unwrap_or(&[]).to_vec();
            captures.push(Value::list(suffix));
            break;
        }
        let Some(value) = values.get(i) else {
            // Real pattern slot paired with a padded-away subject slot.
            return Ok(None);
        };
        match match_value(slot, value)? {
            Some(extracted) => captures.extend(extracted),
            None => return Ok(None),
        }
    }
    Ok(Some(captures))
}

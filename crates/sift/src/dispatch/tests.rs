#![expect(clippy::unwrap_used, reason = "tests use unwrap for brevity")]

use super::{match_all, match_first, MatchArm};
use crate::errors::{MatchError, MatchErrorKind};
use crate::pattern::{Pattern, NUMBER, STRING, TAIL, WILDCARD};
use crate::value::Value;
use pretty_assertions::assert_eq;

#[test]
fn first_matching_arm_wins() {
    let result = match_first(
        &Value::int(3),
        &[
            MatchArm::handler(NUMBER, 1, |caps| Ok(caps[0].clone())),
            MatchArm::literal(WILDCARD, "fallback"),
        ],
    )
    .unwrap();
    assert_eq!(result, Value::int(3));
}

#[test]
fn literal_actions_discard_captures() {
    let result = match_first(
        &Value::list(vec![Value::int(1), Value::int(2)]),
        &[MatchArm::literal(
            Pattern::List(vec![Pattern::lit(1), WILDCARD]),
            "pair",
        )],
    )
    .unwrap();
    assert_eq!(result, Value::string("pair"));
}

#[test]
fn handlers_receive_captures_positionally() {
    let subject = Value::list(vec![Value::int(1), Value::int(2), Value::int(3)]);
    let result = match_first(
        &subject,
        &[MatchArm::handler(
            Pattern::List(vec![WILDCARD, WILDCARD, Pattern::lit(3)]),
            2,
            |caps| Ok(Value::list(caps.to_vec())),
        )],
    )
    .unwrap();
    assert_eq!(result, Value::list(vec![Value::int(1), Value::int(2)]));
}

#[test]
fn tail_captures_flow_into_handlers() {
    let subject = Value::list((1..=4).map(Value::int).collect());
    let tail = match_first(
        &subject,
        &[MatchArm::handler(
            Pattern::List(vec![Pattern::lit(1), WILDCARD, TAIL]),
            2,
            |caps| Ok(caps[1].clone()),
        )],
    )
    .unwrap();
    assert_eq!(tail, Value::list(vec![Value::int(3), Value::int(4)]));
}

#[test]
fn unmatched_subject_is_an_exhaustiveness_fault() {
    let err = match_first(&Value::int(3), &[MatchArm::literal(STRING, "text")]).unwrap_err();
    assert!(matches!(err.kind, MatchErrorKind::NonExhaustive { .. }));
    assert!(err.message.contains('3'));
}

#[test]
fn handler_arity_mismatch_is_a_fault() {
    let err = match_first(
        &Value::int(3),
        &[MatchArm::handler(WILDCARD, 2, |_| Ok(Value::Null))],
    )
    .unwrap_err();
    assert_eq!(
        err.kind,
        MatchErrorKind::HandlerArity {
            expected: 2,
            got: 1
        }
    );
}

#[test]
fn handler_faults_propagate() {
    let err = match_first(
        &Value::int(3),
        &[MatchArm::handler(WILDCARD, 1, |_| {
            Err(MatchError::new("handler exploded"))
        })],
    )
    .unwrap_err();
    assert_eq!(err.message, "handler exploded");
}

#[test]
fn misplaced_tail_faults_propagate_through_dispatch() {
    let subject = Value::list(vec![Value::int(1)]);
    let err = match_first(
        &subject,
        &[MatchArm::literal(
            Pattern::List(vec![TAIL, Pattern::lit(1)]),
            "no",
        )],
    )
    .unwrap_err();
    assert_eq!(err.kind, MatchErrorKind::MisplacedTail);
}

#[test]
fn guard_arms_classify_in_order() {
    fn classify(subject: &Value) -> String {
        let result = match_first(
            subject,
            &[
                MatchArm::handler(STRING, 1, |caps| {
                    Ok(Value::string(format!("{} is a string", caps[0])))
                }),
                MatchArm::handler(
                    Pattern::guard(|v| Ok(v.as_int().is_some_and(|n| n > 3))),
                    1,
                    |caps| Ok(Value::string(format!("{} is > 3", caps[0]))),
                ),
                MatchArm::handler(
                    Pattern::guard(|v| Ok(v.as_int().is_some_and(|n| n < 3))),
                    1,
                    |caps| Ok(Value::string(format!("{} is < 3", caps[0]))),
                ),
                MatchArm::handler(
                    Pattern::guard(|v| Ok(v.as_int() == Some(3))),
                    1,
                    |caps| Ok(Value::string(format!("{} is = 3", caps[0]))),
                ),
            ],
        )
        .unwrap();
        result.as_str().unwrap_or_default().to_string()
    }

    assert_eq!(classify(&Value::int(3)), "3 is = 3");
    assert_eq!(classify(&Value::int(2)), "2 is < 3");
    assert_eq!(classify(&Value::int(4)), "4 is > 3");
    assert_eq!(classify(&Value::string("hello")), "\"hello\" is a string");
}

#[test]
fn match_all_is_per_subject_in_order() {
    let subjects = [Value::int(1), Value::int(2)];
    let results = match_all(
        &subjects,
        &[MatchArm::handler(NUMBER, 1, |caps| Ok(caps[0].clone()))],
    )
    .unwrap();
    assert_eq!(results, vec![Value::int(1), Value::int(2)]);
}

#[test]
fn match_all_aborts_on_the_first_fault() {
    let subjects = [Value::int(1), Value::string("x")];
    let err = match_all(&subjects, &[MatchArm::literal(NUMBER, 0)]).unwrap_err();
    assert!(matches!(err.kind, MatchErrorKind::NonExhaustive { .. }));
}

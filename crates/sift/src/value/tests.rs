use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_factory_methods() {
    let s = Value::string("hello");
    assert_eq!(s.as_str(), Some("hello"));

    let list = Value::list(vec![Value::int(1), Value::int(2)]);
    assert_eq!(list.as_list().map(<[Value]>::len), Some(2));

    let map = Value::map(vec![("a", Value::int(1))]);
    assert_eq!(map.as_map().map(<[(String, Value)]>::len), Some(1));

    assert_eq!(Value::int(7).as_int(), Some(7));
    assert_eq!(Value::Bool(true).as_bool(), Some(true));
    assert_eq!(Value::string("x").as_int(), None);
}

#[test]
fn test_map_preserves_insertion_order() {
    let map = Value::map(vec![
        ("b", Value::int(2)),
        ("a", Value::int(1)),
        ("c", Value::int(3)),
    ]);
    let keys: Vec<&str> = map
        .as_map()
        .into_iter()
        .flatten()
        .map(|(k, _)| k.as_str())
        .collect();
    assert_eq!(keys, vec!["b", "a", "c"]);
}

#[test]
fn test_equals_scalars() {
    assert!(Value::int(42).equals(&Value::int(42)));
    assert!(!Value::int(42).equals(&Value::int(43)));
    assert!(Value::Null.equals(&Value::Null));
    assert!(Value::Bool(false).equals(&Value::Bool(false)));
    assert!(!Value::Bool(false).equals(&Value::Bool(true)));
    assert!(Value::string("ok").equals(&Value::string("ok")));
    assert!(!Value::string("ok").equals(&Value::int(3)));
}

#[test]
fn test_equals_numeric_across_representations() {
    // The matcher's equality: a 3.0 literal matches the subject 3.
    assert!(Value::float(3.0).equals(&Value::int(3)));
    assert!(Value::int(3).equals(&Value::float(3.0)));
    assert!(!Value::float(3.5).equals(&Value::int(3)));

    // PartialEq stays representation-strict.
    assert_ne!(Value::float(3.0), Value::int(3));
}

#[test]
fn test_equals_floats_exactly() {
    assert!(Value::float(2.5).equals(&Value::float(2.5)));
    // Exact comparison, not tolerance-based: nearby floats stay distinct.
    assert!(!Value::float(1e-17).equals(&Value::float(0.0)));
    assert!(!Value::float(0.0).equals(&Value::float(f64::EPSILON / 2.0)));
}

#[test]
fn test_equals_structural() {
    let a = Value::list(vec![Value::int(1), Value::string("x")]);
    let b = Value::list(vec![Value::int(1), Value::string("x")]);
    assert!(a.equals(&b));

    let shorter = Value::list(vec![Value::int(1)]);
    assert!(!a.equals(&shorter));

    // Map equality is order-insensitive.
    let m1 = Value::map(vec![("a", Value::int(1)), ("b", Value::int(2))]);
    let m2 = Value::map(vec![("b", Value::int(2)), ("a", Value::int(1))]);
    assert!(m1.equals(&m2));
    assert_eq!(m1, m2);
}

#[test]
fn test_record_fields() {
    let point = Value::record("Point", vec![("x", Value::int(1)), ("y", Value::int(2))]);
    let Value::Record(r) = &point else {
        panic!("expected record");
    };
    assert_eq!(*r.type_name, "Point");
    assert_eq!(r.get_field("y"), Some(&Value::int(2)));
    assert_eq!(r.get_field("z"), None);
}

#[test]
fn test_value_display() {
    assert_eq!(format!("{}", Value::int(42)), "42");
    assert_eq!(format!("{}", Value::Null), "null");
    assert_eq!(format!("{}", Value::string("hello")), "\"hello\"");
    assert_eq!(
        format!("{}", Value::list(vec![Value::int(1), Value::int(2)])),
        "[1, 2]"
    );
    assert_eq!(
        format!("{}", Value::map(vec![("a", Value::int(1))])),
        "{\"a\": 1}"
    );
}

#[test]
fn test_type_names() {
    assert_eq!(Value::int(1).type_name(), "int");
    assert_eq!(Value::float(1.0).type_name(), "float");
    assert_eq!(Value::Null.type_name(), "null");
    assert_eq!(Value::list(vec![]).type_name(), "list");
    assert_eq!(
        Value::record("Point", Vec::<(&str, Value)>::new()).type_name(),
        "record"
    );
}

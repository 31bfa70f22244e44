//! Mapping-key enumeration tests

use arraylike::{ops, Error, Mapping, SequenceRef, Value};

use super::num_seq;

fn key_strings(keys: &SequenceRef) -> Vec<String> {
    let keys = keys.borrow();
    (0..keys.length())
        .map(|i| match keys.get(i) {
            Some(Value::String(s)) => s.to_string(),
            other => panic!("expected a string key, got {:?}", other),
        })
        .collect()
}

#[test]
fn test_keys_in_insertion_order() {
    let mut map = Mapping::new();
    map.insert("a", Value::Number(1.0));
    map.insert("b", Value::Number(2.0));
    let operand = Value::Mapping(map.shared());

    let keys = ops::keys_of(&operand).unwrap();
    assert_eq!(key_strings(&keys), ["a", "b"]);
}

#[test]
fn test_inherited_keys_are_excluded() {
    let mut proto = Mapping::new();
    proto.insert("p", Value::from("base"));
    let mut child = Mapping::with_proto(proto.shared());
    child.insert("c", Value::from("own"));
    let operand = Value::Mapping(child.shared());

    let keys = ops::keys_of(&operand).unwrap();
    assert_eq!(key_strings(&keys), ["c"]);
}

#[test]
fn test_non_enumerable_keys_are_excluded() {
    let mut map = Mapping::new();
    map.insert("visible", Value::Number(1.0));
    map.define("hidden", Value::Number(2.0), false);
    let operand = Value::Mapping(map.shared());

    let keys = ops::keys_of(&operand).unwrap();
    assert_eq!(key_strings(&keys), ["visible"]);
}

#[test]
fn test_shadowed_builtin_names_are_probed() {
    // An own definition under a builtin prototype name is reported even
    // when flagged non-enumerable, per the legacy-engine compatibility
    // pass.
    let mut map = Mapping::new();
    map.insert("a", Value::Number(1.0));
    map.define("toString", Value::function("toString", |_, _| Ok(Value::from("x"))), false);
    map.define("valueOf", Value::Number(0.0), false);
    let operand = Value::Mapping(map.shared());

    let keys = ops::keys_of(&operand).unwrap();
    assert_eq!(key_strings(&keys), ["a", "toString", "valueOf"]);
}

#[test]
fn test_enumerable_shadowed_name_is_not_duplicated() {
    let mut map = Mapping::new();
    map.insert("toString", Value::Number(1.0));
    map.insert("z", Value::Number(2.0));
    let operand = Value::Mapping(map.shared());

    let keys = ops::keys_of(&operand).unwrap();
    assert_eq!(key_strings(&keys), ["toString", "z"]);
}

#[test]
fn test_function_operand_yields_no_keys() {
    let func = Value::function("f", |_, _| Ok(Value::Undefined));
    let keys = ops::keys_of(&func).unwrap();
    assert!(keys.borrow().is_empty());
}

#[test]
fn test_empty_mapping_yields_empty_sequence() {
    let operand = Value::Mapping(Mapping::new().shared());
    let keys = ops::keys_of(&operand).unwrap();
    assert!(keys.borrow().is_empty());
}

#[test]
fn test_null_and_primitive_operands_are_invalid() {
    for operand in [
        Value::Null,
        Value::Undefined,
        Value::Number(1.0),
        Value::from("abc"),
        Value::Boolean(true),
    ] {
        let err = ops::keys_of(&operand).unwrap_err();
        assert!(matches!(err, Error::InvalidOperand { .. }));
    }
}

#[test]
fn test_sequence_operand_is_not_a_mapping() {
    let (_seq, operand) = num_seq(&[1.0]);
    let err = ops::keys_of(&operand).unwrap_err();
    assert!(matches!(err, Error::InvalidOperand { .. }));
}

#[test]
fn test_result_is_detached_from_the_source() {
    let map = Mapping::new().shared();
    map.borrow_mut().insert("a", Value::Number(1.0));
    let operand = Value::Mapping(map.clone());

    let keys = ops::keys_of(&operand).unwrap();
    keys.borrow_mut().set(0, Value::from("mutated"));
    keys.borrow_mut().push(Value::from("extra"));

    assert_eq!(map.borrow().len(), 1);
    assert_eq!(map.borrow().get_own("a"), Some(Value::Number(1.0)));
}

//! Integration tests for Array and Data
//!
//! Tests ordering, replacement, mutation through borrowed children, and nesting.

use bluefox_notation::{Array, Data, ErrorKind, Value};

// =============================================================================
// Array
// =============================================================================

#[test]
fn array_preserves_push_order() {
    let mut a = Array::new();
    a.push(Value::Int(1));
    a.push(Value::string("two"));
    a.push(Value::Null);

    assert_eq!(a.len(), 3);
    assert_eq!(a.get(0), Ok(&Value::Int(1)));
    assert_eq!(a.get(1).unwrap().get_string(), Ok("two"));
    assert!(a.get(2).unwrap().is_null());
    assert_eq!(a.first(), Some(&Value::Int(1)));
    assert_eq!(a.last(), Some(&Value::Null));
}

#[test]
fn array_get_at_length_fails() {
    let a: Array = [1i64, 2].into_iter().collect();
    assert_eq!(
        a.get(2).unwrap_err().kind,
        ErrorKind::IndexOutOfBounds { index: 2, length: 2 }
    );
    assert!(Array::new().get(0).is_err());
}

#[test]
fn array_elements_mutate_in_place() {
    let mut a: Array = [Value::Data(Data::new())].into_iter().collect();
    a.get_mut(0)
        .unwrap()
        .get_data_mut()
        .unwrap()
        .insert("added", 1i64);
    assert_eq!(a.get(0).unwrap().lookup("added"), Ok(&Value::Int(1)));
}

#[test]
fn array_mixed_kinds() {
    let a: Array = vec![
        Value::Bool(true),
        Value::Float(1.5),
        Value::function("f"),
        Value::Array(Array::new()),
    ]
    .into();
    let kinds: Vec<_> = a.iter().map(Value::kind).collect();
    assert_eq!(kinds.len(), 4);
    assert_eq!(format!("{a:?}"), "[true, 1.5, <fn f>, []]");
}

// =============================================================================
// Data
// =============================================================================

#[test]
fn data_replace_changes_value_not_length() {
    let mut d = Data::new();
    d.insert("x", 5i64);
    assert_eq!(d.insert("x", "five"), Some(Value::Int(5)));
    assert_eq!(d.len(), 1);
    assert_eq!(d.get("x").unwrap().get_string(), Ok("five"));
}

#[test]
fn data_enumerates_in_first_insertion_order() {
    let mut d = Data::new();
    d.insert("b", 1i64);
    d.insert("a", 2i64);
    d.insert("c", 3i64);
    d.insert("b", 4i64);

    let entries: Vec<(&str, i64)> = d
        .iter()
        .map(|(k, v)| (k.as_str(), v.get_int().unwrap()))
        .collect();
    assert_eq!(entries, vec![("b", 4), ("a", 2), ("c", 3)]);
}

#[test]
fn data_keys_compare_bytewise() {
    let mut d = Data::new();
    d.insert("caf\u{e9}", 1i64);
    d.insert("cafe\u{301}", 2i64);
    assert_eq!(d.len(), 2);
    assert_eq!(d.get("caf\u{e9}"), Ok(&Value::Int(1)));
}

#[test]
fn data_missing_key_is_recoverable() {
    let mut d = Data::new();
    d.insert("present", Value::Null);
    let err = d.get("absent").unwrap_err();
    assert!(err.is_absent());
    assert!(d.get("present").unwrap().is_null());
}

// =============================================================================
// Nesting
// =============================================================================

#[test]
fn nesting_round_trip() {
    let mut inner = Data::new();
    inner.insert("b", Value::Bool(true));

    let mut array = Array::new();
    array.push(Value::Int(1));
    array.push(Value::Data(inner));

    let mut root = Data::new();
    root.insert("a", Value::Array(array));

    let a = root.get("a").unwrap().get_array().unwrap();
    assert_eq!(a.get(0).unwrap().get_int(), Ok(1));
    let b = a.get(1).unwrap().get_data().unwrap().get("b").unwrap();
    assert_eq!(b.get_bool(), Ok(true));
}

#[test]
fn deep_nesting_drops_without_overflow() {
    let mut value = Value::Null;
    for depth in 0..200_000 {
        value = if depth % 2 == 0 {
            Value::Array(vec![value].into())
        } else {
            let mut d = Data::new();
            d.insert("next", value);
            Value::Data(d)
        };
    }
    value.release();
}

// =============================================================================
// Properties
// =============================================================================

mod properties {
    use bluefox_notation::{Array, Value};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn push_order_is_index_order(items in prop::collection::vec(any::<i64>(), 0..64)) {
            let array: Array = items.iter().copied().collect();
            prop_assert_eq!(array.len(), items.len());
            for (index, n) in items.iter().enumerate() {
                prop_assert_eq!(array.get(index), Ok(&Value::Int(*n)));
            }
            prop_assert!(array.get(items.len()).is_err());
        }

        #[test]
        fn repeated_reads_leave_array_unchanged(
            items in prop::collection::vec(any::<i64>(), 0..32),
            lookups in prop::collection::vec(0usize..64, 0..32)
        ) {
            let array: Array = items.iter().copied().collect();
            let snapshot = array.clone();
            for wanted in lookups {
                let _ = array.get(wanted);
                prop_assert_eq!(array.len(), items.len());
            }
            prop_assert_eq!(array, snapshot);
        }
    }
}

#[test]
fn deep_nesting_clones_and_compares() {
    let mut value = Value::string("leaf");
    for depth in 0..150_000 {
        value = if depth % 3 == 0 {
            let mut d = Data::new();
            d.insert("inner", value);
            Value::Data(d)
        } else {
            Value::Array(vec![value].into())
        };
    }
    let copy = value.clone();
    assert!(copy == value);

    let mut changed = copy.clone();
    let path: Vec<&str> = (0..150_000)
        .rev()
        .map(|depth| if depth % 3 == 0 { "inner" } else { "0" })
        .collect();
    *changed.lookup_mut(&path.join(".")).unwrap() = Value::string("other");
    assert!(changed != value);
}

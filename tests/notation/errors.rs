//! Integration tests for Error types
//!
//! Tests error kinds, display, and context.

use bluefox_notation::{Error, ErrorContext, ErrorKind, Kind, Value};

#[test]
fn error_type_mismatch_display() {
    let err = Value::string("s").get_int().unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::TypeMismatch {
            expected: Kind::Int,
            actual: Kind::String
        }
    );
    let msg = format!("{err}");
    assert!(msg.contains("int"));
    assert!(msg.contains("string"));
}

#[test]
fn error_index_out_of_bounds_display() {
    let msg = Error::index_out_of_bounds(4, 2).to_string();
    assert!(msg.contains('4'));
    assert!(msg.contains('2'));
}

#[test]
fn error_key_not_found_display() {
    let msg = Error::key_not_found("who").to_string();
    assert!(msg.contains("who"));
}

#[test]
fn error_classification() {
    assert!(Error::type_mismatch(Kind::Bool, Kind::Null).is_type_mismatch());
    assert!(!Error::type_mismatch(Kind::Bool, Kind::Null).is_absent());
    assert!(Error::key_not_found("k").is_absent());
    assert!(Error::missing_field("k").is_absent());
    assert!(Error::index_out_of_bounds(0, 0).is_absent());
    assert!(!Error::invalid_path("").is_absent());
}

#[test]
fn error_context_display() {
    let ctx = ErrorContext::new()
        .with_operation("lookup")
        .with_path("a.b[1]");
    let msg = ctx.to_string();
    assert!(msg.contains("lookup"));
    assert!(msg.contains("a.b[1]"));

    let err = Error::key_not_found("c").with_context(ctx.clone());
    assert_eq!(err.context, Some(ctx));
}

#[test]
fn errors_are_comparable_values() {
    let a = Value::Null.get_bool().unwrap_err();
    let b = Value::Null.get_bool().unwrap_err();
    assert_eq!(a, b);
    let c = a.clone();
    assert_eq!(c.kind, b.kind);
}

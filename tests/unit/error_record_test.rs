// Tests for structured error records at the JSON boundary

use proptest::prelude::*;
use serde_json::{json, Value};
use service_object::{ErrorRecord, Errors, ServiceObjectError};

fn non_object() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        "[a-z]{0,12}".prop_map(Value::String),
        prop::collection::vec(any::<u8>(), 0..4).prop_map(|v| json!(v)),
    ]
}

proptest! {
    #[test]
    fn test_non_objects_are_rejected(value in non_object()) {
        let mut errors = Errors::new();
        let err = errors.push_value(value).unwrap_err();

        let is_invalid_type = matches!(err, ServiceObjectError::InvalidErrorType { .. });
        prop_assert!(is_invalid_type);
        prop_assert!(err.to_string().starts_with("Invalid error type"));
        prop_assert!(errors.is_empty());
    }

    #[test]
    fn test_message_survives_json_boundary(message in "\\PC{1,40}") {
        let record = ErrorRecord::try_from(json!({"message": message.clone()})).unwrap();
        prop_assert_eq!(&record.message, &message);
        prop_assert_eq!(serde_json::to_value(&record).unwrap(), json!({"message": message}));
    }
}

#[test]
fn test_received_type_is_named() {
    let cases = [
        (json!(null), "null"),
        (json!(true), "boolean"),
        (json!(1.5), "number"),
        (json!("oops"), "string"),
        (json!([1]), "array"),
    ];

    for (value, expected) in cases {
        match ErrorRecord::try_from(value) {
            Err(ServiceObjectError::InvalidErrorType { received }) => {
                assert_eq!(received, expected)
            }
            other => panic!("expected InvalidErrorType, got {:?}", other),
        }
    }
}

#[test]
fn test_field_errors_render_with_prefix() {
    let mut errors = Errors::new();
    errors.add("email", "is taken");
    errors.push("rate limited");

    assert_eq!(errors.to_string(), "email: is taken; rate limited");
    assert_eq!(errors.for_field("email").count(), 1);
    assert_eq!(errors.for_field("name").count(), 0);
}

#[test]
fn test_push_value_rejects_non_string_code() {
    let mut errors = Errors::new();
    let err = errors
        .push_value(json!({"message": "x", "code": 5}))
        .unwrap_err();

    assert!(matches!(err, ServiceObjectError::InvalidErrorType { .. }));
    assert!(err.to_string().contains("'number'"));
    assert!(errors.is_empty());
}

#[test]
fn test_reserved_detail_keys_keep_records_readable() {
    let mut errors = Errors::new();
    errors.push(
        ErrorRecord::new("a")
            .with_detail("message", "b")
            .with_detail("field", "c"),
    );

    let text = serde_json::to_string(&errors).unwrap();
    assert_eq!(text, r#"[{"message":"a"}]"#);

    let back: Errors = serde_json::from_str(&text).unwrap();
    assert_eq!(back, errors);
}

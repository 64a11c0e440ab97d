use crate::common::{raw, Opaque};
use error_trail::{attach_code, tag_op, ChainNode, ErrorCode, ErrorReport, FieldValue};
use serde_json::json;

#[test]
fn chain_report_serializes_every_key() {
    let err = ChainNode::new()
        .with_op("test")
        .with_code(ErrorCode::TEST)
        .with_message("foo")
        .with_field("foo", "bar");

    let value = serde_json::to_string(&ErrorReport::new(&err)).unwrap();
    assert_eq!(
        value,
        r#"{"msg":"foo","code":"test_error_code","trace":["test"],"fields":{"foo":"bar"}}"#
    );
}

#[test]
fn chain_report_without_fields_omits_key() {
    let err = attach_code(raw("leaf"), ErrorCode::NOT_FOUND, "repo.find");
    let value = serde_json::to_value(ErrorReport::new(&err)).unwrap();

    assert_eq!(value, json!({"msg": "leaf", "code": "not_found", "trace": ["repo.find"]}));
}

#[test]
fn plain_report_serializes_message_only() {
    let err = raw("foo");
    let value = serde_json::to_string(&ErrorReport::new(&err)).unwrap();
    assert_eq!(value, r#"{"msg":"foo"}"#);
}

#[test]
fn field_values_keep_their_json_type() {
    let err = Opaque::new(
        "ctx",
        tag_op("job.run", raw("leaf"))
            .with_field("attempt", 3)
            .with_field("ratio", 0.5)
            .with_field("retryable", false),
    );
    let value = serde_json::to_value(ErrorReport::new(&err)).unwrap();

    assert_eq!(value["fields"], json!({"attempt": 3, "ratio": 0.5, "retryable": false}));
    assert_eq!(value["code"], "internal");
}

#[test]
fn field_value_serializes_untagged() {
    assert_eq!(serde_json::to_value(FieldValue::from("s")).unwrap(), json!("s"));
    assert_eq!(serde_json::to_value(FieldValue::from(7_u8)).unwrap(), json!(7));
}

#[test]
fn error_code_serializes_as_label() {
    assert_eq!(serde_json::to_string(&ErrorCode::PERMISSION_DENIED).unwrap(), r#""permission_denied""#);
    assert_eq!(serde_json::to_string(&ErrorCode::UNSET).unwrap(), r#""""#);
}

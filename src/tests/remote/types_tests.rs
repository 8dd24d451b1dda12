use super::*;

#[test]
fn error_message_prefers_message_field() {
    let v = serde_json::json!({ "message": "name taken", "error": "conflict" });
    assert_eq!(error_message(&v).as_deref(), Some("name taken"));
}

#[test]
fn error_message_falls_back_to_error_field() {
    let v = serde_json::json!({ "error": "not found" });
    assert_eq!(error_message(&v).as_deref(), Some("not found"));
}

#[test]
fn error_message_ignores_blank_and_non_string_values() {
    assert_eq!(error_message(&serde_json::json!({ "message": "  " })), None);
    assert_eq!(error_message(&serde_json::json!({ "error": 500 })), None);
    assert_eq!(error_message(&serde_json::Value::Null), None);
}

//! Id handling for schemaless records.

use super::*;

/// Path ids are strings; stored ids may be numbers or strings. They match
/// when their textual forms are equal.
pub(super) fn id_matches(record: &Record, raw: &str) -> bool {
    match record.get("id") {
        Some(Value::Number(n)) => n.to_string() == raw,
        Some(Value::String(s)) => s == raw,
        _ => false,
    }
}

pub(super) fn find_index(users: &[Record], raw: &str) -> Option<usize> {
    users.iter().position(|r| id_matches(r, raw))
}

/// Next free numeric id: one past the largest numeric id, 1 when there is
/// none.
pub(super) fn next_numeric_id(users: &[Record]) -> u64 {
    users
        .iter()
        .filter_map(|r| r.get("id").and_then(Value::as_u64))
        .max()
        .map_or(1, |m| m + 1)
}

pub(super) fn id_text(id: &Value) -> Option<String> {
    match id {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

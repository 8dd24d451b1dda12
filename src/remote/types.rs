//! Wire helpers for store responses.

/// Pulls a human-readable message out of an error body.
///
/// Bodies written by the mock store use `error`; other json-server style
/// backends use `message`. The latter wins when both are present.
pub fn error_message(body: &serde_json::Value) -> Option<String> {
    ["message", "error"].iter().find_map(|k| {
        body.get(*k)
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

#[cfg(test)]
#[path = "../tests/remote/types_tests.rs"]
mod tests;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Store-assigned record identifier.
///
/// The JSON store hands out numeric ids but keeps whatever a record was
/// created with, so both shapes round-trip unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Num(u64),
    Text(String),
}

impl UserId {
    /// Parses a path segment or CLI argument; digits become `Num`.
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<u64>() {
            Ok(n) => UserId::Num(n),
            Err(_) => UserId::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Num(n) => write!(f, "{}", n),
            UserId::Text(s) => f.write_str(s),
        }
    }
}

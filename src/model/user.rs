use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::UserId;

/// A persisted user record as returned by the store.
///
/// The store is schemaless, so `name`, `code` and `countries` may be missing
/// or `null`; both read as empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,

    #[serde(default, deserialize_with = "lenient_countries")]
    pub countries: Vec<String>,

    /// Fields this client does not edit. Sent back as-is on update.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

// Null entries are dropped rather than failing the whole record.
fn lenient_countries<'de, D>(de: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Option<String>>> = Option::deserialize(de)?;
    Ok(raw.unwrap_or_default().into_iter().flatten().collect())
}

/// The editable part of a record; what gets POSTed on create.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,

    #[serde(default)]
    pub code: String,

    #[serde(default)]
    pub countries: Vec<String>,
}

impl UserDraft {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            code: user.code.clone(),
            countries: user.countries.clone(),
        }
    }

    /// Adds `country` if absent, removes it otherwise. Order of first
    /// selection is kept.
    pub fn toggle_country(&mut self, country: &str) {
        if let Some(pos) = self.countries.iter().position(|c| c == country) {
            self.countries.remove(pos);
        } else {
            self.countries.push(country.to_string());
        }
    }

    pub fn has_country(&self, country: &str) -> bool {
        self.countries.iter().any(|c| c == country)
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.code.clear();
        self.countries.clear();
    }

    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            code: self.code,
            countries: self.countries,
            extra: Map::new(),
        }
    }

    /// `base` with the editable fields replaced by this draft. Everything
    /// else on the record, id included, is kept.
    pub fn overlay(self, base: &User) -> User {
        User {
            name: self.name,
            code: self.code,
            countries: self.countries,
            ..base.clone()
        }
    }
}

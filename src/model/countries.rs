use serde::{Deserialize, Serialize};

pub const DEFAULT_COUNTRIES: [&str; 10] = [
    "USA",
    "UK",
    "Canada",
    "Germany",
    "Japan",
    "India",
    "Australia",
    "France",
    "Brazil",
    "Mexico",
];

/// Countries a user may be assigned. Supplied by configuration; the UI only
/// picks from it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryCatalog(Vec<String>);

impl CountryCatalog {
    pub fn new(names: Vec<String>) -> Self {
        let mut out: Vec<String> = Vec::with_capacity(names.len());
        for n in names {
            let n = n.trim().to_string();
            if !n.is_empty() && !out.contains(&n) {
                out.push(n);
            }
        }
        Self(out)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }
}

impl Default for CountryCatalog {
    fn default() -> Self {
        Self(DEFAULT_COUNTRIES.iter().map(|s| s.to_string()).collect())
    }
}

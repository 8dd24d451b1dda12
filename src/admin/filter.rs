use crate::model::User;

/// The three filter inputs of the users table.
///
/// Matching is a case-insensitive substring test on each field and all three
/// must hold. An empty input matches any value, except that a record with no
/// countries never satisfies the country predicate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub name: String,
    pub code: String,
    pub country: String,
}

impl UserFilter {
    pub fn new(name: &str, code: &str, country: &str) -> Self {
        Self {
            name: name.to_string(),
            code: code.to_string(),
            country: country.to_string(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.code.is_empty() && self.country.is_empty()
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.code.clear();
        self.country.clear();
    }

    pub fn matches(&self, user: &User) -> bool {
        let name = self.name.to_lowercase();
        let code = self.code.to_lowercase();
        let country = self.country.to_lowercase();
        contains_ci(&user.name, &name)
            && contains_ci(&user.code, &code)
            && user.countries.iter().any(|c| contains_ci(c, &country))
    }

    pub fn apply(&self, users: &[User]) -> Vec<User> {
        users.iter().filter(|u| self.matches(u)).cloned().collect()
    }
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

#[cfg(test)]
#[path = "../tests/admin/filter_tests.rs"]
mod tests;

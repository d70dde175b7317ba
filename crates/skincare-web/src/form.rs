//! Form fields submitted with the page request.

use serde::Deserialize;

pub const AGE_MIN: u8 = 1;
pub const AGE_MAX: u8 = 120;

/// Raw query string; every field is optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormQuery {
    pub name: Option<String>,
    pub age: Option<String>,
    pub concern: Option<String>,
    pub location: Option<String>,
}

/// Decoded form state.
///
/// `name` and `age` are only echoed back into the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub age: u8,
    pub concern: String,
    pub location: String,
}

impl Default for FormInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: AGE_MIN,
            concern: String::new(),
            location: String::new(),
        }
    }
}

impl From<FormQuery> for FormInput {
    fn from(query: FormQuery) -> Self {
        Self {
            name: query.name.unwrap_or_default(),
            age: parse_age(query.age.as_deref()),
            concern: query.concern.unwrap_or_default(),
            location: query.location.unwrap_or_default(),
        }
    }
}

impl FormInput {
    pub fn trimmed_location(&self) -> &str {
        self.location.trim()
    }
}

/// Missing or unparsable ages fall back to the minimum; others are clamped
fn parse_age(raw: Option<&str>) -> u8 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .map(|age| age.clamp(i64::from(AGE_MIN), i64::from(AGE_MAX)))
        .and_then(|age| u8::try_from(age).ok())
        .unwrap_or(AGE_MIN)
}

use serde::Serialize;
use std::collections::BTreeMap;

/// A parsed query filter: field name to expected textual value.
///
/// Keys are unordered and combined by logical AND; there is no OR or
/// negation. Values arrive as strings from the query layer, including
/// non-scalar entries that were coerced to their compact JSON text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FilterSpec {
    pub fields: BTreeMap<String, String>,
}

impl FilterSpec {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn insert(&mut self, field: impl Into<String>, expected: impl Into<String>) {
        self.fields.insert(field.into(), expected.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.fields.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.fields.keys()
    }
}

impl FromIterator<(String, String)> for FilterSpec {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

//! Query-string assembly shared by every endpoint.
//!
//! Absent optional values never reach the wire, and list-valued filters are
//! sent as a single comma-joined value.

use std::fmt::Display;

/// Ordered bag of query parameters, already rendered to strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: &str, value: impl Display) -> &mut Self {
        self.pairs.push((name.to_owned(), value.to_string()));
        self
    }

    pub fn push_opt<V: Display>(&mut self, name: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.push(name, value);
        }
        self
    }

    pub fn push_list<S: AsRef<str>>(&mut self, name: &str, values: &[S]) -> &mut Self {
        self.push(name, join_csv(values))
    }

    pub fn push_opt_list<S: AsRef<str>>(&mut self, name: &str, values: Option<&[S]>) -> &mut Self {
        if let Some(values) = values {
            self.push_list(name, values);
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }
}

/// Joins identifiers with `,`. An empty slice yields an empty string.
pub fn join_csv<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",")
}

/// Percent-encodes a value that is interpolated into a URL path.
pub(crate) fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

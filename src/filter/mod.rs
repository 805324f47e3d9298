//! Filter parsing and the predicate set passed to the engine

pub mod parser;

pub use parser::{parse_spec, parse_tokens};

use std::collections::HashMap;

/// The predicate collection handed to the container-listing call.
///
/// A multi-map: the same key may hold several values, which the engine
/// treats as alternatives (logical OR). Insertion order does not affect
/// query semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    entries: HashMap<String, Vec<String>>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one key/value predicate.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.entry(key.into()).or_default().push(value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of predicate values across all keys.
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Values recorded for one key, in insertion order.
    pub fn values(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Consume the set into the filter map the engine client expects.
    pub fn into_query(self) -> HashMap<String, Vec<String>> {
        self.entries
    }
}

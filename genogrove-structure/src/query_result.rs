use std::fmt::{self, Debug};

use genogrove_core::models::Overlappable;

use crate::grove::Grove;
use crate::key::Key;

/// The outcome of an overlap query: the query itself and the matching keys in
/// traversal order. Values are resolved through the grove the result borrows.
pub struct QueryResult<'g, T: Overlappable> {
    query: T,
    keys: Vec<Key>,
    grove: &'g Grove<T>,
}

impl<'g, T: Overlappable> QueryResult<'g, T> {
    pub(crate) fn new(query: T, keys: Vec<Key>, grove: &'g Grove<T>) -> Self {
        QueryResult { query, keys, grove }
    }

    pub fn query(&self) -> &T {
        &self.query
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Matching keys together with their values.
    pub fn iter(&self) -> impl Iterator<Item = (Key, &'g T)> + '_ {
        let grove = self.grove;
        self.keys
            .iter()
            .filter_map(move |key| grove.get(*key).map(|value| (*key, value)))
    }

    pub fn values(&self) -> impl Iterator<Item = &'g T> + '_ {
        self.iter().map(|(_, value)| value)
    }

    pub fn into_keys(self) -> Vec<Key> {
        self.keys
    }
}

impl<T: Overlappable> Debug for QueryResult<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryResult")
            .field("query", &self.query)
            .field("values", &self.values().collect::<Vec<_>>())
            .finish()
    }
}

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

use super::CellValue;

/// Insertion-ordered string-keyed map.
///
/// Keeps insertion order so data rows echo their sheet's column order and
/// procedure blocks keep the order they were written in.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
}

/// Ordered column-name → cell mapping
pub type CellMap = OrderedMap<CellValue>;

/// One data row of an input sheet
pub type Row = CellMap;

/// Free-form key/value procedure block of a sheet
pub type ProcedureMap = CellMap;

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> OrderedMap<V> {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value; an existing key keeps its position and takes the new value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<V>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<V>) -> Self {
        self.insert(key, value);
        self
    }

    /// Value stored under `key`
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Mutable value stored under `key`
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Whether the key exists, blank value or not
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Remove a key, returning its value
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let position = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(position).1)
    }

    /// Iterate over entries in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keys in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CellMap {
    /// Text of a non-blank cell
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key)
            .and_then(CellValue::as_text)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Cell under `key`, or an empty cell when the column is absent
    pub fn cell(&self, key: &str) -> CellValue {
        self.get(key).cloned().unwrap_or_default()
    }
}

impl<K: Into<String>, V, T: Into<V>> FromIterator<(K, T)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut map = OrderedMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<V: fmt::Display> fmt::Display for OrderedMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{}': {}", key, value)?;
        }
        f.write_str("}")
    }
}

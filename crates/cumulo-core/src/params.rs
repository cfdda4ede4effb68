//! Ordered key/value parameter lists
//!
//! Template parameters and topic configs are edited as an explicit ordered
//! list of string pairs with an add/remove/rename/set-value contract, rather
//! than by mutating keys of a dynamic map. Keys are unique; order is the
//! order of insertion.

use serde::{Deserialize, Serialize};

/// One key/value pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamEntry {
    pub key: String,
    pub value: String,
}

/// Errors from parameter-list edits
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamError {
    #[error("parameter key must not be empty")]
    EmptyKey,

    #[error("duplicate parameter key: {0}")]
    DuplicateKey(String),

    #[error("parameter index {index} out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// An ordered list of unique-keyed string parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamList {
    entries: Vec<ParamEntry>,
}

impl ParamList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from literal pairs. Later duplicates of a key are ignored.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut list = Self::new();
        for (key, value) in pairs {
            let _ = list.add(*key, *value);
        }
        list
    }

    pub fn entries(&self) -> &[ParamEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value for `key`, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }

    /// Append a new pair. Rejects empty and duplicate keys.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<(), ParamError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ParamError::EmptyKey);
        }
        if self.entries.iter().any(|e| e.key == key) {
            return Err(ParamError::DuplicateKey(key));
        }
        self.entries.push(ParamEntry {
            key,
            value: value.into(),
        });
        Ok(())
    }

    /// Remove the pair at `index`, preserving the order of the rest
    pub fn remove(&mut self, index: usize) -> Result<ParamEntry, ParamError> {
        if index >= self.entries.len() {
            return Err(ParamError::IndexOutOfBounds {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    /// Rename the key at `index`. Rejects empty keys and collisions with any
    /// other entry.
    pub fn rename(&mut self, index: usize, new_key: impl Into<String>) -> Result<(), ParamError> {
        let new_key = new_key.into();
        if new_key.is_empty() {
            return Err(ParamError::EmptyKey);
        }
        if index >= self.entries.len() {
            return Err(ParamError::IndexOutOfBounds {
                index,
                len: self.entries.len(),
            });
        }
        let collision = self
            .entries
            .iter()
            .enumerate()
            .any(|(i, e)| i != index && e.key == new_key);
        if collision {
            return Err(ParamError::DuplicateKey(new_key));
        }
        self.entries[index].key = new_key;
        Ok(())
    }

    /// Replace the value at `index`
    pub fn set_value(&mut self, index: usize, value: impl Into<String>) -> Result<(), ParamError> {
        if index >= self.entries.len() {
            return Err(ParamError::IndexOutOfBounds {
                index,
                len: self.entries.len(),
            });
        }
        self.entries[index].value = value.into();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_preserves_order() {
        let mut list = ParamList::new();
        list.add("replicas", "3").expect("ok");
        list.add("image", "nginx:1.25").expect("ok");
        list.add("port", "8080").expect("ok");
        let keys: Vec<&str> = list.entries().iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["replicas", "image", "port"]);
    }

    #[test]
    fn add_rejects_duplicates_and_empty() {
        let mut list = ParamList::from_pairs(&[("replicas", "3")]);
        assert_eq!(
            list.add("replicas", "5"),
            Err(ParamError::DuplicateKey("replicas".to_string()))
        );
        assert_eq!(list.add("", "x"), Err(ParamError::EmptyKey));
        assert_eq!(list.get("replicas"), Some("3"));
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let mut list = ParamList::from_pairs(&[("a", "1"), ("b", "2"), ("c", "3")]);
        let removed = list.remove(1).expect("ok");
        assert_eq!(removed.key, "b");
        let keys: Vec<&str> = list.entries().iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "c"]);

        assert!(matches!(
            list.remove(5),
            Err(ParamError::IndexOutOfBounds { index: 5, len: 2 })
        ));
    }

    #[test]
    fn rename_rejects_collisions_but_allows_self() {
        let mut list = ParamList::from_pairs(&[("a", "1"), ("b", "2")]);
        assert_eq!(
            list.rename(1, "a"),
            Err(ParamError::DuplicateKey("a".to_string()))
        );
        // Renaming an entry to its own key is a no-op, not a collision.
        list.rename(1, "b").expect("self rename ok");
        list.rename(1, "c").expect("ok");
        assert_eq!(list.get("c"), Some("2"));
        assert_eq!(list.get("b"), None);
    }

    #[test]
    fn set_value_in_place() {
        let mut list = ParamList::from_pairs(&[("retention.ms", "604800000")]);
        list.set_value(0, "1209600000").expect("ok");
        assert_eq!(list.get("retention.ms"), Some("1209600000"));
    }

    #[test]
    fn serializes_as_plain_array() {
        let list = ParamList::from_pairs(&[("a", "1")]);
        let json = serde_json::to_value(&list).expect("ok");
        assert_eq!(json, serde_json::json!([{"key": "a", "value": "1"}]));
    }
}

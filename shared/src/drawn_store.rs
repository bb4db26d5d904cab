use serde::{Deserialize, Serialize};

/// Read/append access to the set of combination keys already drawn.
///
/// The core only reads; callers add each committed result and clear on reset.
pub trait DrawnStore {
    fn contains(&self, key: &str) -> bool;
    fn add(&mut self, key: String);
    fn all(&self) -> Vec<String>;
    fn clear(&mut self);
}

/// Drawn keys in the order they were drawn. Adding an existing key is a no-op.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct DrawnSet {
    keys: Vec<String>,
}

impl DrawnSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_keys(keys: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut set = Self::new();
        for key in keys {
            set.add(key.into());
        }
        set
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for DrawnSet {
    fn from(keys: Vec<String>) -> Self {
        Self::from_keys(keys)
    }
}

impl From<DrawnSet> for Vec<String> {
    fn from(set: DrawnSet) -> Self {
        set.keys
    }
}

impl DrawnStore for DrawnSet {
    fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    fn add(&mut self, key: String) {
        if !self.contains(&key) {
            self.keys.push(key);
        }
    }

    fn all(&self) -> Vec<String> {
        self.keys.clone()
    }

    fn clear(&mut self) {
        self.keys.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent() {
        let mut drawn = DrawnSet::new();
        drawn.add("A1".to_string());
        drawn.add("A1".to_string());
        assert_eq!(drawn.len(), 1);
        assert_eq!(drawn.all(), vec!["A1"]);
    }

    #[test]
    fn test_keeps_draw_order() {
        let drawn = DrawnSet::from_keys(["C2", "A1", "B9"]);
        assert_eq!(drawn.iter().collect::<Vec<_>>(), vec!["C2", "A1", "B9"]);
    }

    #[test]
    fn test_clear_empties() {
        let mut drawn = DrawnSet::from_keys(["A1"]);
        drawn.clear();
        assert!(drawn.is_empty());
        assert!(!drawn.contains("A1"));
    }

    #[test]
    fn test_stored_as_plain_list() {
        let drawn = DrawnSet::from_keys(["A1", "B2"]);
        assert_eq!(serde_json::to_string(&drawn).unwrap(), r#"["A1","B2"]"#);
        let restored: DrawnSet = serde_json::from_str(r#"["A1","A1","B2"]"#).unwrap();
        assert_eq!(restored, drawn);
    }
}

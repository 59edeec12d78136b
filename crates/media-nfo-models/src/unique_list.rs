use serde::{Deserialize, Serialize};

/// Ordered string collection without duplicates
///
/// Used for genres, studios, countries and tags. Values keep the order in
/// which they were first inserted; re-inserting a value or inserting an empty
/// one is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UniqueList(Vec<String>);

impl UniqueList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert a value, returning whether it was added
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if value.is_empty() || self.contains(&value) {
            return false;
        }
        self.0.push(value);
        true
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|v| v == value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Values joined with `separator`, e.g. `"Action / Drama"`
    pub fn join(&self, separator: &str) -> String {
        self.0.join(separator)
    }
}

impl<S: Into<String>> FromIterator<S> for UniqueList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = UniqueList::new();
        list.extend(iter);
        list
    }
}

impl<S: Into<String>> Extend<S> for UniqueList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a> IntoIterator for &'a UniqueList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first_order() {
        let mut list = UniqueList::new();
        assert!(list.insert("Drama"));
        assert!(list.insert("Action"));
        assert!(!list.insert("Drama"));
        assert!(!list.insert(""));

        assert_eq!(list.as_slice(), &["Drama".to_string(), "Action".to_string()]);
    }

    #[test]
    fn test_collect_skips_duplicates() {
        let list: UniqueList = ["a", "b", "a", "c"].into_iter().collect();
        assert_eq!(list.len(), 3);
        assert!(list.contains("b"));
        assert!(!list.contains("d"));
        assert_eq!(list.join(" / "), "a / b / c");
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let list: UniqueList = ["x", "y"].into_iter().collect();
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"["x","y"]"#);
    }
}

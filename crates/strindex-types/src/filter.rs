use serde::{Deserialize, Serialize};

/// A set of optional, typed constraints used to narrow a listing.
///
/// Every field is independently optional and an empty set matches everything.
/// Serializes with absent keys omitted, so the same value doubles as the
/// "filters applied" echo returned to callers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    /// Inclusive lower bound on `length`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    /// Inclusive upper bound on `length`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl FilterSet {
    /// An empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no constraint is set.
    pub fn is_empty(&self) -> bool {
        self.applied_keys().is_empty()
    }

    /// Names of the keys that are set, in canonical order.
    pub fn applied_keys(&self) -> Vec<&'static str> {
        let mut keys = Vec::new();
        if self.is_palindrome.is_some() {
            keys.push("is_palindrome");
        }
        if self.min_length.is_some() {
            keys.push("min_length");
        }
        if self.max_length.is_some() {
            keys.push("max_length");
        }
        if self.word_count.is_some() {
            keys.push("word_count");
        }
        if self.contains_character.is_some() {
            keys.push("contains_character");
        }
        keys
    }

    pub fn with_palindrome(mut self, value: bool) -> Self {
        self.is_palindrome = Some(value);
        self
    }

    pub fn with_min_length(mut self, value: usize) -> Self {
        self.min_length = Some(value);
        self
    }

    pub fn with_max_length(mut self, value: usize) -> Self {
        self.max_length = Some(value);
        self
    }

    pub fn with_word_count(mut self, value: usize) -> Self {
        self.word_count = Some(value);
        self
    }

    pub fn with_contains_character(mut self, value: char) -> Self {
        self.contains_character = Some(value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let filters = FilterSet::new();
        assert!(filters.is_empty());
        assert!(filters.applied_keys().is_empty());
    }

    #[test]
    fn applied_keys_follow_canonical_order() {
        let filters = FilterSet::new()
            .with_contains_character('z')
            .with_word_count(1)
            .with_palindrome(true);
        assert_eq!(
            filters.applied_keys(),
            vec!["is_palindrome", "word_count", "contains_character"]
        );
    }

    #[test]
    fn absent_keys_are_not_serialized() {
        let filters = FilterSet::new().with_min_length(11);
        let json = serde_json::to_value(&filters).unwrap();
        assert_eq!(json, serde_json::json!({ "min_length": 11 }));
    }

    #[test]
    fn contains_character_serializes_as_string() {
        let filters = FilterSet::new().with_contains_character('a');
        let json = serde_json::to_string(&filters).unwrap();
        assert_eq!(json, r#"{"contains_character":"a"}"#);
    }
}

//! Analyzed string entries.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::ContentId;

/// Properties derived from a string value.
///
/// Fully determined by the value; computed once when the entry is created and
/// never recomputed afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringProperties {
    /// Number of Unicode scalar values.
    pub length: usize,
    /// Whether the lowercased value reads the same reversed.
    pub is_palindrome: bool,
    /// Number of distinct characters, case-sensitive.
    pub unique_characters: usize,
    /// Number of maximal non-whitespace runs.
    pub word_count: usize,
    /// SHA-256 of the value. Same as the owning entry's id.
    pub sha256_hash: ContentId,
    /// Occurrence count per character, case-sensitive.
    pub character_frequency_map: BTreeMap<char, usize>,
}

/// A stored string together with its derived properties.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringEntry {
    /// Primary key, derived from the value's content.
    pub id: ContentId,
    /// The string exactly as submitted.
    pub value: String,
    pub properties: StringProperties,
    /// Insertion time, set once.
    pub created_at: DateTime<Utc>,
}

impl StringEntry {
    /// Build an entry from a value and its already-computed properties,
    /// stamping the current time.
    pub fn new(value: impl Into<String>, properties: StringProperties) -> Self {
        Self::with_timestamp(value, properties, Utc::now())
    }

    /// Build an entry with an explicit creation time.
    pub fn with_timestamp(
        value: impl Into<String>,
        properties: StringProperties,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: properties.sha256_hash,
            value: value.into(),
            properties,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props_for(value: &str) -> StringProperties {
        StringProperties {
            length: value.chars().count(),
            is_palindrome: false,
            unique_characters: 0,
            word_count: 0,
            sha256_hash: ContentId::digest(value),
            character_frequency_map: BTreeMap::new(),
        }
    }

    #[test]
    fn id_mirrors_content_hash() {
        let entry = StringEntry::new("abc", props_for("abc"));
        assert_eq!(entry.id, entry.properties.sha256_hash);
        assert_eq!(entry.id, ContentId::digest("abc"));
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let mut props = props_for("aab");
        props.character_frequency_map.insert('a', 2);
        props.character_frequency_map.insert('b', 1);
        let entry = StringEntry::new("aab", props);

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["value"], "aab");
        assert_eq!(json["id"], json["properties"]["sha256_hash"]);
        assert_eq!(json["properties"]["character_frequency_map"]["a"], 2);
        assert!(json["created_at"].is_string());
    }

    #[test]
    fn json_roundtrip() {
        let entry = StringEntry::new("hello", props_for("hello"));
        let json = serde_json::to_string(&entry).unwrap();
        let parsed: StringEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, parsed);
    }
}

//! Deterministic string-property analyzer.
//!
//! [`analyze`] turns a string into an immutable [`StringProperties`] bundle.
//! Every function here is pure and total: identical input always yields
//! identical output.
//!
//! Characters are Unicode scalar values (`char`), never raw bytes, so a
//! multi-byte character counts as one unit for length, uniqueness and
//! frequency.

use std::collections::{BTreeMap, HashSet};

use strindex_types::{ContentId, StringProperties};

/// Compute the full property bundle for `value`.
pub fn analyze(value: &str) -> StringProperties {
    StringProperties {
        length: length(value),
        is_palindrome: is_palindrome(value),
        unique_characters: unique_characters(value),
        word_count: word_count(value),
        sha256_hash: content_hash(value),
        character_frequency_map: character_frequency(value),
    }
}

/// Number of characters in `value`.
pub fn length(value: &str) -> usize {
    value.chars().count()
}

/// Case-insensitive palindrome check.
///
/// Only case is normalized; whitespace and punctuation take part in the
/// comparison. The empty string and single characters are palindromes.
pub fn is_palindrome(value: &str) -> bool {
    let forward = value.chars().flat_map(char::to_lowercase);
    let backward = value.chars().rev().flat_map(char::to_lowercase);
    forward.eq(backward)
}

/// Number of distinct characters, case-sensitive.
pub fn unique_characters(value: &str) -> usize {
    value.chars().collect::<HashSet<_>>().len()
}

/// Number of maximal non-whitespace runs.
pub fn word_count(value: &str) -> usize {
    value.split_whitespace().count()
}

/// SHA-256 digest of `value`.
pub fn content_hash(value: &str) -> ContentId {
    ContentId::digest(value)
}

/// Occurrence count for each character in `value`, case-sensitive.
pub fn character_frequency(value: &str) -> BTreeMap<char, usize> {
    let mut frequency = BTreeMap::new();
    for c in value.chars() {
        *frequency.entry(c).or_insert(0) += 1;
    }
    frequency
}

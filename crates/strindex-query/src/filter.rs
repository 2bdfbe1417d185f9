//! Structured filter evaluation.

use serde::{Deserialize, Serialize};
use strindex_types::{FilterSet, StringEntry};

/// The result of applying a [`FilterSet`] to a set of entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOutcome {
    /// Entries that satisfied every supplied filter, in enumeration order.
    pub data: Vec<StringEntry>,
    /// `data.len()`.
    pub count: usize,
    /// Echo of the filters that were supplied, with their typed values.
    pub filters_applied: FilterSet,
}

/// Returns `true` if `entry` satisfies every filter that is set.
pub fn matches(entry: &StringEntry, filters: &FilterSet) -> bool {
    let props = &entry.properties;

    if let Some(want) = filters.is_palindrome {
        if props.is_palindrome != want {
            return false;
        }
    }
    if let Some(min) = filters.min_length {
        if props.length < min {
            return false;
        }
    }
    if let Some(max) = filters.max_length {
        if props.length > max {
            return false;
        }
    }
    if let Some(count) = filters.word_count {
        if props.word_count != count {
            return false;
        }
    }
    if let Some(c) = filters.contains_character {
        if !entry.value.contains(c) {
            return false;
        }
    }
    true
}

/// Narrow `entries` to those matching `filters`.
///
/// Filters compose by logical AND; absent keys impose no constraint.
pub fn apply<I>(entries: I, filters: &FilterSet) -> FilterOutcome
where
    I: IntoIterator<Item = StringEntry>,
{
    let data: Vec<StringEntry> = entries
        .into_iter()
        .filter(|entry| matches(entry, filters))
        .collect();
    FilterOutcome {
        count: data.len(),
        data,
        filters_applied: filters.clone(),
    }
}

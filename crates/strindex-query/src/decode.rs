//! Decoding raw, string-typed filter parameters into a [`FilterSet`].
//!
//! Query strings arrive as text. This is the only place where text is turned
//! into typed filter values; everything downstream works on [`FilterSet`].

use serde::{Deserialize, Serialize};
use strindex_types::FilterSet;

use crate::error::{QueryError, QueryResult};

/// Filter parameters exactly as received from a caller, before validation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFilterParams {
    pub is_palindrome: Option<String>,
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub word_count: Option<String>,
    pub contains_character: Option<String>,
}

/// Validate and decode every supplied parameter.
///
/// Booleans must be the literal `"true"` or `"false"`, integers must be
/// base-10 non-negative numerals, and `contains_character` must be exactly one
/// character. Every violation is reported, joined with `"; "`.
pub fn decode(raw: &RawFilterParams) -> QueryResult<FilterSet> {
    let mut errors = Vec::new();
    let mut filters = FilterSet::new();

    if let Some(text) = &raw.is_palindrome {
        match text.as_str() {
            "true" => filters.is_palindrome = Some(true),
            "false" => filters.is_palindrome = Some(false),
            _ => errors.push(r#"is_palindrome must be "true" or "false""#.to_string()),
        }
    }

    filters.min_length = decode_count("min_length", raw.min_length.as_deref(), &mut errors);
    filters.max_length = decode_count("max_length", raw.max_length.as_deref(), &mut errors);
    filters.word_count = decode_count("word_count", raw.word_count.as_deref(), &mut errors);

    if let Some(text) = &raw.contains_character {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => filters.contains_character = Some(c),
            _ => errors.push("contains_character must be a single character".to_string()),
        }
    }

    if errors.is_empty() {
        Ok(filters)
    } else {
        Err(QueryError::InvalidInput(errors.join("; ")))
    }
}

fn decode_count(key: &str, text: Option<&str>, errors: &mut Vec<String>) -> Option<usize> {
    let text = text?;
    let parsed = if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        text.parse::<usize>().ok()
    } else {
        None
    };
    if parsed.is_none() {
        errors.push(format!("{key} must be a non-negative integer"));
    }
    parsed
}

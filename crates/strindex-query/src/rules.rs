//! Lexical rules for natural-language translation.
//!
//! Each [`Rule`] looks at the lowercased query text and contributes at most
//! one [`FilterField`]. Rules know nothing about each other; ordering and
//! precedence are owned by the [`Translator`](crate::Translator).
//!
//! Word boundaries are ASCII-only (`(?-u:\b)`): a non-ASCII letter such as
//! `é` ends a word, so "contains aé" still yields `a`.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use strindex_types::FilterSet;

/// A single filter value produced by a rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterField {
    WordCount(usize),
    IsPalindrome(bool),
    MinLength(usize),
    MaxLength(usize),
    /// "shorter than 0": an upper bound no length can satisfy.
    MaxLengthBelowZero,
    ContainsCharacter(char),
}

/// A natural-language rule.
///
/// Rules are object-safe and `Send + Sync` so a translator can hold them in a
/// `Vec<Box<dyn Rule>>` and be shared across threads.
pub trait Rule: Send + Sync {
    /// Short identifier, e.g. `"word-count"`.
    fn name(&self) -> &str;

    /// Inspect lowercased `text` and return the field this rule sets, if any.
    fn extract(&self, text: &str) -> Option<FilterField>;
}

/// A rule backed by one regex and a function turning its captures into a
/// field. Returning `None` from the builder means "did not fire".
pub struct PatternRule {
    name: &'static str,
    pattern: &'static Lazy<Regex>,
    build: fn(&Captures<'_>) -> Option<FilterField>,
}

impl PatternRule {
    pub const fn new(
        name: &'static str,
        pattern: &'static Lazy<Regex>,
        build: fn(&Captures<'_>) -> Option<FilterField>,
    ) -> Self {
        Self {
            name,
            pattern,
            build,
        }
    }
}

impl Rule for PatternRule {
    fn name(&self) -> &str {
        self.name
    }

    fn extract(&self, text: &str) -> Option<FilterField> {
        let captures = self.pattern.captures(text)?;
        (self.build)(&captures)
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in rule pattern must compile")
}

static SINGLE_WORD: Lazy<Regex> =
    Lazy::new(|| compile(r"(?-u:\b)(?:single|one)\s+word(?-u:\b)"));
static N_WORDS: Lazy<Regex> = Lazy::new(|| compile(r"(?-u:\b)([0-9]+)\s+words?(?-u:\b)"));
static PALINDROME: Lazy<Regex> =
    Lazy::new(|| compile(r"(?-u:\b)palindrom(?:ic|e)(?-u:\b)"));
static LONGER_THAN: Lazy<Regex> = Lazy::new(|| {
    compile(r"(?-u:\b)(?:longer|more)\s+than\s+([0-9]+)(?:\s+characters?)?(?-u:\b)")
});
static SHORTER_THAN: Lazy<Regex> = Lazy::new(|| {
    compile(r"(?-u:\b)(?:shorter|less)\s+than\s+([0-9]+)(?:\s+characters?)?(?-u:\b)")
});
static AT_LEAST: Lazy<Regex> =
    Lazy::new(|| compile(r"(?-u:\b)at\s+least\s+([0-9]+)(?:\s+characters?)?(?-u:\b)"));
static AT_MOST: Lazy<Regex> =
    Lazy::new(|| compile(r"(?-u:\b)at\s+most\s+([0-9]+)(?:\s+characters?)?(?-u:\b)"));
static CONTAINS_LETTER: Lazy<Regex> = Lazy::new(|| {
    compile(r"(?-u:\b)contain(?:s|ing)?(?:\s+(?:the\s+)?(?:letter|character))?\s+([a-z])(?-u:\b)")
});
static FIRST_VOWEL: Lazy<Regex> = Lazy::new(|| compile(r"(?-u:\b)first\s+vowel(?-u:\b)"));
static SECOND_VOWEL: Lazy<Regex> = Lazy::new(|| compile(r"(?-u:\b)second\s+vowel(?-u:\b)"));

/// Parse capture group 1 as a count. Numerals too large for `usize` do not
/// fire the rule.
fn number(captures: &Captures<'_>) -> Option<usize> {
    captures.get(1)?.as_str().parse().ok()
}

fn letter(captures: &Captures<'_>) -> Option<char> {
    captures.get(1)?.as_str().chars().next()
}

/// The built-in rules, in evaluation order.
///
/// A later rule overwrites whatever an earlier rule set for the same field:
/// "3 words" beats "one word", "at least" beats "longer than", "at most"
/// beats "shorter than", and the vowel rules beat an explicit "contains X".
/// That last case is surprising but intentional: "containing the letter z and
/// the first vowel" filters on `a`.
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(PatternRule::new("single-word", &SINGLE_WORD, |_| {
            Some(FilterField::WordCount(1))
        })),
        Box::new(PatternRule::new("word-count", &N_WORDS, |c| {
            number(c).map(FilterField::WordCount)
        })),
        Box::new(PatternRule::new("palindrome", &PALINDROME, |_| {
            Some(FilterField::IsPalindrome(true))
        })),
        Box::new(PatternRule::new("longer-than", &LONGER_THAN, |c| {
            number(c)
                .and_then(|n| n.checked_add(1))
                .map(FilterField::MinLength)
        })),
        Box::new(PatternRule::new("shorter-than", &SHORTER_THAN, |c| {
            number(c).map(|n| match n.checked_sub(1) {
                Some(max) => FilterField::MaxLength(max),
                None => FilterField::MaxLengthBelowZero,
            })
        })),
        Box::new(PatternRule::new("at-least", &AT_LEAST, |c| {
            number(c).map(FilterField::MinLength)
        })),
        Box::new(PatternRule::new("at-most", &AT_MOST, |c| {
            number(c).map(FilterField::MaxLength)
        })),
        Box::new(PatternRule::new("contains-letter", &CONTAINS_LETTER, |c| {
            letter(c).map(FilterField::ContainsCharacter)
        })),
        Box::new(PatternRule::new("first-vowel", &FIRST_VOWEL, |_| {
            Some(FilterField::ContainsCharacter('a'))
        })),
        Box::new(PatternRule::new("second-vowel", &SECOND_VOWEL, |_| {
            Some(FilterField::ContainsCharacter('e'))
        })),
    ]
}

/// Accumulates rule output into a [`FilterSet`], last write wins per field.
#[derive(Debug, Default)]
pub(crate) struct Draft {
    pub filters: FilterSet,
    pub max_below_zero: bool,
}

impl Draft {
    pub fn set(&mut self, field: FilterField) {
        match field {
            FilterField::WordCount(n) => self.filters.word_count = Some(n),
            FilterField::IsPalindrome(b) => self.filters.is_palindrome = Some(b),
            FilterField::MinLength(n) => self.filters.min_length = Some(n),
            FilterField::MaxLength(n) => {
                self.filters.max_length = Some(n);
                self.max_below_zero = false;
            }
            FilterField::MaxLengthBelowZero => {
                self.filters.max_length = None;
                self.max_below_zero = true;
            }
            FilterField::ContainsCharacter(c) => self.filters.contains_character = Some(c),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty() && !self.max_below_zero
    }
}

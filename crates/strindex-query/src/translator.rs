//! Natural-language query translation.
//!
//! The [`Translator`] runs an ordered pipeline of [`Rule`]s over the
//! lowercased query. Every rule that matches contributes one field; a later
//! rule overwrites a field set by an earlier one. After the pipeline:
//!
//! 1. nothing set -> [`QueryError::Unparseable`];
//! 2. `min_length > max_length` -> [`QueryError::Conflicting`].
//!
//! No other combination is rejected, even when it cannot match anything. An
//! upper bound below zero ("shorter than 0") conflicts with any lower bound;
//! on its own it marks the [`Translation`] unsatisfiable, and listing it
//! yields no entries.

use serde::{Deserialize, Serialize};
use strindex_types::FilterSet;

use crate::error::{QueryError, QueryResult};
use crate::rules::{default_rules, Draft, Rule};

/// The raw query paired with the filters it resolved to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretedQuery {
    pub original: String,
    pub parsed_filters: FilterSet,
}

/// Full result of a translation, including which rules fired.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Translation {
    pub filters: FilterSet,
    /// Names of the rules that matched, in evaluation order.
    pub fired: Vec<String>,
    /// The upper bound is below zero, so no entry can match.
    pub unsatisfiable: bool,
}

/// Ordered rule pipeline turning free text into a [`FilterSet`].
pub struct Translator {
    rules: Vec<Box<dyn Rule>>,
}

impl Translator {
    /// A translator with the built-in rule set.
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
        }
    }

    /// A translator with no rules. Use [`Self::add_rule`] to populate it.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule to the end of the pipeline, giving it the highest
    /// precedence.
    pub fn add_rule(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Number of rules in the pipeline.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Translate `text` into a filter set.
    ///
    /// An upper bound below zero cannot be expressed in a [`FilterSet`]; use
    /// [`Self::interpret`] to see [`Translation::unsatisfiable`].
    pub fn translate(&self, text: &str) -> QueryResult<FilterSet> {
        self.interpret(text).map(|t| t.filters)
    }

    /// Translate `text`, also reporting which rules fired.
    pub fn interpret(&self, text: &str) -> QueryResult<Translation> {
        let normalized = text.to_lowercase();
        let mut draft = Draft::default();
        let mut fired = Vec::new();

        for rule in &self.rules {
            if let Some(field) = rule.extract(&normalized) {
                tracing::trace!(rule = rule.name(), ?field, "rule fired");
                draft.set(field);
                fired.push(rule.name().to_string());
            }
        }

        if draft.is_empty() {
            return Err(QueryError::Unparseable(
                "Unable to parse natural language query".into(),
            ));
        }
        let inverted = match (draft.filters.min_length, draft.filters.max_length) {
            (Some(min), Some(max)) => min > max,
            (Some(_), None) => draft.max_below_zero,
            _ => false,
        };
        if inverted {
            return Err(QueryError::Conflicting(
                "Query parsed but resulted in conflicting filters: min_length > max_length".into(),
            ));
        }

        Ok(Translation {
            filters: draft.filters,
            fired,
            unsatisfiable: draft.max_below_zero,
        })
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.rules.iter().map(|r| r.name()).collect();
        f.debug_struct("Translator").field("rules", &names).finish()
    }
}

/// Translate `text` with the built-in rule set.
pub fn translate(text: &str) -> QueryResult<FilterSet> {
    Translator::new().translate(text)
}

/// Pair the caller's original text with the filters it resolved to.
pub fn format_interpretation(original: &str, filters: &FilterSet) -> InterpretedQuery {
    InterpretedQuery {
        original: original.to_string(),
        parsed_filters: filters.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::FilterField;

    // -----------------------------------------------------------------------
    // Documented queries
    // -----------------------------------------------------------------------

    #[test]
    fn single_word_palindromes() {
        let filters = translate("all single word palindromic strings").unwrap();
        assert_eq!(filters, FilterSet::new().with_word_count(1).with_palindrome(true));
    }

    #[test]
    fn longer_than_is_strict() {
        let filters = translate("strings longer than 10 characters").unwrap();
        assert_eq!(filters, FilterSet::new().with_min_length(11));
    }

    #[test]
    fn palindromes_with_first_vowel() {
        let filters = translate("palindromic strings that contain the first vowel").unwrap();
        assert_eq!(
            filters,
            FilterSet::new().with_palindrome(true).with_contains_character('a')
        );
    }

    #[test]
    fn containing_a_letter() {
        let filters = translate("strings containing the letter z").unwrap();
        assert_eq!(filters, FilterSet::new().with_contains_character('z'));
    }

    #[test]
    fn input_is_case_folded() {
        let filters = translate("Strings LONGER THAN 3 and Containing The Letter Q").unwrap();
        assert_eq!(
            filters,
            FilterSet::new().with_min_length(4).with_contains_character('q')
        );
    }

    // -----------------------------------------------------------------------
    // Failures
    // -----------------------------------------------------------------------

    #[test]
    fn gibberish_is_unparseable() {
        assert!(matches!(translate("asdljasd"), Err(QueryError::Unparseable(_))));
        assert!(matches!(translate(""), Err(QueryError::Unparseable(_))));
    }

    #[test]
    fn inverted_bounds_conflict() {
        let err = translate("at least 10 characters and at most 5 characters").unwrap_err();
        assert_eq!(
            err,
            QueryError::Conflicting(
                "Query parsed but resulted in conflicting filters: min_length > max_length".into()
            )
        );
    }

    #[test]
    fn equal_bounds_do_not_conflict() {
        let filters = translate("at least 5 characters and at most 5 characters").unwrap();
        assert_eq!(filters, FilterSet::new().with_min_length(5).with_max_length(5));
    }

    #[test]
    fn zero_upper_bound_still_checked() {
        assert!(matches!(
            translate("at least 1 character and at most 0 characters"),
            Err(QueryError::Conflicting(_))
        ));
    }

    #[test]
    fn shorter_than_zero_is_unsatisfiable_not_conflicting() {
        let translation = Translator::new().interpret("strings less than 0 characters").unwrap();
        assert!(translation.unsatisfiable);
        assert!(translation.filters.max_length.is_none());
        assert_eq!(translation.fired, vec!["shorter-than"]);

        let translation = Translator::new()
            .interpret("palindromic strings shorter than 0")
            .unwrap();
        assert!(translation.unsatisfiable);
        assert_eq!(translation.filters, FilterSet::new().with_palindrome(true));
    }

    #[test]
    fn shorter_than_zero_with_lower_bound_conflicts() {
        let err = translate("at least 0 characters and shorter than 0").unwrap_err();
        assert_eq!(
            err,
            QueryError::Conflicting(
                "Query parsed but resulted in conflicting filters: min_length > max_length".into()
            )
        );
    }

    #[test]
    fn later_upper_bound_replaces_below_zero() {
        let translation = Translator::new()
            .interpret("shorter than 0 and at most 4")
            .unwrap();
        assert!(!translation.unsatisfiable);
        assert_eq!(translation.filters, FilterSet::new().with_max_length(4));
    }

    #[test]
    fn unsatisfiable_but_consistent_is_accepted() {
        let filters = translate("single word strings at least 1000 characters").unwrap();
        assert_eq!(filters, FilterSet::new().with_word_count(1).with_min_length(1000));
    }

    // -----------------------------------------------------------------------
    // Precedence
    // -----------------------------------------------------------------------

    #[test]
    fn numbered_words_override_single_word() {
        let filters = translate("one word and 3 words").unwrap();
        assert_eq!(filters, FilterSet::new().with_word_count(3));
    }

    #[test]
    fn at_least_overrides_longer_than() {
        let filters = translate("at least 3 characters, longer than 8").unwrap();
        assert_eq!(filters.min_length, Some(3));
    }

    #[test]
    fn at_most_overrides_shorter_than() {
        let filters = translate("shorter than 20 but at most 9").unwrap();
        assert_eq!(filters.max_length, Some(9));
    }

    #[test]
    fn vowel_rules_override_explicit_letter() {
        let first = translate("containing the letter z and the first vowel").unwrap();
        assert_eq!(first.contains_character, Some('a'));

        let both = translate("first vowel or second vowel").unwrap();
        assert_eq!(both.contains_character, Some('e'));
    }

    // -----------------------------------------------------------------------
    // Pipeline
    // -----------------------------------------------------------------------

    #[test]
    fn interpret_reports_fired_rules_in_order() {
        let translation = Translator::new()
            .interpret("one word and 3 words that are palindromes or palindromic")
            .unwrap();
        assert_eq!(translation.fired, vec!["single-word", "word-count", "palindrome"]);
    }

    struct FixedRule;

    impl Rule for FixedRule {
        fn name(&self) -> &str {
            "fixed"
        }

        fn extract(&self, text: &str) -> Option<FilterField> {
            text.contains("tiny").then_some(FilterField::MaxLength(2))
        }
    }

    #[test]
    fn custom_rules_run_after_built_ins() {
        let mut translator = Translator::new();
        let before = translator.rule_count();
        translator.add_rule(Box::new(FixedRule));
        assert_eq!(translator.rule_count(), before + 1);

        let filters = translator.translate("tiny strings at most 9").unwrap();
        assert_eq!(filters.max_length, Some(2));
    }

    #[test]
    fn empty_translator_parses_nothing() {
        let translator = Translator::empty();
        assert!(matches!(
            translator.translate("palindromic"),
            Err(QueryError::Unparseable(_))
        ));
    }

    #[test]
    fn interpretation_echoes_original_text() {
        let filters = FilterSet::new().with_word_count(1);
        let interpreted = format_interpretation("Single Word", &filters);
        assert_eq!(interpreted.original, "Single Word");
        assert_eq!(interpreted.parsed_filters, filters);

        let json = serde_json::to_value(&interpreted).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "original": "Single Word", "parsed_filters": { "word_count": 1 } })
        );
    }
}

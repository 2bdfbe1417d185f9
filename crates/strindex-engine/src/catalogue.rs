use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strindex_query::{
    apply, decode, format_interpretation, FilterOutcome, InterpretedQuery, RawFilterParams,
    Translator,
};
use strindex_store::{InMemoryStringStore, StringStore};
use strindex_types::{ContentId, FilterSet, StringEntry};

use crate::error::{EngineError, EngineResult};

/// Result of a natural-language listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NaturalLanguageOutcome {
    pub data: Vec<StringEntry>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

/// The string catalogue: analyzer, store and query layer behind one API.
///
/// Owns its store explicitly. Share a `Catalogue` across threads with an
/// `Arc`; the store serializes its own mutations and the translator is
/// stateless.
pub struct Catalogue {
    store: Arc<dyn StringStore>,
    translator: Translator,
}

impl Catalogue {
    /// A catalogue over a fresh in-memory store.
    pub fn new() -> Self {
        Self::with_store(Arc::new(InMemoryStringStore::new()))
    }

    /// A catalogue over the given store.
    pub fn with_store(store: Arc<dyn StringStore>) -> Self {
        Self {
            store,
            translator: Translator::new(),
        }
    }

    /// Replace the natural-language translator.
    pub fn with_translator(mut self, translator: Translator) -> Self {
        self.translator = translator;
        self
    }

    /// Number of catalogued strings.
    pub fn len(&self) -> EngineResult<usize> {
        Ok(self.store.len()?)
    }

    pub fn is_empty(&self) -> EngineResult<bool> {
        Ok(self.store.is_empty()?)
    }

    // ---- Create / read / delete ----

    /// Analyze and store a new string.
    ///
    /// Fails with [`EngineError::Conflict`] if the value is already
    /// catalogued; the store is left unchanged.
    pub fn create(&self, value: &str) -> EngineResult<StringEntry> {
        if self.store.exists(value)? {
            tracing::debug!(len = value.len(), "create rejected: duplicate value");
            return Err(EngineError::Conflict(value.to_string()));
        }

        let properties = strindex_analyzer::analyze(value);
        let entry = StringEntry::new(value, properties);
        self.store.insert(entry.clone())?;
        tracing::debug!(id = %entry.id.short_hex(), length = entry.properties.length, "created entry");
        Ok(entry)
    }

    /// Look up a string by its exact value.
    pub fn get_by_value(&self, value: &str) -> EngineResult<StringEntry> {
        self.store
            .find_by_value(value)?
            .ok_or_else(|| EngineError::NotFound(value.to_string()))
    }

    /// Look up a string by its content id.
    pub fn get_by_id(&self, id: &ContentId) -> EngineResult<StringEntry> {
        self.store
            .find_by_id(id)?
            .ok_or_else(|| EngineError::NotFound(id.to_hex()))
    }

    /// Remove a string by its exact value.
    pub fn delete_by_value(&self, value: &str) -> EngineResult<()> {
        if self.store.remove(value)? {
            tracing::debug!(id = %ContentId::digest(value).short_hex(), "deleted entry");
            Ok(())
        } else {
            Err(EngineError::NotFound(value.to_string()))
        }
    }

    // ---- Listing ----

    /// List every string matching `filters`.
    pub fn list_filtered(&self, filters: &FilterSet) -> EngineResult<FilterOutcome> {
        let entries = self.store.list_all()?;
        let outcome = apply(entries, filters);
        tracing::debug!(filters = ?filters.applied_keys(), count = outcome.count, "listed entries");
        Ok(outcome)
    }

    /// Decode string-typed parameters, then list.
    pub fn list_with_params(&self, params: &RawFilterParams) -> EngineResult<FilterOutcome> {
        let filters = decode(params)?;
        self.list_filtered(&filters)
    }

    /// Translate a natural-language query, then list.
    pub fn translate_and_list(&self, text: &str) -> EngineResult<NaturalLanguageOutcome> {
        if text.trim().is_empty() {
            return Err(EngineError::InvalidInput(
                r#"Query parameter "query" is required and must be a non-empty string"#.into(),
            ));
        }

        let translation = self.translator.interpret(text)?;
        tracing::debug!(
            rules = ?translation.fired,
            unsatisfiable = translation.unsatisfiable,
            "translated query"
        );
        let data = if translation.unsatisfiable {
            Vec::new()
        } else {
            self.list_filtered(&translation.filters)?.data
        };
        Ok(NaturalLanguageOutcome {
            count: data.len(),
            data,
            interpreted_query: format_interpretation(text, &translation.filters),
        })
    }
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Catalogue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalogue")
            .field("entries", &self.len().unwrap_or_default())
            .field("rules", &self.translator.rule_count())
            .finish()
    }
}

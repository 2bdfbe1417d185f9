//! Query and analysis engine for strindex.
//!
//! [`Catalogue`] is the entry point for applications embedding strindex. It
//! exposes the five catalogue operations (create, get, list, translate-and-list,
//! delete) and maps every failure onto one [`EngineError`] kind.

pub mod catalogue;
pub mod error;

pub use catalogue::{Catalogue, NaturalLanguageOutcome};
pub use error::{EngineError, EngineResult};

// Re-export key types
pub use strindex_query::{FilterOutcome, InterpretedQuery, RawFilterParams, Translator};
pub use strindex_types::{ContentId, FilterSet, StringEntry, StringProperties};

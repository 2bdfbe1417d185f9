//! Query layer for strindex.
//!
//! Three pieces, all stateless:
//!
//! - [`decode`] -- turns string-typed parameters into a typed [`FilterSet`]
//! - [`apply`] -- narrows a sequence of entries with a [`FilterSet`]
//! - [`Translator`] -- turns free text into a [`FilterSet`] through an ordered
//!   list of lexical [`Rule`]s
//!
//! [`FilterSet`]: strindex_types::FilterSet

pub mod decode;
pub mod error;
pub mod filter;
pub mod rules;
pub mod translator;

pub use decode::{decode, RawFilterParams};
pub use error::{QueryError, QueryResult};
pub use filter::{apply, matches, FilterOutcome};
pub use rules::{default_rules, FilterField, PatternRule, Rule};
pub use translator::{format_interpretation, translate, InterpretedQuery, Translation, Translator};

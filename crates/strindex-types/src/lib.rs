//! Foundation types for strindex.
//!
//! This crate provides the data model shared by every other strindex crate:
//! the content-derived identifier, the analyzed string entry, and the typed
//! filter set used by both structured and natural-language queries.
//!
//! # Key Types
//!
//! - [`ContentId`] — SHA-256 content identifier, rendered as lowercase hex
//! - [`StringProperties`] — Derived property bundle for one string
//! - [`StringEntry`] — A stored string with its id, properties and timestamp
//! - [`FilterSet`] — Optional typed constraints for narrowing a listing

pub mod entry;
pub mod error;
pub mod filter;
pub mod id;

pub use entry::{StringEntry, StringProperties};
pub use error::TypeError;
pub use filter::FilterSet;
pub use id::ContentId;

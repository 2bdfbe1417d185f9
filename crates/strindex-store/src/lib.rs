//! Indexed storage for analyzed strings.
//!
//! Entries are reachable by exact value and by content id. Both indexes are
//! updated together on every insert and remove, so a lookup through either
//! key always agrees with the other.
//!
//! # Storage Backends
//!
//! All backends implement the [`StringStore`] trait:
//!
//! - [`InMemoryStringStore`] -- `HashMap`-based store, process-scoped

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryStringStore;
pub use traits::StringStore;

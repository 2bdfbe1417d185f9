use strindex_types::{ContentId, StringEntry};

use crate::error::StoreResult;

/// Keyed container of analyzed string entries.
///
/// All implementations must satisfy these invariants:
/// - `value` is unique across live entries, and so is `id`.
/// - The by-value and by-id indexes never diverge: an entry is visible
///   through both or through neither.
/// - Entries are never overwritten. The only transitions are
///   absent -> present (`insert`) and present -> absent (`remove`).
pub trait StringStore: Send + Sync {
    /// Returns `true` if an entry with exactly this value is stored.
    fn exists(&self, value: &str) -> StoreResult<bool>;

    /// Store a new entry.
    ///
    /// Fails with [`StoreError::Conflict`](crate::StoreError::Conflict) if the
    /// value is already present; the existing entry is left untouched.
    fn insert(&self, entry: StringEntry) -> StoreResult<()>;

    /// Look up an entry by its exact value.
    fn find_by_value(&self, value: &str) -> StoreResult<Option<StringEntry>>;

    /// Look up an entry by its content id.
    fn find_by_id(&self, id: &ContentId) -> StoreResult<Option<StringEntry>>;

    /// Every stored entry, in insertion order.
    fn list_all(&self) -> StoreResult<Vec<StringEntry>>;

    /// Remove the entry with this value from every index.
    ///
    /// Returns `true` if an entry existed.
    fn remove(&self, value: &str) -> StoreResult<bool>;

    /// Number of stored entries.
    fn len(&self) -> StoreResult<usize>;

    /// Returns `true` if nothing is stored.
    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

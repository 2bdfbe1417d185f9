use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use strindex_types::{ContentId, StringEntry};

use crate::error::{StoreError, StoreResult};
use crate::traits::StringStore;

/// An entry plus its insertion sequence number.
struct Slot {
    seq: u64,
    entry: StringEntry,
}

/// All indexes live behind one lock so they are always mutated together.
#[derive(Default)]
struct Indexes {
    by_id: HashMap<ContentId, Slot>,
    by_value: HashMap<String, ContentId>,
    order: BTreeMap<u64, ContentId>,
    next_seq: u64,
}

/// In-memory, HashMap-based string store.
///
/// Holds a by-id index, a by-value index and an insertion-order index behind a
/// single `RwLock`. Readers see either the state before a mutation or the state
/// after it, never a mix. Entries are cloned on read.
pub struct InMemoryStringStore {
    indexes: RwLock<Indexes>,
}

impl InMemoryStringStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            indexes: RwLock::new(Indexes::default()),
        }
    }

    /// Remove every entry.
    pub fn clear(&self) -> StoreResult<()> {
        let mut indexes = self.write()?;
        indexes.by_id.clear();
        indexes.by_value.clear();
        indexes.order.clear();
        Ok(())
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Indexes>> {
        self.indexes
            .read()
            .map_err(|_| StoreError::Internal("lock poisoned".into()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Indexes>> {
        self.indexes
            .write()
            .map_err(|_| StoreError::Internal("lock poisoned".into()))
    }
}

impl Default for InMemoryStringStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StringStore for InMemoryStringStore {
    fn exists(&self, value: &str) -> StoreResult<bool> {
        Ok(self.read()?.by_value.contains_key(value))
    }

    fn insert(&self, entry: StringEntry) -> StoreResult<()> {
        let mut indexes = self.write()?;
        if indexes.by_value.contains_key(&entry.value) || indexes.by_id.contains_key(&entry.id) {
            return Err(StoreError::Conflict(entry.value));
        }

        let seq = indexes.next_seq;
        indexes.next_seq += 1;
        let id = entry.id;
        indexes.by_value.insert(entry.value.clone(), id);
        indexes.order.insert(seq, id);
        indexes.by_id.insert(id, Slot { seq, entry });
        tracing::trace!(id = %id.short_hex(), seq, "stored entry");
        Ok(())
    }

    fn find_by_value(&self, value: &str) -> StoreResult<Option<StringEntry>> {
        let indexes = self.read()?;
        Ok(indexes
            .by_value
            .get(value)
            .and_then(|id| indexes.by_id.get(id))
            .map(|slot| slot.entry.clone()))
    }

    fn find_by_id(&self, id: &ContentId) -> StoreResult<Option<StringEntry>> {
        let indexes = self.read()?;
        Ok(indexes.by_id.get(id).map(|slot| slot.entry.clone()))
    }

    fn list_all(&self) -> StoreResult<Vec<StringEntry>> {
        let indexes = self.read()?;
        Ok(indexes
            .order
            .values()
            .filter_map(|id| indexes.by_id.get(id))
            .map(|slot| slot.entry.clone())
            .collect())
    }

    fn remove(&self, value: &str) -> StoreResult<bool> {
        let mut indexes = self.write()?;
        let Some(id) = indexes.by_value.remove(value) else {
            return Ok(false);
        };
        if let Some(slot) = indexes.by_id.remove(&id) {
            indexes.order.remove(&slot.seq);
        }
        tracing::trace!(id = %id.short_hex(), "removed entry");
        Ok(true)
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.by_id.len())
    }
}

impl std::fmt::Debug for InMemoryStringStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len().unwrap_or_default();
        f.debug_struct("InMemoryStringStore")
            .field("entry_count", &count)
            .finish()
    }
}

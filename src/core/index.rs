use tracing::debug;

use crate::{
    error::{CatalogError, Result},
    types::{BookId, Slot, validate_id},
};

/// Non-owning reference from an id to its catalog slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexEntry {
    /// Indexed book id.
    pub id: BookId,
    /// Position of the record in the catalog.
    pub slot: Slot,
}

/// Bucketed id index using `id mod bucket_count`.
///
/// Buckets never shrink or grow on their own. Lookup is O(1) on average but
/// degrades to O(n / bucket_count) as the catalog grows, unless the owner
/// calls [`BookIndex::rehash`].
#[derive(Debug, Clone)]
pub struct BookIndex {
    buckets: Vec<Vec<IndexEntry>>,
    len: usize,
}

impl BookIndex {
    /// Index with `bucket_count` buckets (at least one).
    pub fn new(bucket_count: usize) -> Self {
        Self {
            buckets: vec![Vec::new(); bucket_count.max(1)],
            len: 0,
        }
    }

    /// Bucket selected for `id`.
    pub fn hash(&self, id: BookId) -> Result<usize> {
        let id = validate_id(id)?;
        Ok((id % self.buckets.len() as u64) as usize)
    }

    /// Appends an entry for `id` into its bucket.
    pub fn insert(&mut self, id: BookId, slot: Slot) -> Result<()> {
        let b = self.hash(id)?;
        self.buckets[b].push(IndexEntry { id, slot });
        self.len += 1;
        Ok(())
    }

    /// Drops the entry for `id`, returning its slot. Absent ids are a no-op.
    pub fn remove(&mut self, id: BookId) -> Result<Option<Slot>> {
        let b = self.hash(id)?;
        let bucket = &mut self.buckets[b];
        let Some(pos) = bucket.iter().position(|e| e.id == id) else {
            return Ok(None);
        };
        let entry = bucket.remove(pos);
        self.len -= 1;
        Ok(Some(entry.slot))
    }

    /// Catalog slot for `id`.
    pub fn lookup(&self, id: BookId) -> Result<Slot> {
        let b = self.hash(id)?;
        self.buckets[b]
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.slot)
            .ok_or_else(|| CatalogError::missing_id(id))
    }

    /// Renumbers entries after the catalog removed the record at `removed`.
    pub fn shift_slots_after(&mut self, removed: Slot) {
        for entry in self.buckets.iter_mut().flatten() {
            if entry.slot > removed {
                entry.slot -= 1;
            }
        }
    }

    /// Redistributes every entry over `bucket_count` buckets.
    pub fn rehash(&mut self, bucket_count: usize) {
        let bucket_count = bucket_count.max(1);
        debug!(from = self.buckets.len(), to = bucket_count, "rehashing book index");
        let mut buckets = vec![Vec::new(); bucket_count];
        for entry in self.buckets.drain(..).flatten() {
            buckets[(entry.id % bucket_count as u64) as usize].push(entry);
        }
        self.buckets = buckets;
    }

    /// Entries per bucket.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Entries currently held by bucket `b`; zero when out of range.
    pub fn bucket_len(&self, b: usize) -> usize {
        self.buckets.get(b).map_or(0, Vec::len)
    }

    /// Number of indexed ids.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when nothing is indexed.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Every entry, bucket by bucket.
    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.buckets.iter().flatten()
    }
}

impl Default for BookIndex {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_BUCKET_COUNT)
    }
}

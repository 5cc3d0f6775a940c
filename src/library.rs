//! Library context: the catalog, its id index, and the transaction log,
//! mutated only together.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    algo::{search::binary_search, sort},
    book::{Book, BookDraft, BookPatch},
    config::LibraryConfig,
    core::{catalog::Catalog, index::BookIndex, log::TransactionLog},
    error::{CatalogError, Result},
    transaction::Transaction,
    types::{BookId, BookStatus, SortAlgorithm, SortKey, validate_id},
};

/// Serializable copy of a library's full state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibrarySnapshot {
    /// Id the next added book will receive.
    pub next_id: BookId,
    /// Records in catalog order.
    pub books: Vec<Book>,
    /// Log entries, oldest first.
    pub transactions: Vec<String>,
}

/// Owner of every catalog structure and of the id counter.
///
/// Every mutation goes through `&mut self`, so the catalog and the index are
/// never observed out of step.
#[derive(Debug)]
pub struct Library {
    catalog: Catalog,
    index: BookIndex,
    log: TransactionLog,
    config: LibraryConfig,
    next_id: BookId,
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}

impl Library {
    /// Empty library with a fixed 10-bucket index.
    pub fn new() -> Self {
        Self::build(LibraryConfig::default())
    }

    /// Empty library using `config`.
    pub fn with_config(config: LibraryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: LibraryConfig) -> Self {
        Self {
            catalog: Catalog::new(),
            index: BookIndex::new(config.bucket_count),
            log: TransactionLog::new(),
            config,
            next_id: 1,
        }
    }

    /// Rebuilds a library, and its index, from an exported snapshot.
    pub fn from_snapshot(snapshot: LibrarySnapshot, config: LibraryConfig) -> Result<Self> {
        if snapshot.next_id == BookId::MAX {
            return Err(CatalogError::Validation(
                "snapshot next_id leaves no ids to assign".to_string(),
            ));
        }
        let mut lib = Self::with_config(config)?;
        let mut seen = HashSet::with_capacity(snapshot.books.len());

        for book in snapshot.books {
            validate_id(book.id)?;
            if !seen.insert(book.id) {
                return Err(CatalogError::Validation(format!(
                    "duplicate book id {} in snapshot",
                    book.id
                )));
            }
            if book.id >= snapshot.next_id {
                return Err(CatalogError::Validation(format!(
                    "snapshot next_id {} does not exceed book id {}",
                    snapshot.next_id, book.id
                )));
            }
            let draft = BookDraft::new(book.title, book.author);
            let mut rebuilt = draft.into_book(book.id)?;
            rebuilt.status = book.status;
            lib.insert_record(rebuilt)?;
        }

        lib.next_id = snapshot.next_id.max(1);
        lib.log = TransactionLog::from_entries(snapshot.transactions)?;
        Ok(lib)
    }

    /// Exports the current state in catalog order.
    pub fn export_snapshot(&self) -> LibrarySnapshot {
        LibrarySnapshot {
            next_id: self.next_id,
            books: self.catalog.enumerate(),
            transactions: self.log.to_entries(),
        }
    }

    /// Creates a book, appends it to the catalog, and indexes it.
    pub fn add_book(&mut self, title: impl Into<String>, author: impl Into<String>) -> Result<Book> {
        let next = self
            .next_id
            .checked_add(1)
            .ok_or_else(|| CatalogError::Validation("book id space exhausted".to_string()))?;
        let book = BookDraft::new(title, author).into_book(self.next_id)?;
        self.insert_record(book.clone())?;
        self.next_id = next;
        debug!(id = book.id, title = %book.title, "book added");
        Ok(book)
    }

    /// Point lookup through the id index.
    pub fn find_by_id(&self, id: BookId) -> Result<&Book> {
        let slot = self.index.lookup(id)?;
        self.catalog
            .get(slot)
            .ok_or_else(|| CatalogError::missing_id(id))
    }

    /// Sorts a snapshot by title and binary searches it.
    ///
    /// Among books sharing a title, any one of them may be returned.
    pub fn find_by_title(&self, title: &str) -> Result<Book> {
        if title.trim().is_empty() {
            return Err(CatalogError::Validation("title cannot be empty".to_string()));
        }
        let mut snapshot = self.catalog.enumerate();
        sort::mergesort(&mut snapshot, |b| Ok(b.title.clone()))?;
        binary_search(&snapshot, title, |b| Ok(b.title.as_str()))
            .cloned()
            .map_err(|err| match err {
                CatalogError::NotFound(_) => CatalogError::NotFound(format!("title {title:?}")),
                other => other,
            })
    }

    /// Marks an available book as checked out and logs it.
    pub fn checkout(&mut self, id: BookId) -> Result<()> {
        self.transition(id, BookStatus::CheckedOut)
    }

    /// Marks a checked-out book as available and logs it.
    pub fn return_book(&mut self, id: BookId) -> Result<()> {
        self.transition(id, BookStatus::Available)
    }

    fn transition(&mut self, id: BookId, to: BookStatus) -> Result<()> {
        let slot = self.index.lookup(id)?;
        let book = self
            .catalog
            .get_mut(slot)
            .ok_or_else(|| CatalogError::missing_id(id))?;

        let tx = match (book.status, to) {
            (BookStatus::Available, BookStatus::CheckedOut) => Transaction::CheckedOut { id },
            (BookStatus::CheckedOut, BookStatus::Available) => Transaction::Returned { id },
            (BookStatus::CheckedOut, BookStatus::CheckedOut) => {
                return Err(CatalogError::AlreadyCheckedOut(id));
            }
            (BookStatus::Available, BookStatus::Available) => {
                return Err(CatalogError::AlreadyAvailable(id));
            }
        };

        book.status = to;
        self.log.push(tx.to_string())?;
        debug!(id, status = %to, "status changed");
        Ok(())
    }

    /// Replaces the non-blank fields of `patch` on the book with `id`.
    pub fn update_book(&mut self, id: BookId, patch: BookPatch) -> Result<()> {
        validate_id(id)?;
        if !self.catalog.update(id, &patch) {
            return Err(CatalogError::missing_id(id));
        }
        debug!(id, ?patch, "book updated");
        Ok(())
    }

    /// Removes the book from the catalog and the index together.
    pub fn delete_book(&mut self, id: BookId) -> Result<()> {
        validate_id(id)?;
        let (slot, book) = self
            .catalog
            .delete(id)
            .ok_or_else(|| CatalogError::missing_id(id))?;
        self.index.remove(id)?;
        self.index.shift_slots_after(slot);
        debug!(id, title = %book.title, "book deleted");
        Ok(())
    }

    /// Snapshot of the catalog, sorted by `key` when one is given.
    pub fn list_sorted(&self, key: Option<SortKey>, algorithm: SortAlgorithm) -> Result<Vec<Book>> {
        let mut books = self.catalog.enumerate();
        if let Some(key) = key {
            sort::sort_books(&mut books, key, algorithm)?;
        }
        Ok(books)
    }

    /// [`Library::list_sorted`] with the field and algorithm given by name.
    pub fn list_sorted_by_name(&self, key: &str, algorithm: &str) -> Result<Vec<Book>> {
        self.list_sorted(Some(key.parse()?), algorithm.parse()?)
    }

    /// Removes and returns the newest transaction description.
    pub fn pop_transaction(&mut self) -> Result<String> {
        self.log.pop()
    }

    /// Read access to the transaction log.
    pub fn transactions(&self) -> &TransactionLog {
        &self.log
    }

    /// Read access to the id index.
    pub fn index(&self) -> &BookIndex {
        &self.index
    }

    /// Records in insertion order.
    pub fn books(&self) -> &[Book] {
        self.catalog.as_slice()
    }

    /// Active configuration.
    pub fn config(&self) -> &LibraryConfig {
        &self.config
    }

    /// Number of books.
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// True when the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    fn insert_record(&mut self, book: Book) -> Result<()> {
        let id = book.id;
        // Index first: it is the only step that can fail.
        let slot = self.catalog.len();
        self.index.insert(id, slot)?;
        self.catalog.push(book);
        self.maybe_grow_index();
        Ok(())
    }

    fn maybe_grow_index(&mut self) {
        let Some(max) = self.config.max_load_factor else {
            return;
        };
        if self.index.load_factor() > max {
            let to = self.index.bucket_count() * 2;
            self.index.rehash(to);
        }
    }
}

use crate::{
    book::{Book, BookPatch},
    types::{BookId, Slot},
};

/// Ordered record sequence. Enumeration order is insertion order.
///
/// The catalog does not check id uniqueness itself; [`crate::library::Library`]
/// is the only writer and hands out ids from its own counter.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `book` at the tail and returns its slot.
    pub fn push(&mut self, book: Book) -> Slot {
        self.books.push(book);
        self.books.len() - 1
    }

    /// Removes the record with `id`, returning the slot it occupied.
    pub fn delete(&mut self, id: BookId) -> Option<(Slot, Book)> {
        let slot = self.position(id)?;
        Some((slot, self.books.remove(slot)))
    }

    /// Applies `patch` to the record with `id`. Returns false when absent.
    pub fn update(&mut self, id: BookId, patch: &BookPatch) -> bool {
        match self.books.iter_mut().find(|b| b.id == id) {
            Some(book) => {
                patch.apply_to(book);
                true
            }
            None => false,
        }
    }

    /// Copies every record in insertion order.
    pub fn enumerate(&self) -> Vec<Book> {
        self.books.clone()
    }

    /// Linear scan for the slot holding `id`.
    pub fn position(&self, id: BookId) -> Option<Slot> {
        self.books.iter().position(|b| b.id == id)
    }

    /// Record at `slot`.
    pub fn get(&self, slot: Slot) -> Option<&Book> {
        self.books.get(slot)
    }

    /// Mutable record at `slot`.
    pub fn get_mut(&mut self, slot: Slot) -> Option<&mut Book> {
        self.books.get_mut(slot)
    }

    /// Borrowed view in insertion order.
    pub fn as_slice(&self) -> &[Book] {
        &self.books
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// True when no records are held.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

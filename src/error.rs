//! Error type shared by every catalog operation.

use thiserror::Error;

use crate::types::BookId;

/// Result alias using [`CatalogError`].
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Failures reported by the catalog core.
///
/// `Display` renders a one-line message suitable for a front end to show
/// as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Empty title/author, blank event text, or a non-positive id.
    #[error("invalid input: {0}")]
    Validation(String),
    /// No record matches the requested id or title.
    #[error("book not found: {0}")]
    NotFound(String),
    /// Unknown sort/search field, or a key selector that failed.
    #[error("invalid key: {0}")]
    InvalidKey(String),
    /// Pop on an empty transaction log.
    #[error("transaction log is empty")]
    EmptyLog,
    /// Checkout of a book that is already lent out.
    #[error("book {0} is already checked out")]
    AlreadyCheckedOut(BookId),
    /// Return of a book that is already on the shelf.
    #[error("book {0} is already available")]
    AlreadyAvailable(BookId),
}

impl CatalogError {
    pub(crate) fn missing_id(id: BookId) -> Self {
        Self::NotFound(format!("id {id}"))
    }

    /// Returns true for [`CatalogError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

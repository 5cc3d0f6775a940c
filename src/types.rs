//! Shared primitive IDs and catalog-related enums.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Monotonic book identifier. Zero is never assigned.
pub type BookId = u64;

/// Position of a record inside the catalog sequence.
pub type Slot = usize;

/// Circulation status of a book.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BookStatus {
    /// On the shelf.
    #[default]
    Available,
    /// Lent out.
    CheckedOut,
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => f.write_str("Available"),
            Self::CheckedOut => f.write_str("Checked out"),
        }
    }
}

/// Record field used to order and search snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// Book id.
    Id,
    /// Book title.
    Title,
    /// Book author.
    Author,
    /// Circulation status, `Available` first.
    Status,
}

impl FromStr for SortKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "id" => Ok(Self::Id),
            "title" => Ok(Self::Title),
            "author" => Ok(Self::Author),
            "status" => Ok(Self::Status),
            other => Err(CatalogError::InvalidKey(other.to_string())),
        }
    }
}

/// Sorting algorithm applied by [`crate::library::Library::list_sorted`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortAlgorithm {
    /// Lomuto quicksort, not stable.
    #[default]
    Quicksort,
    /// Top-down mergesort, stable.
    Mergesort,
}

impl FromStr for SortAlgorithm {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "quicksort" => Ok(Self::Quicksort),
            "mergesort" => Ok(Self::Mergesort),
            other => Err(CatalogError::InvalidKey(format!("unknown algorithm `{other}`"))),
        }
    }
}

/// Rejects the reserved id `0`.
pub fn validate_id(id: BookId) -> Result<BookId, CatalogError> {
    if id == 0 {
        return Err(CatalogError::Validation(
            "book id must be a positive integer".to_string(),
        ));
    }
    Ok(id)
}

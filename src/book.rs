//! Book record, draft, and patch types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    error::{CatalogError, Result},
    types::{BookId, BookStatus},
};

/// Fully materialized catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Stable identifier assigned by the library.
    pub id: BookId,
    /// Non-empty title.
    pub title: String,
    /// Non-empty author.
    pub author: String,
    /// Circulation status.
    pub status: BookStatus,
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Title: {}, Author: {}, Status: {}",
            self.id, self.title, self.author, self.status
        )
    }
}

/// Insert payload used to create a new [`Book`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDraft {
    /// Title text.
    pub title: String,
    /// Author text.
    pub author: String,
}

impl BookDraft {
    /// Builds a draft from borrowed text.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }

    /// Materializes the draft under `id`, rejecting blank fields.
    pub fn into_book(self, id: BookId) -> Result<Book> {
        if self.title.trim().is_empty() || self.author.trim().is_empty() {
            return Err(CatalogError::Validation(
                "title and author cannot be empty".to_string(),
            ));
        }
        Ok(Book {
            id,
            title: self.title,
            author: self.author,
            status: BookStatus::Available,
        })
    }
}

/// Sparse patch where each non-blank `Some` field overwrites the record value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BookPatch {
    /// Optional replacement title.
    pub title: Option<String>,
    /// Optional replacement author.
    pub author: Option<String>,
}

impl BookPatch {
    /// Patch that only replaces the title.
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            author: None,
        }
    }

    /// Patch that only replaces the author.
    pub fn author(author: impl Into<String>) -> Self {
        Self {
            title: None,
            author: Some(author.into()),
        }
    }

    /// Returns true when no field would change a record.
    pub fn is_empty(&self) -> bool {
        supplied(&self.title).is_none() && supplied(&self.author).is_none()
    }

    /// Applies this patch in place to `rec`. Id and status are never touched.
    pub fn apply_to(&self, rec: &mut Book) {
        if let Some(v) = supplied(&self.title) {
            rec.title = v.to_string();
        }
        if let Some(v) = supplied(&self.author) {
            rec.author = v.to_string();
        }
    }
}

fn supplied(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.trim().is_empty())
}

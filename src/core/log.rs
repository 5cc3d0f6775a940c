use crate::error::{CatalogError, Result};

/// LIFO stack of circulation event descriptions.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TransactionLog {
    entries: Vec<String>,
}

impl TransactionLog {
    /// Empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a non-blank event.
    pub fn push(&mut self, event: impl Into<String>) -> Result<()> {
        let event = event.into();
        if event.trim().is_empty() {
            return Err(CatalogError::Validation(
                "transaction must be a non-empty string".to_string(),
            ));
        }
        self.entries.push(event);
        Ok(())
    }

    /// Removes and returns the newest event.
    pub fn pop(&mut self) -> Result<String> {
        self.entries.pop().ok_or(CatalogError::EmptyLog)
    }

    /// Newest event without removing it.
    pub fn peek(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    /// Events newest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().rev().map(String::as_str)
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no events are held.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn from_entries(entries: Vec<String>) -> Result<Self> {
        let mut log = Self::new();
        for e in entries {
            log.push(e)?;
        }
        Ok(log)
    }

    pub(crate) fn to_entries(&self) -> Vec<String> {
        self.entries.clone()
    }
}

//! Circulation events recorded in the transaction log.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::BookId;

/// A status transition that produced a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transaction {
    /// A book went from available to checked out.
    CheckedOut {
        /// Book that moved.
        id: BookId,
    },
    /// A book came back.
    Returned {
        /// Book that moved.
        id: BookId,
    },
}

impl Transaction {
    /// Book affected by this transaction.
    pub fn id(&self) -> BookId {
        match self {
            Self::CheckedOut { id } | Self::Returned { id } => *id,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CheckedOut { id } => write!(f, "Checked out book with ID {id}"),
            Self::Returned { id } => write!(f, "Returned book with ID {id}"),
        }
    }
}

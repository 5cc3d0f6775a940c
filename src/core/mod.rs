//! In-memory catalog, id index, and transaction log.

/// Ordered record sequence.
pub mod catalog;
/// Fixed-bucket id index.
pub mod index;
/// LIFO transaction log.
pub mod log;

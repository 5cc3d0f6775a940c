//! In-memory book catalog with a bucketed id index, a circulation log, and
//! key-based sorting and searching over snapshots.
//!
//! # Examples
//!
//! ```
//! use bookshelf::{
//!     error::CatalogError,
//!     library::Library,
//!     types::{BookStatus, SortAlgorithm, SortKey},
//! };
//!
//! let mut lib = Library::new();
//! let dune = lib.add_book("Dune", "Herbert").expect("add");
//! assert_eq!(dune.id, 1);
//!
//! lib.checkout(dune.id).expect("checkout");
//! assert_eq!(lib.find_by_id(1).expect("find").status, BookStatus::CheckedOut);
//! assert_eq!(lib.checkout(1), Err(CatalogError::AlreadyCheckedOut(1)));
//!
//! lib.add_book("Anathem", "Stephenson").expect("add");
//! let sorted = lib
//!     .list_sorted(Some(SortKey::Title), SortAlgorithm::Mergesort)
//!     .expect("sort");
//! assert_eq!(sorted[0].title, "Anathem");
//!
//! lib.delete_book(1).expect("delete");
//! assert!(lib.find_by_id(1).unwrap_err().is_not_found());
//! ```
#![deny(missing_docs)]

/// Sorting and searching algorithms.
pub mod algo;
/// Book records and patches.
pub mod book;
/// Library configuration.
pub mod config;
/// Catalog, index, and transaction log structures.
pub mod core;
/// Error type.
pub mod error;
/// Library context and public operations.
pub mod library;
/// Circulation events.
pub mod transaction;
/// Shared primitive types and enums.
pub mod types;

//! Sorting and searching over record snapshots.

/// Binary search.
pub mod search;
/// Quicksort and mergesort.
pub mod sort;

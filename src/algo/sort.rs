//! Key-based quicksort and mergesort.
//!
//! Both algorithms read every key before moving anything. When the selector
//! fails the error is returned and the input is left exactly as it was.

use tracing::warn;

use crate::{
    book::Book,
    error::{CatalogError, Result},
    types::{SortAlgorithm, SortKey},
};

/// Sorts the whole slice with [`quicksort_range`].
pub fn quicksort<T, K, F>(items: &mut [T], key: F) -> Result<()>
where
    K: Ord,
    F: FnMut(&T) -> Result<K>,
{
    match items.len() {
        0 | 1 => Ok(()),
        n => quicksort_range(items, 0, n - 1, key),
    }
}

/// In-place Lomuto quicksort over the inclusive range `[low, high]`.
///
/// The pivot is always the element at the range's upper end, so already
/// sorted or reverse-sorted input costs O(n²) comparisons. Equal keys may be
/// reordered. Ranges are processed from an explicit stack, smaller side
/// first, so sorted input does not deepen the call stack.
pub fn quicksort_range<T, K, F>(items: &mut [T], low: usize, high: usize, mut key: F) -> Result<()>
where
    K: Ord,
    F: FnMut(&T) -> Result<K>,
{
    if low >= high {
        return Ok(());
    }
    if high >= items.len() {
        return Err(CatalogError::Validation(format!(
            "sort range {low}..={high} exceeds length {}",
            items.len()
        )));
    }

    let range = &mut items[low..=high];
    let mut keys = extract_keys(range, &mut key)?;

    let mut stack = vec![(0, range.len() - 1)];
    while let Some((lo, hi)) = stack.pop() {
        if lo >= hi {
            continue;
        }
        let pi = partition(range, &mut keys, lo, hi);
        let left = (pi > lo + 1).then(|| (lo, pi - 1));
        let right = (pi + 1 < hi).then(|| (pi + 1, hi));
        let (small, large) = match (left, right) {
            (Some(l), Some(r)) if l.1 - l.0 > r.1 - r.0 => (Some(r), Some(l)),
            (l, r) => (l, r),
        };
        stack.extend(large);
        stack.extend(small);
    }
    Ok(())
}

fn partition<T, K: Ord>(items: &mut [T], keys: &mut [K], lo: usize, hi: usize) -> usize {
    let mut i = lo;
    for j in lo..hi {
        if keys[j] <= keys[hi] {
            items.swap(i, j);
            keys.swap(i, j);
            i += 1;
        }
    }
    items.swap(i, hi);
    keys.swap(i, hi);
    i
}

/// Stable top-down mergesort.
///
/// Ties take the left half first, so equal keys keep their input order.
/// Uses O(n) scratch space for the index permutation plus one clone of the
/// input.
pub fn mergesort<T, K, F>(items: &mut [T], mut key: F) -> Result<()>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> Result<K>,
{
    if items.len() < 2 {
        return Ok(());
    }
    let keys = extract_keys(items, &mut key)?;
    let mut order: Vec<usize> = (0..items.len()).collect();
    merge_sort_indices(&mut order, &keys);

    let sorted: Vec<T> = order.iter().map(|&i| items[i].clone()).collect();
    items.clone_from_slice(&sorted);
    Ok(())
}

fn merge_sort_indices<K: Ord>(order: &mut [usize], keys: &[K]) {
    if order.len() < 2 {
        return;
    }
    let mid = order.len() / 2;
    let mut left = order[..mid].to_vec();
    let mut right = order[mid..].to_vec();
    merge_sort_indices(&mut left, keys);
    merge_sort_indices(&mut right, keys);

    let (mut i, mut j) = (0, 0);
    for out in order.iter_mut() {
        let take_left = j >= right.len() || (i < left.len() && keys[left[i]] <= keys[right[j]]);
        if take_left {
            *out = left[i];
            i += 1;
        } else {
            *out = right[j];
            j += 1;
        }
    }
}

fn extract_keys<T, K, F>(items: &[T], key: &mut F) -> Result<Vec<K>>
where
    F: FnMut(&T) -> Result<K>,
{
    items.iter().map(|t| key(t)).collect::<Result<Vec<_>>>().inspect_err(|err| {
        warn!(%err, "sort aborted before moving any element");
    })
}

/// Sorts book records by a named field.
pub fn sort_books(books: &mut [Book], key: SortKey, algorithm: SortAlgorithm) -> Result<()> {
    match key {
        SortKey::Id => run(books, algorithm, |b| Ok(b.id)),
        SortKey::Title => run(books, algorithm, |b| Ok(b.title.clone())),
        SortKey::Author => run(books, algorithm, |b| Ok(b.author.clone())),
        SortKey::Status => run(books, algorithm, |b| Ok(b.status)),
    }
}

fn run<K: Ord>(
    books: &mut [Book],
    algorithm: SortAlgorithm,
    key: impl FnMut(&Book) -> Result<K>,
) -> Result<()> {
    match algorithm {
        SortAlgorithm::Quicksort => quicksort(books, key),
        SortAlgorithm::Mergesort => mergesort(books, key),
    }
}

use std::{borrow::Borrow, cmp::Ordering};

use tracing::warn;

use crate::error::{CatalogError, Result};

/// Binary search over a slice already ascending by `key`.
///
/// Unsorted input gives an unspecified answer (a wrong match or `NotFound`),
/// never a panic. An empty slice and a failing selector are both logged and
/// reported as `NotFound`.
pub fn binary_search<'a, T, K, Q, F>(sorted: &'a [T], target: &Q, mut key: F) -> Result<&'a T>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
    F: FnMut(&'a T) -> Result<K>,
{
    if sorted.is_empty() {
        warn!("binary search on an empty snapshot");
        return Err(CatalogError::NotFound("book list is empty".to_string()));
    }

    let (mut lo, mut hi) = (0, sorted.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let item = &sorted[mid];
        let k = key(item).map_err(|err| {
            warn!(%err, "binary search key selector failed");
            CatalogError::NotFound(format!("search aborted: {err}"))
        })?;
        match k.borrow().cmp(target) {
            Ordering::Equal => return Ok(item),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }
    Err(CatalogError::NotFound("no record with the requested key".to_string()))
}

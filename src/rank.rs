//! Top-N selection of directories by recursive size.
//!
//! Directory counts can reach hundreds of thousands, so the ranking keeps a
//! bounded min-heap of the `n` best candidates instead of sorting everything.

use fnv::FnvHashMap;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::path::{Path, PathBuf};

/// Returns the `n` largest directories of `total_size`, largest first.
///
/// Ties keep the map's iteration order, which is stable for a fixed map.
pub fn top_n(total_size: &FnvHashMap<PathBuf, u64>, n: usize) -> Vec<(PathBuf, u64)> {
    top_n_from(
        total_size.iter().map(|(path, size)| (path.as_path(), *size)),
        n,
    )
}

/// Returns the `n` largest `(path, size)` pairs of `items`, largest first.
///
/// Among equal sizes the item seen first ranks higher.
///
/// # Arguments
/// * `items` - Candidate directories with their sizes
/// * `n` - Maximum number of results; 0 yields an empty list
pub fn top_n_from<'a, I>(items: I, n: usize) -> Vec<(PathBuf, u64)>
where
    I: IntoIterator<Item = (&'a Path, u64)>,
{
    if n == 0 {
        return Vec::new();
    }

    // Min-heap on (size, earlier-is-better); the root is the weakest kept entry
    let mut heap: BinaryHeap<Reverse<(u64, Reverse<usize>, &'a Path)>> =
        BinaryHeap::with_capacity(n + 1);

    for (idx, (path, size)) in items.into_iter().enumerate() {
        let candidate = (size, Reverse(idx), path);
        if heap.len() < n {
            heap.push(Reverse(candidate));
        } else if let Some(Reverse(weakest)) = heap.peek() {
            if candidate > *weakest {
                heap.pop();
                heap.push(Reverse(candidate));
            }
        }
    }

    // Ascending order of Reverse<key> is descending order of key
    heap.into_sorted_vec()
        .into_iter()
        .map(|Reverse((size, _, path))| (path.to_path_buf(), size))
        .collect()
}

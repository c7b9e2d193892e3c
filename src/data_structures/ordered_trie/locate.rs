// Copyright (c) 2025 Ordered Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Neighbor-branch location over an ascending label list.

/// Finds the indexes of the nearest branches strictly below and strictly
/// above `probe` in the ascending list `branches`.
///
/// An exact match at `i` is skipped: the neighbors are `i - 1` and `i + 1`.
/// Otherwise the first entry greater than `probe` is the right neighbor and
/// the entry before it the left one. Either side is `None` past a boundary.
///
/// # Example
///
/// ```
/// use ordered_trie::data_structures::ordered_trie::neighbor_branches;
///
/// let branches = [2, 5, 9];
/// assert_eq!(neighbor_branches(&branches, &5), (Some(0), Some(2)));
/// assert_eq!(neighbor_branches(&branches, &10), (Some(2), None));
/// assert_eq!(neighbor_branches(&branches, &1), (None, Some(0)));
/// ```
pub fn neighbor_branches<L: Ord>(branches: &[L], probe: &L) -> (Option<usize>, Option<usize>) {
    neighbor_branches_by(branches, probe, |b| b)
}

/// Same scan as [`neighbor_branches`], projecting each entry to its label
/// with `label_of`.
pub fn neighbor_branches_by<T, L, F>(items: &[T], probe: &L, label_of: F) -> (Option<usize>, Option<usize>)
where
    L: Ord,
    F: Fn(&T) -> &L,
{
    let len = items.len();
    let found = items.iter().position(|item| label_of(item) >= probe);

    match found {
        Some(i) if label_of(&items[i]) == probe => {
            let right = if i + 1 < len { Some(i + 1) } else { None };
            (i.checked_sub(1), right)
        }
        Some(i) => (i.checked_sub(1), Some(i)),
        None => (len.checked_sub(1), None),
    }
}

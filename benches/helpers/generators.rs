//! Benchmark input generators.

use hierlist::HierarchyList;

/// Creates `size` items arranged as a binary heap.
///
/// Item `0` is the root, and each item `i` has `2i + 1` and `2i + 2` as its
/// children (if they exist).
pub fn make_heap_items(size: usize) -> Vec<(usize, Option<usize>)> {
    (0..size)
        .map(|i| (i, i.checked_sub(1).map(|p| p / 2)))
        .collect()
}

/// Same as [`make_heap_items`], but every child comes before its parent.
pub fn make_reversed_heap_items(size: usize) -> Vec<(usize, Option<usize>)> {
    let mut items = make_heap_items(size);
    items.reverse();
    items
}

/// Creates `size` items forming a single chain.
pub fn make_chain_items(size: usize) -> Vec<(usize, Option<usize>)> {
    (0..size).map(|i| (i, i.checked_sub(1))).collect()
}

/// Builds a list from `items`, storing each id in the `id` field.
pub fn make_list(items: &[(usize, Option<usize>)]) -> HierarchyList<usize, usize> {
    HierarchyList::with_callback(items, |item, node, _| {
        node.insert("id", item.0);
    })
    .unwrap()
}

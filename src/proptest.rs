//! Strategies generating random flat item lists.

use proptest::prelude::*;
use proptest::sample::Index;

prop_compose! {
    /// A random forest encoded as `(id, parent_id)` pairs.
    ///
    /// Ids are `0..n` for some `n <= max_items`, and every parent id refers to
    /// an earlier item, so the items never form a cycle.
    pub fn gen_items(max_items: usize)(
        parents in prop::collection::vec(prop::option::of(any::<Index>()), 0..=max_items)
    ) -> Vec<(usize, Option<usize>)> {
        parents
            .into_iter()
            .enumerate()
            .map(|(id, parent)| (id, parent.filter(|_| id > 0).map(|p| p.index(id))))
            .collect()
    }
}

/// Like [`gen_items`], but in random order so that children may precede
/// their parents.
pub fn gen_shuffled_items(
    max_items: usize,
) -> impl Strategy<Value = Vec<(usize, Option<usize>)>> {
    gen_items(max_items).prop_shuffle()
}

#[cfg(test)]
mod tests {
    use super::{gen_items, gen_shuffled_items};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn parents_precede_children(items in gen_items(20)) {
            prop_assert!(items.len() <= 20);
            for (id, parent) in items {
                if let Some(parent) = parent {
                    prop_assert!(parent < id);
                }
            }
        }

        #[test]
        fn shuffled_ids_are_unique(items in gen_shuffled_items(20)) {
            let mut ids: Vec<_> = items.iter().map(|(id, _)| *id).collect();
            ids.sort_unstable();
            prop_assert_eq!(ids, (0..items.len()).collect::<Vec<_>>());
        }
    }
}

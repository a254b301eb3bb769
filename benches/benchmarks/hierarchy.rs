use criterion::criterion_group;
use hierlist::{HierarchyList, NodeIndex};

use crate::helpers::*;

// -----------------------------------------------------------------------------
// Benchmark functions
// -----------------------------------------------------------------------------

struct DeepestDepth {
    list: HierarchyList<usize, usize>,
    leaf: NodeIndex,
}
impl SizedBenchmark for DeepestDepth {
    fn name() -> &'static str {
        "depth_of_chain_leaf"
    }

    fn sizes() -> &'static [usize] {
        &[100, 1_000]
    }

    fn setup(size: usize) -> Self {
        let list = make_list(&make_chain_items(size));
        let leaf = list.get(&(size - 1)).unwrap();
        Self { list, leaf }
    }

    fn run(&self) -> impl Sized {
        self.list.depth(self.leaf)
    }
}

struct MappingRepresentation {
    list: HierarchyList<usize, usize>,
}
impl SizedBenchmark for MappingRepresentation {
    fn name() -> &'static str {
        "to_mappings_heap_list"
    }

    fn setup(size: usize) -> Self {
        let list = make_list(&make_heap_items(size));
        Self { list }
    }

    fn run(&self) -> impl Sized {
        self.list.to_mappings()
    }
}

struct Reparent {
    list: HierarchyList<usize, usize>,
}
impl SizedBenchmark for Reparent {
    fn name() -> &'static str {
        "reparent_heap_leaves"
    }

    fn setup(size: usize) -> Self {
        let list = make_list(&make_heap_items(size));
        Self { list }
    }

    fn run(&self) -> impl Sized {
        // Move every leaf under the root, on a copy of the forest.
        let mut hierarchy = self.list.hierarchy().clone();
        let root = self.list.roots()[0];
        let leaves: Vec<_> = self.list.iterleaves().collect();
        for leaf in leaves {
            hierarchy.set_parent(leaf, Some(root)).unwrap();
        }
        hierarchy
    }
}

// -----------------------------------------------------------------------------
// Criterion definitions
// -----------------------------------------------------------------------------

criterion_group! {
    name = criterion_group;
    config = criterion::Criterion::default();
    targets =
        DeepestDepth::criterion,
        MappingRepresentation::criterion,
        Reparent::criterion,
}

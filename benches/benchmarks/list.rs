use criterion::criterion_group;
use hierlist::HierarchyList;

use crate::helpers::*;

// -----------------------------------------------------------------------------
// Benchmark functions
// -----------------------------------------------------------------------------

struct BuildList {
    items: Vec<(usize, Option<usize>)>,
}
impl SizedBenchmark for BuildList {
    fn name() -> &'static str {
        "build_heap_list"
    }

    fn setup(size: usize) -> Self {
        let items = make_heap_items(size);
        Self { items }
    }

    fn run(&self) -> impl Sized {
        make_list(&self.items)
    }
}

struct BuildReversedList {
    items: Vec<(usize, Option<usize>)>,
}
impl SizedBenchmark for BuildReversedList {
    fn name() -> &'static str {
        "build_reversed_heap_list"
    }

    fn setup(size: usize) -> Self {
        let items = make_reversed_heap_items(size);
        Self { items }
    }

    fn run(&self) -> impl Sized {
        make_list(&self.items)
    }
}

struct IterNodes {
    list: HierarchyList<usize, usize>,
}
impl SizedBenchmark for IterNodes {
    fn name() -> &'static str {
        "iternodes_heap_list"
    }

    fn setup(size: usize) -> Self {
        let list = make_list(&make_heap_items(size));
        Self { list }
    }

    fn run(&self) -> impl Sized {
        self.list.iternodes().count()
    }
}

struct IterLeaves {
    list: HierarchyList<usize, usize>,
}
impl SizedBenchmark for IterLeaves {
    fn name() -> &'static str {
        "iterleaves_heap_list"
    }

    fn setup(size: usize) -> Self {
        let list = make_list(&make_heap_items(size));
        Self { list }
    }

    fn run(&self) -> impl Sized {
        self.list.iterleaves().count()
    }
}

// -----------------------------------------------------------------------------
// Criterion definitions
// -----------------------------------------------------------------------------

criterion_group! {
    name = criterion_group;
    config = criterion::Criterion::default();
    targets =
        BuildList::criterion,
        BuildReversedList::criterion,
        IterNodes::criterion,
        IterLeaves::criterion,
}

mod common;
pub mod partition;
pub mod pivot;
pub mod quick_sort;
pub mod radix_sort;

pub use partition::partition;
pub use pivot::{PivotSource, RandomPivot};
pub use quick_sort::{quick_sort, quick_sort_by, quick_sort_with};
pub use radix_sort::{
    PassBound, RadixConfig, RadixKey, radix_sort, radix_sort_base, radix_sort_with,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    QuickSort,
    RadixSortBase10,
    RadixSortBase16,
    RadixSortBase256,
    RadixSortBase10TypeMax,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 5] = [
    SortAlgorithm::QuickSort,
    SortAlgorithm::RadixSortBase10,
    SortAlgorithm::RadixSortBase16,
    SortAlgorithm::RadixSortBase256,
    SortAlgorithm::RadixSortBase10TypeMax,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::QuickSort => "quick_sort",
        SortAlgorithm::RadixSortBase10 => "radix_sort_base10",
        SortAlgorithm::RadixSortBase16 => "radix_sort_base16",
        SortAlgorithm::RadixSortBase256 => "radix_sort_base256",
        SortAlgorithm::RadixSortBase10TypeMax => "radix_sort_base10_type_max",
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    pub insertion_threshold: usize,
    pub radix_base: usize,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    insertion_threshold: 16,
    radix_base: 10,
};

pub fn sort_u64(algo: SortAlgorithm, data: &mut [u64]) {
    match algo {
        SortAlgorithm::QuickSort => quick_sort(data),
        SortAlgorithm::RadixSortBase10 => radix_sort_base(data, 10),
        SortAlgorithm::RadixSortBase16 => radix_sort_base(data, 16),
        SortAlgorithm::RadixSortBase256 => radix_sort_base(data, 256),
        SortAlgorithm::RadixSortBase10TypeMax => radix_sort_with(
            data,
            &RadixConfig {
                base: 10,
                pass_bound: PassBound::TypeMax,
            },
        ),
    }
}

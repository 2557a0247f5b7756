use std::ops::Range;

use log::debug;

use crate::TUNED_PARAMS;
use crate::common;
use crate::partition::partition;
use crate::pivot::{PivotSource, RandomPivot};

/// Sorts `data` ascending with random pivots.
pub fn quick_sort<T: Ord>(data: &mut [T]) {
    quick_sort_by(data, |a, b| a <= b);
}

/// Sorts `data` so that `is_before(data[i], data[i + 1])` holds wherever the
/// comparator is a total order. Pivots are drawn from an OS-seeded RNG.
///
/// Not stable. If `is_before` is not a consistent total order the resulting
/// order is unspecified, but the call still returns a permutation of the input.
pub fn quick_sort_by<T, F>(data: &mut [T], is_before: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if data.len() < 2 {
        return;
    }
    quick_sort_with(data, is_before, &mut RandomPivot::new());
}

/// Partition-exchange sort with an injected pivot source.
///
/// Instead of recursing, pending ranges go on an explicit stack. The smaller
/// side of each partition is handled next and the larger one is pushed, so at
/// most `log2(len) + 1` ranges are ever pending. Ranges no longer than
/// `TUNED_PARAMS.insertion_threshold` are finished by insertion sort.
pub fn quick_sort_with<T, F, P>(data: &mut [T], mut is_before: F, pivots: &mut P)
where
    F: FnMut(&T, &T) -> bool,
    P: PivotSource + ?Sized,
{
    let len = data.len();
    if len < 2 {
        return;
    }

    let mut pending: Vec<Range<usize>> = Vec::new();
    let mut max_pending = 0usize;
    let mut partitions = 0usize;
    let mut range = 0..len;

    loop {
        while range.len() > TUNED_PARAMS.insertion_threshold.max(1) {
            let offset = pivots.pick(range.len()).min(range.len() - 1);
            let split = range.start + partition(&mut data[range.clone()], offset, &mut is_before);
            partitions += 1;

            let left = range.start..split;
            let right = (split + 1)..range.end;
            if left.len() < right.len() {
                pending.push(right);
                range = left;
            } else {
                pending.push(left);
                range = right;
            }
            max_pending = max_pending.max(pending.len());
            debug_assert!(pending.len() <= common::floor_log2(len) + 1);
        }

        common::insertion_sort_by(&mut data[range], &mut is_before);

        match pending.pop() {
            Some(next) => range = next,
            None => break,
        }
    }

    debug!("quick_sort: len={len} partitions={partitions} max_pending={max_pending}");
}

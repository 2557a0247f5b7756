/// Lomuto partition of `data` around the value at index `pivot`.
///
/// Every element `x` with `is_before(x, pivot_value)` ends up strictly before
/// the returned index, every other element at or after it, and the pivot value
/// itself sits at the returned index. Equal elements under a non-strict
/// comparator may land on either side; the partition is not stable.
///
/// Slices shorter than two elements, and `pivot == data.len()`, are left
/// untouched and `pivot` is returned as is. To partition a sub-range
/// `[begin, end)`, pass `&mut data[begin..end]`; the returned index is
/// relative to that sub-slice.
///
/// # Panics
///
/// Panics if `pivot > data.len()`.
pub fn partition<T, F>(data: &mut [T], pivot: usize, mut is_before: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();
    if len < 2 || pivot == len {
        return pivot;
    }

    let last = len - 1;
    data.swap(pivot, last);

    let (rest, tail) = data.split_at_mut(last);
    let pivot_value = &tail[0];
    let mut store = 0usize;
    for i in 0..last {
        if is_before(&rest[i], pivot_value) {
            rest.swap(store, i);
            store += 1;
        }
    }

    data.swap(store, last);
    store
}

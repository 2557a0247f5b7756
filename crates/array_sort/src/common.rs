/// Insertion sort with the same "belongs before" predicate the quick sort uses.
///
/// An element is moved left only while its predecessor does not belong before
/// it, so a non-strict comparator keeps equal elements where they are.
#[inline]
pub fn insertion_sort_by<T, F>(data: &mut [T], is_before: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && !is_before(&data[j - 1], &data[j]) {
            data.swap(j - 1, j);
            j -= 1;
        }
    }
}

#[inline]
pub fn floor_log2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        usize::BITS as usize - 1 - n.leading_zeros() as usize
    }
}

use log::{debug, trace};

use crate::TUNED_PARAMS;

/// Integer element accepted by the radix sort.
///
/// Only non-negative values are ordered correctly. Negative values of the
/// signed types are sign-extended into huge keys, so they sort after every
/// non-negative value in some unspecified order.
pub trait RadixKey: Copy + Ord {
    /// Key of the type's maximum value.
    const MAX_KEY: u128;

    fn key(self) -> u128;
}

macro_rules! impl_radix_key {
    ($($t:ty),* $(,)?) => {
        $(
            impl RadixKey for $t {
                const MAX_KEY: u128 = <$t>::MAX as u128;

                #[inline]
                fn key(self) -> u128 {
                    self as u128
                }
            }
        )*
    };
}

impl_radix_key!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize,
);

/// What decides the number of digit passes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PassBound {
    /// As many passes as the largest key present has digits.
    #[default]
    DataMax,
    /// As many passes as the element type's maximum has digits, whatever the
    /// data holds.
    TypeMax,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RadixConfig {
    pub base: usize,
    pub pass_bound: PassBound,
}

impl Default for RadixConfig {
    fn default() -> Self {
        Self {
            base: TUNED_PARAMS.radix_base,
            pass_bound: PassBound::DataMax,
        }
    }
}

/// LSD radix sort in base 10.
pub fn radix_sort<T: RadixKey>(data: &mut [T]) {
    radix_sort_with(data, &RadixConfig::default());
}

/// LSD radix sort in `base`.
///
/// # Panics
///
/// Panics if `base < 2`.
pub fn radix_sort_base<T: RadixKey>(data: &mut [T], base: usize) {
    radix_sort_with(
        data,
        &RadixConfig {
            base,
            ..RadixConfig::default()
        },
    );
}

/// LSD radix sort: one stable bucketing pass per digit, least significant
/// digit first. Each pass routes every element into the bucket of its digit
/// and drains the buckets back in ascending digit order.
///
/// Elements must be non-negative; see [`RadixKey`].
///
/// # Panics
///
/// Panics if `config.base < 2`.
pub fn radix_sort_with<T: RadixKey>(data: &mut [T], config: &RadixConfig) {
    assert!(
        config.base >= 2,
        "radix base must be at least 2, got {}",
        config.base
    );
    if data.len() < 2 {
        return;
    }
    if data.is_sorted() {
        return;
    }

    let bound = match config.pass_bound {
        PassBound::DataMax => data.iter().map(|&x| x.key()).max().unwrap_or(0),
        PassBound::TypeMax => T::MAX_KEY,
    };
    let base = config.base as u128;
    let passes = pass_count(bound, base);
    debug!(
        "radix_sort: len={} base={} bound={bound} passes={passes}",
        data.len(),
        config.base,
    );

    let mut place = 1_u128;
    for pass in 0..passes {
        trace!("radix_sort: pass={pass} place={place}");
        distribute(data, place, base, config.base);
        place = place.saturating_mul(base);
    }
}

/// Number of base-`base` digits of `bound`; zero for zero.
#[inline]
fn pass_count(mut bound: u128, base: u128) -> usize {
    let mut passes = 0usize;
    while bound > 0 {
        bound /= base;
        passes += 1;
    }
    passes
}

#[inline]
fn digit(key: u128, place: u128, base: u128) -> usize {
    ((key / place) % base) as usize
}

/// One stable bucketing pass on the digit at `place`.
fn distribute<T: RadixKey>(data: &mut [T], place: u128, base: u128, bucket_count: usize) {
    let mut buckets: Vec<Vec<T>> = (0..bucket_count).map(|_| Vec::new()).collect();
    for &x in data.iter() {
        buckets[digit(x.key(), place, base)].push(x);
    }

    for (slot, x) in data.iter_mut().zip(buckets.into_iter().flatten()) {
        *slot = x;
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn assert_sorts_like_std<T: RadixKey + std::fmt::Debug>(data: &[T], config: &RadixConfig) {
        let mut actual = data.to_vec();
        radix_sort_with(&mut actual, config);

        let mut expected = data.to_vec();
        expected.sort_unstable();
        assert_eq!(actual, expected, "config={config:?} input_len={}", data.len());
    }

    #[test]
    fn known_cases() {
        let mut data = [170_u32, 45, 75, 90, 802, 24, 2, 66];
        radix_sort_base(&mut data, 10);
        assert_eq!(data, [2, 24, 45, 66, 75, 90, 170, 802]);

        let mut zeros = [0_u32, 0, 0];
        radix_sort(&mut zeros);
        assert_eq!(zeros, [0, 0, 0]);

        let mut single = [42_u64];
        radix_sort(&mut single);
        assert_eq!(single, [42]);

        let mut empty: [u64; 0] = [];
        radix_sort(&mut empty);
        assert!(empty.is_empty());
    }

    #[test]
    #[should_panic(expected = "radix base must be at least 2")]
    fn base_below_two_panics() {
        let mut data = [3_u64, 1, 2];
        radix_sort_base(&mut data, 1);
    }

    #[test]
    fn pass_counts() {
        assert_eq!(pass_count(0, 10), 0);
        assert_eq!(pass_count(9, 10), 1);
        assert_eq!(pass_count(10, 10), 2);
        assert_eq!(pass_count(802, 10), 3);
        assert_eq!(pass_count(255, 256), 1);
        assert_eq!(pass_count(256, 256), 2);
        assert_eq!(pass_count(u64::MAX as u128, 10), 20);
        assert_eq!(pass_count(u64::MAX as u128, 2), 64);
        assert_eq!(pass_count(u128::MAX, 10), 39);
    }

    #[test]
    fn distribute_keeps_bucket_order() {
        let mut data = [31_u32, 12, 21, 22, 11];
        distribute(&mut data, 1, 10, 10);
        assert_eq!(data, [31, 21, 11, 12, 22]);

        distribute(&mut data, 10, 10, 10);
        assert_eq!(data, [11, 12, 21, 22, 31]);
    }

    #[test]
    fn sorted_input_is_unchanged() {
        let sorted = (0..1000_u32).collect::<Vec<_>>();
        let mut data = sorted.clone();
        radix_sort(&mut data);
        assert_eq!(data, sorted);
    }

    #[test]
    fn extreme_keys() {
        let data = [u64::MIN, 1, u64::MAX, 0, u64::MAX - 1, 2];
        assert_sorts_like_std(&data, &RadixConfig::default());

        let data = [u128::MAX, 0, u128::MAX / 3, 7];
        assert_sorts_like_std(&data, &RadixConfig::default());

        let data = [u8::MAX, 0, 128, 127, 1];
        for base in [2, 3, 10, 256, 1000] {
            assert_sorts_like_std(
                &data,
                &RadixConfig {
                    base,
                    pass_bound: PassBound::TypeMax,
                },
            );
        }
    }

    #[test]
    fn non_negative_signed_keys() {
        let mut data = [9_i64, 0, 1_000_000, 42, 7, 42];
        radix_sort(&mut data);
        assert_eq!(data, [0, 7, 9, 42, 42, 1_000_000]);
    }

    #[test]
    fn negative_keys_keep_a_permutation() {
        let data = [3_i32, -1, 2, -7, 0];
        let mut actual = data.to_vec();
        radix_sort_base(&mut actual, 16);

        assert_eq!(&actual[..3], [0, 2, 3]);
        let mut expected = data.to_vec();
        expected.sort_unstable();
        actual.sort_unstable();
        assert_eq!(actual, expected);
    }

    #[test]
    fn fixed_seed_random_cases() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for &size in &[2_usize, 3, 8, 31, 128, 2048] {
            let full = (0..size).map(|_| rng.random::<u64>()).collect::<Vec<_>>();
            let small = (0..size)
                .map(|_| rng.random_range(0..1000_u32))
                .collect::<Vec<_>>();

            for base in [2, 7, 10, 16, 256] {
                for pass_bound in [PassBound::DataMax, PassBound::TypeMax] {
                    let config = RadixConfig { base, pass_bound };
                    assert_sorts_like_std(&full, &config);
                    assert_sorts_like_std(&small, &config);
                }
            }
        }
    }

    #[test]
    fn fixed_seed_many_duplicates() {
        let mut rng = StdRng::seed_from_u64(0xD0D1_2026);
        for &size in &[64_usize, 1024, 4096] {
            let data = (0..size)
                .map(|_| (rng.random::<u64>() % 16) * 17)
                .collect::<Vec<_>>();
            assert_sorts_like_std(&data, &RadixConfig::default());
        }
    }
}

use std::time::Duration;

use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, SamplingMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 300;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 600;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 500;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1000;
const RNG_SEED: u64 = 0x5EED_2026;

pub const BOUNDED_MAX: u64 = (1 << 20) - 1;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DataTrack {
    FullU64,
    BoundedU20,
}

impl DataTrack {
    pub fn label(self) -> &'static str {
        match self {
            Self::FullU64 => "full_u64",
            Self::BoundedU20 => "bounded_u20",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Distribution {
    RandomUniform,
    NearlySorted1pctSwaps,
    FewDistinct,
}

impl Distribution {
    pub fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
            Self::FewDistinct => "few_distinct",
        }
    }
}

pub const TRACKS: [DataTrack; 2] = [DataTrack::FullU64, DataTrack::BoundedU20];

pub const DISTRIBUTIONS: [Distribution; 3] = [
    Distribution::RandomUniform,
    Distribution::NearlySorted1pctSwaps,
    Distribution::FewDistinct,
];

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.sampling_mode(SamplingMode::Auto);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.sampling_mode(SamplingMode::Flat);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.sampling_mode(SamplingMode::Flat);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

/// Picks the runtime preset by input size.
pub fn apply_runtime_for_size<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    if size <= 16384 {
        apply_small_runtime_config(group);
    } else if size <= 65536 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn seeded_rng(salt: u64) -> StdRng {
    StdRng::seed_from_u64(mix_seed(RNG_SEED ^ salt))
}

pub fn generate_dataset<R: Rng + ?Sized>(
    rng: &mut R,
    track: DataTrack,
    dist: Distribution,
    size: usize,
) -> Vec<u64> {
    let mut data = Vec::with_capacity(size);

    match dist {
        Distribution::RandomUniform => {
            for _ in 0..size {
                data.push(sample_key(rng, track));
            }
        }
        Distribution::NearlySorted1pctSwaps => {
            for i in 0..size {
                data.push(match track {
                    DataTrack::FullU64 => i as u64,
                    DataTrack::BoundedU20 => (i as u64) & BOUNDED_MAX,
                });
            }
            if size > 0 {
                let swaps = (size / 100).max(1);
                for _ in 0..swaps {
                    let a = rng.random_range(0..size);
                    let b = rng.random_range(0..size);
                    data.swap(a, b);
                }
            }
        }
        Distribution::FewDistinct => {
            let distinct = (0..16)
                .map(|_| sample_key(rng, track))
                .collect::<Vec<_>>();
            for _ in 0..size {
                data.push(distinct[rng.random_range(0..distinct.len())]);
            }
        }
    }

    data
}

#[inline]
fn sample_key<R: Rng + ?Sized>(rng: &mut R, track: DataTrack) -> u64 {
    match track {
        DataTrack::FullU64 => rng.random::<u64>(),
        DataTrack::BoundedU20 => rng.random_range(0..=BOUNDED_MAX),
    }
}

#[inline]
fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

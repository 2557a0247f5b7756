use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks the pivot offset for a range of `len` elements.
///
/// `pick` is only called with `len >= 2` and should return a value in
/// `0..len`. Larger values are clamped to the last position by the sort.
pub trait PivotSource {
    fn pick(&mut self, len: usize) -> usize;
}

impl<F> PivotSource for F
where
    F: FnMut(usize) -> usize,
{
    #[inline]
    fn pick(&mut self, len: usize) -> usize {
        self(len)
    }
}

/// Uniform pivot over every position of the range.
#[derive(Clone, Debug)]
pub struct RandomPivot<R = StdRng> {
    rng: R,
}

impl RandomPivot<StdRng> {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Reproducible pivots, for tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomPivot<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomPivot<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PivotSource for RandomPivot<R> {
    #[inline]
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

//! Randomness sources for the simulator.
//!
//! Every random decision goes through [`RandomSource`], so a match can be
//! driven by a seeded generator for reproducible runs or by a fixed source
//! in tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The random decisions the simulator needs.
pub trait RandomSource {
    /// Returns an index in `0..len`, uniformly. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;

    /// Returns a fair coin flip.
    fn bit(&mut self) -> bool;

    /// Picks one element of `items` uniformly, or `None` if it is empty.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.index(items.len())])
        }
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn index(&mut self, len: usize) -> usize {
        (**self).index(len)
    }

    fn bit(&mut self) -> bool {
        (**self).bit()
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn index(&mut self, len: usize) -> usize {
        (**self).index(len)
    }

    fn bit(&mut self) -> bool {
        (**self).bit()
    }
}

/// A [`RandomSource`] backed by any [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        RngSource { rng }
    }

    /// Returns the wrapped generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<StdRng> {
    /// A reproducible source: the same seed yields the same decisions.
    pub fn seeded(seed: u64) -> Self {
        RngSource::new(StdRng::seed_from_u64(seed))
    }

    /// A source seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        RngSource::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    fn bit(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

/// A source that always returns the same decisions.
///
/// `index` is clamped to the requested range, so `FixedRandom::new(0, true)`
/// always picks the first candidate and always flips `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedRandom {
    index: usize,
    bit: bool,
}

impl FixedRandom {
    /// Creates a source returning `index` (clamped) and `bit` forever.
    pub const fn new(index: usize, bit: bool) -> Self {
        FixedRandom { index, bit }
    }
}

impl RandomSource for FixedRandom {
    fn index(&mut self, len: usize) -> usize {
        self.index.min(len.saturating_sub(1))
    }

    fn bit(&mut self) -> bool {
        self.bit
    }
}

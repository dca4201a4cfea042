//! Uniform reservoir sampling over a single pass of a stream (Algorithm R).
//!
//! The first `k` items fill the reservoir in order. Each later item at
//! 0-based position `j` draws `l` uniformly from `[0, j]` and overwrites slot
//! `l` when `l < k`, so it is kept with probability `k / (j + 1)`. After `j`
//! items every one of them is in the reservoir with probability `k / j`.
//!
//! # Examples
//! ```
//! use reservoir_sampler::{Offer, ReservoirSampler};
//!
//! let mut sampler = ReservoirSampler::with_seed(3, 2024).unwrap();
//! assert_eq!(sampler.offer(10), Offer::Filled(0));
//! assert_eq!(sampler.offer(20), Offer::Filled(1));
//! assert_eq!(sampler.offer(30), Offer::Filled(2));
//! assert_eq!(sampler.current_sample(), &[10, 20, 30]);
//!
//! sampler.extend(40..1_000);
//! assert_eq!(sampler.items_processed(), 963);
//! assert_eq!(sampler.current_sample().len(), 3);
//! ```

use crate::cs::randomized::IndexSource;
use crate::error::{Error, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Upper bound on the slots reserved at construction. Larger reservoirs grow
/// during the fill phase, so a huge `k` costs nothing until items arrive.
const PREALLOCATED_SLOTS: usize = 1024;

/// What a single [`ReservoirSampler::offer`] call did to the reservoir.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    /// Fill phase: the item was appended at this slot.
    Filled(usize),
    /// The item passed the acceptance test and overwrote this slot.
    Replaced(usize),
    /// The item was discarded; the reservoir is unchanged.
    Rejected,
}

impl Offer {
    /// The slot that was overwritten, if an existing item was evicted.
    pub fn replaced(&self) -> Option<usize> {
        match *self {
            Offer::Replaced(index) => Some(index),
            _ => None,
        }
    }

    /// Whether the offered item is now held in the reservoir.
    pub fn is_kept(&self) -> bool {
        !matches!(self, Offer::Rejected)
    }
}

/// Maintains a uniform random sample of `k` items over a one-pass stream.
///
/// The sampler owns its reservoir and its random source. `offer` must be
/// called in stream order by one consumer; callers that share a sampler
/// between threads wrap the whole sampler in one `Mutex`.
#[derive(Debug, Clone)]
pub struct ReservoirSampler<T, S = ChaCha20Rng> {
    capacity: usize,
    reservoir: Vec<T>,
    processed: u64,
    source: S,
}

impl<T> ReservoirSampler<T, ChaCha20Rng> {
    /// Creates an empty sampler of size `k`, seeded from system entropy.
    pub fn new(k: usize) -> Result<Self> {
        Self::with_source(k, ChaCha20Rng::from_entropy())
    }

    /// Creates an empty sampler of size `k` with a deterministic seed.
    pub fn with_seed(k: usize, seed: u64) -> Result<Self> {
        Self::with_source(k, ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<T, S: IndexSource> ReservoirSampler<T, S> {
    /// Creates an empty sampler of size `k` that draws indices from `source`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] when `k == 0`.
    pub fn with_source(k: usize, source: S) -> Result<Self> {
        if k == 0 {
            return Err(Error::invalid_argument(
                "sample size must be at least 1, got 0",
            ));
        }
        Ok(Self {
            capacity: k,
            reservoir: Vec::with_capacity(k.min(PREALLOCATED_SLOTS)),
            processed: 0,
            source,
        })
    }

    /// Consumes the next stream item.
    ///
    /// Only the returned slot is ever written.
    pub fn offer(&mut self, item: T) -> Offer {
        let j = self.processed;
        self.processed += 1;

        if self.reservoir.len() < self.capacity {
            let slot = self.reservoir.len();
            self.reservoir.push(item);
            return Offer::Filled(slot);
        }

        let l = self.source.index_inclusive(j);
        match usize::try_from(l) {
            Ok(slot) if slot < self.capacity => {
                self.reservoir[slot] = item;
                Offer::Replaced(slot)
            }
            _ => Offer::Rejected,
        }
    }

    /// The current sample, in slot order. Holds `min(k, items_processed())` items.
    pub fn current_sample(&self) -> &[T] {
        &self.reservoir
    }

    /// Number of items offered so far.
    pub fn items_processed(&self) -> u64 {
        self.processed
    }

    /// The target sample size `k`.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the fill phase is over.
    pub fn is_full(&self) -> bool {
        self.reservoir.len() == self.capacity
    }

    /// Consumes the sampler and returns the final sample.
    pub fn into_sample(self) -> Vec<T> {
        self.reservoir
    }
}

impl<T, S: IndexSource> Extend<T> for ReservoirSampler<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.offer(item);
        }
    }
}

/// Samples `k` items from `iter` in one pass, seeding the index source from
/// system entropy.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] when `k == 0`.
pub fn reservoir_sampling<T, I>(iter: I, k: usize) -> Result<Vec<T>>
where
    I: IntoIterator<Item = T>,
{
    reservoir_sampling_with_source(iter, k, ChaCha20Rng::from_entropy())
}

/// Same as [`reservoir_sampling`], drawing indices from `source`.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] when `k == 0`.
pub fn reservoir_sampling_with_source<T, I, S>(iter: I, k: usize, source: S) -> Result<Vec<T>>
where
    I: IntoIterator<Item = T>,
    S: IndexSource,
{
    let mut sampler = ReservoirSampler::with_source(k, source)?;
    sampler.extend(iter);
    Ok(sampler.into_sample())
}

use rand::Rng;

/// A source of uniformly distributed slot indices.
///
/// Samplers draw from this instead of thread-local randomness so that a
/// caller can inject a seeded generator (or a fixed script in tests) and get
/// reproducible output.
pub trait IndexSource {
    /// Returns an integer drawn uniformly from the closed range `[0, upper]`.
    fn index_inclusive(&mut self, upper: u64) -> u64;
}

impl<R: Rng + ?Sized> IndexSource for R {
    fn index_inclusive(&mut self, upper: u64) -> u64 {
        self.gen_range(0..=upper)
    }
}

/// Uniform randomness behind the candidate generator.
///
/// The generator only ever asks for "the next float in [0, 1)", so swapping
/// in a scripted source makes a whole scan replayable in tests. All helpers
/// derive from `next_f64`, keeping the trait object-safe.
pub trait RandomSource: Send {
    /// Next value in [0, 1).
    fn next_f64(&mut self) -> f64;

    /// Uniform index into a slice of the given non-zero length.
    fn index(&mut self, len: usize) -> usize {
        (self.next_f64() * len as f64) as usize
    }

    /// Uniform integer in [lo, hi).
    fn range_u32(&mut self, lo: u32, hi: u32) -> u32 {
        lo + (self.next_f64() * (hi - lo) as f64) as u32
    }
}

/// Production source backed by `fastrand`. Entropy-seeded by default; a fixed
/// seed gives a reproducible scan.
pub struct FastrandSource {
    rng: fastrand::Rng,
}

impl FastrandSource {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for FastrandSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for FastrandSource {
    fn next_f64(&mut self) -> f64 {
        self.rng.f64()
    }
}

/// Replays a fixed sequence of values, cycling when exhausted. Values are
/// clamped below 1.0 so slice indexing stays in bounds.
pub struct ReplaySource {
    values: Vec<f64>,
    cursor: usize,
}

impl ReplaySource {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl RandomSource for ReplaySource {
    fn next_f64(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, 0.999_999)
    }
}

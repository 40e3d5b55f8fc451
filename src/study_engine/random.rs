//! Injectable randomness for shuffling and review re-insertion.
//!
//! The engine only ever asks for a uniform draw in `[0, 1)`. Production code
//! uses [`StdRandom`]; tests replay fixed draws with [`ScriptedRandom`] so
//! that every transition is reproducible.

use rand::{rngs::StdRng, Rng, SeedableRng};

pub trait RandomSource {
    /// A uniform draw in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// A uniform index in `0..len`; `0` without drawing when `len` is zero.
    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let i = (self.uniform() * len as f64) as usize;
        i.min(len - 1)
    }
}

/// `StdRng`-backed source, seeded or from OS entropy.
#[derive(Debug)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        StdRandom { rng }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(None)
    }
}

impl RandomSource for StdRandom {
    fn uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed list of draws, cycling when it runs out.
///
/// `ScriptedRandom::constant(0.99)` is the usual test stub: the shuffle keeps
/// the input order (every Fisher-Yates step picks the last slot) and, under
/// the default policy, the re-insertion trial never fires.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    draws: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Values are clamped into `[0, 1)`. An empty list behaves like `[0.0]`.
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        let mut draws: Vec<f64> = draws
            .into_iter()
            .map(|d| d.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        if draws.is_empty() {
            draws.push(0.0);
        }
        ScriptedRandom { draws, cursor: 0 }
    }

    pub fn constant(value: f64) -> Self {
        Self::new([value])
    }

    /// Number of draws handed out so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform(&mut self) -> f64 {
        let d = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        d
    }
}

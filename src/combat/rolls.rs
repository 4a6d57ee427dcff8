//! Random sources for probability-gated wound effects

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform samples in `[0, 1]`
pub trait RandomSource {
    fn roll_unit(&mut self) -> f32;
}

/// Reproducible source backed by ChaCha8
pub struct SeededRolls {
    rng: ChaCha8Rng,
}

impl SeededRolls {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRolls {
    fn roll_unit(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }
}

/// Replays fixed samples, then returns 1.0 forever
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    samples: VecDeque<f32>,
}

impl ScriptedRolls {
    pub fn new(samples: impl IntoIterator<Item = f32>) -> Self {
        Self {
            samples: samples.into_iter().collect(),
        }
    }
}

impl RandomSource for ScriptedRolls {
    fn roll_unit(&mut self) -> f32 {
        self.samples.pop_front().unwrap_or(1.0)
    }
}

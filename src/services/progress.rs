// ============================================================================
// PROGRESS SOURCE - Incrementos del random walk de subida
// ============================================================================

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait ProgressSource {
    /// Siguiente incremento de progreso para un tick
    fn next_increment(&mut self) -> f64;
}

/// Incrementos uniformes en `[0, max)`
pub struct RandomProgress {
    max: f64,
    rng: StdRng,
}

impl RandomProgress {
    pub fn new(max: f64) -> Self {
        Self { max, rng: StdRng::from_entropy() }
    }

    pub fn seeded(max: f64, seed: u64) -> Self {
        Self { max, rng: StdRng::seed_from_u64(seed) }
    }
}

impl ProgressSource for RandomProgress {
    fn next_increment(&mut self) -> f64 {
        if self.max > 0.0 && self.max.is_finite() {
            self.rng.gen_range(0.0..self.max)
        } else {
            0.0
        }
    }
}

/// Repite cíclicamente una secuencia fija; para tests deterministas
#[cfg(test)]
pub struct ScriptedProgress {
    steps: Vec<f64>,
    cursor: usize,
}

#[cfg(test)]
impl ScriptedProgress {
    pub fn new(steps: &[f64]) -> Self {
        Self { steps: steps.to_vec(), cursor: 0 }
    }
}

#[cfg(test)]
impl ProgressSource for ScriptedProgress {
    fn next_increment(&mut self) -> f64 {
        if self.steps.is_empty() {
            return 0.0;
        }
        let step = self.steps[self.cursor % self.steps.len()];
        self.cursor += 1;
        step
    }
}

// Deterministic random sources shared by the integration tests.

#![allow(dead_code)]

use neural_city::RandomSource;

/// Always returns the same value. `ConstRandom(1.0)` is deliberately outside
/// the `[0,1)` contract: it makes every `chance` draw fail, which is how
/// tests suppress flashes and blinks entirely.
pub struct ConstRandom(pub f32);

impl RandomSource for ConstRandom {
    fn next_f32(&mut self) -> f32 {
        self.0
    }
}

/// Plays back a fixed script, then falls back to a constant.
pub struct ScriptedRandom {
    values: Vec<f32>,
    cursor: usize,
    fallback: f32,
}

impl ScriptedRandom {
    pub fn new(values: Vec<f32>, fallback: f32) -> Self {
        Self {
            values,
            cursor: 0,
            fallback,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f32(&mut self) -> f32 {
        let v = self.values.get(self.cursor).copied();
        self.cursor += 1;
        v.unwrap_or(self.fallback)
    }
}

/// Constant source that counts how many scalars were drawn.
pub struct CountingRandom {
    pub value: f32,
    pub draws: usize,
}

impl CountingRandom {
    pub fn new(value: f32) -> Self {
        Self { value, draws: 0 }
    }
}

impl RandomSource for CountingRandom {
    fn next_f32(&mut self) -> f32 {
        self.draws += 1;
        self.value
    }
}

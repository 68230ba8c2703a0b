//! RNG module - injectable randomness for tile spawning
//!
//! Spawning needs two random draws: which empty cell to fill, and whether the
//! new tile is a 2 or a 4. Both go through the [`TileRng`] trait so the engine
//! never reaches for ambient randomness.
//!
//! Also provides a simple LCG for deterministic testing and reproducible seeds.

use rand::rngs::StdRng;
use rand::Rng;

/// Source of randomness for the grid engine
pub trait TileRng {
    /// Next float in `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `[0, len)`; `len` is never 0
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl TileRng for SimpleRng {
    fn next_unit(&mut self) -> f64 {
        // Top 24 bits: the low bits of an LCG have short periods.
        f64::from(self.next_u32() >> 8) / f64::from(1u32 << 24)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        // The high bits of the state are far better distributed than the low ones.
        ((u64::from(self.next_u32()) * len as u64) >> 32) as usize
    }
}

impl TileRng for StdRng {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

impl<R: TileRng + ?Sized> TileRng for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }

    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}

impl<R: TileRng + ?Sized> TileRng for Box<R> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }

    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}

/// Replays a fixed script of draws (for unit tests).
#[cfg(test)]
pub(crate) struct ScriptedRng {
    pub units: Vec<f64>,
    pub indices: Vec<usize>,
}

#[cfg(test)]
impl TileRng for ScriptedRng {
    fn next_unit(&mut self) -> f64 {
        self.units.remove(0)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        let i = self.indices.remove(0);
        assert!(i < len, "scripted index {} out of range {}", i, len);
        i
    }
}

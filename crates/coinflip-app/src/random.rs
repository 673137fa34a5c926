//! Uniform random draws in `[0, 1)`
//!
//! Flip fairness is the whole feature, so production draws come from the
//! operating system's CSPRNG rather than a seeded statistical generator.

use rand::rngs::OsRng;
use rand::RngCore;

/// Source of uniform draws in `[0, 1)`.
///
/// A trait seam so the engine can be driven by scripted draws in tests.
pub trait RandomSource {
    fn draw(&mut self) -> f64;
}

/// Production source backed by the OS CSPRNG.
///
/// A fresh `u32` is scaled by 2^32, giving a uniform draw in `[0, 1)` with
/// ~4 billion distinct values -- far finer than the 1% edge interval needs.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn draw(&mut self) -> f64 {
        f64::from(OsRng.next_u32()) / (f64::from(u32::MAX) + 1.0)
    }
}

/// Scripted draws for deterministic tests. Panics if drained.
#[cfg(test)]
pub(crate) struct ScriptedRandom {
    draws: std::collections::VecDeque<f64>,
}

#[cfg(test)]
impl ScriptedRandom {
    pub(crate) fn new(draws: &[f64]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn draw(&mut self) -> f64 {
        self.draws.pop_front().expect("scripted draws exhausted")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_random_in_unit_interval() {
        let mut source = OsRandom;
        for _ in 0..1000 {
            let r = source.draw();
            assert!((0.0..1.0).contains(&r), "draw out of range: {}", r);
        }
    }

    #[test]
    fn test_scripted_random_replays_in_order() {
        let mut source = ScriptedRandom::new(&[0.5, 0.003]);
        assert_eq!(source.draw(), 0.5);
        assert_eq!(source.draw(), 0.003);
    }
}

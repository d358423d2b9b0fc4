// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Random sources for the simulation.
//!
//! All sampling goes through [`RandomGenerator::rand`], so a run is fully
//! determined by the generator it is given.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniformly distributed indices.
pub trait RandomGenerator {
    /// Returns an index in `[0, k)`. Returns 0 when `k` is 0.
    fn rand(&mut self, k: usize) -> usize;
}

impl<G: RandomGenerator + ?Sized> RandomGenerator for &mut G {
    fn rand(&mut self, k: usize) -> usize {
        (**self).rand(k)
    }
}

/// Seeded pseudo random generator.
///
/// Sequences are reproducible for a given seed and `rand` release.
#[derive(Debug, Clone)]
pub struct SeededGenerator {
    rng: StdRng,
}

impl SeededGenerator {
    pub fn new(seed: u64) -> Self {
        SeededGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomGenerator for SeededGenerator {
    fn rand(&mut self, k: usize) -> usize {
        if k == 0 {
            return 0;
        }
        self.rng.random_range(0..k)
    }
}

/// Generator replaying a fixed list of indices, wrapping around.
///
/// Each value is reduced modulo `k`.
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    values: Vec<usize>,
    next: usize,
}

impl SequenceGenerator {
    pub fn new(values: Vec<usize>) -> Self {
        SequenceGenerator { values, next: 0 }
    }
}

impl RandomGenerator for SequenceGenerator {
    fn rand(&mut self, k: usize) -> usize {
        if k == 0 || self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value % k
    }
}

/// Picks one element uniformly at random, or None from an empty slice.
pub fn sample<'a, T, G: RandomGenerator + ?Sized>(
    values: &'a [T],
    generator: &mut G,
) -> Option<&'a T> {
    if values.is_empty() {
        return None;
    }
    values.get(generator.rand(values.len()))
}

#[cfg(test)]
#[path = "random_tests.rs"]
mod tests;

//! Random sample selection

use planefit_core::{Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// Source of uniformly distributed indices
///
/// The RANSAC driver only ever asks for "an index in `[0, n)`", so tests can
/// substitute a scripted sequence for real randomness.
pub trait RandomSource {
    /// Draw an index uniformly from `[0, n)`. `n` is always non-zero.
    fn next_index(&mut self, n: usize) -> usize;
}

/// Adapter exposing any [`rand::Rng`] as a [`RandomSource`]
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Generator seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible generator
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_index(&mut self, n: usize) -> usize {
        self.rng.gen_range(0..n)
    }
}

/// Draw `count` distinct indices from `[0, len)`
///
/// Indices are returned in the order they were drawn. Collisions are simply
/// redrawn.
pub fn random_indices<S: RandomSource + ?Sized>(
    len: usize,
    count: usize,
    rng: &mut S,
) -> Result<Vec<usize>> {
    if count > len {
        return Err(Error::InsufficientPoints { required: count, found: len });
    }

    let mut chosen = HashSet::with_capacity(count);
    let mut indices = Vec::with_capacity(count);
    while indices.len() < count {
        let index = rng.next_index(len);
        if chosen.insert(index) {
            indices.push(index);
        }
    }

    Ok(indices)
}

/// Pick `count` points from distinct positions of `points`
pub fn random_sub_vector<T: Copy, S: RandomSource + ?Sized>(
    points: &[T],
    count: usize,
    rng: &mut S,
) -> Result<Vec<T>> {
    let indices = random_indices(points.len(), count, rng)?;
    Ok(indices.into_iter().map(|i| points[i]).collect())
}

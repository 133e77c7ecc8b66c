use crate::map_locations::models::Coordinate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::hash::Hash;


#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SampleError {
    #[error("can't sample from an empty pool")]
    InvalidPool,
    #[error("asked for {requested} distinct items but the pool only has {available}")]
    InsufficientPool { requested: usize, available: usize },
}

/// Uniform draws from the pools. Generic over the random source so tests can seed it.
#[derive(Debug)]
pub struct Sampler<R: Rng = StdRng> {
    rng: R,
}

impl Sampler<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Sampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn sample_coordinate(&mut self, pool: &[Coordinate]) -> Result<Coordinate, SampleError> {
        if pool.is_empty() {
            return Err(SampleError::InvalidPool);
        }
        let index = self.rng.gen_range(0..pool.len());
        Ok(pool[index])
    }

    /// Draws indices until `n` distinct values are collected, in draw order.
    pub fn sample_pick_n<T>(&mut self, pool: &[T], n: usize) -> Result<Vec<T>, SampleError>
    where
        T: Clone + Eq + Hash,
    {
        if n > pool.len() {
            return Err(SampleError::InsufficientPool {
                requested: n,
                available: pool.len(),
            });
        }
        let distinct = pool.iter().collect::<HashSet<_>>().len();
        if n > distinct {
            return Err(SampleError::InsufficientPool {
                requested: n,
                available: distinct,
            });
        }
        let mut seen = HashSet::with_capacity(n);
        let mut picked = Vec::with_capacity(n);
        while picked.len() < n {
            let candidate = &pool[self.rng.gen_range(0..pool.len())];
            if seen.insert(candidate) {
                picked.push(candidate.clone());
            }
        }
        Ok(picked)
    }
}

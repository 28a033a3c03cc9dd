use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the choices made when a phrase table offers several candidates.
///
/// Generation is a pure function of its request plus this source, so tests inject a
/// [`SeededRandom`] or [`FixedSequence`] to get reproducible comments.
pub trait RandomSource {
    /// Returns an index in `0..len`. Never called with `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Picks one element uniformly. Single-element slices are returned without consulting `source`.
pub fn choose<'a, T, R>(source: &mut R, items: &'a [T]) -> Option<&'a T>
where
    R: RandomSource + ?Sized,
{
    match items.len() {
        0 => None,
        1 => items.first(),
        len => items.get(source.pick_index(len) % len),
    }
}

/// Uses the calling thread's generator; safe to use from any number of threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed list of indices in order, wrapping around at the end. Each index is reduced
/// modulo the slice length it is used for.
#[derive(Debug, Clone, Default)]
pub struct FixedSequence {
    indices: Vec<usize>,
    cursor: usize,
}

impl FixedSequence {
    pub fn new(indices: impl Into<Vec<usize>>) -> Self {
        Self {
            indices: indices.into(),
            cursor: 0,
        }
    }

    /// Always picks the first candidate.
    pub fn first() -> Self {
        Self::new(vec![0])
    }
}

impl RandomSource for FixedSequence {
    fn pick_index(&mut self, len: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }

        let index = self.indices[self.cursor % self.indices.len()];
        self.cursor += 1;
        index % len
    }
}

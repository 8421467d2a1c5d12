//! Seeded randomizer with draw-without-replacement and weighted shuffles
//!
//! Both shuffles follow fixed draw orders so that a seed reproduces the same
//! ordering bit for bit; neither is a Fisher-Yates shuffle.

use crate::math::arc4::Arc4;
use std::collections::HashMap;
use std::hash::Hash;

/// Deterministic random source keyed by a seed string
#[derive(Debug, Clone)]
pub struct Randomizer {
    stream: Arc4,
}

impl Randomizer {
    /// Create a randomizer from a seed string
    pub fn new(seed: &str) -> Self {
        Self {
            stream: Arc4::from_seed(seed),
        }
    }

    /// Next draw in `[0, 1)`
    pub fn next_float(&mut self) -> f64 {
        self.stream.next_f64()
    }

    /// Absolute value of a signed 32-bit draw
    pub fn next_int(&mut self) -> u32 {
        self.stream.next_i32().unsigned_abs()
    }

    /// Reorder items by repeatedly picking a uniform index into the remainder
    ///
    /// The final remaining item is appended without a draw, so `n` items
    /// consume `n - 1` draws.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut remaining = items.to_vec();
        let mut shuffled = Vec::with_capacity(items.len());

        while remaining.len() > 1 {
            let len = remaining.len();
            let index = ((self.next_float() * len as f64).floor() as usize).min(len - 1);
            shuffled.push(remaining.remove(index));
        }
        shuffled.append(&mut remaining);

        shuffled
    }

    /// Order items by descending `draw × weight`
    ///
    /// Items missing from `weights` use the mean of the supplied weights. One
    /// draw is taken per item in input order and ties keep input order, so
    /// higher weights bias items forward without fixing their probability.
    pub fn weighted_shuffle<T>(&mut self, items: &[T], weights: &HashMap<T, u32>) -> Vec<T>
    where
        T: Clone + Eq + Hash,
    {
        let mean = if weights.is_empty() {
            None
        } else {
            let total: u64 = weights.values().map(|&w| u64::from(w)).sum();
            Some(total as f64 / weights.len() as f64)
        };

        let mut keyed: Vec<(f64, T)> = items
            .iter()
            .map(|item| {
                let draw = self.next_float();
                let weight = weights.get(item).map(|&w| f64::from(w)).or(mean);
                (weight.map_or(0.0, |w| draw * w), item.clone())
            })
            .collect();

        if mean.is_some() {
            keyed.sort_by(|a, b| b.0.total_cmp(&a.0));
        }

        keyed.into_iter().map(|(_, item)| item).collect()
    }
}

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

/// Deterministic random stream owned by a single generation call.
/// The same seed and the same sequence of calls always yield the same values.
#[derive(Debug, Clone)]
pub struct SeededStream {
    rng: Pcg64,
}

impl SeededStream {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: Pcg64::seed_from_u64(seed as u64),
        }
    }

    /// Uniform float in `[0, 1)`
    pub fn next_unit(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }

    /// Uniform float in `[low, high]`; bounds may be given in either order
    pub fn next_uniform(&mut self, low: f64, high: f64) -> f64 {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        self.rng.gen_range(low..=high)
    }

    /// Uniform integer in `[low, high]`
    pub fn next_int(&mut self, low: usize, high: usize) -> usize {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        self.rng.gen_range(low..=high)
    }

    /// Index drawn proportionally to `weights`, or `None` if nothing has weight
    pub fn choice_weighted(&mut self, weights: &[f64]) -> Option<usize> {
        let total: f64 = weights.iter().filter(|w| **w > 0.0).sum();
        if total <= 0.0 {
            return None;
        }

        let roll = self.next_unit() * total;
        let mut cumulative = 0.0;
        let mut last_positive = None;

        for (i, &weight) in weights.iter().enumerate() {
            if weight <= 0.0 {
                continue;
            }
            cumulative += weight;
            last_positive = Some(i);
            if roll < cumulative {
                return Some(i);
            }
        }

        // Rounding can leave the roll a hair above the final boundary
        last_positive
    }

    /// Uniformly chosen element
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.rng.gen_range(0..items.len());
        items.get(index)
    }

    /// Up to `n` distinct picks, each proportional to weight. Every pick is
    /// removed with its weight from the working copies before the next draw.
    pub fn sample_weighted_without_replacement<T: Clone>(
        &mut self,
        items: &[T],
        weights: &[f64],
        n: usize,
    ) -> Vec<T> {
        let mut available_items: Vec<T> = items.to_vec();
        let mut available_weights: Vec<f64> = weights.iter().copied().take(items.len()).collect();
        available_weights.resize(available_items.len(), 0.0);

        let mut selected = Vec::with_capacity(n.min(items.len()));
        while selected.len() < n {
            let Some(index) = self.choice_weighted(&available_weights) else {
                break;
            };
            selected.push(available_items.remove(index));
            available_weights.remove(index);
        }

        selected
    }

    /// Up to `n` distinct picks with equal probability
    pub fn sample_without_replacement<T: Clone>(&mut self, items: &[T], n: usize) -> Vec<T> {
        let mut available: Vec<T> = items.to_vec();
        let mut selected = Vec::with_capacity(n.min(items.len()));

        while selected.len() < n && !available.is_empty() {
            let index = self.rng.gen_range(0..available.len());
            selected.push(available.remove(index));
        }

        selected
    }
}

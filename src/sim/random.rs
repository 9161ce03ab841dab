//! Random number source for obstacle placement
//!
//! The game draws from an unseeded PCG; tests swap in a scripted sequence.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniform floats in `[0, 1)`
pub trait RandomSource {
    fn next_f32(&mut self) -> f32;
}

/// PCG-backed source
#[derive(Debug, Clone)]
pub struct PcgSource(Pcg32);

impl PcgSource {
    pub fn from_seed(seed: u64) -> Self {
        Self(Pcg32::seed_from_u64(seed))
    }

    /// Seed from the platform entropy source; placement differs every run
    pub fn unseeded() -> Self {
        Self::from_seed(rand::random())
    }
}

impl RandomSource for PcgSource {
    fn next_f32(&mut self) -> f32 {
        self.0.random::<f32>()
    }
}

/// Replays a fixed list of values, wrapping around at the end
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f32>,
    cursor: usize,
}

impl SequenceSource {
    /// Values are clamped into `[0, 1)`. An empty list yields zeros.
    pub fn new(values: impl IntoIterator<Item = f32>) -> Self {
        let values = values
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f32::EPSILON))
            .collect();
        Self { values, cursor: 0 }
    }
}

impl RandomSource for SequenceSource {
    fn next_f32(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_stays_in_unit_range() {
        let mut rng = PcgSource::from_seed(7);
        for _ in 0..1000 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = PcgSource::from_seed(99);
        let mut b = PcgSource::from_seed(99);
        for _ in 0..16 {
            assert_eq!(a.next_f32(), b.next_f32());
        }
    }

    #[test]
    fn sequence_wraps_and_clamps() {
        let mut seq = SequenceSource::new([0.25, 2.0]);
        assert_eq!(seq.next_f32(), 0.25);
        assert!(seq.next_f32() < 1.0);
        assert_eq!(seq.next_f32(), 0.25);
    }

    #[test]
    fn empty_sequence_yields_zero() {
        let mut seq = SequenceSource::new(Vec::<f32>::new());
        assert_eq!(seq.next_f32(), 0.0);
    }
}

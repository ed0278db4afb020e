//! Random sampling helpers on top of `rand`.
//!
//! Seeded generators make experiments reproducible: the same seed yields the
//! same sequence of sites on the same platform.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Uniform integer in `[low, high)`.
///
/// # Panics
/// Panics if `low >= high`.
pub fn uniform<R: Rng>(rng: &mut R, low: usize, high: usize) -> usize {
    rng.gen_range(low..high)
}

pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn entropy_rng() -> StdRng {
    StdRng::from_entropy()
}

/// A uniformly random permutation of `0..n`.
pub fn shuffled_indices<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(rng);
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_stays_in_range() {
        let mut rng = create_rng(7);
        let mut seen = [false; 5];
        for _ in 0..1000 {
            let x = uniform(&mut rng, 3, 8);
            assert!(x >= 3 && x < 8);
            seen[x - 3] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = create_rng(42);
        let mut b = create_rng(42);
        for _ in 0..100 {
            assert_eq!(uniform(&mut a, 0, 1000), uniform(&mut b, 0, 1000));
        }
    }

    #[test]
    fn shuffled_indices_is_a_permutation() {
        let mut rng = create_rng(1);
        let mut idx = shuffled_indices(50, &mut rng);
        idx.sort();
        assert_eq!(idx, (0..50).collect::<Vec<_>>());
        assert!(shuffled_indices(0, &mut rng).is_empty());
    }
}

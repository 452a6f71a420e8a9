//! Test array generation.
//!
//! Every shape is a permutation of the integers `0..size`, so correctness
//! checks can compare against a reference sort without caring about value
//! distribution.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{Shape, TestCase};

/// Fraction (in percent) of the array length used as the nearly-sorted
/// swap count.
pub const NEARLY_SORTED_SWAP_PCT: usize = 5;

/// Generate one test array with the default nearly-sorted swap fraction.
///
/// Returns the integers `0..size` arranged according to `shape`. The RNG is
/// consumed only by the `NearlySorted` and `Random` shapes.
pub fn generate<R: Rng + ?Sized>(size: usize, shape: Shape, rng: &mut R) -> Vec<u32> {
    generate_with_swap_pct(size, shape, NEARLY_SORTED_SWAP_PCT, rng)
}

/// Generate one test array with an explicit nearly-sorted swap fraction.
///
/// `NearlySorted` starts from the identity sequence and applies
/// `max(1, size * swap_pct / 100)` random position swaps, with replacement:
/// a position may be picked more than once or not at all, leaving a small,
/// size-proportional number of out-of-place elements.
pub fn generate_with_swap_pct<R: Rng + ?Sized>(
    size: usize,
    shape: Shape,
    swap_pct: usize,
    rng: &mut R,
) -> Vec<u32> {
    debug_assert!(size > 0, "array size must be positive");

    let mut a: Vec<u32> = (0..size as u32).collect();
    match shape {
        Shape::Sorted => {}
        Shape::Reversed => a.reverse(),
        Shape::NearlySorted => {
            let swaps = (size * swap_pct / 100).max(1);
            for _ in 0..swaps {
                let i = rng.gen_range(0..size);
                let j = rng.gen_range(0..size);
                a.swap(i, j);
            }
        }
        Shape::Random => a.shuffle(rng),
    }
    a
}

impl TestCase {
    /// Generate one array instance for this test case.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<u32> {
        generate(self.size, self.shape, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn is_permutation(a: &[u32]) -> bool {
        let mut seen = vec![false; a.len()];
        for &x in a {
            if (x as usize) >= a.len() || seen[x as usize] {
                return false;
            }
            seen[x as usize] = true;
        }
        true
    }

    #[test]
    fn test_sorted_is_identity() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        assert_eq!(generate(5, Shape::Sorted, &mut rng), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_reversed_example() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        assert_eq!(
            generate(7, Shape::Reversed, &mut rng),
            vec![6, 5, 4, 3, 2, 1, 0]
        );
    }

    #[test]
    fn test_all_shapes_are_permutations() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for shape in [
            Shape::Sorted,
            Shape::NearlySorted,
            Shape::Reversed,
            Shape::Random,
        ] {
            for size in [1, 2, 7, 100, 1000] {
                let a = generate(size, shape, &mut rng);
                assert_eq!(a.len(), size, "shape {shape:?} size {size}");
                assert!(is_permutation(&a), "shape {shape:?} size {size}");
            }
        }
    }

    #[test]
    fn test_nearly_sorted_is_mostly_in_place() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let size = 1000;
        let a = generate(size, Shape::NearlySorted, &mut rng);

        // At most 2 positions move per swap, so 5% swaps displace at most
        // 10% of the elements.
        let displaced = a
            .iter()
            .enumerate()
            .filter(|&(i, &x)| i != x as usize)
            .count();
        assert!(displaced <= size / 10, "{displaced} elements out of place");
        assert!(displaced > 0, "seeded run should displace something");
    }

    #[test]
    fn test_nearly_sorted_applies_at_least_one_swap_source() {
        // Tiny arrays still consume one swap's worth of randomness.
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let a = generate_with_swap_pct(2, Shape::NearlySorted, 5, &mut rng);
        assert!(is_permutation(&a));
    }

    #[test]
    fn test_test_case_generates_its_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let case = TestCase {
            size: 4,
            shape: Shape::Reversed,
        };
        assert_eq!(case.generate(&mut rng), vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_same_seed_same_array() {
        let mut rng_a = ChaCha8Rng::seed_from_u64(42);
        let mut rng_b = ChaCha8Rng::seed_from_u64(42);
        assert_eq!(
            generate(500, Shape::Random, &mut rng_a),
            generate(500, Shape::Random, &mut rng_b)
        );
    }
}

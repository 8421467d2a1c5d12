//! Tests for the seeded randomizer and its shuffles

#[cfg(test)]
mod tests {
    use mosaic::math::random::Randomizer;
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use std::collections::HashMap;

    // Tests equal seeds give equal sequences
    // Verified by mixing a counter into every draw
    #[test]
    fn test_same_seed_same_sequence() {
        let mut first = Randomizer::new("Oceani");
        let mut second = Randomizer::new("Oceani");

        for _ in 0..32 {
            assert_eq!(first.next_float().to_bits(), second.next_float().to_bits());
        }
        assert_eq!(first.next_int(), second.next_int());
    }

    // Tests the first draws of the default seed
    // Verified by returning the signed draw without taking its magnitude
    #[test]
    fn test_reference_draws() {
        let mut randomizer = Randomizer::new("Oceani");
        assert!((randomizer.next_float() - 0.501_628_259_872_671_8).abs() < 1e-15);

        let mut randomizer = Randomizer::new("Oceani");
        assert_eq!(randomizer.next_int(), 2_140_490_326);
        assert_eq!(randomizer.next_int(), 418_695_944);
    }

    // Tests splice-and-pick order for a known seed
    // Verified by swapping picks into place Fisher-Yates style
    #[test]
    fn test_shuffle_reference_order() {
        let mut randomizer = Randomizer::new("Oceani");

        assert_eq!(randomizer.shuffle(&["a", "b", "c", "d"]), vec!["c", "d", "a", "b"]);
    }

    // Tests n items consume n - 1 draws and trivial inputs none
    // Verified by drawing for the last remaining item
    #[test]
    fn test_shuffle_draw_count() {
        let mut shuffled = Randomizer::new("Oceani");
        let mut reference = Randomizer::new("Oceani");

        assert!(shuffled.shuffle::<u8>(&[]).is_empty());
        assert_eq!(shuffled.shuffle(&[9]), vec![9]);
        shuffled.shuffle(&[1, 2, 3, 4]);

        for _ in 0..3 {
            reference.next_float();
        }
        assert_eq!(shuffled.next_float().to_bits(), reference.next_float().to_bits());
    }

    // Tests shuffles are permutations of their input
    // Verified by removing the picked index twice
    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = StdRng::seed_from_u64(42);

        for round in 0..100 {
            let len = rng.random_range(0..20);
            let items: Vec<usize> = (0..len).collect();
            let mut randomizer = Randomizer::new(&format!("round{round}"));

            let mut shuffled = randomizer.shuffle(&items);
            shuffled.sort_unstable();
            assert_eq!(shuffled, items);
        }
    }

    // Tests an empty weight map keeps input order
    // Verified by sorting on draws alone when no weights exist
    #[test]
    fn test_weighted_shuffle_without_weights() {
        let mut randomizer = Randomizer::new("Oceani");

        let order = randomizer.weighted_shuffle(&["a", "b", "c"], &HashMap::new());

        assert_eq!(order, vec!["a", "b", "c"]);
    }

    // Tests missing weights fall back to the mean of the supplied ones
    // Verified by treating missing weights as zero
    #[test]
    fn test_weighted_shuffle_reference_order() {
        let mut randomizer = Randomizer::new("Oceani");
        let weights = HashMap::from([("a", 1), ("b", 9)]);

        let order = randomizer.weighted_shuffle(&["a", "b", "c"], &weights);

        assert_eq!(order, vec!["b", "c", "a"]);
    }

    // Tests heavy items come first more often than light ones
    // Verified by inverting the sort direction
    #[test]
    fn test_weighted_shuffle_bias() {
        let weights = HashMap::from([("light", 1), ("heavy", 9)]);
        let mut heavy_first = 0;

        for round in 0..200 {
            let mut randomizer = Randomizer::new(&format!("bias{round}"));
            let order = randomizer.weighted_shuffle(&["light", "heavy"], &weights);
            if order.first() == Some(&"heavy") {
                heavy_first += 1;
            }
        }

        assert!(heavy_first > 150, "heavy first {heavy_first} of 200");
    }
}

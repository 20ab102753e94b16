//! End-to-end filter properties exercised through the public API:
//! the insert-then-check pipeline a caller actually runs, sizing included.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;
    use rand::distributions::Alphanumeric;
    use rand::{Rng, SeedableRng};

    use mailsieve_filter::{
        calculate_parameters, projected_fpr, BloomFilter, FilterConfigBuilder, FilterError,
    };

    /// Full pipeline: size from (n, p), construct, insert a deduplicated
    /// batch, then verify every inserted item is found.
    #[test]
    fn test_sized_pipeline_has_no_false_negatives() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let known: HashSet<String> = (0..5_000)
            .map(|_| {
                let user: String = (&mut rng)
                    .sample_iter(&Alphanumeric)
                    .take(12)
                    .map(char::from)
                    .collect();
                format!("{}@example.com", user)
            })
            .collect();

        let config = FilterConfigBuilder::new()
            .expected_items(known.len())
            .target_fpr(0.0000001)
            .build()
            .unwrap();
        let params = config.parameters().unwrap();
        let mut filter = BloomFilter::new(params.size_bits, params.hash_count).unwrap();

        for email in &known {
            filter.insert(email.as_bytes());
        }

        for email in &known {
            assert!(
                filter.check(email.as_bytes()),
                "False negative for {}",
                email
            );
        }
    }

    /// Membership answers survive later inserts: bits are monotonic, so an
    /// item found once is found forever.
    #[test]
    fn test_verdicts_survive_later_inserts() {
        let mut filter = BloomFilter::new(10_000, 7).unwrap();

        filter.insert(b"early@example.com");
        assert!(filter.check(b"early@example.com"));

        for i in 0..500 {
            filter.insert(format!("later_{}@example.com", i).as_bytes());
            assert!(
                filter.check(b"early@example.com"),
                "Item lost after {} later inserts",
                i + 1
            );
        }
    }

    /// Empirical false-positive rate stays within an order of magnitude of
    /// the target when the filter is loaded to its sizing cardinality.
    #[test]
    fn test_empirical_fpr_within_order_of_magnitude() {
        let target_fpr = 0.001;
        let n = 2_000;

        let params = calculate_parameters(n, target_fpr).unwrap();
        let mut filter = BloomFilter::new(params.size_bits, params.hash_count).unwrap();
        for i in 0..n {
            filter.insert(format!("member_{}@example.com", i).as_bytes());
        }

        let samples = 200_000;
        let false_positives = (0..samples)
            .filter(|i| filter.check(format!("outsider_{}@example.com", i).as_bytes()))
            .count();
        let actual = false_positives as f64 / samples as f64;

        assert!(
            actual <= target_fpr * 10.0,
            "Empirical fpr {} not within an order of magnitude of {}",
            actual,
            target_fpr
        );
        // And the analytic projection should agree with the sizing
        let projected = projected_fpr(params.size_bits, n, params.hash_count);
        assert!(projected < target_fpr * 10.0);
    }

    /// The calculator and constructor reject everything outside their domain
    /// before any filter state exists.
    #[test]
    fn test_bad_inputs_rejected_end_to_end() {
        assert!(matches!(
            BloomFilter::new(0, 5),
            Err(FilterError::InvalidParameter(_))
        ));
        assert!(matches!(
            BloomFilter::new(100, 0),
            Err(FilterError::InvalidParameter(_))
        ));
        assert!(calculate_parameters(0, 0.01).is_err());
        assert!(calculate_parameters(100, 0.0).is_err());
        assert!(calculate_parameters(100, 1.0).is_err());
        assert!(FilterConfigBuilder::new()
            .expected_items(0)
            .target_fpr(0.01)
            .build()
            .is_err());
    }

    proptest! {
        /// No false negatives for arbitrary byte-string items.
        #[test]
        fn prop_no_false_negatives(
            items in proptest::collection::vec(
                proptest::collection::vec(any::<u8>(), 0..64),
                1..200,
            )
        ) {
            let mut filter = BloomFilter::new(50_000, 7).unwrap();

            for item in &items {
                filter.insert(item);
            }
            for item in &items {
                prop_assert!(filter.check(item));
            }
        }

        /// Insertion order never changes the resulting filter state or any
        /// membership verdict.
        #[test]
        fn prop_insert_order_is_irrelevant(
            items in proptest::collection::vec("[a-z]{1,16}@[a-z]{1,8}\\.com", 1..50),
            probes in proptest::collection::vec("[a-z]{1,16}@[a-z]{1,8}\\.com", 1..50),
        ) {
            let mut forward = BloomFilter::new(4_096, 5).unwrap();
            let mut backward = BloomFilter::new(4_096, 5).unwrap();

            for item in &items {
                forward.insert(item.as_bytes());
            }
            for item in items.iter().rev() {
                backward.insert(item.as_bytes());
            }

            prop_assert_eq!(forward.bits_set(), backward.bits_set());
            for probe in items.iter().chain(probes.iter()) {
                prop_assert_eq!(
                    forward.check(probe.as_bytes()),
                    backward.check(probe.as_bytes())
                );
            }
        }

        /// Re-inserting items never grows the filter past its first pass.
        #[test]
        fn prop_reinsertion_is_a_noop(
            items in proptest::collection::vec("[a-z]{1,16}", 1..50),
        ) {
            let mut filter = BloomFilter::new(4_096, 5).unwrap();

            for item in &items {
                filter.insert(item.as_bytes());
            }
            let bits_after_first_pass = filter.bits_set();

            for item in &items {
                filter.insert(item.as_bytes());
            }

            prop_assert_eq!(filter.bits_set(), bits_after_first_pass);
        }
    }
}

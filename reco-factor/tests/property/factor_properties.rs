//! Property tests for reco-factor.

use proptest::prelude::*;

use reco_core::config::FactorizationConfig;
use reco_core::models::Interaction;
use reco_factor::LatentFactorEvaluator;

fn rows_strategy() -> impl Strategy<Value = Vec<Interaction>> {
    prop::collection::vec((1u64..10, 1u64..12), 2..80).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(u, a)| Interaction::new(u, a, format!("T{a}")))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_accuracy_bounded_and_exact_at_full_rank(rows in rows_strategy()) {
        // train and test both cover the whole table, so the overlap is never empty
        let config = FactorizationConfig {
            train_rows: rows.len(),
            test_rows: rows.len(),
            latent_factor_start: 1,
            latent_factor_stop: 15,
            latent_factor_step: 2,
        };
        let curve = LatentFactorEvaluator::new(config.clone()).calculate_error(&rows).unwrap();
        prop_assert_eq!(curve.latent_factors, config.latent_factor_counts());
        for (&test, &train) in curve.test_accuracy.iter().zip(&curve.train_accuracy) {
            prop_assert!(test <= 1.0);
            prop_assert!(train <= 1.0);
        }
        // at most 9 users, so 13 factors cover the full rank
        prop_assert_eq!(curve.train_accuracy.last().copied(), Some(1.0));
        prop_assert_eq!(curve.test_accuracy.last().copied(), Some(1.0));
    }
}

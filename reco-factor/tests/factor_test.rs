use reco_core::config::FactorizationConfig;
use reco_core::errors::{FactorizationError, RecoErrorCode};
use reco_core::models::{ArticleId, Interaction};
use reco_factor::{LatentFactorEvaluator, TrainTestSplit};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read(user: u64, articles: &[u64]) -> Vec<Interaction> {
    articles
        .iter()
        .map(|a| Interaction::new(user, *a, format!("T{a}")))
        .collect()
}

fn evaluator(train_rows: usize, test_rows: usize, counts: (usize, usize, usize)) -> LatentFactorEvaluator {
    LatentFactorEvaluator::new(FactorizationConfig {
        train_rows,
        test_rows,
        latent_factor_start: counts.0,
        latent_factor_stop: counts.1,
        latent_factor_step: counts.2,
    })
}

/// Twelve train rows over users 1..=4, then four test rows: users 1 and 2
/// on known articles, user 9 (never in train) and article 77 (never in train).
fn history() -> Vec<Interaction> {
    let mut rows = Vec::new();
    rows.extend(read(1, &[1, 2, 3]));
    rows.extend(read(2, &[2, 3, 4]));
    rows.extend(read(3, &[1, 4, 5]));
    rows.extend(read(4, &[5, 6, 1]));
    rows.extend(read(1, &[4]));
    rows.extend(read(2, &[77]));
    rows.extend(read(9, &[1, 2]));
    rows
}

// ---------------------------------------------------------------------------
// Sweep
// ---------------------------------------------------------------------------

#[test]
fn full_rank_reproduces_train_matrix_exactly() {
    let rows = history();
    let curve = evaluator(12, 4, (1, 20, 1)).calculate_error(&rows).unwrap();
    assert_eq!(curve.len(), 19);
    // rank is at most 4, so every count from 4 on is exact on train
    for (k, _, train) in curve.points() {
        if k >= 4 {
            assert_eq!(train, 1.0, "k = {k}");
        }
        assert!(train <= 1.0);
    }
}

#[test]
fn curve_reports_requested_counts_in_order() {
    let rows = history();
    let curve = evaluator(12, 4, (1, 8, 3)).calculate_error(&rows).unwrap();
    assert_eq!(curve.latent_factors, vec![1, 4, 7]);
    assert_eq!(curve.test_accuracy.len(), 3);
    assert_eq!(curve.train_accuracy.len(), 3);
}

#[test]
fn default_sweep_has_thirty_five_steps() {
    let counts = FactorizationConfig::default().latent_factor_counts();
    assert_eq!(counts.len(), 35);
    assert_eq!(counts.first(), Some(&10));
    assert_eq!(counts.last(), Some(&690));
}

// ---------------------------------------------------------------------------
// Cold start
// ---------------------------------------------------------------------------

#[test]
fn cold_start_users_and_articles_are_excluded() {
    let rows = history();
    let set = evaluator(12, 4, (1, 5, 1)).prepare(&rows).unwrap();
    assert_eq!(set.users(), &[1, 2]);
    assert_eq!(
        set.articles(),
        &[ArticleId::from(1u64), ArticleId::from(2u64), ArticleId::from(4u64)]
    );
    assert_eq!(set.test_size(), 6);
    assert_eq!(set.train_size(), 4 * 6);
}

#[test]
fn test_accuracy_compares_shared_cells_only() {
    let rows = history();
    let curve = evaluator(12, 4, (4, 11, 6)).calculate_error(&rows).unwrap();
    assert_eq!(curve.latent_factors, vec![4, 10]);
    // Full rank reproduces train: user 1 -> [1, 1, 0], user 2 -> [0, 1, 1]
    // over articles 1, 2, 4. Test holds only (1, 4), so 5 of 6 cells differ.
    for (k, test, train) in curve.points() {
        assert!((test - (1.0 - 5.0 / 6.0)).abs() < 1e-12, "k = {k}");
        assert_eq!(train, 1.0);
    }
}

#[test]
fn no_overlap_is_an_empty_evaluation_set() {
    let mut rows = read(1, &[1, 2]);
    rows.extend(read(5, &[9]));
    let err = evaluator(2, 1, (1, 3, 1)).calculate_error(&rows).unwrap_err();
    assert!(matches!(err, FactorizationError::EmptyEvaluationSet { .. }));
    assert_eq!(err.error_code(), "EMPTY_EVALUATION_SET");
}

#[test]
fn no_interactions_is_an_empty_train_matrix() {
    let err = evaluator(10, 10, (1, 3, 1)).calculate_error(&[]).unwrap_err();
    assert!(matches!(err, FactorizationError::EmptyTrainMatrix { .. }));
}

// ---------------------------------------------------------------------------
// Split
// ---------------------------------------------------------------------------

#[test]
fn split_is_positional() {
    let rows = history();
    let split = TrainTestSplit::new(&rows, 12, 4);
    assert_eq!(split.train.last().unwrap().user_id, 4);
    assert_eq!(split.test.first().unwrap().user_id, 1);
    assert_eq!(split.test.last().unwrap().user_id, 9);
}

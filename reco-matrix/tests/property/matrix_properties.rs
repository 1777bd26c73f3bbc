//! Property tests for reco-matrix.

use std::collections::HashSet;

use proptest::prelude::*;

use reco_core::models::Interaction;
use reco_matrix::UserItemMatrix;

fn interaction_strategy() -> impl Strategy<Value = Interaction> {
    (1u64..20, 1u64..30, 0usize..2).prop_map(|(user, article, title)| {
        Interaction::new(user, article, format!("title-{article}-{title}"))
    })
}

proptest! {
    // Summing every cell gives the number of deduplicated records.
    #[test]
    fn prop_total_equals_dedup_count(rows in prop::collection::vec(interaction_strategy(), 0..200)) {
        let matrix = UserItemMatrix::build(&rows);
        let unique: HashSet<&Interaction> = rows.iter().collect();
        prop_assert_eq!(matrix.total(), unique.len() as u64);
    }

    #[test]
    fn prop_row_and_column_sums_agree(rows in prop::collection::vec(interaction_strategy(), 0..200)) {
        let matrix = UserItemMatrix::build(&rows);
        let rows_total: u64 = matrix.row_sums().iter().sum();
        let cols_total: u64 = matrix.column_sums().iter().sum();
        prop_assert_eq!(rows_total, cols_total);
        prop_assert_eq!(rows_total, matrix.total());
    }

    #[test]
    fn prop_every_input_user_has_a_row(rows in prop::collection::vec(interaction_strategy(), 1..100)) {
        let matrix = UserItemMatrix::build(&rows);
        for r in &rows {
            prop_assert!(matrix.contains_user(r.user_id));
            prop_assert!(matrix.get(r.user_id, &r.article_id) >= 1);
        }
    }
}

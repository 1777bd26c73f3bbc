//! Property tests for reco-dispatch.

use std::collections::HashSet;

use proptest::prelude::*;

use reco_core::config::RecoConfig;
use reco_core::ingest::CleanTables;
use reco_core::models::{Article, Interaction, Strategy as RecoStrategy, UserSegment};
use reco_dispatch::Recommender;

const WORDS: &[&str] = &["rust", "python", "data", "model", "learning", "spark", "graph"];

fn tables_strategy() -> impl Strategy<Value = CleanTables> {
    let rows = prop::collection::vec((1u64..12, 1u64..20), 1..120);
    let descs = prop::collection::vec(
        prop::collection::vec(prop::sample::select(WORDS), 0..4).prop_map(|w| w.join(" ")),
        15,
    );
    (rows, descs).prop_map(|(pairs, descs)| CleanTables {
        interactions: pairs
            .into_iter()
            .map(|(u, a)| Interaction::new(u, a, format!("T{a}")))
            .collect(),
        // articles 1..=15 have metadata, 16..19 do not
        articles: descs
            .into_iter()
            .enumerate()
            .map(|(i, d)| Article::new(i as u64 + 1, format!("T{}", i + 1), d))
            .collect(),
    })
}

proptest! {
    #[test]
    fn prop_recommendations_bounded_and_unread(tables in tables_strategy(), top_n in 1usize..12) {
        let r = Recommender::build(tables.clone(), &RecoConfig::default()).unwrap();
        for &user in r.matrix().users() {
            let read: HashSet<_> = tables
                .interactions
                .iter()
                .filter(|i| i.user_id == user)
                .map(|i| i.article_id.clone())
                .collect();
            let recs = r.recommend_articles(user, Some(top_n));
            prop_assert!(recs.items().len() <= top_n);
            prop_assert!(recs.segment != UserSegment::Unknown);
            if recs.strategy != RecoStrategy::Popularity {
                for id in recs.article_ids() {
                    prop_assert!(!read.contains(&id));
                }
            }
            prop_assert_eq!(recs.fell_back, recs.strategy == RecoStrategy::Popularity);
        }
    }

    #[test]
    fn prop_unknown_users_get_popularity(tables in tables_strategy(), user in 100u64..200) {
        let r = Recommender::build(tables, &RecoConfig::default()).unwrap();
        let recs = r.recommend_articles(user, None);
        prop_assert_eq!(recs.segment, UserSegment::Unknown);
        prop_assert_eq!(recs.strategy, RecoStrategy::Popularity);
        prop_assert!(!recs.fell_back);
        prop_assert_eq!(recs.titles(), r.popularity().top_articles(10));
    }
}

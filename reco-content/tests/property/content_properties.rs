//! Property tests for reco-content.

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;

use reco_content::{ContentEngine, SimilarityMatrix, TfIdfVectorizer};
use reco_core::config::ContentConfig;
use reco_core::models::{Article, ArticleId, Interaction};
use reco_matrix::TitleIndex;

const WORDS: &[&str] = &[
    "rust", "python", "data", "model", "learning", "cluster", "spark", "graph", "vector", "query",
];

fn description() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 0..6).prop_map(|w| w.join(" "))
}

/// Metadata for ids 0..n plus interactions over ids 0..n+5, so some read
/// articles have no metadata row.
fn corpus() -> impl Strategy<Value = (Vec<Article>, Vec<Interaction>)> {
    prop::collection::vec(description(), 1..15).prop_flat_map(|descs| {
        let n = descs.len() as u64;
        let articles: Vec<Article> = descs
            .into_iter()
            .enumerate()
            .map(|(i, d)| Article::new(i as u64, format!("Doc {i}"), d))
            .collect();
        let rows = prop::collection::vec((1u64..8, 0..n + 5), 1..40).prop_map(|pairs| {
            pairs
                .into_iter()
                .map(|(u, a)| Interaction::new(u, a, format!("Doc {a}")))
                .collect::<Vec<_>>()
        });
        (Just(articles), rows)
    })
}

proptest! {
    #[test]
    fn prop_recs_bounded_unread_unique_and_known((articles, rows) in corpus(), top_n in 1usize..8) {
        let titles = Arc::new(TitleIndex::build(&rows, &articles));
        let engine = ContentEngine::new(&articles, &rows, titles, ContentConfig::default());
        let metadata: HashSet<ArticleId> = articles.iter().map(|a| a.article_id.clone()).collect();

        for &user in engine.users() {
            let read: HashSet<ArticleId> = engine.read_articles(user).unwrap().iter().cloned().collect();
            let recs = engine.make_content_recs(user, top_n);
            prop_assert!(!recs.is_not_applicable());
            prop_assert!(recs.len() <= top_n);

            let mut unique = HashSet::new();
            for item in recs.items() {
                prop_assert!(!read.contains(&item.article_id));
                prop_assert!(metadata.contains(&item.article_id));
                prop_assert!(unique.insert(item.article_id.clone()));
            }
        }
    }

    #[test]
    fn prop_similar_never_contains_self((articles, rows) in corpus()) {
        let titles = Arc::new(TitleIndex::build(&rows, &articles));
        let config = ContentConfig::default();
        let engine = ContentEngine::new(&articles, &rows, titles, config.clone());
        for a in &articles {
            let similar = engine.find_similar_article_ids(&a.article_id);
            prop_assert!(!similar.contains(&a.article_id));
            prop_assert!(similar.len() <= config.similar_per_article);
        }
    }

    #[test]
    fn prop_similarity_symmetric_and_bounded(descs in prop::collection::vec(description(), 1..12)) {
        let tfidf = TfIdfVectorizer::new(true).fit_transform(descs.as_slice());
        let sim = SimilarityMatrix::from_tfidf(&tfidf);
        for i in 0..sim.len() {
            for j in 0..sim.len() {
                let s = sim.get(i, j);
                prop_assert!((s - sim.get(j, i)).abs() < 1e-12);
                prop_assert!(s >= -1e-12 && s <= 1.0 + 1e-9);
            }
        }
    }
}

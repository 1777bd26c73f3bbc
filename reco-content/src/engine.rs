//! ContentEngine: TF-IDF similarity over article descriptions and
//! recommendations seeded by what a user already read.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use reco_core::config::ContentConfig;
use reco_core::models::{
    Article, ArticleId, Interaction, RecommendationOutcome, RecommendedArticle, Strategy, UserId,
};
use reco_core::traits::IRecommender;
use reco_matrix::TitleIndex;
use reco_observability::events;
use tracing::{debug, info};

use crate::similarity::SimilarityMatrix;
use crate::vectorizer::TfIdfVectorizer;

/// Content similarity engine.
///
/// The similarity matrix is indexed by row position in the article metadata
/// table, not by article id value.
#[derive(Debug, Clone)]
pub struct ContentEngine {
    article_ids: Vec<ArticleId>,
    row_of: HashMap<ArticleId, usize>,
    similarity: SimilarityMatrix,
    /// Distinct articles each user read, in first-occurrence order.
    reading: HashMap<UserId, Vec<ArticleId>>,
    /// Users in first-occurrence order.
    users: Vec<UserId>,
    without_content: HashSet<ArticleId>,
    titles: Arc<TitleIndex>,
    config: ContentConfig,
}

impl ContentEngine {
    pub fn new(
        articles: &[Article],
        interactions: &[Interaction],
        titles: Arc<TitleIndex>,
        config: ContentConfig,
    ) -> Self {
        let _span = reco_observability::similarity_span!(articles.len()).entered();

        let descriptions: Vec<&str> = articles.iter().map(|a| a.description.as_str()).collect();
        let tfidf =
            TfIdfVectorizer::new(config.remove_stop_words).fit_transform(descriptions.as_slice());
        let similarity = SimilarityMatrix::from_tfidf(&tfidf);

        let article_ids: Vec<ArticleId> = articles.iter().map(|a| a.article_id.clone()).collect();
        let mut row_of = HashMap::with_capacity(article_ids.len());
        for (row, id) in article_ids.iter().enumerate() {
            row_of.entry(id.clone()).or_insert(row);
        }

        let mut reading: HashMap<UserId, Vec<ArticleId>> = HashMap::new();
        let mut users = Vec::new();
        for i in interactions {
            let read = reading.entry(i.user_id).or_insert_with(|| {
                users.push(i.user_id);
                Vec::new()
            });
            if !read.contains(&i.article_id) {
                read.push(i.article_id.clone());
            }
        }

        let without_content: HashSet<ArticleId> = interactions
            .iter()
            .map(|i| &i.article_id)
            .filter(|id| !row_of.contains_key(*id))
            .cloned()
            .collect();

        info!(
            articles = article_ids.len(),
            vocabulary = tfidf.vocabulary_size(),
            users = users.len(),
            without_content = without_content.len(),
            "content engine built"
        );

        Self {
            article_ids,
            row_of,
            similarity,
            reading,
            users,
            without_content,
            titles,
            config,
        }
    }

    pub fn default_top_n(&self) -> usize {
        self.config.default_top_n
    }

    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    /// Users with at least one interaction, in first-occurrence order.
    pub fn users(&self) -> &[UserId] {
        &self.users
    }

    pub fn contains_user(&self, user_id: UserId) -> bool {
        self.reading.contains_key(&user_id)
    }

    /// Distinct articles the user read, in first-occurrence order.
    pub fn read_articles(&self, user_id: UserId) -> Option<&[ArticleId]> {
        self.reading.get(&user_id).map(Vec::as_slice)
    }

    /// Article ids that appear in interactions but have no metadata row.
    pub fn article_ids_without_content(&self) -> Vec<ArticleId> {
        let mut ids: Vec<ArticleId> = self.without_content.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Titles for the given ids, in order; unknown ids are skipped.
    pub fn get_article_names(&self, article_ids: &[ArticleId]) -> Vec<String> {
        self.titles.get_article_names(article_ids)
    }

    /// The articles most similar to `article_id`, never including itself.
    ///
    /// An id without a metadata row yields an empty list rather than an error.
    pub fn find_similar_article_ids(&self, article_id: &ArticleId) -> Vec<ArticleId> {
        let Some(&row) = self.row_of.get(article_id) else {
            events::lookup_failed(article_id.as_str());
            return Vec::new();
        };
        self.similarity
            .most_similar(row, self.config.similar_per_article)
            .into_iter()
            .map(|idx| &self.article_ids[idx])
            .filter(|id| *id != article_id)
            .cloned()
            .collect()
    }

    /// Content-based recommendations for one user.
    ///
    /// For each read article in read order, append similar articles the user
    /// has not read (and that are not already listed). Stops once the list is
    /// longer than `top_n`, then truncates. Users without interactions get
    /// `NotApplicable`.
    ///
    /// Unlike the basic collaborative `user_recs`, an article suggested by two
    /// read articles is listed once, so the stop rule counts distinct articles
    /// and can fire later than it would with repeats kept.
    pub fn make_content_recs(&self, user_id: UserId, top_n: usize) -> RecommendationOutcome {
        let Some(read) = self.reading.get(&user_id) else {
            return RecommendationOutcome::NotApplicable;
        };
        let read_set: HashSet<&ArticleId> = read.iter().collect();

        let mut listed: HashSet<ArticleId> = HashSet::new();
        let mut recs: Vec<RecommendedArticle> = Vec::new();
        for seed in read {
            let candidates: Vec<ArticleId> = self
                .find_similar_article_ids(seed)
                .into_iter()
                .filter(|id| !read_set.contains(id) && !listed.contains(id))
                .collect();
            for item in self.titles.to_recommended(&candidates) {
                listed.insert(item.article_id.clone());
                recs.push(item);
            }
            if recs.len() > top_n {
                break;
            }
        }
        recs.truncate(top_n);

        debug!(user_id, top_n, recs = recs.len(), "content recommendations");
        RecommendationOutcome::from_items(recs)
    }

    /// Content recommendations for several users (every known user by default).
    pub fn make_recs(
        &self,
        users: Option<&[UserId]>,
        top_n: usize,
    ) -> BTreeMap<UserId, RecommendationOutcome> {
        users
            .unwrap_or(self.users.as_slice())
            .iter()
            .map(|&u| (u, self.make_content_recs(u, top_n)))
            .collect()
    }
}

impl IRecommender for ContentEngine {
    fn recommend(&self, user_id: UserId, top_n: usize) -> RecommendationOutcome {
        self.make_content_recs(user_id, top_n)
    }

    fn strategy(&self) -> Strategy {
        Strategy::Content
    }
}

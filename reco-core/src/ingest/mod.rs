//! Ingestion boundary: raw parsed rows in, the two clean tables out.
//!
//! File parsing stays with the loading collaborator. This module only
//! normalizes rows it has already parsed: user emails become numeric ids,
//! article ids are canonicalized, duplicates are dropped and missing text
//! becomes "".

pub mod email_mapper;
pub mod raw;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::{IngestError, RecoResult};
use crate::models::{Article, ArticleId, Interaction};

pub use email_mapper::EmailMapper;
pub use raw::{RawArticle, RawInteraction};

/// The two normalized tables the recommender is built from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CleanTables {
    pub interactions: Vec<Interaction>,
    pub articles: Vec<Article>,
}

/// Normalize raw interaction and article rows.
///
/// Interactions: emails map to user ids in first-seen order (an explicit
/// `user_id` wins over the email), exact duplicate rows are dropped keeping
/// the first. Articles: duplicates by id are dropped keeping the first.
pub fn clean(raw_interactions: &[RawInteraction], raw_articles: &[RawArticle]) -> RecoResult<CleanTables> {
    let interactions = clean_interactions(raw_interactions)?;
    let articles = clean_articles(raw_articles)?;
    Ok(CleanTables {
        interactions,
        articles,
    })
}

pub fn clean_interactions(rows: &[RawInteraction]) -> RecoResult<Vec<Interaction>> {
    let mut mapper = EmailMapper::new();
    let mut seen: HashSet<Interaction> = HashSet::new();
    let mut out = Vec::with_capacity(rows.len());

    for (row, raw) in rows.iter().enumerate() {
        let article_id = ArticleId::from_raw(&raw.article_id).ok_or(IngestError::EmptyArticleId {
            table: "interactions",
            row,
        })?;
        let user_id = match raw.user_id {
            Some(id) => id,
            None => mapper.encode(raw.email.as_deref()),
        };
        let interaction = Interaction {
            user_id,
            article_id,
            title: raw.title.clone().unwrap_or_default(),
        };
        if seen.insert(interaction.clone()) {
            out.push(interaction);
        }
    }
    Ok(out)
}

pub fn clean_articles(rows: &[RawArticle]) -> RecoResult<Vec<Article>> {
    let mut seen: HashSet<ArticleId> = HashSet::new();
    let mut out = Vec::with_capacity(rows.len());

    for (row, raw) in rows.iter().enumerate() {
        let article_id = ArticleId::from_raw(&raw.article_id).ok_or(IngestError::EmptyArticleId {
            table: "articles",
            row,
        })?;
        if !seen.insert(article_id.clone()) {
            continue;
        }
        out.push(Article {
            article_id,
            title: raw.doc_full_name.clone().unwrap_or_default(),
            description: raw.doc_description.clone().unwrap_or_default(),
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawArticleId;

    fn raw_interaction(article: RawArticleId, title: &str, email: &str) -> RawInteraction {
        RawInteraction {
            article_id: article,
            title: Some(title.to_string()),
            email: Some(email.to_string()),
            user_id: None,
        }
    }

    #[test]
    fn exact_duplicates_are_dropped() {
        let rows = vec![
            raw_interaction(RawArticleId::Float(10.0), "A", "a@x"),
            raw_interaction(RawArticleId::Text("10".into()), "A", "a@x"),
            raw_interaction(RawArticleId::Int(20), "B", "a@x"),
        ];
        let clean = clean_interactions(&rows).unwrap();
        assert_eq!(clean.len(), 2);
        assert!(clean.iter().all(|i| i.user_id == 1));
    }

    #[test]
    fn duplicate_article_ids_keep_first() {
        let rows = vec![
            RawArticle {
                article_id: RawArticleId::Int(7),
                doc_full_name: Some("first".into()),
                doc_description: None,
            },
            RawArticle {
                article_id: RawArticleId::Float(7.0),
                doc_full_name: Some("second".into()),
                doc_description: Some("ignored".into()),
            },
        ];
        let clean = clean_articles(&rows).unwrap();
        assert_eq!(clean.len(), 1);
        assert_eq!(clean[0].title, "first");
        assert_eq!(clean[0].description, "");
    }

    #[test]
    fn empty_article_id_is_an_error() {
        let rows = vec![raw_interaction(RawArticleId::Text(" ".into()), "A", "a@x")];
        assert!(clean_interactions(&rows).is_err());
    }
}

//! Shared data model: interaction and article records, recommendation
//! outcomes, neighbor rankings and accuracy curves.

pub mod accuracy_curve;
pub mod article;
pub mod article_id;
pub mod interaction;
pub mod neighbor;
pub mod recommendation;

pub use accuracy_curve::AccuracyCurve;
pub use article::Article;
pub use article_id::{ArticleId, RawArticleId};
pub use interaction::{Interaction, UserId};
pub use neighbor::Neighbor;
pub use recommendation::{
    RecommendationOutcome, Recommendations, RecommendedArticle, Strategy, UserSegment,
};

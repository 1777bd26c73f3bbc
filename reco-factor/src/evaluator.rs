//! SVD accuracy sweep over latent-factor counts.

use nalgebra::DMatrix;
use reco_core::config::FactorizationConfig;
use reco_core::errors::FactorizationError;
use reco_core::models::{AccuracyCurve, ArticleId, Interaction, UserId};
use reco_matrix::UserItemMatrix;
use reco_observability::events;
use tracing::{debug, info};

use crate::decomposition::{add_component, Decomposition};
use crate::split::TrainTestSplit;

/// Runs the train/test split and accuracy sweep described by a
/// [`FactorizationConfig`].
#[derive(Debug, Clone, Default)]
pub struct LatentFactorEvaluator {
    config: FactorizationConfig,
}

impl LatentFactorEvaluator {
    pub fn new(config: FactorizationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FactorizationConfig {
        &self.config
    }

    /// Split, decompose and restrict to the users/articles shared by train
    /// and test.
    pub fn prepare(
        &self,
        interactions: &[Interaction],
    ) -> Result<EvaluationSet, FactorizationError> {
        let split =
            TrainTestSplit::new(interactions, self.config.train_rows, self.config.test_rows);
        EvaluationSet::build(split)
    }

    /// Test and train accuracy for every latent-factor count in the sweep.
    pub fn calculate_error(
        &self,
        interactions: &[Interaction],
    ) -> Result<AccuracyCurve, FactorizationError> {
        let _span = reco_observability::factorization_span!(
            self.config.train_rows.min(interactions.len()),
            self.config.test_rows.min(interactions.len())
        )
        .entered();

        let set = self.prepare(interactions)?;
        let curve = set.accuracy_curve(&self.config.latent_factor_counts());
        events::accuracy_sweep_completed(curve.len(), curve.best_test().map(|(k, _)| k));
        Ok(curve)
    }
}

/// Everything the sweep needs, computed once.
#[derive(Debug, Clone)]
pub struct EvaluationSet {
    train_actual: DMatrix<f64>,
    /// Test cells for the shared users × shared articles, in train order.
    test_actual: DMatrix<f64>,
    decomposition: Decomposition,
    /// `U` rows of the shared users.
    u_test: DMatrix<f64>,
    /// `Vᵀ` columns of the shared articles.
    v_t_test: DMatrix<f64>,
    users: Vec<UserId>,
    articles: Vec<ArticleId>,
}

impl EvaluationSet {
    pub fn build(split: TrainTestSplit<'_>) -> Result<Self, FactorizationError> {
        let train = UserItemMatrix::build(split.train);
        let test = UserItemMatrix::build(split.test);
        let decomposition = Decomposition::of(&train)?;

        let (train_rows, users): (Vec<usize>, Vec<UserId>) = test
            .users()
            .iter()
            .filter_map(|&u| train.user_index(u).map(|row| (row, u)))
            .unzip();
        let (train_cols, articles): (Vec<usize>, Vec<ArticleId>) = test
            .articles()
            .iter()
            .filter_map(|a| train.article_index(a).map(|col| (col, a.clone())))
            .unzip();

        let excluded_users = test.n_users() - users.len();
        let excluded_articles = test.n_articles() - articles.len();
        if excluded_users > 0 || excluded_articles > 0 {
            events::cold_start_excluded(excluded_users, excluded_articles);
        }
        if users.is_empty() || articles.is_empty() {
            return Err(FactorizationError::EmptyEvaluationSet {
                test_users: test.n_users(),
                test_articles: test.n_articles(),
            });
        }

        let test_actual = DMatrix::from_fn(users.len(), articles.len(), |i, j| {
            f64::from(test.get(users[i], &articles[j]))
        });

        info!(
            train_shape = ?train.shape(),
            test_shape = ?test.shape(),
            evaluated_users = users.len(),
            evaluated_articles = articles.len(),
            rank = decomposition.rank(),
            "evaluation set prepared"
        );

        Ok(Self {
            train_actual: train.to_f64(),
            test_actual,
            u_test: decomposition.select_rows(&train_rows),
            v_t_test: decomposition.select_columns(&train_cols),
            decomposition,
            users,
            articles,
        })
    }

    pub fn decomposition(&self) -> &Decomposition {
        &self.decomposition
    }

    /// Test users that also appear in train, ascending.
    pub fn users(&self) -> &[UserId] {
        &self.users
    }

    /// Test articles that also appear in train, ascending.
    pub fn articles(&self) -> &[ArticleId] {
        &self.articles
    }

    pub fn train_size(&self) -> usize {
        self.train_actual.len()
    }

    pub fn test_size(&self) -> usize {
        self.test_actual.len()
    }

    /// Accuracy at each latent-factor count, in the given order.
    ///
    /// Counts above the rank use every factor. Reconstructions are built up
    /// one rank-1 component at a time, so an ascending sweep touches each
    /// factor once.
    pub fn accuracy_curve(&self, latent_factor_counts: &[usize]) -> AccuracyCurve {
        let s = &self.decomposition.singular_values;
        let rank = self.decomposition.rank();

        let (train_shape, test_shape) = (self.train_actual.shape(), self.test_actual.shape());
        let mut train_recon = DMatrix::zeros(train_shape.0, train_shape.1);
        let mut test_recon = DMatrix::zeros(test_shape.0, test_shape.1);
        let mut applied = 0;

        let mut curve = AccuracyCurve::default();
        for &lf in latent_factor_counts {
            let k = lf.min(rank);
            if k < applied {
                train_recon.fill(0.0);
                test_recon.fill(0.0);
                applied = 0;
            }
            for r in applied..k {
                let (u, v_t) = (&self.decomposition.u, &self.decomposition.v_t);
                add_component(&mut train_recon, u, s[r], v_t, r);
                add_component(&mut test_recon, &self.u_test, s[r], &self.v_t_test, r);
            }
            applied = k;

            let test_accuracy = accuracy(&self.test_actual, &test_recon);
            let train_accuracy = accuracy(&self.train_actual, &train_recon);
            debug!(latent_factors = lf, test_accuracy, train_accuracy, "sweep step");

            curve.latent_factors.push(lf);
            curve.test_accuracy.push(test_accuracy);
            curve.train_accuracy.push(train_accuracy);
        }
        curve
    }
}

/// `1 − Σ|actual − round(predicted)| / cells`. Rounds half to even.
fn accuracy(actual: &DMatrix<f64>, predicted: &DMatrix<f64>) -> f64 {
    let error: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p.round_ties_even()).abs())
        .sum();
    1.0 - error / actual.len() as f64
}

//! Economy SVD of a user-item matrix.

use nalgebra::{DMatrix, DVector, SVD};
use reco_core::errors::FactorizationError;
use reco_matrix::UserItemMatrix;

/// `U · diag(S) · Vᵀ` with singular values in descending order.
///
/// For an `m × n` matrix, `u` is `m × r`, `singular_values` has `r` entries
/// and `v_t` is `r × n`, where `r = min(m, n)`.
#[derive(Debug, Clone)]
pub struct Decomposition {
    pub u: DMatrix<f64>,
    pub singular_values: DVector<f64>,
    pub v_t: DMatrix<f64>,
}

impl Decomposition {
    pub fn of(matrix: &UserItemMatrix) -> Result<Self, FactorizationError> {
        let (users, articles) = matrix.shape();
        if matrix.is_empty() {
            return Err(FactorizationError::EmptyTrainMatrix { users, articles });
        }
        Self::of_dense(matrix.to_f64())
    }

    pub fn of_dense(dense: DMatrix<f64>) -> Result<Self, FactorizationError> {
        let svd = SVD::try_new(dense, true, true, f64::EPSILON, 0).ok_or_else(|| {
            FactorizationError::DecompositionFailed {
                reason: "did not converge".to_string(),
            }
        })?;
        let u = svd
            .u
            .ok_or_else(|| FactorizationError::DecompositionFailed {
                reason: "U was not computed".to_string(),
            })?;
        let v_t = svd
            .v_t
            .ok_or_else(|| FactorizationError::DecompositionFailed {
                reason: "Vᵀ was not computed".to_string(),
            })?;
        Ok(Self::sorted(u, svd.singular_values, v_t))
    }

    /// Reorder factors so singular values descend.
    fn sorted(u: DMatrix<f64>, s: DVector<f64>, v_t: DMatrix<f64>) -> Self {
        let mut order: Vec<usize> = (0..s.len()).collect();
        order.sort_by(|&a, &b| s[b].total_cmp(&s[a]));

        Self {
            u: u.select_columns(&order),
            singular_values: s.select_rows(&order),
            v_t: v_t.select_rows(&order),
        }
    }

    /// Number of available latent factors.
    pub fn rank(&self) -> usize {
        self.singular_values.len()
    }

    /// Rows of `U` at the given row indices, all factors kept.
    pub fn select_rows(&self, rows: &[usize]) -> DMatrix<f64> {
        self.u.select_rows(rows)
    }

    /// Columns of `Vᵀ` at the given column indices, all factors kept.
    pub fn select_columns(&self, cols: &[usize]) -> DMatrix<f64> {
        self.v_t.select_columns(cols)
    }

    /// Rank-`k` reconstruction `U[:, :k] · diag(S[:k]) · Vᵀ[:k, :]`.
    pub fn reconstruct(&self, k: usize) -> DMatrix<f64> {
        let mut out = DMatrix::zeros(self.u.nrows(), self.v_t.ncols());
        for r in 0..k.min(self.rank()) {
            add_component(&mut out, &self.u, self.singular_values[r], &self.v_t, r);
        }
        out
    }
}

/// `target += s · u[:, r] · vt[r, :]`.
pub(crate) fn add_component(
    target: &mut DMatrix<f64>,
    u: &DMatrix<f64>,
    s: f64,
    v_t: &DMatrix<f64>,
    r: usize,
) {
    target.ger(s, &u.column(r), &v_t.row(r).transpose(), 1.0);
}

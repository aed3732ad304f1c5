use crate::error::{Error, Result};
use crate::preprocessing::StandardScaler;
use crate::{Matrix, Vector};
use ndarray::s;
use std::cmp::Ordering;

/// Principal component analysis over a standardized matrix.
///
/// Columns are brought to zero mean and unit sample variance before the
/// decomposition (the cross-column comparability the yearly tables assume),
/// then the covariance matrix of the standardized data is eigendecomposed.
/// All eigenpairs are kept, sorted by descending eigenvalue; `n_components`
/// only controls how many score columns [`PCA::transform`] produces.
///
/// The sign of each component axis is not specified. Callers must not depend
/// on it.
#[derive(Clone, Debug)]
pub struct PCA {
    /// One component per row, orthonormal, descending explained variance.
    pub components: Option<Matrix>,
    /// Eigenvalue per component.
    pub explained_variance: Option<Vector>,
    /// Fraction of total variance per component; sums to 1. Reporting only.
    pub explained_variance_ratio: Option<Vector>,
    n_components: Option<usize>,
    scaler: Option<StandardScaler>,
}

impl PCA {
    pub fn new() -> Self {
        Self {
            components: None,
            explained_variance: None,
            explained_variance_ratio: None,
            n_components: None,
            scaler: None,
        }
    }

    /// Number of score columns produced by `transform`. Defaults to all.
    pub fn n_components(mut self, n_components: usize) -> Self {
        self.n_components = Some(n_components);
        self
    }

    pub fn fit(&mut self, x: &Matrix) -> Result<()> {
        let n_samples = x.nrows();
        let n_features = x.ncols();

        if n_features < 2 {
            return Err(Error::InputShape(format!(
                "need at least 2 observation columns, got {}",
                n_features
            )));
        }
        if n_samples < n_features {
            return Err(Error::InputShape(format!(
                "n_samples={} must be >= n_features={} for a full-rank covariance",
                n_samples, n_features
            )));
        }
        if let Some(r) = self.n_components {
            if r == 0 || r > n_features {
                return Err(Error::Parameter(format!(
                    "n_components={} outside [1, {}]",
                    r, n_features
                )));
            }
        }

        // Zero-variance columns surface here as an input error, before any
        // decomposition work.
        let mut scaler = StandardScaler::new();
        let z = scaler.fit_transform(x)?;

        let cov = z.t().dot(&z) / (n_samples as f64 - 1.0);
        let (eigenvalues, eigenvectors) = symmetric_eigen(&cov);

        // Sort eigenpairs by descending eigenvalue.
        let mut order: Vec<usize> = (0..n_features).collect();
        order.sort_by(|&a, &b| {
            eigenvalues[b]
                .partial_cmp(&eigenvalues[a])
                .unwrap_or(Ordering::Equal)
        });

        let mut components = Matrix::zeros((n_features, n_features));
        let mut explained_variance = Vector::zeros(n_features);
        for (rank, &idx) in order.iter().enumerate() {
            components.row_mut(rank).assign(&eigenvectors.column(idx));
            // Covariance is positive semi-definite; clip the round-off.
            explained_variance[rank] = eigenvalues[idx].max(0.0);
        }

        let total_variance = explained_variance.sum();
        let explained_variance_ratio = if total_variance > 0.0 {
            &explained_variance / total_variance
        } else {
            Vector::zeros(n_features)
        };

        self.components = Some(components);
        self.explained_variance = Some(explained_variance);
        self.explained_variance_ratio = Some(explained_variance_ratio);
        self.scaler = Some(scaler);

        Ok(())
    }

    /// Component scores: standardize with the fitted column statistics, then
    /// project onto the retained components.
    pub fn transform(&self, x: &Matrix) -> Result<Matrix> {
        let components = self.components.as_ref().ok_or(Error::NotFitted("PCA"))?;
        let scaler = self.scaler.as_ref().ok_or(Error::NotFitted("PCA"))?;

        if x.ncols() != components.ncols() {
            return Err(Error::InputShape(format!(
                "number of columns in input ({}) doesn't match fitted data ({})",
                x.ncols(),
                components.ncols()
            )));
        }

        let z = scaler.transform(x)?;
        let r = self.n_components.unwrap_or(components.nrows());
        let scores = z.dot(&components.slice(s![..r, ..]).t());

        Ok(scores)
    }

    pub fn fit_transform(&mut self, x: &Matrix) -> Result<Matrix> {
        self.fit(x)?;
        self.transform(x)
    }
}

impl Default for PCA {
    fn default() -> Self {
        Self::new()
    }
}

/// Eigendecomposition of a symmetric matrix by cyclic Jacobi rotations.
///
/// Returns (eigenvalues, eigenvectors-as-columns), unsorted. Rotation order
/// is fixed, so the output is fully deterministic for a given input.
fn symmetric_eigen(matrix: &Matrix) -> (Vector, Matrix) {
    const MAX_SWEEPS: usize = 64;
    const OFF_TOLERANCE: f64 = 1e-11;

    let n = matrix.nrows();
    let mut a = matrix.clone();
    let mut v = Matrix::eye(n);

    for _sweep in 0..MAX_SWEEPS {
        let mut off = 0.0;
        for p in 0..n {
            for q in (p + 1)..n {
                off += a[[p, q]] * a[[p, q]];
            }
        }
        if off.sqrt() < OFF_TOLERANCE {
            break;
        }

        for p in 0..n {
            for q in (p + 1)..n {
                if a[[p, q]].abs() < f64::MIN_POSITIVE {
                    continue;
                }

                let theta = (a[[q, q]] - a[[p, p]]) / (2.0 * a[[p, q]]);
                let t = theta.signum() / (theta.abs() + (theta * theta + 1.0).sqrt());
                let c = 1.0 / (t * t + 1.0).sqrt();
                let s = t * c;

                // A <- R^T A R, rotating the (p, q) plane.
                for i in 0..n {
                    let aip = a[[i, p]];
                    let aiq = a[[i, q]];
                    a[[i, p]] = c * aip - s * aiq;
                    a[[i, q]] = s * aip + c * aiq;
                }
                for i in 0..n {
                    let api = a[[p, i]];
                    let aqi = a[[q, i]];
                    a[[p, i]] = c * api - s * aqi;
                    a[[q, i]] = s * api + c * aqi;
                }
                // Accumulate V <- V R; eigenvectors end up in the columns.
                for i in 0..n {
                    let vip = v[[i, p]];
                    let viq = v[[i, q]];
                    v[[i, p]] = c * vip - s * viq;
                    v[[i, q]] = s * vip + c * viq;
                }
            }
        }
    }

    let eigenvalues = Vector::from_iter((0..n).map(|i| a[[i, i]]));
    (eigenvalues, v)
}

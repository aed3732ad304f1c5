use thiserror::Error;

/// Result type alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the loading, decomposition and clustering stages.
///
/// Validation failures (`InputShape`, `Parameter`) fire before any iteration
/// starts. Non-convergence is not an error: it is surfaced through
/// [`crate::cluster::KMeansFit::converged`] so exploratory callers can retry
/// with different parameters.
#[derive(Error, Debug)]
pub enum Error {
    /// The input table is malformed: ragged rows, non-numeric cells after
    /// cleaning, or a zero-variance column where standardization is required.
    #[error("input shape error: {0}")]
    InputShape(String),

    /// A caller-supplied parameter is out of range for the given data.
    #[error("parameter error: {0}")]
    Parameter(String),

    /// A cluster lost all of its members mid-iteration and the clusterer was
    /// configured to fail rather than re-seed.
    #[error("cluster {id} lost all members at iteration {iter}")]
    EmptyCluster { id: usize, iter: usize },

    /// An estimator was used before `fit`.
    #[error("{0} not fitted. Call fit() first.")]
    NotFitted(&'static str),
}

use crate::cluster::{KMeans, KMeansFit};
use crate::dataset::Dataset;
use crate::error::{Error, Result};

/// One level of exploratory refinement: a chosen cluster's rows, re-clustered
/// on their own with an independent (k, seed) run.
#[derive(Clone, Debug)]
pub struct Refinement {
    /// Which parent cluster was carved out.
    pub parent_cluster: usize,
    /// The carved-out rows, labels and year columns preserved.
    pub subset: Dataset,
    /// The fresh k-means fit over the subset.
    pub fit: KMeansFit,
}

/// Re-cluster the rows of one cluster from a completed fit.
///
/// The parent assignment is discarded for the subset; `clusterer` carries its
/// own k and seed. There is no automatic stopping rule — the caller decides
/// whether to refine again, to arbitrary depth.
pub fn refine_cluster(
    data: &Dataset,
    fit: &KMeansFit,
    cluster_id: usize,
    clusterer: &KMeans,
) -> Result<Refinement> {
    if fit.labels.len() != data.n_rows() {
        return Err(Error::InputShape(format!(
            "fit covers {} rows but dataset has {}",
            fit.labels.len(),
            data.n_rows()
        )));
    }
    if cluster_id < 1 || cluster_id > fit.n_clusters() {
        return Err(Error::Parameter(format!(
            "cluster id {} outside [1, {}]",
            cluster_id,
            fit.n_clusters()
        )));
    }

    let members = fit.members(cluster_id);
    let subset = data.subset(&members)?;
    let sub_fit = clusterer.fit(&subset.values)?;

    Ok(Refinement {
        parent_cluster: cluster_id,
        subset,
        fit: sub_fit,
    })
}

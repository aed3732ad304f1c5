use crate::error::{Error, Result};
use crate::{Matrix, Vector};
use ndarray::ArrayView1;

/// Euclidean distance between two observation vectors.
pub fn euclidean_distance(a: &ArrayView1<f64>, b: &ArrayView1<f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Per-cluster within-cluster sum of squares.
///
/// `labels` holds cluster ids in [1, k] where k is the centroid row count.
pub fn within_cluster_ss(x: &Matrix, labels: &[usize], centroids: &Matrix) -> Result<Vector> {
    if labels.len() != x.nrows() {
        return Err(Error::InputShape(format!(
            "{} labels for {} rows",
            labels.len(),
            x.nrows()
        )));
    }
    if centroids.ncols() != x.ncols() {
        return Err(Error::InputShape(format!(
            "centroid width ({}) doesn't match data width ({})",
            centroids.ncols(),
            x.ncols()
        )));
    }

    let k = centroids.nrows();
    let mut wcss = Vector::zeros(k);
    for (i, &label) in labels.iter().enumerate() {
        if label < 1 || label > k {
            return Err(Error::Parameter(format!(
                "cluster id {} outside [1, {}]",
                label, k
            )));
        }
        let d = euclidean_distance(&x.row(i), &centroids.row(label - 1));
        wcss[label - 1] += d * d;
    }

    Ok(wcss)
}

/// Total within-cluster sum of squares across all clusters.
pub fn total_wcss(x: &Matrix, labels: &[usize], centroids: &Matrix) -> Result<f64> {
    Ok(within_cluster_ss(x, labels, centroids)?.sum())
}

//! Plain-data tables for an external reporter.
//!
//! The plotting and printing sink lives outside this crate; these functions
//! pair computation results back up with row labels and year headers so the
//! sink can render scatterplots, line charts and membership listings without
//! touching matrices.

use crate::cluster::KMeansFit;
use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::Matrix;

/// Row label → component coordinates, for scatterplot rendering.
pub fn scores_table(data: &Dataset, scores: &Matrix) -> Result<Vec<(String, Vec<f64>)>> {
    if scores.nrows() != data.n_rows() {
        return Err(Error::InputShape(format!(
            "scores cover {} rows but dataset has {}",
            scores.nrows(),
            data.n_rows()
        )));
    }

    Ok(data
        .labels
        .iter()
        .zip(scores.rows())
        .map(|(label, row)| (label.clone(), row.to_vec()))
        .collect())
}

/// Per-cluster row-label lists, ids ascending, for textual enumeration.
pub fn membership(data: &Dataset, fit: &KMeansFit) -> Result<Vec<Vec<String>>> {
    if fit.labels.len() != data.n_rows() {
        return Err(Error::InputShape(format!(
            "fit covers {} rows but dataset has {}",
            fit.labels.len(),
            data.n_rows()
        )));
    }

    let mut groups = vec![Vec::new(); fit.n_clusters()];
    for (i, &cluster) in fit.labels.iter().enumerate() {
        groups[cluster - 1].push(data.labels[i].clone());
    }
    Ok(groups)
}

/// Cluster id → (year, centroid value) pairs, for line-chart rendering.
pub fn centroid_table(
    data: &Dataset,
    fit: &KMeansFit,
) -> Result<Vec<(usize, Vec<(String, f64)>)>> {
    if fit.centroids.ncols() != data.n_cols() {
        return Err(Error::InputShape(format!(
            "centroid width ({}) doesn't match dataset width ({})",
            fit.centroids.ncols(),
            data.n_cols()
        )));
    }

    Ok((1..=fit.n_clusters())
        .map(|cluster| {
            let series = data
                .columns
                .iter()
                .cloned()
                .zip(fit.centroids.row(cluster - 1).iter().copied())
                .collect();
            (cluster, series)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::KMeans;
    use ndarray::array;

    fn fixture() -> Dataset {
        Dataset::new(
            vec!["a".into(), "b".into(), "c".into(), "d".into()],
            vec!["X1990".into(), "X1991".into()],
            array![[0.0, 0.0], [1.0, 1.0], [10.0, 10.0], [11.0, 11.0]],
        )
        .unwrap()
    }

    #[test]
    fn test_scores_table_pairs_labels() {
        let data = fixture();
        let scores = array![[0.1, 0.2], [0.3, 0.4], [0.5, 0.6], [0.7, 0.8]];
        let table = scores_table(&data, &scores).unwrap();

        assert_eq!(table.len(), 4);
        assert_eq!(table[0].0, "a");
        assert_eq!(table[3].1, vec![0.7, 0.8]);
    }

    #[test]
    fn test_scores_table_row_mismatch() {
        let data = fixture();
        let scores = array![[0.1, 0.2]];
        assert!(matches!(
            scores_table(&data, &scores),
            Err(Error::InputShape(_))
        ));
    }

    #[test]
    fn test_membership_lists() {
        let data = fixture();
        let fit = KMeans::new(2).seed(1).fit(&data.values).unwrap();
        let groups = membership(&data, &fit).unwrap();

        assert_eq!(groups.len(), 2);
        let with_a = groups.iter().find(|g| g.contains(&"a".to_string())).unwrap();
        assert!(with_a.contains(&"b".to_string()));
        let with_c = groups.iter().find(|g| g.contains(&"c".to_string())).unwrap();
        assert!(with_c.contains(&"d".to_string()));
    }

    #[test]
    fn test_centroid_table_years() {
        let data = fixture();
        let fit = KMeans::new(2).seed(1).fit(&data.values).unwrap();
        let table = centroid_table(&data, &fit).unwrap();

        assert_eq!(table.len(), 2);
        for (cluster, series) in &table {
            assert!(*cluster >= 1 && *cluster <= 2);
            assert_eq!(series.len(), 2);
            assert_eq!(series[0].0, "X1990");
            assert_eq!(series[1].0, "X1991");
        }
    }
}

use crate::error::{Error, Result};
use crate::Matrix;
use ndarray::Axis;
use std::collections::HashSet;

/// A labeled numeric table: one row per entity, one column per year.
///
/// Immutable once constructed. All derived artifacts (scaled matrices,
/// component scores, cluster assignments) are recomputed in full from it;
/// nothing updates a `Dataset` in place.
#[derive(Clone, Debug)]
pub struct Dataset {
    /// Entity name per row, in row order.
    pub labels: Vec<String>,
    /// Column headers, e.g. "X1990".."X2007".
    pub columns: Vec<String>,
    /// Observation matrix, `labels.len()` rows by `columns.len()` columns.
    pub values: Matrix,
}

impl Dataset {
    pub fn new(labels: Vec<String>, columns: Vec<String>, values: Matrix) -> Result<Self> {
        if labels.len() != values.nrows() {
            return Err(Error::InputShape(format!(
                "{} row labels for {} rows",
                labels.len(),
                values.nrows()
            )));
        }
        if columns.len() != values.ncols() {
            return Err(Error::InputShape(format!(
                "{} column headers for {} columns",
                columns.len(),
                values.ncols()
            )));
        }

        let mut seen = HashSet::new();
        for label in &labels {
            if !seen.insert(label.as_str()) {
                return Err(Error::InputShape(format!("duplicate row label '{}'", label)));
            }
        }

        Ok(Self {
            labels,
            columns,
            values,
        })
    }

    pub fn n_rows(&self) -> usize {
        self.values.nrows()
    }

    pub fn n_cols(&self) -> usize {
        self.values.ncols()
    }

    /// A new dataset holding the given rows, in the given order.
    ///
    /// Column headers are shared; row labels follow the selection. Used by
    /// the refinement driver to carve one cluster's rows out for re-clustering.
    pub fn subset(&self, indices: &[usize]) -> Result<Self> {
        for &i in indices {
            if i >= self.n_rows() {
                return Err(Error::Parameter(format!(
                    "row index {} out of range for {} rows",
                    i,
                    self.n_rows()
                )));
            }
        }

        let labels = indices.iter().map(|&i| self.labels[i].clone()).collect();
        let values = self.values.select(Axis(0), indices);
        Dataset::new(labels, self.columns.clone(), values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn fixture() -> Dataset {
        Dataset::new(
            vec!["a".into(), "b".into(), "c".into()],
            vec!["X1990".into(), "X1991".into()],
            array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]],
        )
        .unwrap()
    }

    #[test]
    fn test_dataset_creation() {
        let data = fixture();
        assert_eq!(data.n_rows(), 3);
        assert_eq!(data.n_cols(), 2);
    }

    #[test]
    fn test_label_count_mismatch() {
        let result = Dataset::new(
            vec!["a".into()],
            vec!["X1990".into(), "X1991".into()],
            array![[1.0, 2.0], [3.0, 4.0]],
        );
        assert!(matches!(result, Err(Error::InputShape(_))));
    }

    #[test]
    fn test_duplicate_labels_rejected() {
        let result = Dataset::new(
            vec!["a".into(), "a".into()],
            vec!["X1990".into(), "X1991".into()],
            array![[1.0, 2.0], [3.0, 4.0]],
        );
        assert!(matches!(result, Err(Error::InputShape(_))));
    }

    #[test]
    fn test_subset() {
        let data = fixture();
        let sub = data.subset(&[2, 0]).unwrap();
        assert_eq!(sub.labels, vec!["c".to_string(), "a".to_string()]);
        assert_eq!(sub.values, array![[5.0, 6.0], [1.0, 2.0]]);
        assert_eq!(sub.columns, data.columns);
    }

    #[test]
    fn test_subset_out_of_range() {
        let data = fixture();
        assert!(matches!(data.subset(&[3]), Err(Error::Parameter(_))));
    }
}

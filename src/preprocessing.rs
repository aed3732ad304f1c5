use crate::error::{Error, Result};
use crate::{Matrix, Vector};

/// Per-column standardization: subtract the mean, divide by the sample
/// standard deviation (ddof = 1, the same n - 1 denominator the covariance
/// in [`crate::PCA`] uses).
#[derive(Clone, Debug)]
pub struct StandardScaler {
    mean: Option<Vector>,
    std: Option<Vector>,
}

impl StandardScaler {
    pub fn new() -> Self {
        Self {
            mean: None,
            std: None,
        }
    }

    pub fn fit(&mut self, data: &Matrix) -> Result<()> {
        if data.nrows() < 2 {
            return Err(Error::InputShape(format!(
                "need at least 2 rows to estimate column spread, got {}",
                data.nrows()
            )));
        }

        let mean = data
            .mean_axis(ndarray::Axis(0))
            .ok_or_else(|| Error::InputShape("empty input matrix".to_string()))?;
        let std = data.std_axis(ndarray::Axis(0), 1.0);

        for (j, &s) in std.iter().enumerate() {
            if s == 0.0 || !s.is_finite() {
                return Err(Error::InputShape(format!(
                    "column {} has zero variance and cannot be standardized",
                    j
                )));
            }
        }

        self.mean = Some(mean);
        self.std = Some(std);
        Ok(())
    }

    pub fn transform(&self, data: &Matrix) -> Result<Matrix> {
        let mean = self.mean.as_ref().ok_or(Error::NotFitted("StandardScaler"))?;
        let std = self.std.as_ref().ok_or(Error::NotFitted("StandardScaler"))?;

        if data.ncols() != mean.len() {
            return Err(Error::InputShape(format!(
                "number of columns in input ({}) doesn't match fitted data ({})",
                data.ncols(),
                mean.len()
            )));
        }

        let mut result = data.clone();
        for mut row in result.axis_iter_mut(ndarray::Axis(0)) {
            row -= mean;
            row /= std;
        }

        Ok(result)
    }

    pub fn fit_transform(&mut self, data: &Matrix) -> Result<Matrix> {
        self.fit(data)?;
        self.transform(data)
    }
}

impl Default for StandardScaler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_standard_scaler() {
        let data = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let mut scaler = StandardScaler::new();

        let scaled = scaler.fit_transform(&data).unwrap();
        assert_eq!(scaled.shape(), data.shape());

        // Each column ends up centered with unit sample variance.
        for j in 0..scaled.ncols() {
            let col = scaled.column(j);
            assert!(col.mean().unwrap().abs() < 1e-12);
            let var: f64 = col.mapv(|v| v * v).sum() / (scaled.nrows() as f64 - 1.0);
            assert!((var - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_zero_variance_column_rejected() {
        let data = array![[1.0, 5.0], [2.0, 5.0], [3.0, 5.0]];
        let mut scaler = StandardScaler::new();
        assert!(matches!(scaler.fit(&data), Err(Error::InputShape(_))));
    }

    #[test]
    fn test_transform_without_fit() {
        let data = array![[1.0, 2.0], [3.0, 4.0]];
        let scaler = StandardScaler::new();
        assert!(matches!(scaler.transform(&data), Err(Error::NotFitted(_))));
    }

    #[test]
    fn test_transform_width_mismatch() {
        let train = array![[1.0, 2.0], [3.0, 4.0], [5.0, 7.0]];
        let test = array![[1.0, 2.0, 3.0]];
        let mut scaler = StandardScaler::new();
        scaler.fit(&train).unwrap();
        assert!(matches!(scaler.transform(&test), Err(Error::InputShape(_))));
    }
}

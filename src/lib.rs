//! Exploratory cluster analysis over labeled yearly time-series tables.
//!
//! The crate implements the reproducible core of a PCA + k-means
//! exploration: load a labeled table (rows = entities such as countries,
//! columns = yearly observations), project it with a standardized principal
//! component analysis, partition it with seeded k-means, and optionally
//! re-cluster one cluster's subset to look for sub-groups. Plotting and
//! printing stay with the caller; the [`report`] module hands back plain
//! tables for that.
//!
//! # Examples
//!
//! ```rust
//! use epiclust::{KMeans, PCA, Matrix};
//! use ndarray::array;
//!
//! let x = array![
//!     [0.0, 0.0, 0.0],
//!     [1.0, 1.0, 1.0],
//!     [10.0, 10.0, 10.0],
//!     [11.0, 11.0, 11.0]
//! ];
//!
//! // Two-component projection for a scatterplot.
//! let mut pca = PCA::new().n_components(2);
//! let scores = pca.fit_transform(&x).unwrap();
//! assert_eq!(scores.shape(), &[4, 2]);
//!
//! // Seeded k-means on the original (unscaled) matrix.
//! let fit = KMeans::new(2).seed(7).fit(&x).unwrap();
//! assert_eq!(fit.labels.len(), 4);
//! assert!(fit.labels.iter().all(|&c| c == 1 || c == 2));
//! ```

pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod cluster;
pub mod dataset;
pub mod decomposition;
pub mod error;
pub mod loading;
pub mod metrics;
pub mod preprocessing;
pub mod report;

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;

pub use cluster::{KMeans, KMeansFit, Refinement, refine_cluster};
pub use dataset::Dataset;
pub use decomposition::PCA;
pub use error::{Error, Result};
pub use loading::{parse_csv, read_csv};
pub use preprocessing::StandardScaler;

//! Clustering: seeded k-means and the exploratory refinement driver.
//!
//! # Examples
//!
//! ## Seeded K-Means
//! ```rust
//! use epiclust::{KMeans, Matrix};
//! use ndarray::array;
//!
//! let x = array![
//!     [1.0, 1.0],
//!     [1.5, 2.0],
//!     [10.0, 10.5],
//!     [11.0, 10.0]
//! ];
//!
//! let fit = KMeans::new(2).seed(42).fit(&x).unwrap();
//!
//! // Cluster ids are dense in [1, k].
//! assert!(fit.labels.iter().all(|&c| c == 1 || c == 2));
//!
//! // Identical (matrix, k, seed) reproduces the identical fit.
//! let again = KMeans::new(2).seed(42).fit(&x).unwrap();
//! assert_eq!(fit.labels, again.labels);
//! println!("total WCSS: {:.4}", fit.total_wcss);
//! ```
//!
//! ## Refining one cluster
//! ```rust
//! use epiclust::{Dataset, KMeans, refine_cluster};
//! use ndarray::array;
//!
//! let data = Dataset::new(
//!     vec!["a".into(), "b".into(), "c".into(), "d".into()],
//!     vec!["X1990".into(), "X1991".into()],
//!     array![[0.0, 0.0], [1.0, 1.0], [10.0, 10.0], [11.0, 11.0]],
//! ).unwrap();
//!
//! let fit = KMeans::new(2).seed(7).fit(&data.values).unwrap();
//! let chosen = fit.labels[0];
//! let sub = refine_cluster(&data, &fit, chosen, &KMeans::new(2).seed(8)).unwrap();
//! println!("sub-cluster sizes: {:?}", sub.fit.sizes);
//! ```

mod kmeans;
mod refine;

pub use kmeans::{KMeans, KMeansFit};
pub use refine::{Refinement, refine_cluster};

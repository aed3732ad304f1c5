//! Dimensionality reduction.
//!
//! # Examples
//!
//! ## Principal Component Analysis (PCA)
//! ```rust
//! use epiclust::{PCA, Matrix};
//! use ndarray::array;
//!
//! let x = array![
//!     [1.0, 2.0, 3.1],
//!     [4.0, 5.2, 6.0],
//!     [7.1, 8.0, 9.2],
//!     [10.0, 11.3, 12.0]
//! ];
//!
//! let mut pca = PCA::new().n_components(2);
//! let scores = pca.fit_transform(&x).unwrap();
//! assert_eq!(scores.shape(), &[4, 2]);
//!
//! // Fraction of variance each component explains (reporting only).
//! let explained = pca.explained_variance_ratio.as_ref().unwrap();
//! println!("Explained variance ratio: {:?}", explained);
//! ```

mod pca;

pub use pca::PCA;

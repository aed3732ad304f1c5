use crate::error::{Error, Result};
use crate::metrics::{euclidean_distance, within_cluster_ss};
use crate::{Matrix, Vector};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Seeded k-means (Lloyd's algorithm).
///
/// The seed is an explicit parameter of every run, never process-global
/// state: identical `(matrix, k, seed)` always yields the identical fit,
/// which keeps cluster-by-cluster commentary valid across re-runs.
///
/// Centroids are initialized by sampling k distinct rows with a
/// `StdRng` seeded from `seed`. Iteration stops when assignments stop
/// changing or `max_iter` is reached; hitting the cap is not an error, it is
/// reported through [`KMeansFit::converged`].
#[derive(Clone, Debug)]
pub struct KMeans {
    n_clusters: usize,
    max_iter: usize,
    seed: u64,
    empty_action: String,
}

/// The completed result of one k-means run, detached from the estimator so
/// repeated re-parameterized runs over the same matrix share nothing.
#[derive(Clone, Debug)]
pub struct KMeansFit {
    /// Cluster id per row, dense in [1, k].
    pub labels: Vec<usize>,
    /// One centroid per cluster id (row `id - 1`), in original column space.
    pub centroids: Matrix,
    /// Within-cluster sum of squares per cluster.
    pub wcss: Vector,
    /// Row count per cluster.
    pub sizes: Vec<usize>,
    /// Sum of `wcss` over all clusters.
    pub total_wcss: f64,
    /// Assignment passes performed.
    pub n_iter: usize,
    /// Whether assignments stabilized before the iteration cap.
    pub converged: bool,
    /// Number of empty-cluster recoveries under the "reseed" policy.
    pub reseeded: usize,
}

impl KMeansFit {
    pub fn n_clusters(&self) -> usize {
        self.centroids.nrows()
    }

    /// Row indices assigned to `cluster_id`. Empty if the id is out of range.
    pub fn members(&self, cluster_id: usize) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|&(_, &label)| label == cluster_id)
            .map(|(i, _)| i)
            .collect()
    }
}

impl KMeans {
    pub fn new(n_clusters: usize) -> Self {
        Self {
            n_clusters,
            max_iter: 10,
            seed: 0,
            empty_action: "reseed".to_string(),
        }
    }

    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// What to do when a cluster loses all members mid-iteration:
    /// "reseed" moves its centroid to the point farthest from its assigned
    /// centroid; "fail" aborts the run with [`Error::EmptyCluster`].
    pub fn empty_action(mut self, action: &str) -> Self {
        match action {
            "reseed" | "fail" => {
                self.empty_action = action.to_string();
            }
            _ => panic!(
                "Invalid empty_action: {}. Must be 'reseed' or 'fail'",
                action
            ),
        }
        self
    }

    pub fn fit(&self, x: &Matrix) -> Result<KMeansFit> {
        let n = x.nrows();
        let m = x.ncols();
        let k = self.n_clusters;

        if n == 0 || m == 0 {
            return Err(Error::InputShape(
                "input matrix must have at least one row and one column".to_string(),
            ));
        }
        if k == 0 {
            return Err(Error::Parameter("n_clusters must be >= 1".to_string()));
        }
        if k > n {
            return Err(Error::Parameter(format!(
                "n_samples={} should be >= n_clusters={}",
                n, k
            )));
        }

        let mut centroids = self.initialize_centroids(x);
        // 0 is not a valid id, so the first assignment pass always registers
        // as a change.
        let mut labels = vec![0usize; n];
        let mut converged = false;
        let mut reseeded = 0usize;
        let mut n_iter = 0usize;

        for iter in 0..self.max_iter {
            n_iter = iter + 1;

            // Assign each row to the nearest centroid. Strict comparison in
            // ascending id order breaks ties toward the lowest id.
            let mut changed = false;
            for i in 0..n {
                let mut min_distance = f64::INFINITY;
                let mut closest = 0;
                for c in 0..k {
                    let distance = euclidean_distance(&x.row(i), &centroids.row(c));
                    if distance < min_distance {
                        min_distance = distance;
                        closest = c;
                    }
                }
                let label = closest + 1;
                if labels[i] != label {
                    labels[i] = label;
                    changed = true;
                }
            }

            if !changed {
                converged = true;
                break;
            }

            // Recompute each centroid as the mean of its assigned rows.
            let mut sums = Matrix::zeros((k, m));
            let mut counts = vec![0usize; k];
            for i in 0..n {
                let c = labels[i] - 1;
                counts[c] += 1;
                let mut row = sums.row_mut(c);
                row += &x.row(i);
            }

            let mut taken = vec![false; n];
            for c in 0..k {
                if counts[c] > 0 {
                    let mean = sums.row(c).mapv(|v| v / counts[c] as f64);
                    centroids.row_mut(c).assign(&mean);
                } else if self.empty_action == "fail" {
                    return Err(Error::EmptyCluster {
                        id: c + 1,
                        iter: n_iter,
                    });
                } else {
                    // Re-seed from the row farthest from its own centroid.
                    // Deterministic: no RNG draw, lowest index wins ties.
                    let far = self.farthest_row(x, &labels, &centroids, &taken);
                    taken[far] = true;
                    let row = x.row(far).to_owned();
                    centroids.row_mut(c).assign(&row);
                    reseeded += 1;
                }
            }
        }

        let wcss = within_cluster_ss(x, &labels, &centroids)?;
        let mut sizes = vec![0usize; k];
        for &label in &labels {
            sizes[label - 1] += 1;
        }
        let total_wcss = wcss.sum();

        Ok(KMeansFit {
            labels,
            centroids,
            wcss,
            sizes,
            total_wcss,
            n_iter,
            converged,
            reseeded,
        })
    }

    /// Sample k distinct rows as the initial centroids.
    fn initialize_centroids(&self, x: &Matrix) -> Matrix {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let indices = rand::seq::index::sample(&mut rng, x.nrows(), self.n_clusters).into_vec();

        let mut centroids = Matrix::zeros((self.n_clusters, x.ncols()));
        for (c, &i) in indices.iter().enumerate() {
            centroids.row_mut(c).assign(&x.row(i));
        }
        centroids
    }

    fn farthest_row(
        &self,
        x: &Matrix,
        labels: &[usize],
        centroids: &Matrix,
        taken: &[bool],
    ) -> usize {
        let mut best = 0;
        let mut best_distance = f64::NEG_INFINITY;
        for i in 0..x.nrows() {
            if taken[i] {
                continue;
            }
            let distance = euclidean_distance(&x.row(i), &centroids.row(labels[i] - 1));
            if distance > best_distance {
                best_distance = distance;
                best = i;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn two_pair_fixture() -> Matrix {
        array![
            [0.0, 0.0, 0.0],
            [1.0, 1.0, 1.0],
            [10.0, 10.0, 10.0],
            [11.0, 11.0, 11.0]
        ]
    }

    fn four_pair_fixture() -> Matrix {
        array![
            [0.0, 0.0],
            [0.1, 0.0],
            [10.0, 0.0],
            [10.1, 0.0],
            [0.0, 10.0],
            [0.1, 10.0],
            [10.0, 10.0],
            [10.1, 10.0]
        ]
    }

    #[test]
    fn test_two_pair_split() {
        let x = two_pair_fixture();
        let fit = KMeans::new(2).seed(1).fit(&x).unwrap();

        assert_eq!(fit.labels[0], fit.labels[1]);
        assert_eq!(fit.labels[2], fit.labels[3]);
        assert_ne!(fit.labels[0], fit.labels[2]);
        assert!(fit.converged);

        let low = fit.centroids.row(fit.labels[0] - 1);
        let high = fit.centroids.row(fit.labels[2] - 1);
        for j in 0..3 {
            assert!((low[j] - 0.5).abs() < 1e-12);
            assert!((high[j] - 10.5).abs() < 1e-12);
        }
        assert_eq!(fit.sizes, vec![2, 2]);
    }

    #[test]
    fn test_determinism() {
        let x = four_pair_fixture();
        let a = KMeans::new(3).seed(99).fit(&x).unwrap();
        let b = KMeans::new(3).seed(99).fit(&x).unwrap();

        assert_eq!(a.labels, b.labels);
        assert_eq!(a.centroids, b.centroids);
        assert_eq!(a.total_wcss, b.total_wcss);
        assert_eq!(a.n_iter, b.n_iter);
    }

    #[test]
    fn test_labels_dense_and_sizes_sum() {
        let x = four_pair_fixture();
        for k in 1..=4 {
            let fit = KMeans::new(k).seed(5).fit(&x).unwrap();
            assert!(fit.labels.iter().all(|&c| c >= 1 && c <= k));
            assert_eq!(fit.sizes.iter().sum::<usize>(), x.nrows());
            assert_eq!(fit.labels.len(), x.nrows());
            assert!(fit.n_iter <= 10);
        }
    }

    #[test]
    fn test_centroid_is_mean_of_members() {
        let x = four_pair_fixture();
        let fit = KMeans::new(3).seed(7).fit(&x).unwrap();

        for c in 1..=fit.n_clusters() {
            let members = fit.members(c);
            if members.is_empty() {
                continue;
            }
            for j in 0..x.ncols() {
                let mean: f64 =
                    members.iter().map(|&i| x[[i, j]]).sum::<f64>() / members.len() as f64;
                assert!((fit.centroids[[c - 1, j]] - mean).abs() < 1e-10);
            }
        }
    }

    #[test]
    fn test_single_cluster_is_global_mean() {
        let x = two_pair_fixture();
        let fit = KMeans::new(1).seed(3).fit(&x).unwrap();

        assert!(fit.labels.iter().all(|&c| c == 1));
        for j in 0..3 {
            assert!((fit.centroids[[0, j]] - 5.5).abs() < 1e-12);
        }
    }

    #[test]
    fn test_wcss_non_increasing_in_k() {
        // Soft property over a seed family: compare the best run per k.
        let x = four_pair_fixture();
        let mut best = Vec::new();
        for k in 1..=4 {
            let run = (0..11)
                .map(|seed| KMeans::new(k).seed(seed).fit(&x).unwrap().total_wcss)
                .fold(f64::INFINITY, f64::min);
            best.push(run);
        }
        for w in best.windows(2) {
            assert!(w[1] <= w[0] + 1e-9, "wcss increased: {:?}", best);
        }
    }

    #[test]
    fn test_k_zero_rejected() {
        let x = two_pair_fixture();
        assert!(matches!(
            KMeans::new(0).fit(&x),
            Err(Error::Parameter(_))
        ));
    }

    #[test]
    fn test_insufficient_samples() {
        let x = array![[1.0, 2.0]];
        assert!(matches!(
            KMeans::new(2).fit(&x),
            Err(Error::Parameter(_))
        ));
    }

    #[test]
    fn test_empty_matrix_rejected() {
        let x = Matrix::zeros((0, 3));
        assert!(matches!(
            KMeans::new(1).fit(&x),
            Err(Error::InputShape(_))
        ));
    }

    #[test]
    fn test_invalid_empty_action() {
        std::panic::catch_unwind(|| {
            KMeans::new(2).empty_action("shrug");
        })
        .expect_err("Should panic on unknown empty_action");
    }

    #[test]
    fn test_fail_policy_on_clean_run() {
        // No cluster empties on this data; the "fail" policy must not fire.
        let x = two_pair_fixture();
        let fit = KMeans::new(2).seed(1).empty_action("fail").fit(&x).unwrap();
        assert_eq!(fit.reseeded, 0);
    }
}

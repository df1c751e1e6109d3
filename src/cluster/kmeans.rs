use crate::cluster::labels::labels_from_centroids;
use crate::dataset::PointSet;
use crate::error::{ClusterError, Result};
use crate::{Labels, Matrix, euclidean_distance};
use ndarray::s;

#[derive(Clone, Debug)]
pub struct KMeans {
    pub cluster_centers: Option<Matrix>,
    pub labels: Option<Labels>,
    pub inertia: Option<f64>,
    pub n_iter: Option<usize>,
    pub inertia_history: Vec<f64>,
    n_clusters: usize,
    max_iter: usize,
    tolerance: f64,
}

impl KMeans {
    pub fn new(n_clusters: usize) -> Self {
        Self {
            cluster_centers: None,
            labels: None,
            inertia: None,
            n_iter: None,
            inertia_history: Vec::new(),
            n_clusters,
            max_iter: 300,
            tolerance: 1e-4,
        }
    }

    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn fit(&mut self, points: &PointSet) -> Result<()> {
        let n_samples = points.n_samples();

        if self.n_clusters == 0 || self.n_clusters > n_samples {
            return Err(ClusterError::InvalidK {
                k: self.n_clusters,
                n_samples,
            });
        }

        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ClusterError::InvalidArgument(format!(
                "tolerance must be a non-negative number, got {}",
                self.tolerance
            )));
        }

        // Seed with the first k points, in input order
        let mut centroids = points
            .as_matrix()
            .slice(s![..self.n_clusters, ..])
            .to_owned();
        let mut history = Vec::new();
        let mut n_iter = 0;
        let mut converged = false;

        while n_iter < self.max_iter {
            let assignment = labels_from_centroids(points, &centroids)?;
            let moved = self.update_centroids(points, &assignment, &mut centroids)?;
            n_iter += 1;

            let iteration_inertia = inertia(points, &centroids, &assignment)?;
            tracing::debug!(
                iteration = n_iter,
                inertia = iteration_inertia,
                moved,
                "k-means iteration"
            );
            history.push(iteration_inertia);

            if !moved {
                converged = true;
                break;
            }
        }

        if converged {
            tracing::info!(n_iter, "k-means converged");
        } else if self.max_iter > 0 {
            tracing::warn!(
                max_iter = self.max_iter,
                "k-means reached the iteration cap before converging"
            );
        }

        // Labels always describe the final centroids, even when the cap cut
        // the loop short of a final assignment step.
        let labels = labels_from_centroids(points, &centroids)?;

        self.inertia = Some(inertia(points, &centroids, &labels)?);
        self.cluster_centers = Some(centroids);
        self.labels = Some(labels);
        self.n_iter = Some(n_iter);
        self.inertia_history = history;

        Ok(())
    }

    pub fn predict(&self, points: &PointSet) -> Result<Labels> {
        let centroids = self
            .cluster_centers
            .as_ref()
            .ok_or_else(|| {
                ClusterError::InvalidArgument("KMeans not fitted. Call fit() first.".to_string())
            })?;

        labels_from_centroids(points, centroids)
    }

    pub fn fit_predict(&mut self, points: &PointSet) -> Result<Labels> {
        self.fit(points)?;
        self.labels
            .clone()
            .ok_or_else(|| {
                ClusterError::InvalidArgument("KMeans fit produced no labels".to_string())
            })
    }

    /// Recompute every non-empty cluster's mean. Returns whether any centroid
    /// moved by at least the tolerance.
    fn update_centroids(
        &self,
        points: &PointSet,
        assignment: &Labels,
        centroids: &mut Matrix,
    ) -> Result<bool> {
        let mut sums = Matrix::zeros((self.n_clusters, points.n_features()));
        let mut counts = vec![0usize; self.n_clusters];

        for (i, &cluster) in assignment.iter().enumerate() {
            let mut row = sums.row_mut(cluster);
            row += &points.point(i);
            counts[cluster] += 1;
        }

        let mut moved = false;
        for k in 0..self.n_clusters {
            // Empty clusters keep their previous centroid
            if counts[k] == 0 {
                continue;
            }

            let new_center = sums.row(k).mapv(|v| v / counts[k] as f64);
            if euclidean_distance(&new_center.view(), &centroids.row(k))? >= self.tolerance {
                moved = true;
            }
            centroids.row_mut(k).assign(&new_center);
        }

        Ok(moved)
    }
}

/// Within-cluster sum of squared distances.
fn inertia(points: &PointSet, centroids: &Matrix, labels: &Labels) -> Result<f64> {
    let mut total = 0.0;
    for (i, &cluster) in labels.iter().enumerate() {
        let distance = euclidean_distance(&points.point(i), &centroids.row(cluster))?;
        total += distance * distance;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn scenario_a() -> PointSet {
        PointSet::new(array![[0.0, 0.0], [10.0, 0.0], [0.0, 1.0], [10.0, 1.0]]).unwrap()
    }

    #[test]
    fn test_kmeans_basic() {
        let points = PointSet::new(array![
            [1.0, 1.0],
            [1.5, 2.0],
            [3.0, 4.0],
            [5.0, 7.0],
            [3.5, 5.0],
            [4.5, 5.0],
            [3.5, 4.5]
        ])
        .unwrap();

        let mut kmeans = KMeans::new(2);
        let labels = kmeans.fit_predict(&points).unwrap();

        assert_eq!(labels.len(), points.n_samples());
        assert!(kmeans.cluster_centers.is_some());
        assert!(kmeans.inertia.is_some());

        let unique_labels: std::collections::HashSet<usize> = labels.iter().copied().collect();
        assert_eq!(unique_labels.len(), 2);
        assert!(labels.iter().all(|&l| l < 2));
    }

    #[test]
    fn test_kmeans_scenario_a() {
        let mut kmeans = KMeans::new(2).max_iter(300).tolerance(1e-4);
        kmeans.fit(&scenario_a()).unwrap();

        let centers = kmeans.cluster_centers.as_ref().unwrap();
        assert!((centers[[0, 0]] - 0.0).abs() < 1e-9);
        assert!((centers[[0, 1]] - 0.5).abs() < 1e-9);
        assert!((centers[[1, 0]] - 10.0).abs() < 1e-9);
        assert!((centers[[1, 1]] - 0.5).abs() < 1e-9);
        assert!(kmeans.n_iter.unwrap() <= 2);
        assert_eq!(kmeans.labels.as_ref().unwrap(), &array![0, 1, 0, 1]);
    }

    #[test]
    fn test_kmeans_deterministic() {
        let points = PointSet::new(array![
            [1.0, 2.0],
            [8.0, 1.0],
            [2.5, 2.0],
            [9.0, 0.5],
            [1.5, 3.0],
            [7.5, 2.5]
        ])
        .unwrap();

        let mut first = KMeans::new(3);
        let mut second = KMeans::new(3);
        first.fit(&points).unwrap();
        second.fit(&points).unwrap();

        assert_eq!(first.cluster_centers, second.cluster_centers);
        assert_eq!(first.labels, second.labels);
    }

    #[test]
    fn test_kmeans_inertia_non_increasing() {
        let points = PointSet::new(array![
            [0.0, 0.0],
            [9.0, 9.0],
            [0.5, 0.2],
            [8.5, 9.5],
            [1.0, 0.0],
            [9.0, 8.0],
            [4.0, 5.0],
            [0.2, 0.8]
        ])
        .unwrap();

        let mut kmeans = KMeans::new(2).tolerance(0.0).max_iter(50);
        kmeans.fit(&points).unwrap();

        assert_eq!(kmeans.inertia_history.len(), 50);
        for pair in kmeans.inertia_history.windows(2) {
            assert!(pair[1] <= pair[0] + 1e-12);
        }
    }

    #[test]
    fn test_kmeans_empty_cluster_keeps_centroid() {
        // Duplicate seeds: every point ties between centroids 0 and 1, so
        // cluster 1 never receives a point.
        let points = PointSet::new(array![[1.0, 0.0], [1.0, 0.0], [0.0, 0.0], [2.0, 0.0]]).unwrap();

        let mut kmeans = KMeans::new(2).max_iter(10);
        kmeans.fit(&points).unwrap();

        let centers = kmeans.cluster_centers.as_ref().unwrap();
        assert_eq!(centers, &array![[1.0, 0.0], [1.0, 0.0]]);
        assert_eq!(kmeans.labels.as_ref().unwrap(), &array![0, 0, 0, 0]);
        // Nothing moved, so the first iteration is the last.
        assert_eq!(kmeans.n_iter, Some(1));
    }

    #[test]
    fn test_kmeans_zero_iterations_keeps_seeds() {
        let mut kmeans = KMeans::new(2).max_iter(0);
        kmeans.fit(&scenario_a()).unwrap();

        assert_eq!(
            kmeans.cluster_centers.as_ref().unwrap(),
            &array![[0.0, 0.0], [10.0, 0.0]]
        );
        assert_eq!(kmeans.n_iter, Some(0));
        assert!(kmeans.inertia_history.is_empty());
        assert_eq!(kmeans.labels.as_ref().unwrap(), &array![0, 1, 0, 1]);
    }

    #[test]
    fn test_kmeans_single_iteration_cap() {
        // Seeds (0,0),(0,1) split the data along the wrong axis
        let points =
            PointSet::new(array![[0.0, 0.0], [0.0, 1.0], [10.0, 0.0], [10.0, 1.0]]).unwrap();
        let mut kmeans = KMeans::new(2).max_iter(1);
        kmeans.fit(&points).unwrap();

        assert_eq!(
            kmeans.cluster_centers.as_ref().unwrap(),
            &array![[5.0, 0.0], [5.0, 1.0]]
        );
        assert_eq!(kmeans.n_iter, Some(1));
    }

    #[test]
    fn test_kmeans_capped_labels_match_final_centroids() {
        let points = PointSet::new(array![[0.0], [1.0], [2.0], [10.0]]).unwrap();
        let mut kmeans = KMeans::new(2).max_iter(1);
        let labels = kmeans.fit_predict(&points).unwrap();

        // One update from seeds 0 and 1 leaves centroids at 0 and 13/3
        let centers = kmeans.cluster_centers.as_ref().unwrap();
        assert_eq!(centers[[0, 0]], 0.0);
        assert!((centers[[1, 0]] - 13.0 / 3.0).abs() < 1e-12);

        assert_eq!(labels, array![0, 0, 0, 1]);
        assert_eq!(labels, kmeans.predict(&points).unwrap());
        assert_eq!(labels, labels_from_centroids(&points, centers).unwrap());

        let expected = 1.0 + 4.0 + (10.0f64 - 13.0 / 3.0).powi(2);
        assert!((kmeans.inertia.unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_kmeans_seeds_in_one_true_cluster_stay_split_on_wrong_axis() {
        let points =
            PointSet::new(array![[0.0, 0.0], [0.0, 1.0], [10.0, 0.0], [10.0, 1.0]]).unwrap();
        let mut kmeans = KMeans::new(2).max_iter(300).tolerance(1e-4);
        kmeans.fit(&points).unwrap();

        assert_eq!(
            kmeans.cluster_centers.as_ref().unwrap(),
            &array![[5.0, 0.0], [5.0, 1.0]]
        );
        assert_eq!(kmeans.n_iter, Some(2));
        assert_eq!(kmeans.labels.as_ref().unwrap(), &array![0, 1, 0, 1]);
    }

    #[test]
    fn test_kmeans_predict() {
        let mut kmeans = KMeans::new(2);
        kmeans.fit(&scenario_a()).unwrap();

        let test = PointSet::new(array![[0.5, 0.5], [10.5, 0.5]]).unwrap();
        let labels = kmeans.predict(&test).unwrap();
        assert_eq!(labels, array![0, 1]);
    }

    #[test]
    fn test_kmeans_invalid_clusters() {
        let err = KMeans::new(0).fit(&scenario_a()).unwrap_err();
        assert!(matches!(err, ClusterError::InvalidK { k: 0, n_samples: 4 }));

        let err = KMeans::new(5).fit(&scenario_a()).unwrap_err();
        assert!(matches!(err, ClusterError::InvalidK { k: 5, n_samples: 4 }));
    }

    #[test]
    fn test_kmeans_k_equals_n() {
        let points = scenario_a();
        let mut kmeans = KMeans::new(4);
        kmeans.fit(&points).unwrap();

        assert_eq!(kmeans.cluster_centers.as_ref().unwrap(), points.as_matrix());
        assert_eq!(kmeans.inertia, Some(0.0));
    }

    #[test]
    fn test_kmeans_negative_tolerance() {
        let err = KMeans::new(2).tolerance(-1.0).fit(&scenario_a()).unwrap_err();
        assert!(matches!(err, ClusterError::InvalidArgument(_)));
    }

    #[test]
    fn test_kmeans_predict_without_fit() {
        let kmeans = KMeans::new(2);
        assert!(kmeans.predict(&scenario_a()).is_err());
    }

    #[test]
    fn test_kmeans_dimension_mismatch() {
        let mut kmeans = KMeans::new(2);
        kmeans.fit(&scenario_a()).unwrap();

        let test = PointSet::new(array![[1.0, 2.0, 3.0]]).unwrap();
        let err = kmeans.predict(&test).unwrap_err();
        assert!(matches!(err, ClusterError::DimensionMismatch { .. }));
    }
}

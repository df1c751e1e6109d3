//! Compare K-means and SymNMF clusterings of the same point set.
//!
//! Both methods label the points of a [`PointSet`]; the two labelings are
//! then scored with the silhouette coefficient.
//!
//! ```rust
//! use symnmf_analysis::{KMeans, PointSet, SymNMF, metrics};
//! use ndarray::array;
//!
//! let points = PointSet::new(array![
//!     [0.0, 0.0],
//!     [10.0, 0.0],
//!     [0.0, 1.0],
//!     [10.0, 1.0]
//! ]).unwrap();
//!
//! let kmeans_labels = KMeans::new(2).fit_predict(&points).unwrap();
//! let nmf_labels = SymNMF::new(2).fit_predict(&points).unwrap();
//!
//! assert_eq!(nmf_labels.len(), points.n_samples());
//!
//! let score = metrics::silhouette_score(&points, &kmeans_labels).unwrap();
//! assert!(score > 0.85);
//! ```

pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod cli;
pub mod cluster;
pub mod dataset;
pub mod decomposition;
pub mod error;
pub mod metrics;

pub use cluster::{KMeans, labels_from_centroids, labels_from_factors};
pub use dataset::PointSet;
pub use decomposition::{
    FactorizationKernel, GaussianSimilarity, MultiplicativeUpdate, SimilarityKernel, SymNMF,
    initialize_factors, run_symnmf,
};
pub use error::{ClusterError, Result};

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;
pub type Labels = Array1<usize>;

/// Euclidean distance between two points of equal dimension.
pub fn euclidean_distance(a: &ArrayView1<f64>, b: &ArrayView1<f64>) -> Result<f64> {
    if a.len() != b.len() {
        return Err(ClusterError::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }

    Ok(a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt())
}

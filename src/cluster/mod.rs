//! Centroid-based clustering and label decoding.
//!
//! This module provides:
//! - `KMeans`: Lloyd's iteration seeded with the first k points
//! - `labels_from_centroids`: nearest-centroid hard labels
//! - `labels_from_factors`: row-wise arg-max hard labels for a factor matrix
//!
//! Both decoders break ties towards the lowest index, the same rule the
//! K-means assignment step uses.
//!
//! # Examples
//!
//! ## K-Means Clustering
//! ```rust
//! use symnmf_analysis::{KMeans, PointSet};
//! use ndarray::array;
//!
//! let points = PointSet::new(array![
//!     [1.0, 1.0],
//!     [8.0, 8.0],
//!     [1.5, 2.0],
//!     [3.0, 4.0],
//!     [5.0, 7.0],
//!     [3.5, 5.0],
//!     [4.5, 5.0]
//! ]).unwrap();
//!
//! let mut kmeans = KMeans::new(2).max_iter(100).tolerance(1e-4);
//! let labels = kmeans.fit_predict(&points).unwrap();
//! assert_eq!(labels.len(), 7);
//!
//! // Get cluster centers
//! let centers = kmeans.cluster_centers.as_ref().unwrap();
//! println!("Cluster centers: {:?}", centers);
//!
//! // Get within-cluster sum of squares
//! let inertia = kmeans.inertia.unwrap();
//! println!("Inertia: {:.4}", inertia);
//! ```
//!
//! ## Decoding a factor matrix
//! ```rust
//! use symnmf_analysis::labels_from_factors;
//! use ndarray::array;
//!
//! let h = array![[0.9, 0.1], [0.2, 0.8], [0.5, 0.5]];
//! let labels = labels_from_factors(&h).unwrap();
//! assert_eq!(labels, array![0, 1, 0]);
//! ```

mod kmeans;
mod labels;

pub use kmeans::KMeans;
pub use labels::{labels_from_centroids, labels_from_factors};

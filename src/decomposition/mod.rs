//! Symmetric non-negative matrix factorization (SymNMF) clustering.
//!
//! This module provides:
//! - `SimilarityKernel`: similarity, degree and normalized similarity matrices
//!   (`GaussianSimilarity` is the default implementation)
//! - `FactorizationKernel`: refinement of an initial factor `H0` towards
//!   `W ≈ H·Hᵗ` (`MultiplicativeUpdate` is the default implementation)
//! - `initialize_factors`: the fixed-seed initial factor
//! - `SymNMF`: the driver that sequences the three and decodes labels
//!
//! # Examples
//!
//! ## SymNMF with the default kernels
//! ```rust
//! use symnmf_analysis::{PointSet, SymNMF};
//! use ndarray::array;
//!
//! let points = PointSet::new(array![
//!     [0.0, 0.0],
//!     [0.2, 0.1],
//!     [0.1, 0.3],
//!     [5.0, 5.0],
//!     [5.2, 4.9],
//!     [4.9, 5.1]
//! ]).unwrap();
//!
//! let mut model = SymNMF::new(2);
//! let labels = model.fit_predict(&points).unwrap();
//! assert_eq!(labels.len(), 6);
//!
//! let h = model.factors.as_ref().unwrap();
//! assert_eq!(h.shape(), &[6, 2]);
//! ```
//!
//! ## Inspecting the similarity graph
//! ```rust
//! use symnmf_analysis::{GaussianSimilarity, PointSet, SimilarityKernel};
//! use ndarray::array;
//!
//! let points = PointSet::new(array![[0.0, 0.0], [0.0, 1.0], [1.0, 1.0]]).unwrap();
//!
//! let kernel = GaussianSimilarity::new();
//! let a = kernel.sym(&points).unwrap();
//! let d = kernel.ddg(&points).unwrap();
//! let w = kernel.norm(&points).unwrap();
//! assert_eq!(a.shape(), d.shape());
//! assert_eq!(w.shape(), &[3, 3]);
//! ```

mod factorization;
mod similarity;
mod symnmf;

pub use factorization::{FactorizationKernel, MultiplicativeUpdate};
pub use similarity::{GaussianSimilarity, SimilarityKernel};
pub use symnmf::{INIT_SEED, SymNMF, initialize_factors, run_symnmf};

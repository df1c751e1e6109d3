use crate::dataset::PointSet;
use crate::error::{ClusterError, Result};
use crate::{Matrix, Vector, euclidean_distance};

/// Source of the pairwise similarity graph fed to the factorization.
///
/// Only `sym` is required; the degree and normalized matrices are derived
/// from it unless an implementation overrides them.
pub trait SimilarityKernel {
    /// n×n similarity matrix with a zero diagonal.
    fn sym(&self, points: &PointSet) -> Result<Matrix>;

    /// n×n diagonal degree matrix of `sym`.
    fn ddg(&self, points: &PointSet) -> Result<Matrix> {
        let similarity = self.sym(points)?;
        Ok(degree_matrix(&similarity))
    }

    /// Degree-normalized similarity `D^-1/2 · A · D^-1/2`.
    fn norm(&self, points: &PointSet) -> Result<Matrix> {
        let similarity = self.sym(points)?;
        let degrees = similarity.sum_axis(ndarray::Axis(1));
        normalize(&similarity, &degrees)
    }
}

/// Gaussian (RBF) similarity `exp(-‖xi - xj‖² / 2)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GaussianSimilarity;

impl GaussianSimilarity {
    pub fn new() -> Self {
        Self
    }
}

impl SimilarityKernel for GaussianSimilarity {
    fn sym(&self, points: &PointSet) -> Result<Matrix> {
        let n = points.n_samples();
        let mut similarity = Matrix::zeros((n, n));

        for i in 0..n {
            for j in (i + 1)..n {
                let distance = euclidean_distance(&points.point(i), &points.point(j))?;
                let value = (-0.5 * distance * distance).exp();
                similarity[[i, j]] = value;
                similarity[[j, i]] = value;
            }
        }

        Ok(similarity)
    }
}

pub(crate) fn degree_matrix(similarity: &Matrix) -> Matrix {
    let degrees = similarity.sum_axis(ndarray::Axis(1));
    Matrix::from_diag(&degrees)
}

pub(crate) fn normalize(similarity: &Matrix, degrees: &Vector) -> Result<Matrix> {
    if let Some(i) = degrees.iter().position(|&d| !(d > 0.0 && d.is_finite())) {
        return Err(ClusterError::KernelFailure(format!(
            "point {} has degree {}, cannot normalize",
            i, degrees[i]
        )));
    }

    let inv_sqrt = degrees.mapv(|d| 1.0 / d.sqrt());
    let mut normalized = similarity.clone();
    for ((i, j), value) in normalized.indexed_iter_mut() {
        *value *= inv_sqrt[i] * inv_sqrt[j];
    }

    Ok(normalized)
}

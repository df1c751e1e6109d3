use crate::cluster::labels_from_factors;
use crate::dataset::PointSet;
use crate::decomposition::factorization::{FactorizationKernel, MultiplicativeUpdate};
use crate::decomposition::similarity::{GaussianSimilarity, SimilarityKernel};
use crate::error::{ClusterError, Result};
use crate::{Labels, Matrix};
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seed of the generator behind [`initialize_factors`].
pub const INIT_SEED: u64 = 1234;

/// Deterministic initial factor for a normalized similarity matrix.
///
/// Entries are drawn row-major from `U[0, 2·sqrt(mean(W)/k)]`, where the mean
/// runs over all n² entries of `W`, using a fresh `ChaCha8Rng` seeded with
/// [`INIT_SEED`]. Equal inputs always give bit-identical output.
pub fn initialize_factors(w: &Matrix, k: usize) -> Result<Matrix> {
    let n_samples = w.nrows();

    if w.ncols() != n_samples {
        return Err(ClusterError::DimensionMismatch {
            expected: n_samples,
            found: w.ncols(),
        });
    }

    if k == 0 || k >= n_samples {
        return Err(ClusterError::InvalidRank { k, n_samples });
    }

    let mean = w
        .mean()
        .ok_or_else(|| ClusterError::KernelFailure("similarity matrix is empty".to_string()))?;
    if !mean.is_finite() || mean < 0.0 {
        return Err(ClusterError::KernelFailure(format!(
            "similarity matrix has invalid mean {}",
            mean
        )));
    }

    let upper = 2.0 * (mean / k as f64).sqrt();
    let mut rng = ChaCha8Rng::seed_from_u64(INIT_SEED);

    Ok(Matrix::random_using(
        (n_samples, k),
        Uniform::new_inclusive(0.0, upper),
        &mut rng,
    ))
}

/// Symmetric non-negative matrix factorization clustering.
///
/// `fit` runs `norm → initialize_factors → refine` and keeps every
/// intermediate; the factor matrix is stored exactly as the kernel returned it.
#[derive(Clone, Debug)]
pub struct SymNMF<S = GaussianSimilarity, F = MultiplicativeUpdate> {
    pub similarity: Option<Matrix>,
    pub initial_factors: Option<Matrix>,
    pub factors: Option<Matrix>,
    n_clusters: usize,
    similarity_kernel: S,
    factorization_kernel: F,
}

impl SymNMF {
    pub fn new(n_clusters: usize) -> Self {
        Self::with_kernels(n_clusters, GaussianSimilarity, MultiplicativeUpdate::new())
    }
}

impl<S: SimilarityKernel, F: FactorizationKernel> SymNMF<S, F> {
    pub fn with_kernels(n_clusters: usize, similarity_kernel: S, factorization_kernel: F) -> Self {
        Self {
            similarity: None,
            initial_factors: None,
            factors: None,
            n_clusters,
            similarity_kernel,
            factorization_kernel,
        }
    }

    pub fn fit(&mut self, points: &PointSet) -> Result<()> {
        let n_samples = points.n_samples();
        let k = self.n_clusters;

        if k == 0 || k >= n_samples {
            return Err(ClusterError::InvalidRank { k, n_samples });
        }

        let w = self.similarity_kernel.norm(points)?;
        if w.shape() != [n_samples, n_samples] {
            return Err(ClusterError::KernelFailure(format!(
                "similarity kernel returned a {}x{} matrix for {} points",
                w.nrows(),
                w.ncols(),
                n_samples
            )));
        }

        let h0 = initialize_factors(&w, k)?;
        let h = self.factorization_kernel.refine(&w, h0.clone())?;
        if h.shape() != [n_samples, k] {
            return Err(ClusterError::KernelFailure(format!(
                "factorization kernel returned a {}x{} matrix, expected {}x{}",
                h.nrows(),
                h.ncols(),
                n_samples,
                k
            )));
        }

        tracing::debug!(n_samples, k, "symnmf factorization complete");

        self.similarity = Some(w);
        self.initial_factors = Some(h0);
        self.factors = Some(h);

        Ok(())
    }

    pub fn fit_predict(&mut self, points: &PointSet) -> Result<Labels> {
        self.fit(points)?;
        let factors = self
            .factors
            .as_ref()
            .ok_or_else(|| {
                ClusterError::InvalidArgument("SymNMF not fitted. Call fit() first.".to_string())
            })?;

        labels_from_factors(factors)
    }
}

/// Run the default SymNMF pipeline and return the final factor matrix.
pub fn run_symnmf(points: &PointSet, k: usize) -> Result<Matrix> {
    let mut model = SymNMF::new(k);
    model.fit(points)?;
    model
        .factors
        .ok_or_else(|| ClusterError::InvalidArgument("SymNMF fit produced no factors".to_string()))
}

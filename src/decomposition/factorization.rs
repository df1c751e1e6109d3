use crate::Matrix;
use crate::error::{ClusterError, Result};
use ndarray::Zip;

/// Refines an initial factor `H0` so that `H·Hᵗ` approximates `W`.
pub trait FactorizationKernel {
    fn refine(&self, w: &Matrix, h0: Matrix) -> Result<Matrix>;
}

/// Damped multiplicative-update rule for symmetric NMF.
///
/// Each step computes `H ∘ (1 - β + β · (W·H) / (H·Hᵗ·H + δ))` and stops once
/// the squared Frobenius norm of the change drops below `tolerance`.
#[derive(Clone, Debug)]
pub struct MultiplicativeUpdate {
    max_iter: usize,
    tolerance: f64,
    beta: f64,
    delta: f64,
}

impl Default for MultiplicativeUpdate {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiplicativeUpdate {
    pub fn new() -> Self {
        Self {
            max_iter: 300,
            tolerance: 1e-4,
            beta: 0.5,
            delta: 1e-9,
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

    pub fn beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn delta(mut self, delta: f64) -> Self {
        self.delta = delta;
        self
    }

    fn step(&self, w: &Matrix, h: &Matrix) -> Matrix {
        let wh = w.dot(h);
        let hhth = h.dot(&h.t().dot(h));

        let mut next = h.clone();
        Zip::from(&mut next)
            .and(&wh)
            .and(&hhth)
            .for_each(|x, &num, &den| {
                *x *= 1.0 - self.beta + self.beta * num / (den + self.delta);
            });
        next
    }
}

impl FactorizationKernel for MultiplicativeUpdate {
    fn refine(&self, w: &Matrix, h0: Matrix) -> Result<Matrix> {
        if w.nrows() != w.ncols() {
            return Err(ClusterError::KernelFailure(format!(
                "W must be square, got {}x{}",
                w.nrows(),
                w.ncols()
            )));
        }

        if h0.nrows() != w.nrows() {
            return Err(ClusterError::KernelFailure(format!(
                "H has {} rows but W is {}x{}",
                h0.nrows(),
                w.nrows(),
                w.ncols()
            )));
        }

        let mut h = h0;
        for iteration in 0..self.max_iter {
            let next = self.step(w, &h);
            let change = (&next - &h).mapv(|v| v * v).sum();
            h = next;

            tracing::debug!(iteration = iteration + 1, change, "symnmf update");

            if change < self.tolerance {
                tracing::info!(n_iter = iteration + 1, "symnmf converged");
                return Ok(h);
            }
        }

        if self.max_iter > 0 {
            tracing::warn!(
                max_iter = self.max_iter,
                "symnmf reached the iteration cap before converging"
            );
        }

        Ok(h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_single_step() {
        let w = array![[0.0, 1.0], [1.0, 0.0]];
        let h = array![[1.0], [1.0]];

        // W·H = [1, 1], H·Hᵗ·H = [2, 2]
        let next = MultiplicativeUpdate::new().delta(0.0).step(&w, &h);
        assert!((next[[0, 0]] - 0.75).abs() < 1e-12);
        assert!((next[[1, 0]] - 0.75).abs() < 1e-12);

        // Undamped: H ∘ (W·H) / (H·Hᵗ·H)
        let next = MultiplicativeUpdate::new().beta(1.0).delta(0.0).step(&w, &h);
        assert!((next[[0, 0]] - 0.5).abs() < 1e-12);
        assert!((next[[1, 0]] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_refine_reduces_objective() {
        let w = array![
            [0.0, 0.8, 0.1, 0.0],
            [0.8, 0.0, 0.0, 0.1],
            [0.1, 0.0, 0.0, 0.9],
            [0.0, 0.1, 0.9, 0.0]
        ];
        let h0 = array![[0.3, 0.5], [0.4, 0.2], [0.6, 0.1], [0.2, 0.3]];
        let objective = |h: &Matrix| (&w - &h.dot(&h.t())).mapv(|v| v * v).sum();

        let before = objective(&h0);
        let h = MultiplicativeUpdate::new().refine(&w, h0).unwrap();
        let after = objective(&h);

        assert_eq!(h.shape(), &[4, 2]);
        assert!(h.iter().all(|&v| v >= 0.0));
        assert!(after < before);
    }

    #[test]
    fn test_refine_zero_iterations_returns_input() {
        let w = array![[0.0, 1.0], [1.0, 0.0]];
        let h0 = array![[0.2], [0.7]];

        let h = MultiplicativeUpdate::new().max_iter(0).refine(&w, h0.clone()).unwrap();
        assert_eq!(h, h0);
    }

    #[test]
    fn test_refine_shape_errors() {
        let kernel = MultiplicativeUpdate::new();

        let err = kernel.refine(&Matrix::zeros((2, 3)), Matrix::zeros((2, 1))).unwrap_err();
        assert!(matches!(err, ClusterError::KernelFailure(_)));

        let err = kernel.refine(&Matrix::zeros((3, 3)), Matrix::zeros((2, 1))).unwrap_err();
        assert!(matches!(err, ClusterError::KernelFailure(_)));
    }
}

use crate::error::{ClusterError, Result};
use crate::Matrix;
use ndarray::ArrayView1;
use std::path::Path;

/// Ordered, immutable set of points; row `i` is point `i`.
#[derive(Clone, Debug, PartialEq)]
pub struct PointSet {
    points: Matrix,
}

impl PointSet {
    pub fn new(points: Matrix) -> Result<Self> {
        if points.nrows() == 0 || points.ncols() == 0 {
            return Err(ClusterError::InvalidArgument(
                "point set must have at least one point and one coordinate".to_string(),
            ));
        }

        Ok(Self { points })
    }

    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let first = rows.first().ok_or_else(|| {
            ClusterError::InvalidArgument("point set must have at least one point".to_string())
        })?;
        let dim = first.len();

        for row in &rows {
            if row.len() != dim {
                return Err(ClusterError::DimensionMismatch {
                    expected: dim,
                    found: row.len(),
                });
            }
        }

        let n = rows.len();
        let flat: Vec<f64> = rows.into_iter().flatten().collect();
        let points = Matrix::from_shape_vec((n, dim), flat)
            .map_err(|e| ClusterError::InvalidArgument(e.to_string()))?;

        Self::new(points)
    }

    /// Parse comma-separated text, one point per line.
    pub fn parse(text: &str) -> Result<Self> {
        let mut rows = Vec::new();

        for (line_no, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let row = line
                .split(',')
                .map(|token| {
                    token.trim().parse::<f64>().map_err(|_| {
                        ClusterError::InvalidArgument(format!(
                            "line {}: cannot parse {:?} as a number",
                            line_no + 1,
                            token
                        ))
                    })
                })
                .collect::<Result<Vec<f64>>>()?;

            rows.push(row);
        }

        if rows.is_empty() {
            return Err(ClusterError::InvalidArgument("input contains no points".to_string()));
        }

        Self::from_rows(rows)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let points = Self::parse(&text)?;

        tracing::debug!(
            path = %path.display(),
            n_samples = points.n_samples(),
            n_features = points.n_features(),
            "loaded point set"
        );

        Ok(points)
    }

    pub fn n_samples(&self) -> usize {
        self.points.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.points.ncols()
    }

    pub fn point(&self, i: usize) -> ArrayView1<'_, f64> {
        self.points.row(i)
    }

    pub fn as_matrix(&self) -> &Matrix {
        &self.points
    }
}

use crate::dataset::PointSet;
use crate::error::{ClusterError, Result};
use crate::{Labels, Matrix, euclidean_distance};
use ndarray::ArrayView1;

/// Index of the closest centroid; the lowest index wins ties.
pub(crate) fn nearest_centroid(point: &ArrayView1<f64>, centroids: &Matrix) -> Result<usize> {
    let mut min_distance = f64::INFINITY;
    let mut closest_cluster = 0;

    for k in 0..centroids.nrows() {
        let distance = euclidean_distance(point, &centroids.row(k))?;
        if distance < min_distance {
            min_distance = distance;
            closest_cluster = k;
        }
    }

    Ok(closest_cluster)
}

/// Label every point with the index of its nearest centroid.
pub fn labels_from_centroids(points: &PointSet, centroids: &Matrix) -> Result<Labels> {
    if centroids.nrows() == 0 {
        return Err(ClusterError::InvalidArgument(
            "at least one centroid is required".to_string(),
        ));
    }

    if points.n_features() != centroids.ncols() {
        return Err(ClusterError::DimensionMismatch {
            expected: centroids.ncols(),
            found: points.n_features(),
        });
    }

    let mut labels = Labels::zeros(points.n_samples());
    for i in 0..points.n_samples() {
        labels[i] = nearest_centroid(&points.point(i), centroids)?;
    }

    Ok(labels)
}

/// Label every row of a factor matrix with the column of its largest entry;
/// the lowest column wins ties.
pub fn labels_from_factors(factors: &Matrix) -> Result<Labels> {
    if factors.ncols() == 0 {
        return Err(ClusterError::InvalidArgument(
            "factor matrix must have at least one column".to_string(),
        ));
    }

    let labels = factors
        .rows()
        .into_iter()
        .map(|row| {
            let mut best = 0;
            for (j, &value) in row.iter().enumerate() {
                if value > row[best] {
                    best = j;
                }
            }
            best
        })
        .collect();

    Ok(labels)
}

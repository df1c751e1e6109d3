use crate::dataset::PointSet;
use crate::error::{ClusterError, Result};
use crate::{Labels, euclidean_distance};
use std::collections::BTreeMap;
use std::fmt;

/// Mean silhouette coefficient of a labeling.
///
/// Points in singleton clusters contribute 0. Requires at least 2 and at most
/// n - 1 distinct labels.
pub fn silhouette_score(points: &PointSet, labels: &Labels) -> Result<f64> {
    let n_samples = points.n_samples();

    if labels.len() != n_samples {
        return Err(ClusterError::InvalidArgument(format!(
            "labels has length {} but there are {} points",
            labels.len(),
            n_samples
        )));
    }

    let mut sizes: BTreeMap<usize, usize> = BTreeMap::new();
    for &label in labels.iter() {
        *sizes.entry(label).or_insert(0) += 1;
    }

    let n_clusters = sizes.len();
    if n_clusters < 2 || n_clusters >= n_samples {
        return Err(ClusterError::DegenerateClustering {
            n_clusters,
            n_samples,
        });
    }

    let mut total = 0.0;
    for i in 0..n_samples {
        let own = labels[i];
        if sizes[&own] == 1 {
            continue;
        }

        let mut distance_sums: BTreeMap<usize, f64> = BTreeMap::new();
        for j in 0..n_samples {
            if i == j {
                continue;
            }
            let distance = euclidean_distance(&points.point(i), &points.point(j))?;
            *distance_sums.entry(labels[j]).or_insert(0.0) += distance;
        }

        let a = distance_sums.get(&own).copied().unwrap_or(0.0) / (sizes[&own] - 1) as f64;
        let b = distance_sums
            .iter()
            .filter(|&(&label, _)| label != own)
            .map(|(label, &sum)| sum / sizes[label] as f64)
            .fold(f64::INFINITY, f64::min);

        let scale = a.max(b);
        if scale > 0.0 {
            total += (b - a) / scale;
        }
    }

    Ok(total / n_samples as f64)
}

/// Silhouette scores of two labelings of the same points.
pub fn compare(points: &PointSet, labels_a: &Labels, labels_b: &Labels) -> Result<(f64, f64)> {
    let score_a = silhouette_score(points, labels_a)?;
    let score_b = silhouette_score(points, labels_b)?;
    Ok((score_a, score_b))
}

/// Final comparison, printed as two lines with four decimals each.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Report {
    pub nmf: f64,
    pub kmeans: f64,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "nmf: {:.4}", self.nmf)?;
        write!(f, "kmeans: {:.4}", self.kmeans)
    }
}

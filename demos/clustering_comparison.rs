use ndarray::array;
use symnmf_analysis::metrics::{self, Report};
use symnmf_analysis::{KMeans, Labels, PointSet, SymNMF};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== K-Means vs SymNMF ===\n");

    // Three natural clusters
    let points = PointSet::new(array![
        // Cluster 1: around (2, 2)
        [1.5, 1.8], [2.0, 2.2], [2.3, 1.9], [1.8, 2.5], [2.1, 1.7],
        // Cluster 2: around (8, 8)
        [7.8, 8.2], [8.1, 7.9], [8.3, 8.1], [7.9, 8.4], [8.2, 7.7],
        // Cluster 3: around (2, 8)
        [1.9, 7.8], [2.2, 8.1], [1.7, 8.3], [2.4, 7.9], [2.0, 8.2]
    ])?;

    println!("Dataset: {} samples, {} features", points.n_samples(), points.n_features());
    println!("Expected: 3 natural clusters\n");

    for &k in &[2, 3, 4, 5] {
        match compare_methods(&points, k) {
            Ok(report) => println!("k={}\n{}\n", k, report),
            Err(e) => println!("k={} failed: {}\n", k, e),
        }
    }

    println!("=== Detailed Analysis (k=3) ===");

    let mut kmeans = KMeans::new(3);
    kmeans.fit(&points)?;
    println!("K-Means converged after {} iterations", kmeans.n_iter.unwrap_or(0));
    println!("  Inertia (within-cluster sum of squares): {:.4}", kmeans.inertia.unwrap_or(0.0));
    print_cluster_summary("K-Means", &kmeans.predict(&points)?);

    let mut nmf = SymNMF::new(3);
    let nmf_labels = nmf.fit_predict(&points)?;
    print_cluster_summary("SymNMF", &nmf_labels);

    Ok(())
}

fn compare_methods(points: &PointSet, k: usize) -> symnmf_analysis::Result<Report> {
    let nmf_labels = SymNMF::new(k).fit_predict(points)?;

    let mut kmeans = KMeans::new(k).max_iter(300).tolerance(1e-4);
    kmeans.fit(points)?;
    let kmeans_labels = kmeans.predict(points)?;

    let (nmf, kmeans) = metrics::compare(points, &nmf_labels, &kmeans_labels)?;
    Ok(Report { nmf, kmeans })
}

fn print_cluster_summary(algorithm: &str, labels: &Labels) {
    let mut counts = std::collections::BTreeMap::new();
    for &label in labels.iter() {
        *counts.entry(label).or_insert(0usize) += 1;
    }

    println!("  {} cluster assignments:", algorithm);
    for (cluster_id, count) in counts {
        println!("    Cluster {}: {} points", cluster_id, count);
    }
}

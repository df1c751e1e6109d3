//! Command-line surface shared by the `analysis` and `symnmf` binaries.

use crate::cluster::KMeans;
use crate::dataset::PointSet;
use crate::decomposition::{GaussianSimilarity, SimilarityKernel, SymNMF, run_symnmf};
use crate::error::{ClusterError, Result};
use crate::metrics::{Report, compare};
use crate::Matrix;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Line printed on standard output for every failure.
pub const GENERIC_ERROR: &str = "An Error Has Occurred";

/// Compare SymNMF and K-means clusterings with the silhouette score.
#[derive(Parser, Debug)]
#[command(name = "analysis")]
pub struct AnalysisCli {
    /// Number of clusters
    pub k: usize,

    /// Comma-separated input points, one per line
    pub file: PathBuf,
}

/// Print one of the SymNMF matrices for a point set.
#[derive(Parser, Debug)]
#[command(name = "symnmf")]
pub struct SymnmfCli {
    /// Number of clusters (used by the `symnmf` goal)
    pub k: usize,

    /// Matrix to compute
    #[arg(value_enum)]
    pub goal: Goal,

    /// Comma-separated input points, one per line
    pub file: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum Goal {
    /// Similarity matrix
    Sym,
    /// Diagonal degree matrix
    Ddg,
    /// Normalized similarity matrix
    Norm,
    /// Final SymNMF factor matrix
    Symnmf,
}

/// K-means settings used by `analysis`.
pub const KMEANS_MAX_ITER: usize = 300;
pub const KMEANS_EPSILON: f64 = 1e-4;

/// Logs go to stderr so stdout carries only results. `RUST_LOG` overrides
/// the default `warn` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}

pub fn parse_args<C: Parser>() -> Result<C> {
    C::try_parse().map_err(|e| ClusterError::InvalidArgument(e.to_string()))
}

pub fn run_analysis(cli: &AnalysisCli) -> Result<Report> {
    let points = PointSet::from_file(&cli.file)?;

    let nmf_labels = SymNMF::new(cli.k).fit_predict(&points)?;

    let mut kmeans = KMeans::new(cli.k)
        .max_iter(KMEANS_MAX_ITER)
        .tolerance(KMEANS_EPSILON);
    kmeans.fit(&points)?;
    let kmeans_labels = kmeans.predict(&points)?;

    let (nmf, kmeans) = compare(&points, &nmf_labels, &kmeans_labels)?;
    Ok(Report { nmf, kmeans })
}

pub fn run_goal(cli: &SymnmfCli) -> Result<Matrix> {
    let points = PointSet::from_file(&cli.file)?;
    let kernel = GaussianSimilarity::new();

    match cli.goal {
        Goal::Sym => kernel.sym(&points),
        Goal::Ddg => kernel.ddg(&points),
        Goal::Norm => kernel.norm(&points),
        Goal::Symnmf => run_symnmf(&points, cli.k),
    }
}

/// Rows on separate lines, entries comma-separated with four decimals.
pub fn format_matrix(matrix: &Matrix) -> String {
    matrix
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .map(|v| format!("{:.4}", v))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClusterError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid number of clusters: k={k} must be in [1, {n_samples}]")]
    InvalidK { k: usize, n_samples: usize },

    #[error("invalid factorization rank: k={k} must be in [1, {n_samples})")]
    InvalidRank { k: usize, n_samples: usize },

    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("degenerate clustering: {n_clusters} clusters over {n_samples} samples")]
    DegenerateClustering { n_clusters: usize, n_samples: usize },

    #[error("kernel failure: {0}")]
    KernelFailure(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ClusterError>;

use std::path::PathBuf;
use thiserror::Error;

/// Precondition failures of the estimators and the transition model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RankError {
    #[error("link graph has no pages")]
    EmptyGraph,

    #[error("damping factor must lie strictly between 0 and 1, got {0}")]
    InvalidDamping(f64),

    #[error("sample count must be positive")]
    InvalidSampleCount,

    #[error("convergence threshold must be positive, got {0}")]
    InvalidEpsilon(f64),

    #[error("iteration limit must be positive")]
    InvalidIterationLimit,

    #[error("no convergence after {iterations} iterations, largest change {max_delta}")]
    NonConvergence { iterations: usize, max_delta: f64 },
}

pub type RankResult<T> = Result<T, RankError>;

#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

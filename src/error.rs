//! Error type shared by the solver core, word-list loading and the session loop.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolverError {
    /// A guess or solution that is not exactly five ASCII letters.
    #[error("malformed word {word:?}: {reason}")]
    MalformedWord { word: String, reason: &'static str },

    #[error("malformed feedback {input:?}: expected 5 of g/y/b (or 2/1/0)")]
    MalformedPattern { input: String },

    /// No candidate is consistent with the feedback seen so far.
    #[error("candidate pool is empty")]
    EmptyPool,

    #[error("guess vocabulary is empty")]
    EmptyVocabulary,

    /// Feedback arrived while no guess was waiting for it.
    #[error("no guess is awaiting feedback")]
    NoPendingGuess,

    #[error("parallel evaluation failed: {0}")]
    WorkerFailure(String),

    /// The best available guess carries no information but the pool is not solved.
    #[error("no guess can split the remaining {remaining} candidates")]
    Stalled { remaining: usize },

    #[error("failed to read word list {}", path.display())]
    WordList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read input")]
    Input(#[source] io::Error),

    #[error("line {line}: {source}")]
    InvalidLine {
        line: usize,
        #[source]
        source: Box<SolverError>,
    },
}

impl From<rayon::ThreadPoolBuildError> for SolverError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        SolverError::WorkerFailure(err.to_string())
    }
}

pub type Result<T, E = SolverError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_build_failure_is_a_worker_failure() {
        // The global pool can only be built once per process.
        let _ = rayon::ThreadPoolBuilder::new().build_global();
        let err: SolverError = rayon::ThreadPoolBuilder::new()
            .build_global()
            .unwrap_err()
            .into();
        assert!(matches!(err, SolverError::WorkerFailure(ref reason) if !reason.is_empty()));
    }
}

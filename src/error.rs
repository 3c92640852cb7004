use thiserror::Error;

/// Faults reported by a [`crate::board::Position`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("FEN error: {0}")]
    InvalidFen(String),
    #[error("illegal move: {0}")]
    IllegalMove(String),
    #[error("malformed move text: {0:?}")]
    InvalidMove(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A root search needs at least one ply.
    #[error("search depth must be at least 1")]
    ZeroDepth,
    /// The searcher's deadline passed before the depth completed.
    #[error("search aborted: deadline reached")]
    Aborted,
    #[error(transparent)]
    Board(#[from] BoardError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown algorithm {0:?} (expected random, minimax, alphabeta or iterative)")]
    UnknownAlgorithm(String),
    #[error("unknown mode {0:?} (expected \"Human vs Human\", \"Human vs AI\" or \"AI vs AI\")")]
    UnknownMode(String),
}

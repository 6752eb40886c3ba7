use thiserror::Error;

/// The error type returned by every fallible operation in this crate.
///
/// Numerical issues that have a documented fallback (zero eigenvector,
/// uniform PageRank, ...) never surface here — they are recovered locally at
/// the call site instead. This variant set only grows when a caller-visible
/// failure mode actually exists.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("unknown layer: {layer}")]
    UnknownLayer { layer: String },

    #[error("unknown node: {node}")]
    UnknownNode { node: String },

    #[error("operation cancelled")]
    Cancelled,

    /// Reserved for numerical failures with no documented fallback. None of
    /// the current analyses hit this path (every eigensolve / power
    /// iteration has a fallback per the component specs), but the variant
    /// exists so a future routine has somewhere to report instead of
    /// panicking.
    #[error("numerical error: {reason}")]
    Numerical { reason: String },
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;

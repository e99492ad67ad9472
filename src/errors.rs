//! Error types for the summarization pipeline.
//!
//! Most degenerate inputs (empty text, all-stopword sentences, a missing
//! embedding resource) are handled with defined fallback conventions and
//! never surface as errors. The variants here cover the cases that must be
//! rejected at the boundary instead.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SumRankError>;

/// Errors produced by the summarization pipeline.
#[derive(Debug, Error)]
pub enum SumRankError {
    /// The embedding resource exists but could not be read.
    ///
    /// A resource that is simply absent is not an error: the loader falls
    /// back to an empty table and logs a notice.
    #[error("failed to read embedding resource {}", path.display())]
    EmbeddingResource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input exceeded the configured sentence-count bound.
    ///
    /// The similarity matrix is O(N²), so callers exposing the summarizer
    /// as a service should keep a bound configured.
    #[error("input has {count} sentences, exceeding the configured maximum of {max}")]
    TooManySentences { count: usize, max: usize },
}

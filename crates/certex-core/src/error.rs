//! Error types for the certex-core library.

use thiserror::Error;

/// Main error type for the certex library.
///
/// Field extraction itself is infallible: absent matches are `None`, and
/// structural anomalies in the block graph (missing relationships, dangling
/// ids) are treated as empty. Errors only occur at the input boundary, when
/// the supplied document is not a block list at all.
#[derive(Error, Debug)]
pub enum CertexError {
    /// The input could not be deserialized into a block list.
    #[error("invalid block document: {0}")]
    Input(#[from] serde_json::Error),
}

/// Result type for the certex library.
pub type Result<T> = std::result::Result<T, CertexError>;

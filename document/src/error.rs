//! Document retrieval errors.

use thiserror::Error;

/// Errors loading the charter document from its gateway URL.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Transport failure, including the client-side timeout.
    #[error("document fetch failed: {0}")]
    Fetch(String),

    /// The gateway answered with a non-success status.
    #[error("gateway returned HTTP {status}")]
    Http { status: u16 },
}

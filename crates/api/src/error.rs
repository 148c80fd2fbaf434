//! Server lifecycle errors.

use std::io;

use thiserror::Error;

/// Errors raised while starting or running the HTTP listener.
///
/// Requests themselves never fail, so there is no HTTP response mapping here.
/// Every variant is fatal to the process.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listening socket could not be bound, or the host did not resolve.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// The serve loop stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(#[from] io::Error),
}

/// Result type for server lifecycle operations.
pub type Result<T> = std::result::Result<T, ServerError>;

//! Typed request failures.
//!
//! Each failure mode is a distinct variant so callers can decide whether to
//! log-and-exit or recover; the one-shot request model stays unchanged.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error returned by a manager request or by delivering its response.
#[derive(Debug, Error)]
pub enum FetchError {
    /// libcurl reported an error (DNS, TLS, connection refused, timeout).
    #[error("transport: {0}")]
    Transport(#[from] curl::Error),

    /// The server rejected the credentials (HTTP 401/403).
    #[error("authentication rejected (HTTP {0})")]
    Auth(u32),

    /// Any other non-2xx response status.
    #[error("GET {url} returned HTTP {status}")]
    Status { status: u32, url: String },

    /// Writing the response body to disk failed.
    #[error("write {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

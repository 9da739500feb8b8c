//! Blocking GET execution against the manager REST API.
//!
//! One call is one atomic request: perform the transfer, collect the body
//! verbatim, classify the status. No retry, no partial results.

mod error;

pub use error::FetchError;

use crate::session::ManagerSession;

/// Response format requested from the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    /// Whatever the server sends by default (usually XML, but not always).
    #[default]
    Default,
    /// Ask for JSON via `Accept: application/json`.
    Json,
}

impl ResponseFormat {
    /// `Accept` header value to send, if any.
    pub fn accept_header(self) -> Option<&'static str> {
        match self {
            ResponseFormat::Default => None,
            ResponseFormat::Json => Some("application/json"),
        }
    }

    /// Label used in user-facing output lines.
    pub fn label(self) -> &'static str {
        match self {
            ResponseFormat::Default => "REST",
            ResponseFormat::Json => "REST JSON",
        }
    }
}

/// Status and verbatim body of a completed GET.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

/// Performs one blocking GET with the session's authorization header.
///
/// A 2xx status yields the body; 401/403 is `FetchError::Auth`; any other
/// status is `FetchError::Status`. Transport failures (DNS, TLS, connection
/// refused, timeout) surface as `FetchError::Transport`.
pub fn fetch(
    session: &ManagerSession,
    url: &str,
    format: ResponseFormat,
) -> Result<FetchResponse, FetchError> {
    let mut easy = session.handle(url, format)?;

    let mut body = Vec::new();
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    tracing::debug!(url, status, bytes = body.len(), "GET finished");
    match status {
        200..=299 => Ok(FetchResponse { status, body }),
        401 | 403 => Err(FetchError::Auth(status)),
        _ => Err(FetchError::Status {
            status,
            url: url.to_string(),
        }),
    }
}

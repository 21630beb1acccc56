//! Error type for catalog requests.

use thiserror::Error;

/// Any failure of a catalog search.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The catalog answered with a non-success status.
    #[error("Catalog returned HTTP {status}")]
    Status { status: u16 },

    /// The request never produced a response.
    #[error("Could not reach the catalog: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body is not a pictogram list.
    #[error("Malformed catalog response: {0}")]
    MalformedBody(String),

    /// The configured base URL cannot carry a search path.
    #[error("Invalid catalog URL '{url}'")]
    InvalidUrl { url: String },
}

impl RemoteError {
    /// HTTP status of the failed response, if the catalog answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            RemoteError::Status { status } => Some(*status),
            _ => None,
        }
    }
}

//! Errors raised by user input before any request is made.
//!
//! Remote failures live in [`crate::catalog::RemoteError`], host document
//! failures in [`crate::host::HostMutationError`].

use thiserror::Error;

/// Rejected search input. Nothing is sent and the session is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a keyword")]
    EmptyQuery,

    /// `.` and `..` are path navigation, not keywords, and cannot be
    /// carried as a URL segment.
    #[error("\"{0}\" is not a searchable keyword")]
    DotSegment(String),
}

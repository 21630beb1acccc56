//! Seam between the search worker and the remote catalog.

use async_trait::async_trait;

use super::error::RemoteError;
use super::types::PictogramRecord;

/// Keyword search over a pictogram catalog.
///
/// Implemented by [`CatalogClient`](super::CatalogClient) for the HTTP
/// catalog; tests substitute in-memory catalogs.
#[async_trait]
pub trait PictogramCatalog: Send + Sync {
    /// Search `query` (non-empty, trimmed) for `language`.
    ///
    /// Records come back in server order. Every failure is a
    /// [`RemoteError`].
    async fn search(&self, query: &str, language: &str) -> Result<Vec<PictogramRecord>, RemoteError>;
}

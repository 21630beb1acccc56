//! Remote pictogram catalog: search requests and image addresses.

mod client;
mod error;
mod traits;
mod types;

pub use client::{CatalogClient, CatalogEndpoints};
pub use error::RemoteError;
pub use traits::PictogramCatalog;
pub use types::{Keyword, PictogramId, PictogramRecord};

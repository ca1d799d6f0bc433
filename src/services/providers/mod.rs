use serde_json::Value;

/// Metadata provider abstraction
///
/// A single upstream catalog supplies discovery, text search and per-title
/// detail for both media kinds. Keeping the surface behind a trait lets tests
/// substitute a canned provider for the remote service.
use crate::{
    error::AppResult,
    models::{DiscoverQuery, MediaKind, MediaPage},
};

pub mod tmdb;

/// Trait for external movie/TV metadata providers
///
/// All methods are stateless per call; failures of the remote service are
/// normalized into the application error taxonomy by each implementation.
#[async_trait::async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Runs a filtered discovery query for the given media kind.
    ///
    /// Absent filters are omitted from the outbound request rather than sent
    /// as empty values.
    async fn discover(&self, kind: MediaKind, query: &DiscoverQuery) -> AppResult<MediaPage>;

    /// Fetches a page of popular items for the given media kind.
    ///
    /// A discovery variant with fixed vote thresholds; returns only the
    /// result items.
    async fn popular(&self, kind: MediaKind, page: u32) -> AppResult<Vec<Value>>;

    /// Searches the catalog by title text
    async fn search(&self, kind: MediaKind, query: &str, page: u32) -> AppResult<MediaPage>;

    /// Fetches the full detail object for one catalog item
    async fn details(&self, kind: MediaKind, tmdb_id: i32) -> AppResult<Value>;
}

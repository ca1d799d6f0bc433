/// TMDB API provider
///
/// Translates internal discovery/search requests into TMDB's query-parameter
/// dialect. Movies and series live in separate catalogs (`/movie` vs `/tv`)
/// with different date-range parameter names; everything else is shared.
use reqwest::{Client as HttpClient, StatusCode};
use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    models::{DiscoverQuery, MediaKind, MediaPage},
    services::providers::MetadataProvider,
};

const DEFAULT_SORT: &str = "popularity.desc";

// Thresholds for the "popular" discover variant only.
const POPULAR_MIN_VOTE_AVERAGE: &str = "5";
const POPULAR_MIN_VOTE_COUNT: &str = "100";
const POPULAR_ORIGINAL_LANGUAGE: &str = "en";

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    language: String,
}

impl TmdbProvider {
    pub fn new(api_key: String, api_url: String, language: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            language,
        }
    }

    /// Parameters sent with every TMDB request
    fn base_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("api_key", self.api_key.clone()),
            ("language", self.language.clone()),
        ]
    }

    /// Builds the parameter list for a discover call.
    ///
    /// Absent filters are omitted entirely; date bounds map to kind-specific
    /// parameter names.
    fn discover_params(&self, kind: MediaKind, query: &DiscoverQuery) -> Vec<(&'static str, String)> {
        let mut params = self.base_params();
        params.push((
            "sort_by",
            query
                .sort_by
                .clone()
                .unwrap_or_else(|| DEFAULT_SORT.to_string()),
        ));
        params.push(("include_adult", "false".to_string()));
        params.push(("include_video", "false".to_string()));
        params.push(("page", query.page.unwrap_or(1).to_string()));

        if let Some(genres) = &query.with_genres {
            params.push(("with_genres", genres.clone()));
        }

        let (date_gte, date_lte) = kind.date_range_params();
        if let Some(from) = &query.date_from {
            params.push((date_gte, from.clone()));
        }
        if let Some(to) = &query.date_to {
            params.push((date_lte, to.clone()));
        }

        if let Some(cast) = &query.with_cast {
            params.push(("with_cast", cast.clone()));
        }

        params
    }

    /// Builds the parameter list for the popular variant
    fn popular_params(&self, page: u32) -> Vec<(&'static str, String)> {
        let mut params = self.base_params();
        params.push(("sort_by", DEFAULT_SORT.to_string()));
        params.push(("vote_average.gte", POPULAR_MIN_VOTE_AVERAGE.to_string()));
        params.push(("vote_count.gte", POPULAR_MIN_VOTE_COUNT.to_string()));
        params.push((
            "with_original_language",
            POPULAR_ORIGINAL_LANGUAGE.to_string(),
        ));
        params.push(("page", page.to_string()));
        params
    }

    async fn get(&self, path: &str, params: &[(&'static str, String)]) -> AppResult<reqwest::Response> {
        let url = format!("{}{}", self.api_url, path);
        let response = self.http_client.get(&url).query(params).send().await?;
        Ok(response)
    }

    /// Turns a non-2xx response into an upstream error, capturing the status
    /// and body for the log
    async fn check_status(response: reqwest::Response) -> AppResult<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!(
                "TMDB returned status {}: {}",
                status, body
            )));
        }
        Ok(response)
    }
}

#[async_trait::async_trait]
impl MetadataProvider for TmdbProvider {
    async fn discover(&self, kind: MediaKind, query: &DiscoverQuery) -> AppResult<MediaPage> {
        let params = self.discover_params(kind, query);
        let path = format!("/discover/{}", kind.path_segment());

        let response = Self::check_status(self.get(&path, &params).await?).await?;
        let page: MediaPage = response.json().await?;

        tracing::info!(
            kind = %kind,
            page = page.page,
            results = page.results.len(),
            "Discover completed"
        );

        Ok(page)
    }

    async fn popular(&self, kind: MediaKind, page: u32) -> AppResult<Vec<Value>> {
        let params = self.popular_params(page);
        let path = format!("/discover/{}", kind.path_segment());

        let response = Self::check_status(self.get(&path, &params).await?).await?;
        let page: MediaPage = response.json().await?;

        tracing::info!(
            kind = %kind,
            results = page.results.len(),
            "Popular fetch completed"
        );

        Ok(page.results)
    }

    async fn search(&self, kind: MediaKind, query: &str, page: u32) -> AppResult<MediaPage> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Query parameter is required".to_string(),
            ));
        }

        let mut params = self.base_params();
        params.push(("query", query.to_string()));
        params.push(("include_adult", "false".to_string()));
        params.push(("page", page.to_string()));
        let path = format!("/search/{}", kind.path_segment());

        let response = Self::check_status(self.get(&path, &params).await?).await?;
        let results: MediaPage = response.json().await?;

        tracing::info!(
            kind = %kind,
            query = %query,
            results = results.results.len(),
            "Search completed"
        );

        Ok(results)
    }

    async fn details(&self, kind: MediaKind, tmdb_id: i32) -> AppResult<Value> {
        let path = format!("/{}/{}", kind.path_segment(), tmdb_id);

        let response = self.get(&path, &self.base_params()).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!(
                "No {} found with id {}",
                kind, tmdb_id
            )));
        }

        let response = Self::check_status(response).await?;
        let detail: Value = response.json().await?;

        tracing::info!(kind = %kind, tmdb_id, "Detail fetched");

        Ok(detail)
    }
}

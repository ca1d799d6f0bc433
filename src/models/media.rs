use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Display;

/// Discriminator between the two media catalogs TMDB exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Series,
}

impl MediaKind {
    /// TMDB path segment for this kind (`/movie/...` vs `/tv/...`)
    pub fn path_segment(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Series => "tv",
        }
    }

    /// TMDB date-range parameter names for this kind.
    ///
    /// Movies filter on the primary release date, series on the first air date.
    pub fn date_range_params(&self) -> (&'static str, &'static str) {
        match self {
            MediaKind::Movie => ("primary_release_date.gte", "primary_release_date.lte"),
            MediaKind::Series => ("first_air_date.gte", "first_air_date.lte"),
        }
    }
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Movie => write!(f, "movie"),
            MediaKind::Series => write!(f, "series"),
        }
    }
}

/// Filters accepted by the discover endpoints.
///
/// Constructed per request and consumed once by the metadata provider; absent
/// filters are omitted from the outbound TMDB query entirely.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscoverQuery {
    pub with_genres: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub with_cast: Option<String>,
    pub sort_by: Option<String>,
    pub page: Option<u32>,
}

/// One page of results as returned by TMDB discover/search endpoints.
///
/// Individual items are passed through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaPage {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<Value>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

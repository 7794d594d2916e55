//! Stateless HTTP request builder and response parser for the collection API.
//!
//! # Design
//! `ArticClient` holds only a `base_url` and carries no mutable state between
//! calls. Each endpoint is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip, keeping the core
//! deterministic and free of I/O dependencies.

use std::fmt::Display;

use url::Url;

use crate::error::{ApiError, Operation};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{ArtworkDetail, DetailEnvelope, SearchEnvelope, SearchResultItem};

/// Public endpoint of the Art Institute of Chicago API.
pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1";

/// Fixed number of hits requested per search. There is no pagination.
pub const SEARCH_LIMIT: usize = 20;

pub const SEARCH_FIELDS: &[&str] = &["id", "title"];

pub const DETAIL_FIELDS: &[&str] = &[
    "id",
    "title",
    "artist_title",
    "date_display",
    "dimensions",
    "medium_display",
    "credit_line",
    "image_id",
];

/// Synchronous, stateless client for the collection API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct ArticClient {
    base_url: String,
}

impl Default for ArticClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ArticClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_search(&self, query: &str) -> HttpRequest {
        let mut url = format!("{}/artworks/search?", self.base_url);
        url.push_str(
            &url::form_urlencoded::Serializer::new(String::new())
                .append_pair("q", query)
                .append_pair("limit", &SEARCH_LIMIT.to_string())
                .append_pair("fields", &SEARCH_FIELDS.join(","))
                .finish(),
        );
        get(url)
    }

    pub fn build_get_work(&self, id: impl Display) -> HttpRequest {
        let segment = id.to_string();
        let mut url = format!("{}/artworks/", self.base_url);
        url.extend(url::form_urlencoded::byte_serialize(segment.as_bytes()).map(|s| s.replace('+', "%20")));
        url.push('?');
        url.push_str(
            &url::form_urlencoded::Serializer::new(String::new())
                .append_pair("fields", &DETAIL_FIELDS.join(","))
                .finish(),
        );
        get(url)
    }

    pub fn parse_search(&self, response: HttpResponse) -> Result<Vec<SearchResultItem>, ApiError> {
        check_status(&response, Operation::Search)?;
        let envelope: SearchEnvelope =
            serde_json::from_str(&response.body).map_err(|e| ApiError::ParseError(e.to_string()))?;
        Ok(envelope.data.unwrap_or_default())
    }

    pub fn parse_get_work(&self, response: HttpResponse) -> Result<ArtworkDetail, ApiError> {
        check_status(&response, Operation::Detail)?;
        let envelope: DetailEnvelope =
            serde_json::from_str(&response.body).map_err(|e| ApiError::ParseError(e.to_string()))?;
        envelope
            .data
            .ok_or_else(|| ApiError::ParseError("response has no data record".to_string()))
    }
}

/// Parse a request URL back into its query pairs, in order.
pub fn query_pairs(url: &str) -> Vec<(String, String)> {
    Url::parse(url)
        .map(|u| u.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect())
        .unwrap_or_default()
}

fn get(url: String) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Get,
        url,
        headers: vec![("accept".to_string(), "application/json".to_string())],
    }
}

/// Map non-success status codes to `ApiError::NetworkError`.
fn check_status(response: &HttpResponse, operation: Operation) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::NetworkError {
        operation,
        status: response.status,
    })
}

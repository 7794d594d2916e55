use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Artwork {
    pub id: u64,
    pub title: Option<String>,
    pub artist_title: Option<String>,
    pub date_display: Option<String>,
    pub dimensions: Option<String>,
    pub medium_display: Option<String>,
    pub credit_line: Option<String>,
    pub image_id: Option<String>,
}

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
    pub fields: Option<String>,
}

#[derive(Deserialize)]
pub struct FieldParams {
    pub fields: Option<String>,
}

pub type Catalog = Arc<Vec<Artwork>>;

/// Largest page the real API accepts.
pub const MAX_LIMIT: usize = 100;
const DEFAULT_LIMIT: usize = 10;

pub fn app() -> Router {
    app_with(seed())
}

pub fn app_with(artworks: Vec<Artwork>) -> Router {
    let catalog: Catalog = Arc::new(artworks);
    Router::new()
        .route("/artworks/search", get(search_artworks))
        .route("/artworks/{id}", get(get_artwork))
        .with_state(catalog)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// A small fixed catalogue, including records with missing fields.
pub fn seed() -> Vec<Artwork> {
    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }
    vec![
        Artwork {
            id: 16568,
            title: s("Water Lilies"),
            artist_title: s("Claude Monet"),
            date_display: s("1906"),
            dimensions: s("89.9 × 94.1 cm (35 3/8 × 37 1/16 in.)"),
            medium_display: s("Oil on canvas"),
            credit_line: s("Mr. and Mrs. Martin A. Ryerson Collection"),
            image_id: s("3c27b499-af56-f0d5-93b5-a7f2f1ad5813"),
        },
        Artwork {
            id: 16571,
            title: s("Arrival of the Normandy Train, Gare Saint-Lazare"),
            artist_title: s("Claude Monet"),
            date_display: s("1877"),
            dimensions: s("59.6 × 80.2 cm (23 1/2 × 31 1/2 in.)"),
            medium_display: s("Oil on canvas"),
            credit_line: s("Mr. and Mrs. Martin A. Ryerson Collection"),
            image_id: s("8a1d1a6a-6d8d-1f6e-0a9b-b2bd8f6a6f29"),
        },
        Artwork {
            id: 28560,
            title: s("The Bedroom"),
            artist_title: s("Vincent van Gogh"),
            date_display: s("1889"),
            dimensions: s("73.6 × 92.3 cm (29 × 36 5/8 in.)"),
            medium_display: s("Oil on canvas"),
            credit_line: s("Helen Birch Bartlett Memorial Collection"),
            image_id: s("25c31d8d-21a4-9ea1-1d73-6a2eca4dda7e"),
        },
        Artwork {
            id: 14598,
            title: s("Landscape with a Ruined Tower"),
            artist_title: None,
            date_display: s("17th century"),
            dimensions: None,
            medium_display: s("Pen and brown ink"),
            credit_line: None,
            image_id: None,
        },
        Artwork {
            id: 7,
            title: None,
            artist_title: None,
            date_display: None,
            dimensions: None,
            medium_display: None,
            credit_line: None,
            image_id: None,
        },
    ]
}

async fn search_artworks(
    State(catalog): State<Catalog>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    if limit > MAX_LIMIT {
        return Err(api_error(StatusCode::FORBIDDEN, "Invalid number of records"));
    }
    let terms: Vec<String> = params.q.split_whitespace().map(str::to_lowercase).collect();
    let hits: Vec<&Artwork> = catalog.iter().filter(|a| matches(a, &terms)).collect();
    let data: Vec<Value> = hits
        .iter()
        .take(limit)
        .map(|a| project(a, params.fields.as_deref()))
        .collect();
    Ok(Json(json!({
        "preference": null,
        "pagination": {
            "total": hits.len(),
            "limit": limit,
            "offset": 0,
            "current_page": 1,
        },
        "data": data,
    })))
}

async fn get_artwork(
    State(catalog): State<Catalog>,
    Path(id): Path<u64>,
    Query(params): Query<FieldParams>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let artwork = catalog
        .iter()
        .find(|a| a.id == id)
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, "The item you requested cannot be found."))?;
    Ok(Json(json!({ "data": project(artwork, params.fields.as_deref()) })))
}

/// Every term must appear in the title or the artist name.
fn matches(artwork: &Artwork, terms: &[String]) -> bool {
    let haystack = format!(
        "{} {}",
        artwork.title.as_deref().unwrap_or(""),
        artwork.artist_title.as_deref().unwrap_or("")
    )
    .to_lowercase();
    terms.iter().all(|t| haystack.contains(t.as_str()))
}

/// Keep only the comma-separated `fields`, or everything when absent.
fn project(artwork: &Artwork, fields: Option<&str>) -> Value {
    let Value::Object(full) = serde_json::to_value(artwork).unwrap_or_default() else {
        return Value::Null;
    };
    let Some(fields) = fields else {
        return Value::Object(full);
    };
    let wanted: Vec<&str> = fields.split(',').map(str::trim).collect();
    let projected: Map<String, Value> = full.into_iter().filter(|(k, _)| wanted.contains(&k.as_str())).collect();
    Value::Object(projected)
}

fn api_error(status: StatusCode, detail: &str) -> (StatusCode, Json<Value>) {
    (
        status,
        Json(json!({
            "status": status.as_u16(),
            "error": status.canonical_reason().unwrap_or("Error"),
            "detail": detail,
        })),
    )
}

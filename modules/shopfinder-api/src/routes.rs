use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{HeaderValue, Method},
    routing::get,
    Json, Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use shopfinder_search::{search, Dataset, SearchParams, SearchQuery, SearchResponse};

#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
}

pub fn build_router(dataset: Arc<Dataset>, allowed_origins: &[String]) -> Router {
    let allow_origin = if allowed_origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| match o.parse() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    warn!(origin = %o, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/search", get(search_handler))
        .route("/health", get(health))
        .with_state(AppState { dataset })
        .layer(cors)
        // Method + path only; query strings carry user coordinates
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    path = %request.uri().path(),
                )
            }),
        )
}

/// `GET /search`. Every parameter is optional and bad values fall back to
/// defaults, so this never rejects a request.
async fn search_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<SearchResponse> {
    let query = SearchQuery::from_params(&SearchParams::from_pairs(pairs));
    let products = search(&state.dataset, &query);
    Json(SearchResponse { products })
}

async fn health() -> &'static str {
    "ok"
}

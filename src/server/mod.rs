//! HTTP API exposing search, captions, and summarization.
//!
//! Three thin routes in front of the library: each validates its input,
//! calls one collaborator, and maps failures into the shared
//! `{error, details?}` body. Nothing propagates past a handler.

mod requests;

pub use requests::{CaptionsParams, SearchParams, SummarizeBody};

use crate::captions::{CaptionFetcher, InnerTubeProvider};
use crate::config::{ApiKeys, Settings};
use crate::error::OppsumError;
use crate::summary::Summarizer;
use crate::youtube::SearchClient;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::error;

/// Shared application state.
pub struct AppState {
    pub settings: Settings,
    pub search: SearchClient,
    pub captions: CaptionFetcher,
    pub summarizer: Summarizer,
}

impl AppState {
    pub fn new(settings: Settings, keys: &ApiKeys) -> Self {
        let captions = CaptionFetcher::new(
            Arc::new(InnerTubeProvider::new()),
            &settings.captions.default_language,
            &settings.captions.fallback_language,
        );

        Self {
            search: SearchClient::new(&keys.youtube),
            summarizer: Summarizer::new(&keys.openai, &settings.summary),
            captions,
            settings,
        }
    }
}

/// Build the API router.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/youtube/search", get(search))
        .route("/api/youtube/captions", get(captions))
        .route("/api/ai/summarize", post(summarize))
        .layer(cors)
        .with_state(state)
}

/// Shared error body for all endpoints.
#[derive(Serialize)]
struct ApiErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

#[derive(Serialize)]
struct SummarizeResponse {
    summary: crate::summary::VideoSummary,
}

fn validation_response(problems: Vec<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiErrorBody {
            error: "Invalid request parameters".to_string(),
            details: Some(problems.join(", ")),
        }),
    )
        .into_response()
}

fn fault_response(message: &str, err: &OppsumError) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiErrorBody {
            error: message.to_string(),
            details: Some(err.to_string()),
        }),
    )
        .into_response()
}

// === Handlers ===

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Response {
    let query = match params.validate(state.settings.search.max_results) {
        Ok(query) => query,
        Err(problems) => return validation_response(problems),
    };

    match state.search.search(&query).await {
        Ok(page) => Json(page).into_response(),
        Err(e) => {
            error!(q = %query.query, error = %e, "video search failed");
            fault_response("Video search failed", &e)
        }
    }
}

async fn captions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CaptionsParams>,
) -> Response {
    let request = match params.validate(&state.settings.captions.default_language) {
        Ok(request) => request,
        Err(problems) => return validation_response(problems),
    };

    match state.captions.fetch(&request.video_id, &request.lang).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => {
            error!(video_id = %request.video_id, error = %e, "caption fetch failed");
            fault_response("Caption fetch failed", &e)
        }
    }
}

async fn summarize(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SummarizeBody>,
) -> Response {
    let request = match body.validate() {
        Ok(request) => request,
        Err(problems) => return validation_response(problems),
    };

    match state
        .summarizer
        .summarize(&request.captions, &request.video_title)
        .await
    {
        Ok(summary) => Json(SummarizeResponse { summary }).into_response(),
        Err(e) => {
            error!(title = %request.video_title, error = %e, "summary generation failed");
            fault_response("Summary generation failed", &e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> Arc<AppState> {
        let keys = ApiKeys {
            youtube: "test-key".to_string(),
            openai: "test-key".to_string(),
        };
        Arc::new(AppState::new(Settings::default(), &keys))
    }

    // A 400 here means validation short-circuited; any provider call with the
    // bogus test key would surface as a 500 instead.
    #[tokio::test]
    async fn test_search_empty_query_rejected_before_provider_call() {
        let response = search(State(test_state()), Query(SearchParams::default())).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_captions_missing_video_id_rejected() {
        let response = captions(State(test_state()), Query(CaptionsParams::default())).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_summarize_empty_body_rejected() {
        let response = summarize(State(test_state()), Json(SummarizeBody::default())).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_health_ok() {
        let response = health().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

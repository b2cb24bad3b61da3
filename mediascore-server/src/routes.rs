use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use mediascore::analyzer::EvaluationEngine;
use mediascore::media::{MediaAnalysis, MediaKind};
use mediascore::{EvaluationRequest, EvaluationResult};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use crate::error::ApiError;

/// Multipart field carrying the upload
const UPLOAD_FIELD: &str = "file";

pub struct AppState {
    pub engine: EvaluationEngine,
    pub static_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub allowed_origins: Vec<String>,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = if state.allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = state
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let static_files = ServeDir::new(&state.static_dir);
    let body_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/evaluate", post(evaluate))
        .route("/analyze-image", post(analyze_image))
        .route("/analyze-video", post(analyze_video))
        .nest_service("/static", static_files)
        .with_state(state)
        .layer(body_limit)
        .layer(cors)
        // Method + path only: request bodies may carry personal data
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let path = state.static_dir.join("index.html");
    let html = tokio::fs::read_to_string(&path)
        .await
        .map_err(|_| ApiError::NotFound(path.display().to_string()))?;
    Ok(Html(html))
}

async fn evaluate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<EvaluationRequest>,
) -> Json<EvaluationResult> {
    let result = state.engine.evaluate(&request);
    info!(
        score = result.score,
        word_count = result.stats.word_count,
        message_type = %request.message_type,
        channel = %request.channel,
        "Evaluated text"
    );
    Json(result)
}

async fn analyze_image(multipart: Multipart) -> Result<Json<MediaAnalysis>, ApiError> {
    analyze_upload(MediaKind::Image, multipart).await
}

async fn analyze_video(multipart: Multipart) -> Result<Json<MediaAnalysis>, ApiError> {
    analyze_upload(MediaKind::Video, multipart).await
}

/// Drain the `file` field and answer with the fixed stub for `kind`
async fn analyze_upload(
    kind: MediaKind,
    mut multipart: Multipart,
) -> Result<Json<MediaAnalysis>, ApiError> {
    while let Some(mut field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let filename = field.file_name().map(str::to_string);
        let mut bytes = 0usize;
        while let Some(chunk) = field.chunk().await? {
            bytes += chunk.len();
        }

        info!(kind = %kind, bytes, "Media upload received");
        return Ok(Json(MediaAnalysis::stub(kind, filename)));
    }

    Err(ApiError::MissingFile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    const BOUNDARY: &str = "mediascore-test-boundary";

    fn test_state(static_dir: PathBuf) -> Arc<AppState> {
        Arc::new(AppState {
            engine: EvaluationEngine::new(),
            static_dir,
            max_upload_bytes: 1024 * 1024,
            allowed_origins: vec![],
        })
    }

    fn app() -> Router {
        build_router(test_state(PathBuf::from("does-not-exist")))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn post_multipart(uri: &str, field: &str, filename: &str, content: &str) -> Request<Body> {
        let body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n{content}\r\n--{b}--\r\n",
            b = BOUNDARY,
        );
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_evaluate_text() {
        let response = app()
            .oneshot(post_json(
                "/evaluate",
                json!({ "text": "This is guaranteed to work 100% and never fails for kids." }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["score"], 49);
        assert_eq!(body["rubric"]["level"], "Fair");
        assert_eq!(body["detailed_analysis"].as_array().unwrap().len(), 15);
        assert_eq!(body["signals"]["absolute_claim_hits"], 3);
    }

    #[tokio::test]
    async fn test_evaluate_content_fallback() {
        let response = app()
            .oneshot(post_json("/evaluate", json!({ "content": "hello" })))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["score"], 84);
        assert_eq!(body["stats"]["word_count"], 1);
    }

    #[tokio::test]
    async fn test_evaluate_empty_object() {
        let response = app()
            .oneshot(post_json("/evaluate", json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["score"], 0);
        assert_eq!(body["weaknesses"], json!(["Empty input text"]));
        assert!(body.get("breakdown").is_none());
    }

    #[tokio::test]
    async fn test_evaluate_rejects_non_json() {
        let request = Request::builder()
            .method("POST")
            .uri("/evaluate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("not json"))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_analyze_image() {
        let response = app()
            .oneshot(post_multipart("/analyze-image", "file", "banner.png", "PNGDATA"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "filename": "banner.png",
                "analysis": "Prototype image analysis complete.",
                "score": 82
            })
        );
    }

    #[tokio::test]
    async fn test_analyze_video() {
        let response = app()
            .oneshot(post_multipart("/analyze-video", "file", "teaser.mp4", "MP4DATA"))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["score"], 78);
        assert_eq!(body["analysis"], "Prototype video analysis complete.");
    }

    #[tokio::test]
    async fn test_upload_without_file_field() {
        let response = app()
            .oneshot(post_multipart("/analyze-image", "attachment", "x.png", "data"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_index_and_static_files() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>mediascore</h1>").unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log('hi');").unwrap();
        let app = build_router(test_state(dir.path().to_path_buf()));

        let response = app
            .clone()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"<h1>mediascore</h1>");

        let response = app
            .oneshot(Request::get("/static/app.js").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_index_is_not_found() {
        let response = app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_json(response).await["error"].is_string());
    }
}

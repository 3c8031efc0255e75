//! HTTP serving mode.
//!
//! Routes:
//! - `GET /` the playground page, pre-filled with the example
//! - `POST /api/evaluate` evaluates `{document, query}` and returns the view
//! - `GET /<assets>/*path` static files from the assets directory

use super::page::{render_page, PageMode};
use super::ServeOptions;
use crate::query::{EvaluationState, Outcome, PlaygroundView};
use anyhow::{Context, Result};
use axum::extract::{Path as AxumPath, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// Shared, read-only server state.
#[derive(Debug)]
pub struct AppState {
    assets_dir: PathBuf,
    index: String,
}

impl AppState {
    pub fn new(assets_dir: PathBuf) -> Self {
        let index = render_page(
            &EvaluationState::example(),
            &assets_prefix(&assets_dir),
            PageMode::Live,
        );
        Self { assets_dir, index }
    }
}

/// Body of `POST /api/evaluate`. Missing fields count as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvaluateRequest {
    #[serde(default)]
    pub document: String,
    #[serde(default)]
    pub query: String,
}

/// Response of `POST /api/evaluate`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateResponse {
    pub value: String,
    pub found: bool,
    pub document_error: String,
    pub outcome: Outcome,
    pub document_invalid: bool,
    pub show_not_found: bool,
}

impl EvaluateResponse {
    pub fn from_state(state: &EvaluationState) -> Self {
        let view = PlaygroundView::from_state(state);
        Self {
            value: state.value().to_string(),
            found: state.found(),
            document_error: state.document_error().to_string(),
            outcome: state.outcome(),
            document_invalid: view.document_invalid,
            show_not_found: view.show_not_found,
        }
    }
}

/// URL segment under which assets are served: the assets directory's name.
pub fn assets_prefix(assets_dir: &Path) -> String {
    assets_dir
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .unwrap_or("web")
        .to_string()
}

/// Builds the application router.
pub fn router(state: Arc<AppState>) -> Router {
    let assets_route = format!("/{}/*path", assets_prefix(&state.assets_dir));
    Router::new()
        .route("/", get(index))
        .route("/api/evaluate", post(evaluate_handler))
        .route(&assets_route, get(asset))
        .with_state(state)
}

/// Binds the listener and serves until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address can't be bound or the server fails.
pub async fn run(options: ServeOptions) -> Result<()> {
    let address = options.bind_address();
    if !options.assets_dir.is_dir() {
        tracing::warn!(
            "assets directory {} not found; asset requests will 404",
            options.assets_dir.display()
        );
    }

    let app = router(Arc::new(AppState::new(options.assets_dir)));
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    tracing::info!("Listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server failed")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for Ctrl-C: {}", err);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.index.clone())
}

pub async fn evaluate_handler(Json(request): Json<EvaluateRequest>) -> Json<EvaluateResponse> {
    let state = EvaluationState::new(request.document, request.query);
    tracing::debug!(query = state.query(), outcome = %state.outcome(), "evaluate");
    Json(EvaluateResponse::from_state(&state))
}

async fn asset(
    AxumPath(path): AxumPath<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    serve_asset(&state.assets_dir, &path).await
}

/// Serves `raw_path` from `root`: 400 for escaping paths, 404 when missing.
pub async fn serve_asset(root: &Path, raw_path: &str) -> Response {
    let rel = match sanitize_rel_path(raw_path) {
        Some(rel) => rel,
        None => return (StatusCode::BAD_REQUEST, "invalid path").into_response(),
    };

    let full = root.join(&rel);
    if !full.is_file() {
        return (StatusCode::NOT_FOUND, "not found").into_response();
    }

    match tokio::fs::read(&full).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type(&full))], bytes).into_response(),
        Err(err) => {
            tracing::warn!("failed to read {}: {}", full.display(), err);
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to read asset").into_response()
        }
    }
}

/// Rejects empty paths and any path with `..`, root, or prefix components.
pub fn sanitize_rel_path(path: &str) -> Option<PathBuf> {
    let rel = PathBuf::from(path.trim_start_matches('/'));
    if rel.as_os_str().is_empty() {
        return None;
    }
    for comp in rel.components() {
        if matches!(
            comp,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        ) {
            return None;
        }
    }
    Some(rel)
}

pub fn content_type(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
    {
        "html" => "text/html; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "js" => "application/javascript; charset=utf-8",
        "json" => "application/json; charset=utf-8",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "ico" => "image/x-icon",
        "wasm" => "application/wasm",
        _ => "application/octet-stream",
    }
}

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{routing::get, Router};
use contracts::shell::ShellConfig;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::handlers;

#[derive(Clone)]
pub struct AppState {
    pub shell: Arc<ShellConfig>,
}

/// Простой middleware для логирования запросов
async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let elapsed = start.elapsed().as_millis();
    if response.status().is_success() {
        tracing::info!("{} {} {} {}ms", status, method, uri.path(), elapsed);
    } else {
        tracing::warn!("{} {} {} {}ms", status, method, uri.path(), elapsed);
    }
    response
}

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState, static_dir: PathBuf) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(handlers::shell::health))
        .route("/api/shell/config", get(handlers::shell::get_config))
        .with_state(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}

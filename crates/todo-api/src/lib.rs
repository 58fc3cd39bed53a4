//! HTTP API（axum）
//!
//! `/todos` の CRUD と `/health` を提供します。
//! ストレージは `AppState` に注入された `TodoRepository` 実装に委譲します。

pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;

use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use infrastructure::TodoRepository;
use std::sync::Arc;

/// アプリケーションの共有状態
#[derive(Clone)]
pub struct AppState {
    repo: Arc<dyn TodoRepository>,
}

impl AppState {
    pub fn new(repo: Arc<dyn TodoRepository>) -> Self {
        Self { repo }
    }
}

/// ルータを構築して返します。
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/todos", post(handlers::create_todo))
        .route(
            "/todos/:id",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .layer(from_fn(middleware::cors))
        .layer(from_fn(middleware::log_request))
        .with_state(state)
}

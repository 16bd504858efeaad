use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::export::HtmlOptions;
use crate::services::StatementService;
use crate::storage::StatementSource;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub service: StatementService,
    pub html: Arc<HtmlOptions>,
}

impl AppState {
    pub fn new(source: Arc<dyn StatementSource>, html: HtmlOptions) -> Self {
        Self {
            service: StatementService::new(source),
            html: Arc::new(html),
        }
    }
}

/// Create the application router with all API endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/api/account-statement/:user_id",
            get(handlers::get_statement),
        )
        .route(
            "/api/account-statement/:user_id/pdf",
            get(handlers::get_statement_document),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

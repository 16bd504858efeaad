use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use super::error::{ApiError, Result};
use super::router::AppState;
use crate::export::{render_statement_html, StatementDocument};
use crate::reports::StatementReport;

/// Query string accepted by the statement endpoints
#[derive(Debug, Default, Deserialize)]
pub struct StatementQuery {
    /// Compute the statement as of this date instead of today
    #[serde(rename = "asOf")]
    pub as_of: Option<String>,
}

impl StatementQuery {
    fn as_of(&self) -> Result<Option<NaiveDate>> {
        match self.as_of.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map(Some)
                .map_err(|_| ApiError::InvalidDate(raw.to_string())),
        }
    }
}

async fn load_report(
    state: &AppState,
    user_id: &str,
    query: &StatementQuery,
) -> Result<StatementReport> {
    let report = match query.as_of()? {
        Some(as_of) => state.service.statement_for(user_id, as_of).await?,
        None => state.service.current_statement(user_id).await?,
    };
    Ok(report)
}

/// GET /health
pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// GET /api/account-statement/:user_id
/// Returns the statement document as JSON
pub async fn get_statement(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<StatementQuery>,
) -> Result<Json<StatementDocument>> {
    let report = load_report(&state, &user_id, &query).await?;
    Ok(Json(StatementDocument::from(&report)))
}

/// GET /api/account-statement/:user_id/pdf
/// Returns the printable statement as an HTML document
pub async fn get_statement_document(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<StatementQuery>,
) -> Result<Html<String>> {
    let report = load_report(&state, &user_id, &query).await?;
    Ok(Html(render_statement_html(&report, &state.html)))
}

//! HTTP API surface for beach day reports
//!
//! One handler per incoming request runs the same linear call path the CLI
//! uses; handlers are independent of each other.

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::{BeachDayError, BeachDayReport, BeachDayService};

/// Request body for a beach day report
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportRequest {
    pub city: String,
    pub state: String,
}

/// Build the API router around a shared service instance
pub fn router(service: Arc<BeachDayService>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/report", post(report))
        .with_state(service)
}

async fn health() -> &'static str {
    "ok"
}

async fn report(
    State(service): State<Arc<BeachDayService>>,
    Json(request): Json<ReportRequest>,
) -> Result<Json<BeachDayReport>, (StatusCode, String)> {
    match service.report(&request.city, &request.state).await {
        Ok(report) => Ok(Json(report)),
        Err(err) => Err((status_for(&err), err.to_string())),
    }
}

/// Map a request failure to a response status; the body is always the
/// error's display string
fn status_for(err: &BeachDayError) -> StatusCode {
    match err {
        BeachDayError::ZipNotFound { .. } => StatusCode::NOT_FOUND,
        BeachDayError::GeoLookupFailed { .. }
        | BeachDayError::WeatherFetchFailed { .. }
        | BeachDayError::MalformedResponse { .. } => StatusCode::BAD_GATEWAY,
        BeachDayError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

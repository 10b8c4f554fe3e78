//! HTTP route handlers.

use std::path::Path;
use std::time::Instant;

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tracing::{error, info, warn};

use crate::demand::{DemandError, parse_demand_csv};
use crate::scheduler::{Algorithm, ScheduleError, ScheduleFilter, ScheduleStats};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/demand", post(upload_demand))
        .route("/schedule", post(generate_schedule).get(view_schedule))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with upload form.
async fn index_page(State(state): State<AppState>) -> impl IntoResponse {
    let records = state.session.lock().await.record_count();
    Html(
        IndexTemplate::new(records)
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

fn render<T: Template>(template: &T) -> Result<Response, AppError> {
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;
    Ok(Html(html).into_response())
}

/// Store an uploaded demand CSV as the session's dataset.
async fn upload_demand(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<UploadResponse>, AppError> {
    let records = parse_demand_csv(body.as_ref())?;
    let records = state.session.lock().await.upload(records);
    Ok(Json(UploadResponse { records }))
}

/// Generate a schedule from the uploaded demand.
async fn generate_schedule(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<ScheduleRequest>,
) -> Result<Response, AppError> {
    let algorithm: Algorithm = req.algorithm.parse()?;

    let mut session = state.session.lock().await;
    if session.record_count() == 0 {
        return Err(ScheduleError::NoData.into());
    }

    if !state.processing_delay.is_zero() {
        tokio::time::sleep(state.processing_delay).await;
    }

    let capacity = session.config().train_capacity;
    let started = Instant::now();
    let run = session.regenerate(algorithm)?;
    let runtime_ms = started.elapsed().as_secs_f64() * 1000.0;
    info!(%algorithm, runtime_ms, "schedule request served");

    let stats = ScheduleStats::from_trips(&run.schedule, capacity);
    let response = ScheduleResponse::from_run(run, stats, runtime_ms);

    if accepts_html(&headers) {
        render(&ScheduleTemplate {
            algorithm: response.algorithm,
            runtime_ms: format!("{:.2}", response.runtime_ms),
            trips: response.trips,
            stats: response.stats,
            complexity: response.complexity,
        })
    } else {
        Ok(Json(response).into_response())
    }
}

/// Filtered view of the last generated schedule.
async fn view_schedule(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(filter): Query<ScheduleFilter>,
) -> Result<Response, AppError> {
    let view = state.session.lock().await.view(&filter)?;
    let response = ViewResponse::from_view(&view);

    if accepts_html(&headers) {
        render(&ScheduleTableTemplate {
            trips: response.trips,
            stats: response.stats,
        })
    } else {
        Ok(Json(response).into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<DemandError> for AppError {
    fn from(e: DemandError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<ScheduleError> for AppError {
    fn from(e: ScheduleError) -> Self {
        match e {
            ScheduleError::NotScheduled => AppError::NotFound {
                message: e.to_string(),
            },
            ScheduleError::NoData
            | ScheduleError::UnknownAlgorithm(_)
            | ScheduleError::Demand(_) => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

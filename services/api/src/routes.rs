use crate::infra::{random_source, AppState, CommentService};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::Local;
use report_comments::error::AppError;
use report_comments::workflows::batch::{
    export, strip_unsafe, student_name, BatchOutcome, CommentBatch, CommentEntry,
    ADDENDUM_MAX_CHARS,
};
use report_comments::workflows::comments::{Band, CommentRequest, SubjectKey};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

fn default_score() -> f64 {
    f64::from(Band::DEFAULT.value())
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateCommentBody {
    pub(crate) subject: String,
    pub(crate) year: u8,
    pub(crate) student_name: String,
    #[serde(default)]
    pub(crate) gender: String,
    #[serde(default = "default_score")]
    pub(crate) attitude: f64,
    #[serde(default = "default_score")]
    pub(crate) achievement: f64,
    #[serde(default = "default_score")]
    pub(crate) target: f64,
    #[serde(default)]
    pub(crate) comment: Option<String>,
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BatchBody {
    pub(crate) csv: String,
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SessionView {
    pub(crate) count: usize,
    pub(crate) entries: Vec<CommentEntry>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TrackView {
    pub(crate) subject: String,
    pub(crate) year: u8,
}

/// Comment endpoints backed by `service`.
pub(crate) fn comment_router(service: Arc<CommentService>) -> Router {
    Router::new()
        .route(
            "/api/v1/comments",
            post(generate_handler)
                .get(session_handler)
                .delete(clear_handler),
        )
        .route("/api/v1/comments/batch", post(batch_handler))
        .route("/api/v1/comments/export", get(export_handler))
        .route("/api/v1/subjects", get(subjects_handler))
        .with_state(service)
}

/// Comment endpoints plus the operational probes.
pub(crate) fn with_comment_routes(service: Arc<CommentService>) -> Router {
    comment_router(service)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn generate_handler(
    State(service): State<Arc<CommentService>>,
    Json(body): Json<GenerateCommentBody>,
) -> Response {
    let student_name = match student_name(&body.student_name, service.limits.name_max_len) {
        Ok(name) => name,
        Err(err) => return AppError::from(err).into_response(),
    };

    let request = CommentRequest {
        subject: SubjectKey::new(&body.subject, body.year),
        student_name,
        gender: body.gender,
        attitude: body.attitude,
        achievement: body.achievement,
        target: body.target,
        addendum: body
            .comment
            .as_deref()
            .map(|comment| strip_unsafe(comment, ADDENDUM_MAX_CHARS)),
    };

    let mut random = random_source(body.seed);
    match service.assembler.generate(&request, random.as_mut()) {
        Ok(comment) => {
            let entry = CommentEntry::new(&request, comment, Local::now().naive_local());
            service.session.append([entry.clone()]);
            (StatusCode::OK, Json(entry)).into_response()
        }
        Err(err) => AppError::from(err).into_response(),
    }
}

pub(crate) async fn batch_handler(
    State(service): State<Arc<CommentService>>,
    Json(body): Json<BatchBody>,
) -> Result<Json<BatchOutcome>, AppError> {
    let batch = CommentBatch::from_reader(Cursor::new(body.csv.into_bytes()), service.limits)?;
    let mut random = random_source(body.seed);
    let outcome = batch.generate(
        &service.assembler,
        random.as_mut(),
        Local::now().naive_local(),
    );
    service.session.append(outcome.comment_entries());
    Ok(Json(outcome))
}

pub(crate) async fn session_handler(State(service): State<Arc<CommentService>>) -> Json<SessionView> {
    let entries = service.session.entries();
    Json(SessionView {
        count: entries.len(),
        entries,
    })
}

pub(crate) async fn clear_handler(
    State(service): State<Arc<CommentService>>,
) -> Json<serde_json::Value> {
    let cleared = service.session.clear();
    Json(json!({ "cleared": cleared }))
}

pub(crate) async fn export_handler(
    State(service): State<Arc<CommentService>>,
) -> Result<Response, AppError> {
    let now = Local::now().naive_local();
    let csv = export::to_csv_string(&service.session.entries())?;
    let disposition = format!(
        "attachment; filename=\"report_comments_{}.csv\"",
        now.format("%Y%m%d_%H%M")
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    )
        .into_response())
}

pub(crate) async fn subjects_handler(
    State(service): State<Arc<CommentService>>,
) -> Json<Vec<TrackView>> {
    let tracks = service
        .assembler
        .bank()
        .tracks()
        .into_iter()
        .map(|key| TrackView {
            subject: key.subject().to_string(),
            year: key.year(),
        })
        .collect();
    Json(tracks)
}

//! Axum route handlers for resume records and their version history.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{ResumeContent, ResumeRecord, ResumeVersion};
use crate::routes::UserIdQuery;
use crate::state::AppState;

/// Body for both create and update: the resume fields at the top level plus
/// an optional template name.
#[derive(Debug, Deserialize)]
pub struct ResumeVersionRequest {
    pub user_id: Uuid,
    #[serde(flatten)]
    pub content: ResumeContent,
    #[serde(default)]
    pub template: Option<String>,
}

/// POST /api/resume
pub async fn handle_create_resume(
    State(state): State<AppState>,
    Json(req): Json<ResumeVersionRequest>,
) -> Result<(StatusCode, Json<ResumeRecord>), AppError> {
    let record = ResumeRecord::new(req.user_id, ResumeVersion::new(req.content, req.template));
    let record = state.resumes.insert(record).await?;
    info!(resume_id = %record.id, user_id = %record.user_id, "Resume created");
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/resume
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<ResumeRecord>>, AppError> {
    Ok(Json(state.resumes.list_for_user(params.user_id).await?))
}

/// GET /api/resume/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ResumeRecord>, AppError> {
    let record = state
        .resumes
        .get(params.user_id, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
    Ok(Json(record))
}

/// PUT /api/resume/:id
///
/// Appends a new version; earlier versions are kept as history.
pub async fn handle_update_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ResumeVersionRequest>,
) -> Result<Json<ResumeRecord>, AppError> {
    let version = ResumeVersion::new(req.content, req.template);
    let record = state
        .resumes
        .append_version(req.user_id, id, version)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
    info!(resume_id = %id, versions = record.versions.len(), "Resume version appended");
    Ok(Json(record))
}

/// DELETE /api/resume/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    if !state.resumes.delete(params.user_id, id).await? {
        return Err(AppError::NotFound(format!("Resume {id} not found")));
    }
    info!(resume_id = %id, "Resume deleted");
    Ok(StatusCode::NO_CONTENT)
}

//! Axum route handlers for auto-fill and job application tracking.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::autofill::extract::{extract_resume_data, ExtractedData, COMMON_FIELDS};
use crate::autofill::generate::{generate_auto_fill, AutoFillData};
use crate::errors::AppError;
use crate::models::application::{ApplicationStatus, JobApplication, JobData};
use crate::models::resume::ResumeContent;
use crate::routes::UserIdQuery;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    #[serde(alias = "resumeData")]
    pub resume_data: Option<ResumeContent>,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub extracted_data: ExtractedData,
    pub common_fields: Vec<&'static str>,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub user_id: Uuid,
    #[serde(alias = "resumeData")]
    pub resume_data: Option<ResumeContent>,
    #[serde(default, alias = "jobData")]
    pub job_data: Option<JobData>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub auto_fill_data: AutoFillData,
    pub job_data: Option<JobData>,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct SaveApplicationRequest {
    pub user_id: Uuid,
    #[serde(alias = "jobData")]
    pub job_data: JobData,
    #[serde(default, alias = "autoFillData")]
    pub auto_fill_data: Value,
    #[serde(default, alias = "applicationStatus")]
    pub application_status: Option<ApplicationStatus>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub user_id: Uuid,
    #[serde(alias = "applicationStatus")]
    pub application_status: ApplicationStatus,
}

#[derive(Debug, Serialize)]
pub struct ApplicationResponse {
    pub application: JobApplication,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ApplicationListResponse {
    pub applications: Vec<JobApplication>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/autofill/extract
pub async fn handle_extract(
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, AppError> {
    let resume = request
        .resume_data
        .ok_or_else(|| AppError::Validation("Resume data is required".to_string()))?;

    Ok(Json(ExtractResponse {
        extracted_data: extract_resume_data(&resume),
        common_fields: COMMON_FIELDS.to_vec(),
        message: "Resume data extracted successfully".to_string(),
    }))
}

/// POST /api/autofill/generate
pub async fn handle_generate(
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let resume = request
        .resume_data
        .ok_or_else(|| AppError::Validation("Resume data is required".to_string()))?;

    let today = Utc::now().date_naive();
    let auto_fill_data = generate_auto_fill(&resume, request.job_data.as_ref(), today);

    let job = request.job_data.as_ref();
    info!(
        user_id = %request.user_id,
        company = job.and_then(|j| j.company.as_deref()).unwrap_or_default(),
        position = job.and_then(|j| j.position.as_deref()).unwrap_or_default(),
        "Auto-fill data generated"
    );

    Ok(Json(GenerateResponse {
        auto_fill_data,
        job_data: request.job_data,
        message: "Auto-fill data generated successfully".to_string(),
    }))
}

/// POST /api/autofill/save-application
pub async fn handle_save_application(
    State(state): State<AppState>,
    Json(request): Json<SaveApplicationRequest>,
) -> Result<Json<ApplicationResponse>, AppError> {
    let JobData {
        company,
        position,
        job_url,
    } = request.job_data;

    let company = required(company, "company")?;
    let position = required(position, "position")?;

    let application = JobApplication::new(
        request.user_id,
        company,
        position,
        job_url,
        request.auto_fill_data,
        request.application_status.unwrap_or_default(),
    );
    let application = state.applications.insert(application).await?;
    info!(application_id = %application.id, user_id = %application.user_id, "Job application saved");

    Ok(Json(ApplicationResponse {
        application,
        message: "Job application saved successfully".to_string(),
    }))
}

/// GET /api/autofill/applications
pub async fn handle_list_applications(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ApplicationListResponse>, AppError> {
    let applications = state.applications.list_for_user(params.user_id).await?;
    Ok(Json(ApplicationListResponse { applications }))
}

/// PATCH /api/autofill/applications/:id
pub async fn handle_update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<ApplicationResponse>, AppError> {
    let application = state
        .applications
        .update_status(request.user_id, id, request.application_status)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job application {id} not found")))?;

    Ok(Json(ApplicationResponse {
        application,
        message: "Application status updated successfully".to_string(),
    }))
}

/// DELETE /api/autofill/applications/:id
pub async fn handle_delete_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    if !state.applications.delete(params.user_id, id).await? {
        return Err(AppError::NotFound(format!("Job application {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

fn required(value: Option<String>, field: &str) -> Result<String, AppError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::Validation(format!("job_data.{field} is required")))
}

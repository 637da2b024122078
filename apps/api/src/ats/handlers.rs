//! Axum route handlers for the ATS API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::ats::analyzer::{analyze, AnalysisResult};
use crate::ats::flatten::flatten_resume;
use crate::ats::recommendations::{recommend, Recommendation};
use crate::errors::AppError;
use crate::models::resume::ResumeContent;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume: Option<ResumeContent>,
    #[serde(default, alias = "jobDescription")]
    pub job_description: Option<String>,
}

/// Either a stored resume (`resume_id` + `user_id`, latest version used) or an
/// inline `resume` payload.
#[derive(Debug, Deserialize)]
pub struct RecommendationsRequest {
    #[serde(default, alias = "userId")]
    pub user_id: Option<Uuid>,
    #[serde(default, alias = "resumeId")]
    pub resume_id: Option<Uuid>,
    #[serde(default)]
    pub resume: Option<ResumeContent>,
    #[serde(default, alias = "jobDescription")]
    pub job_description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<Recommendation>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/ats/analyze
pub async fn handle_analyze(
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    let resume = request
        .resume
        .ok_or_else(|| AppError::Validation("Resume data is required".to_string()))?;

    let result = analyze(&resume, request.job_description.as_deref());
    info!(
        score = result.score,
        has_job_description = request.job_description.is_some(),
        "Resume analyzed"
    );

    Ok(Json(result))
}

/// POST /api/ats/recommendations
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Json(request): Json<RecommendationsRequest>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let resume_text = match (request.resume_id, request.resume) {
        (Some(resume_id), _) => {
            let user_id = request
                .user_id
                .ok_or_else(|| AppError::Validation("user_id is required".to_string()))?;
            let record = state
                .resumes
                .get(user_id, resume_id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;
            let latest = record
                .latest()
                .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} has no versions")))?;
            flatten_resume(&latest.content)
        }
        (None, Some(resume)) => flatten_resume(&resume),
        (None, None) => {
            return Err(AppError::Validation(
                "resume_id or resume is required".to_string(),
            ))
        }
    };

    let recommendations = recommend(&resume_text, request.job_description.as_deref());
    info!(count = recommendations.len(), "Recommendations generated");

    Ok(Json(RecommendationsResponse { recommendations }))
}

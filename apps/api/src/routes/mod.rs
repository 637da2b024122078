pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::ats::handlers as ats;
use crate::autofill::handlers as autofill;
use crate::resumes::handlers as resumes;
use crate::state::AppState;

/// Caller-supplied user id; authentication happens upstream.
#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // ATS engine
        .route("/api/ats/analyze", post(ats::handle_analyze))
        .route(
            "/api/ats/recommendations",
            post(ats::handle_recommendations),
        )
        // Resume records
        .route(
            "/api/resume",
            post(resumes::handle_create_resume).get(resumes::handle_list_resumes),
        )
        .route(
            "/api/resume/:id",
            get(resumes::handle_get_resume)
                .put(resumes::handle_update_resume)
                .delete(resumes::handle_delete_resume),
        )
        // Auto-fill and application tracking
        .route("/api/autofill/extract", post(autofill::handle_extract))
        .route("/api/autofill/generate", post(autofill::handle_generate))
        .route(
            "/api/autofill/save-application",
            post(autofill::handle_save_application),
        )
        .route(
            "/api/autofill/applications",
            get(autofill::handle_list_applications),
        )
        .route(
            "/api/autofill/applications/:id",
            patch(autofill::handle_update_status).delete(autofill::handle_delete_application),
        )
        .with_state(state)
}

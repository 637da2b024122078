//! Persistence seams for resumes and job applications.
//!
//! Handlers only see the traits; `AppState` carries `Arc<dyn ResumeStore>` and
//! `Arc<dyn ApplicationStore>`, so a database-backed store can replace the
//! in-memory one without touching routes. All lookups are scoped by user.

pub mod memory;

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::models::application::{ApplicationStatus, JobApplication};
use crate::models::resume::{ResumeRecord, ResumeVersion};

#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn insert(&self, record: ResumeRecord) -> Result<ResumeRecord>;

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<ResumeRecord>>;

    async fn get(&self, user_id: Uuid, resume_id: Uuid) -> Result<Option<ResumeRecord>>;

    /// Appends a version. Existing versions are never modified.
    async fn append_version(
        &self,
        user_id: Uuid,
        resume_id: Uuid,
        version: ResumeVersion,
    ) -> Result<Option<ResumeRecord>>;

    /// Returns `false` when no such resume exists for the user.
    async fn delete(&self, user_id: Uuid, resume_id: Uuid) -> Result<bool>;
}

#[async_trait]
pub trait ApplicationStore: Send + Sync {
    async fn insert(&self, application: JobApplication) -> Result<JobApplication>;

    /// Newest first.
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<JobApplication>>;

    async fn update_status(
        &self,
        user_id: Uuid,
        application_id: Uuid,
        status: ApplicationStatus,
    ) -> Result<Option<JobApplication>>;

    async fn delete(&self, user_id: Uuid, application_id: Uuid) -> Result<bool>;
}

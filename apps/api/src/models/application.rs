use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Applied,
    Interview,
    Rejected,
    Accepted,
}

/// Job posting details supplied by the client when auto-filling or saving.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobData {
    pub company: Option<String>,
    pub position: Option<String>,
    pub job_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company: String,
    pub position: String,
    pub job_url: Option<String>,
    pub auto_fill_data: Value,
    pub application_status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobApplication {
    pub fn new(
        user_id: Uuid,
        company: String,
        position: String,
        job_url: Option<String>,
        auto_fill_data: Value,
        application_status: ApplicationStatus,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            company,
            position,
            job_url,
            auto_fill_data,
            application_status,
            applied_at: now,
            created_at: now,
            updated_at: now,
        }
    }
}

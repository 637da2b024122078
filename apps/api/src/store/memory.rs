use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::application::{ApplicationStatus, JobApplication};
use crate::models::resume::{ResumeRecord, ResumeVersion};
use crate::store::{ApplicationStore, ResumeStore};

/// Process-local resume store. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryResumeStore {
    records: RwLock<HashMap<Uuid, ResumeRecord>>,
}

#[async_trait]
impl ResumeStore for InMemoryResumeStore {
    async fn insert(&self, record: ResumeRecord) -> Result<ResumeRecord> {
        self.records.write().await.insert(record.id, record.clone());
        Ok(record)
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<ResumeRecord>> {
        let records = self.records.read().await;
        let mut owned: Vec<ResumeRecord> = records
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by_key(|r| r.created_at);
        Ok(owned)
    }

    async fn get(&self, user_id: Uuid, resume_id: Uuid) -> Result<Option<ResumeRecord>> {
        Ok(self
            .records
            .read()
            .await
            .get(&resume_id)
            .filter(|r| r.user_id == user_id)
            .cloned())
    }

    async fn append_version(
        &self,
        user_id: Uuid,
        resume_id: Uuid,
        version: ResumeVersion,
    ) -> Result<Option<ResumeRecord>> {
        let mut records = self.records.write().await;
        let Some(record) = records
            .get_mut(&resume_id)
            .filter(|r| r.user_id == user_id)
        else {
            return Ok(None);
        };
        record.push_version(version);
        Ok(Some(record.clone()))
    }

    async fn delete(&self, user_id: Uuid, resume_id: Uuid) -> Result<bool> {
        let mut records = self.records.write().await;
        match records.get(&resume_id) {
            Some(r) if r.user_id == user_id => {
                records.remove(&resume_id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[derive(Default)]
pub struct InMemoryApplicationStore {
    applications: RwLock<HashMap<Uuid, JobApplication>>,
}

#[async_trait]
impl ApplicationStore for InMemoryApplicationStore {
    async fn insert(&self, application: JobApplication) -> Result<JobApplication> {
        self.applications
            .write()
            .await
            .insert(application.id, application.clone());
        Ok(application)
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<JobApplication>> {
        let applications = self.applications.read().await;
        let mut owned: Vec<JobApplication> = applications
            .values()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn update_status(
        &self,
        user_id: Uuid,
        application_id: Uuid,
        status: ApplicationStatus,
    ) -> Result<Option<JobApplication>> {
        let mut applications = self.applications.write().await;
        let Some(application) = applications
            .get_mut(&application_id)
            .filter(|a| a.user_id == user_id)
        else {
            return Ok(None);
        };
        application.application_status = status;
        application.updated_at = Utc::now();
        Ok(Some(application.clone()))
    }

    async fn delete(&self, user_id: Uuid, application_id: Uuid) -> Result<bool> {
        let mut applications = self.applications.write().await;
        match applications.get(&application_id) {
            Some(a) if a.user_id == user_id => {
                applications.remove(&application_id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

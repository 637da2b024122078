use std::sync::Arc;

use crate::store::memory::{InMemoryApplicationStore, InMemoryResumeStore};
use crate::store::{ApplicationStore, ResumeStore};

/// Shared application state injected into all route handlers via Axum extractors.
/// The ATS engine itself is stateless and needs nothing from here.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable resume store. Default: in-memory.
    pub resumes: Arc<dyn ResumeStore>,
    pub applications: Arc<dyn ApplicationStore>,
}

impl AppState {
    pub fn in_memory() -> Self {
        Self {
            resumes: Arc::new(InMemoryResumeStore::default()),
            applications: Arc::new(InMemoryApplicationStore::default()),
        }
    }
}

use std::sync::Arc;

use crate::pkg::internal::adaptors::jobs::store::{JobStore, MemoryJobStore};

#[derive(Clone)]
pub struct AppState {
    pub jobs: Arc<dyn JobStore>,
}

impl AppState {
    pub fn new() -> AppState {
        AppState {
            jobs: Arc::new(MemoryJobStore::seeded()),
        }
    }

    pub fn with_store(jobs: Arc<dyn JobStore>) -> AppState {
        AppState { jobs }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

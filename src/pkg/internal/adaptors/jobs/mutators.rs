use chrono::Utc;
use serde_json::Value;

use super::spec::{JobEntry, NewJob, DEFAULT_JOB_TYPE};
use super::store::JobStore;
use crate::pkg::server::handlers::jobs::CreateJobInput;
use crate::prelude::{AppError, Result};

pub struct JobMutator<'a> {
    store: &'a dyn JobStore,
}

impl<'a> JobMutator<'a> {
    pub fn new(store: &'a dyn JobStore) -> Self {
        JobMutator { store }
    }

    /// Normalizes an already-validated payload and appends it to the store,
    /// which assigns the id.
    pub fn create(&self, input: CreateJobInput) -> Result<JobEntry> {
        self.store.append(normalize(input)?)
    }
}

/// Defaulting is explicit here: `type` falls back to "full-time" and
/// `postedDate` to today's date (UTC, YYYY-MM-DD) when absent or empty.
/// The title arrives pre-validated as a non-empty string and gets trimmed.
fn normalize(input: CreateJobInput) -> Result<NewJob> {
    let title = match input.title {
        Some(Value::String(title)) => title.trim().to_string(),
        _ => return Err(unvalidated("title")),
    };
    let salary = match input.salary {
        Some(Value::Number(salary)) => salary,
        _ => return Err(unvalidated("salary")),
    };
    let job_type = match input.job_type {
        Some(Value::String(job_type)) if !job_type.is_empty() => job_type,
        _ => DEFAULT_JOB_TYPE.to_string(),
    };
    let posted_date = match input.posted_date {
        Some(Value::String(posted_date)) if !posted_date.is_empty() => posted_date,
        _ => Utc::now().date_naive().format("%Y-%m-%d").to_string(),
    };
    Ok(NewJob {
        title,
        job_type,
        salary,
        posted_date,
    })
}

fn unvalidated(field: &str) -> AppError {
    AppError::Internal(format!("unvalidated {} reached normalization", field))
}

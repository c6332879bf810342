use std::sync::RwLock;

use serde_json::Number;

use super::spec::{JobEntry, NewJob};
use crate::prelude::{AppError, Result};

/// Storage seam for job postings. Handlers only see this trait, so a
/// database-backed implementation can replace the in-memory one without
/// touching API logic.
pub trait JobStore: Send + Sync {
    /// Copy of all records in insertion order.
    fn list(&self) -> Result<Vec<JobEntry>>;

    /// Stores an already-validated posting, assigning the next id as
    /// `max(existing ids, 0) + 1`. Ids are never reused.
    fn append(&self, job: NewJob) -> Result<JobEntry>;
}

pub struct MemoryJobStore {
    jobs: RwLock<Vec<JobEntry>>,
}

impl MemoryJobStore {
    pub fn new(jobs: Vec<JobEntry>) -> Self {
        MemoryJobStore {
            jobs: RwLock::new(jobs),
        }
    }

    /// The three postings every fresh process starts with.
    pub fn seeded() -> Self {
        Self::new(vec![
            JobEntry {
                id: 1,
                title: "Frontend Developer".into(),
                job_type: "full-time".into(),
                salary: Number::from(80000),
                posted_date: "2024-08-01".into(),
            },
            JobEntry {
                id: 2,
                title: "Backend Developer".into(),
                job_type: "part-time".into(),
                salary: Number::from(40000),
                posted_date: "2024-08-02".into(),
            },
            JobEntry {
                id: 3,
                title: "Full Stack Dev".into(),
                job_type: "remote".into(),
                salary: Number::from(90000),
                posted_date: "2024-08-03".into(),
            },
        ])
    }
}

impl JobStore for MemoryJobStore {
    fn list(&self) -> Result<Vec<JobEntry>> {
        let jobs = self
            .jobs
            .read()
            .map_err(|_| AppError::Internal("job store lock poisoned".into()))?;
        Ok(jobs.clone())
    }

    fn append(&self, job: NewJob) -> Result<JobEntry> {
        let mut jobs = self
            .jobs
            .write()
            .map_err(|_| AppError::Internal("job store lock poisoned".into()))?;
        let id = jobs.iter().map(|entry| entry.id).max().unwrap_or(0) + 1;
        let entry = JobEntry {
            id,
            title: job.title,
            job_type: job.job_type,
            salary: job.salary,
            posted_date: job.posted_date,
        };
        jobs.push(entry.clone());
        Ok(entry)
    }
}

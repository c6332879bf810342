use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    pkg::{
        internal::adaptors::jobs::{
            mutators::JobMutator, selectors::JobSelector, spec::JobEntry, validate::validate_job,
        },
        server::state::AppState,
    },
    prelude::{AppError, Result},
};

/// Fields arrive as raw JSON values so a wrong-typed field surfaces as a
/// validation message instead of a deserializer rejection.
#[derive(Deserialize, Default)]
pub struct CreateJobInput {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default, rename = "type")]
    pub job_type: Option<Value>,
    #[serde(default)]
    pub salary: Option<Value>,
    #[serde(default, rename = "postedDate")]
    pub posted_date: Option<Value>,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<JobEntry>>> {
    let jobs = JobSelector::new(&*state.jobs).get_all().map_err(|err| {
        tracing::error!("listing jobs failed: {}", err);
        AppError::Internal("Failed to fetch jobs".into())
    })?;
    Ok(Json(jobs))
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateJobInput>,
) -> Result<(StatusCode, Json<JobEntry>)> {
    let errors = validate_job(&input);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }
    let job = JobMutator::new(&*state.jobs).create(input).map_err(|err| {
        tracing::error!("creating job failed: {}", err);
        AppError::Internal("Failed to create job".into())
    })?;
    tracing::debug!("created job {}", job.id);
    Ok((StatusCode::CREATED, Json(job)))
}

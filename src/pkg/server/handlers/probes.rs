use axum::Json;
use serde::Serialize;

use crate::prelude::Result;

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

pub async fn health() -> Result<Json<HealthStatus>> {
    tracing::debug!("service is healthy");
    Ok(Json(HealthStatus {
        status: "OK".into(),
        message: "Job Board API is running".into(),
    }))
}

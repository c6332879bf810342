use axum::Json;
use serde_json::{Value, json};

use crate::prelude::{AppError, Result};

pub async fn home() -> Result<Json<Value>> {
    Ok(Json(json!({
        "message": "Job Board API",
        "endpoints": {
            "GET /api/jobs": "Get all jobs (sorted by date)",
            "POST /api/jobs": "Create a new job",
            "GET /health": "Health check"
        }
    })))
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}

pub mod view;

use std::io::{self, BufRead, Write};

use crate::{
    conf::settings,
    pkg::internal::adaptors::jobs::spec::JobEntry,
    prelude::{AppError, Result},
};
use view::{JobListView, JOB_TYPES};

async fn fetch_jobs(base_url: &str) -> Result<Vec<JobEntry>> {
    let response = reqwest::get(format!("{}/api/jobs", base_url)).await?;
    if !response.status().is_success() {
        return Err(AppError::Internal(format!(
            "HTTP error! status: {}",
            response.status().as_u16()
        )));
    }
    Ok(response.json().await?)
}

/// Interactive job list: fetch, render, offer a retry when the fetch fails.
/// The type filter only narrows what is displayed; it never refetches.
pub async fn browse(job_type: &str) -> Result<()> {
    if !JOB_TYPES.contains(&job_type) {
        tracing::warn!("unknown job type filter \"{}\", expected one of {:?}", job_type, JOB_TYPES);
    }
    let mut view = JobListView::new(job_type);
    loop {
        println!("{}", view.render());
        match fetch_jobs(&settings.base_url).await {
            Ok(jobs) => view.resolve(jobs),
            Err(err) => {
                tracing::debug!("fetch failed: {}", err);
                view.fail(err.to_string());
            }
        }
        println!("{}", view.render());
        if !view.is_error() || !confirm_retry()? {
            break;
        }
        view.retry();
    }
    Ok(())
}

fn confirm_retry() -> Result<bool> {
    print!("Retry? [y/N] ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}

use crate::pkg::internal::adaptors::jobs::spec::JobEntry;

pub const JOB_TYPES: [&str; 4] = ["all", "full-time", "part-time", "remote"];

/// Fetch lifecycle for the job list. A view starts in `Loading`; `retry` is
/// the only way out of `Error` and always lands back in `Loading`.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Error(String),
    Ready(Vec<JobEntry>),
}

/// The job list view: the fetch state machine plus an orthogonal
/// selected-type filter that narrows the displayed set without refetching.
pub struct JobListView {
    state: FetchState,
    selected_type: String,
}

impl JobListView {
    pub fn new(selected_type: &str) -> Self {
        JobListView {
            state: FetchState::Loading,
            selected_type: selected_type.to_string(),
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn is_error(&self) -> bool {
        matches!(self.state, FetchState::Error(_))
    }

    /// Loading -> Ready. Ignored outside `Loading`.
    pub fn resolve(&mut self, jobs: Vec<JobEntry>) {
        if let FetchState::Loading = self.state {
            self.state = FetchState::Ready(jobs);
        }
    }

    /// Loading -> Error. Ignored outside `Loading`.
    pub fn fail(&mut self, message: impl Into<String>) {
        if let FetchState::Loading = self.state {
            self.state = FetchState::Error(message.into());
        }
    }

    /// Error -> Loading; the caller refetches. Returns false when there is
    /// nothing to retry.
    pub fn retry(&mut self) -> bool {
        if self.is_error() {
            self.state = FetchState::Loading;
            true
        } else {
            false
        }
    }

    pub fn set_filter(&mut self, selected_type: &str) {
        self.selected_type = selected_type.to_string();
    }

    pub fn filtered(&self) -> Vec<&JobEntry> {
        match &self.state {
            FetchState::Ready(jobs) => jobs
                .iter()
                .filter(|job| self.selected_type == "all" || job.job_type == self.selected_type)
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn render(&self) -> String {
        match &self.state {
            FetchState::Loading => "Loading jobs...".to_string(),
            FetchState::Error(message) => {
                format!("Error loading jobs: {}", message)
            }
            FetchState::Ready(jobs) => {
                let filtered = self.filtered();
                let mut out = format!("Showing {} of {} jobs", filtered.len(), jobs.len());
                if filtered.is_empty() {
                    out.push_str("\nNo jobs found for the selected filter.");
                } else {
                    for job in filtered {
                        out.push_str(&format!(
                            "\n{} ({}) ${}  Posted: {}",
                            job.title, job.job_type, job.salary, job.posted_date
                        ));
                    }
                }
                out
            }
        }
    }
}

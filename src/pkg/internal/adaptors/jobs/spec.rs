use serde::{Deserialize, Serialize};
use serde_json::Number;

pub const DEFAULT_JOB_TYPE: &str = "full-time";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct JobEntry {
    pub id: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub job_type: String,
    // held as a JSON number so integer salaries round-trip without a
    // fractional suffix
    pub salary: Number,
    #[serde(rename = "postedDate")]
    pub posted_date: String,
}

/// A validated, normalized posting awaiting id assignment by the store.
#[derive(Clone, Debug)]
pub struct NewJob {
    pub title: String,
    pub job_type: String,
    pub salary: Number,
    pub posted_date: String,
}

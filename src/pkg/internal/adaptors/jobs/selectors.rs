use std::cmp::Reverse;

use chrono::NaiveDate;

use super::spec::JobEntry;
use super::store::JobStore;
use crate::prelude::Result;

pub struct JobSelector<'a> {
    store: &'a dyn JobStore,
}

impl<'a> JobSelector<'a> {
    pub fn new(store: &'a dyn JobStore) -> Self {
        JobSelector { store }
    }

    /// All postings, newest first. Ties keep insertion order (stable sort);
    /// entries whose date does not parse sort after everything dated.
    pub fn get_all(&self) -> Result<Vec<JobEntry>> {
        let mut jobs = self.store.list()?;
        jobs.sort_by_key(|job| Reverse(parse_posted_date(&job.posted_date)));
        Ok(jobs)
    }
}

fn parse_posted_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pkg::internal::adaptors::jobs::store::MemoryJobStore;
    use serde_json::Number;

    fn entry(id: u32, posted_date: &str) -> JobEntry {
        JobEntry {
            id,
            title: format!("Job {}", id),
            job_type: "full-time".to_string(),
            salary: Number::from(50000),
            posted_date: posted_date.to_string(),
        }
    }

    #[test]
    fn seed_data_lists_newest_first() {
        let store = MemoryJobStore::seeded();
        let jobs = JobSelector::new(&store).get_all().unwrap();
        assert_eq!(
            jobs.iter().map(|job| job.id).collect::<Vec<_>>(),
            vec![3, 2, 1]
        );
    }

    #[test]
    fn equal_dates_keep_insertion_order() {
        let store = MemoryJobStore::new(vec![
            entry(1, "2024-08-02"),
            entry(2, "2024-08-01"),
            entry(3, "2024-08-02"),
        ]);
        let jobs = JobSelector::new(&store).get_all().unwrap();
        assert_eq!(
            jobs.iter().map(|job| job.id).collect::<Vec<_>>(),
            vec![1, 3, 2]
        );
    }

    #[test]
    fn unparseable_dates_sort_last() {
        let store = MemoryJobStore::new(vec![
            entry(1, "soon"),
            entry(2, "2024-08-01"),
        ]);
        let jobs = JobSelector::new(&store).get_all().unwrap();
        assert_eq!(
            jobs.iter().map(|job| job.id).collect::<Vec<_>>(),
            vec![2, 1]
        );
    }

    #[test]
    fn sorting_does_not_touch_the_store() {
        let store = MemoryJobStore::seeded();
        JobSelector::new(&store).get_all().unwrap();
        let raw = store.list().unwrap();
        assert_eq!(raw.iter().map(|job| job.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}

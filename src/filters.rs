// src/filters.rs
//! Range predicates applied to a fetched job collection. Filters copy the
//! matching listings out; every render pass works on its own view.

use crate::jobs::JobListing;

/// Keeps jobs where either of the job's own salary endpoints falls inside
/// `[min_usd, max_usd]`, bounds inclusive. Absent endpoints compare as 0.
pub fn filter_by_salary(jobs: &[JobListing], min_usd: u32, max_usd: u32) -> Vec<JobListing> {
    let in_window = |value: u32| min_usd <= value && value <= max_usd;
    jobs.iter()
        .filter(|job| {
            in_window(job.min_salary_usd.unwrap_or(0)) || in_window(job.max_salary_usd.unwrap_or(0))
        })
        .cloned()
        .collect()
}

/// Keeps jobs whose application count lies in `[min_count, max_count]`,
/// bounds inclusive. An inverted range matches nothing.
pub fn filter_by_applications(
    jobs: &[JobListing],
    min_count: u32,
    max_count: u32,
) -> Vec<JobListing> {
    if max_count < min_count {
        return Vec::new();
    }
    jobs.iter()
        .filter(|job| min_count <= job.applications && job.applications <= max_count)
        .cloned()
        .collect()
}

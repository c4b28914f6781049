// src/analytics.rs
//! Frequency aggregation over fetched job listings: role-title counting
//! with canonical bucket merging, technology tag counting, and
//! application totals. Everything here is a pure function of its input.

use crate::jobs::JobListing;
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

/// Fixed canonical role titles used to merge free-text variants.
///
/// Order matters: merging walks this list front to back and a title
/// already absorbed by an earlier bucket is gone before later entries
/// are considered. Keep the enumeration exactly as-is.
pub const CANONICAL_ROLES: [&str; 22] = [
    "Software Engineer",
    "Software Developer",
    "Frontend Developer",
    "Backend Developer",
    "Fullstack Developer",
    "DevOps Engineer",
    "Data Scientist",
    "Data Engineer",
    "Machine Learning Engineer",
    "Product Manager",
    "Project Manager",
    "Business Analyst",
    "QA Engineer",
    "QA Analyst",
    "QA Tester",
    "QA Automation Engineer",
    "QA Automation Analyst",
    "QA Automation Tester",
    "Hackathon Organizer/Operator",
    "Cryptography Engineer",
    "Blockchain Engineer",
    "Blockchain Developer",
];

/// Buckets with this count or lower are dropped from the roles chart.
const MIN_ROLE_COUNT: usize = 2;

/// The aggregation had nothing usable to count.
///
/// Surfaced instead of silently returning a chart built from nothing;
/// web handlers map it to an empty chart payload.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregationError {
    #[error("no job listings to aggregate")]
    EmptyInput,
    #[error("no technology tags present on any listing")]
    NoTechnologyTags,
}

/// One categorical bar: a label and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

/// Output of [`count_roles`].
#[derive(Debug, Clone, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct RoleBreakdown {
    /// Top three normalized titles, before any merging.
    pub top: Vec<LabelCount>,
    /// Post-merge buckets with count above the drop threshold, descending.
    pub buckets: Vec<LabelCount>,
}

/// Output of [`count_technologies`].
#[derive(Debug, Clone, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct TechBreakdown {
    /// Top three tags across all listings.
    pub top: Vec<LabelCount>,
    /// All tags at or above the requested minimum count, descending.
    pub counts: Vec<LabelCount>,
}

/// Lowercases a title and strips everything that is not an ASCII letter,
/// digit, or whitespace.
pub fn normalize_title(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect()
}

/// Counts occurrences, descending by count; ties keep first-seen order.
fn frequency<I>(labels: I) -> Vec<LabelCount>
where
    I: IntoIterator<Item = String>,
{
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for label in labels {
        if !counts.contains_key(&label) {
            order.push(label.clone());
        }
        *counts.entry(label).or_insert(0) += 1;
    }

    let mut out: Vec<LabelCount> = order
        .into_iter()
        .map(|label| {
            let count = counts[&label];
            LabelCount { label, count }
        })
        .collect();
    // Stable sort: equal counts stay in first-encountered order.
    out.sort_by(|a, b| b.count.cmp(&a.count));
    out
}

/// Counts normalized role titles and merges them into canonical buckets.
///
/// A counted title is absorbed by the first canonical role whose
/// lowercase form it contains as a substring; titles matching none stay
/// as their own bucket. Buckets with count <= 2 are then dropped.
pub fn count_roles(jobs: &[JobListing]) -> Result<RoleBreakdown, AggregationError> {
    if jobs.is_empty() {
        return Err(AggregationError::EmptyInput);
    }

    let counts = frequency(jobs.iter().map(|job| normalize_title(&job.title)));
    let top = counts.iter().take(3).cloned().collect();

    let mut merged = counts;
    for role in CANONICAL_ROLES {
        let needle = role.to_lowercase();
        let combined: usize = merged
            .iter()
            .filter(|entry| entry.label.contains(&needle))
            .map(|entry| entry.count)
            .sum();
        if combined > 0 {
            merged.retain(|entry| !entry.label.contains(&needle));
            merged.push(LabelCount {
                label: role.to_string(),
                count: combined,
            });
        }
    }

    merged.retain(|entry| entry.count > MIN_ROLE_COUNT);
    merged.sort_by(|a, b| b.count.cmp(&a.count));

    Ok(RoleBreakdown {
        top,
        buckets: merged,
    })
}

/// Flattens every listing's technology tags into one multiset and counts
/// occurrences, keeping tags seen at least `min_count` times.
pub fn count_technologies(
    jobs: &[JobListing],
    min_count: usize,
) -> Result<TechBreakdown, AggregationError> {
    if jobs.is_empty() {
        return Err(AggregationError::EmptyInput);
    }

    let counts = frequency(jobs.iter().flat_map(|job| job.technologies.iter().cloned()));
    if counts.is_empty() {
        return Err(AggregationError::NoTechnologyTags);
    }

    let top = counts.iter().take(3).cloned().collect();
    let counts = counts
        .into_iter()
        .filter(|entry| entry.count >= min_count)
        .collect();

    Ok(TechBreakdown { top, counts })
}

/// Per-title counts over the raw (un-normalized) titles, for the
/// applications page chart.
pub fn count_titles(jobs: &[JobListing]) -> Vec<LabelCount> {
    frequency(jobs.iter().map(|job| job.title.clone()))
}

/// Sum of application counts across the given listings.
pub fn total_applications(jobs: &[JobListing]) -> u64 {
    jobs.iter().map(|job| u64::from(job.applications)).sum()
}

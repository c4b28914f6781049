// src/jobs/mod.rs
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod cache;
pub mod client;

pub use cache::SessionCache;
pub use client::{FetchError, JobsClient};

/// One remote-job posting as returned by the job board API.
///
/// Decoded exactly once at the client boundary; every optional field maps
/// to an absent/zero default so a sparse payload never fails the decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListing {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub location_iso: Option<String>,
    #[serde(default)]
    pub min_salary_usd: Option<u32>,
    #[serde(default)]
    pub max_salary_usd: Option<u32>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub applications: u32,
    #[serde(default)]
    pub views: u32,
}

/// A single record could not be turned into a rendered card.
///
/// Callers skip the offending record and keep rendering the rest.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    #[error("unparseable timestamp `{0}`")]
    BadTimestamp(String),
}

/// Card-facing view of a listing: everything the job viewer page shows.
#[derive(Debug, Clone, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct JobCard {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub image_url: Option<String>,
    pub location_iso: Option<String>,
    pub salary_range: String,
    pub description: String,
    pub url: String,
    pub created: String,
    pub applications: u32,
    pub views: u32,
}

impl JobCard {
    /// Builds the rendered card for one listing.
    ///
    /// Fails per record: a card without a title or apply link, or with a
    /// timestamp chrono cannot parse, returns a [`RecordError`] instead of
    /// poisoning the whole render pass.
    pub fn from_listing(job: &JobListing) -> Result<Self, RecordError> {
        if job.title.trim().is_empty() {
            return Err(RecordError::MissingField("title"));
        }
        if job.url.trim().is_empty() {
            return Err(RecordError::MissingField("url"));
        }

        let created = parse_created_at(&job.created_at)?
            .format("%d %B %Y")
            .to_string();

        Ok(Self {
            id: job.id,
            title: job.title.clone(),
            company: job.company.clone(),
            image_url: job.image_url.clone(),
            location_iso: job
                .location_iso
                .clone()
                .filter(|loc| !loc.trim().is_empty()),
            salary_range: salary_range_text(job.min_salary_usd, job.max_salary_usd),
            description: job.description.clone(),
            url: job.url.clone(),
            created,
            applications: job.applications,
            views: job.views,
        })
    }
}

/// Parse the API's ISO-8601 `created_at`, with or without an offset.
fn parse_created_at(raw: &str) -> Result<NaiveDate, RecordError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.date_naive());
    }
    if let Ok(dt) = raw.parse::<NaiveDateTime>() {
        return Ok(dt.date());
    }
    if let Ok(date) = raw.parse::<NaiveDate>() {
        return Ok(date);
    }
    Err(RecordError::BadTimestamp(raw.to_string()))
}

fn salary_range_text(min: Option<u32>, max: Option<u32>) -> String {
    match (min, max) {
        (None, None) => "Not disclosed".to_string(),
        (min, max) => format!("${} - ${}", min.unwrap_or(0), max.unwrap_or(0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(json: serde_json::Value) -> JobListing {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_decode_sparse_payload_uses_defaults() {
        let job = listing(serde_json::json!({
            "id": 7,
            "title": "Backend Developer",
            "url": "https://example.com/jobs/7"
        }));
        assert_eq!(job.company, "");
        assert_eq!(job.min_salary_usd, None);
        assert!(job.technologies.is_empty());
        assert_eq!(job.applications, 0);
    }

    #[test]
    fn test_card_formats_creation_date() {
        let job = listing(serde_json::json!({
            "id": 1,
            "title": "Rust Engineer",
            "company": "Remote Co.",
            "url": "https://example.com/jobs/1",
            "created_at": "2024-03-05T12:30:00+00:00",
            "min_salary_usd": 60000,
            "max_salary_usd": 90000
        }));
        let card = JobCard::from_listing(&job).unwrap();
        assert_eq!(card.created, "05 March 2024");
        assert_eq!(card.salary_range, "$60000 - $90000");
    }

    #[test]
    fn test_card_accepts_timestamp_without_offset() {
        let job = listing(serde_json::json!({
            "id": 2,
            "title": "Rust Engineer",
            "url": "https://example.com/jobs/2",
            "created_at": "2023-11-20T08:00:00"
        }));
        let card = JobCard::from_listing(&job).unwrap();
        assert_eq!(card.created, "20 November 2023");
    }

    #[test]
    fn test_card_rejects_bad_timestamp() {
        let job = listing(serde_json::json!({
            "id": 3,
            "title": "Rust Engineer",
            "url": "https://example.com/jobs/3",
            "created_at": "yesterday"
        }));
        assert!(matches!(
            JobCard::from_listing(&job),
            Err(RecordError::BadTimestamp(_))
        ));
    }

    #[test]
    fn test_card_rejects_missing_title() {
        let job = listing(serde_json::json!({
            "id": 4,
            "url": "https://example.com/jobs/4",
            "created_at": "2024-01-01T00:00:00"
        }));
        assert!(matches!(
            JobCard::from_listing(&job),
            Err(RecordError::MissingField("title"))
        ));
    }

    #[test]
    fn test_salary_text_with_one_bound_absent() {
        assert_eq!(salary_range_text(None, Some(80000)), "$0 - $80000");
        assert_eq!(salary_range_text(None, None), "Not disclosed");
    }
}

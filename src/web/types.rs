// src/web/types.rs
use crate::analytics::LabelCount;
use crate::jobs::{JobCard, JobListing};
use crate::resources::ResourceCategory;
use rocket::serde::Serialize;

/// Sidebar pages of the dashboard, in display order.
pub const PAGES: [&str; 5] = [
    "Job Viewer",
    "Resources",
    "Demanding Roles",
    "Applications and Roles",
    "Technologies in Demand",
];

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct StandardErrorResponse {
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub suggestions: Vec<String>,
}

impl StandardErrorResponse {
    pub fn new(error: String, error_code: String, suggestions: Vec<String>) -> Self {
        Self {
            success: false,
            error,
            error_code,
            suggestions,
        }
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct PagesResponse {
    pub success: bool,
    pub pages: Vec<&'static str>,
}

/// Table row for the analytic dataframe views. No `id` column: the raw
/// identifier is an API artifact the tables never show.
#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct JobRow {
    pub title: String,
    pub company: String,
    pub location_iso: Option<String>,
    pub min_salary_usd: Option<u32>,
    pub max_salary_usd: Option<u32>,
    pub technologies: Vec<String>,
    pub created_at: String,
    pub applications: u32,
    pub views: u32,
}

impl JobRow {
    pub fn from_listing(job: &JobListing) -> Self {
        Self {
            title: job.title.clone(),
            company: job.company.clone(),
            location_iso: job.location_iso.clone(),
            min_salary_usd: job.min_salary_usd,
            max_salary_usd: job.max_salary_usd,
            technologies: job.technologies.clone(),
            created_at: job.created_at.clone(),
            applications: job.applications,
            views: job.views,
        }
    }
}

/// One page of rendered job cards, post salary filter.
#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct JobsPageResponse {
    pub success: bool,
    pub page: u32,
    pub total: usize,
    /// Records dropped because they could not be rendered.
    pub skipped: usize,
    pub jobs: Vec<JobCard>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct RolesResponse {
    pub success: bool,
    pub total_jobs: usize,
    pub top_roles: Vec<LabelCount>,
    pub role_buckets: Vec<LabelCount>,
    pub table: Vec<JobRow>,
    /// Set when aggregation degraded to an empty chart.
    pub note: Option<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ApplicationsResponse {
    pub success: bool,
    pub total_applications: u64,
    pub title_counts: Vec<LabelCount>,
    pub table: Vec<JobRow>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct TechnologiesResponse {
    pub success: bool,
    pub top_technologies: Vec<LabelCount>,
    pub technology_counts: Vec<LabelCount>,
    pub note: Option<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ResourcesResponse {
    pub success: bool,
    pub categories: Vec<ResourceCategory>,
}

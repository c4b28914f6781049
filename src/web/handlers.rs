// src/web/handlers.rs
use crate::analytics::{count_roles, count_technologies, count_titles, total_applications};
use crate::filters::{filter_by_applications, filter_by_salary};
use crate::jobs::JobCard;
use crate::resources;
use crate::web::types::*;
use crate::web::ServerState;

use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, warn};

/// Default salary window matching the dashboard's slider range.
const DEFAULT_MAX_SALARY: u32 = 150_000;
/// Default upper bound of the applications filter.
const DEFAULT_MAX_APPLICATIONS: u32 = 100;

pub async fn pages_handler() -> Json<PagesResponse> {
    Json(PagesResponse {
        success: true,
        pages: PAGES.to_vec(),
    })
}

pub async fn jobs_page_handler(
    page: Option<u32>,
    min_salary: Option<u32>,
    max_salary: Option<u32>,
    state: &State<ServerState>,
) -> Result<Json<JobsPageResponse>, Json<StandardErrorResponse>> {
    let page = page.unwrap_or(1).max(1);
    let min_salary = min_salary.unwrap_or(0);
    let max_salary = max_salary.unwrap_or(DEFAULT_MAX_SALARY);

    let listings = state.client.fetch_page(page).await.map_err(|e| {
        error!("Job fetch failed for page {}: {}", page, e);
        let message = match e.status_code() {
            Some(code) => format!("Error: {}", code),
            None => format!("Error: {}", e),
        };
        Json(StandardErrorResponse::new(
            message,
            "TRANSPORT_ERROR".to_string(),
            vec![
                "The job board API did not answer with data".to_string(),
                "Try again or pick another page".to_string(),
            ],
        ))
    })?;

    let filtered = filter_by_salary(&listings, min_salary, max_salary);

    let mut skipped = 0;
    let cards: Vec<JobCard> = filtered
        .iter()
        .filter_map(|job| match JobCard::from_listing(job) {
            Ok(card) => Some(card),
            Err(e) => {
                warn!("Skipping listing {}: {}", job.id, e);
                skipped += 1;
                None
            }
        })
        .collect();

    Ok(Json(JobsPageResponse {
        success: true,
        page,
        total: cards.len(),
        skipped,
        jobs: cards,
    }))
}

pub async fn demanding_roles_handler(state: &State<ServerState>) -> Json<RolesResponse> {
    let jobs = state
        .cache
        .get_or_fetch(&state.client, state.config.max_pages)
        .await;

    match count_roles(&jobs) {
        Ok(breakdown) => Json(RolesResponse {
            success: true,
            total_jobs: jobs.len(),
            top_roles: breakdown.top,
            role_buckets: breakdown.buckets,
            table: jobs.iter().map(JobRow::from_listing).collect(),
            note: None,
        }),
        Err(e) => {
            warn!("Role aggregation degraded: {}", e);
            Json(RolesResponse {
                success: true,
                total_jobs: jobs.len(),
                top_roles: vec![],
                role_buckets: vec![],
                table: vec![],
                note: Some(e.to_string()),
            })
        }
    }
}

pub async fn applications_handler(
    min: Option<u32>,
    max: Option<u32>,
    state: &State<ServerState>,
) -> Json<ApplicationsResponse> {
    let min = min.unwrap_or(0);
    let max = max.unwrap_or(DEFAULT_MAX_APPLICATIONS);

    let jobs = state
        .cache
        .get_or_fetch(&state.client, state.config.max_pages)
        .await;
    let filtered = filter_by_applications(&jobs, min, max);

    Json(ApplicationsResponse {
        success: true,
        total_applications: total_applications(&filtered),
        title_counts: count_titles(&filtered),
        table: filtered.iter().map(JobRow::from_listing).collect(),
    })
}

pub async fn technologies_handler(
    min_count: Option<usize>,
    state: &State<ServerState>,
) -> Json<TechnologiesResponse> {
    let min_count = min_count.unwrap_or(1);

    let jobs = state
        .cache
        .get_or_fetch(&state.client, state.config.max_pages)
        .await;

    match count_technologies(&jobs, min_count) {
        Ok(breakdown) => Json(TechnologiesResponse {
            success: true,
            top_technologies: breakdown.top,
            technology_counts: breakdown.counts,
            note: None,
        }),
        Err(e) => {
            warn!("Technology aggregation degraded: {}", e);
            Json(TechnologiesResponse {
                success: true,
                top_technologies: vec![],
                technology_counts: vec![],
                note: Some(e.to_string()),
            })
        }
    }
}

pub async fn resources_handler(
    category: Option<String>,
) -> Result<Json<ResourcesResponse>, Json<StandardErrorResponse>> {
    match category {
        None => Ok(Json(ResourcesResponse {
            success: true,
            categories: resources::directory(),
        })),
        Some(name) => match resources::category(&name) {
            Some(found) => Ok(Json(ResourcesResponse {
                success: true,
                categories: vec![found],
            })),
            None => Err(Json(StandardErrorResponse::new(
                format!("Unknown resource category: {}", name),
                "UNKNOWN_CATEGORY".to_string(),
                resources::category_names()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            ))),
        },
    }
}

pub async fn refresh_handler(state: &State<ServerState>) -> Json<ActionResponse> {
    state.cache.invalidate().await;
    Json(ActionResponse {
        success: true,
        message: "Job cache cleared; the next analytics view re-fetches".to_string(),
    })
}

pub async fn health_handler() -> Json<&'static str> {
    Json("OK")
}

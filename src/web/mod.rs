// src/web/mod.rs
pub mod handlers;
pub mod types;

pub use types::*;

use crate::environment::EnvironmentConfig;
use crate::jobs::{JobsClient, SessionCache};
use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Request, Response, State};
use tracing::info;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

/// Managed state shared by every view: the configured client plus the
/// session-scoped fetch-all cache.
pub struct ServerState {
    pub config: EnvironmentConfig,
    pub client: JobsClient,
    pub cache: SessionCache,
}

// Dashboard API routes, one per sidebar page plus support endpoints.

#[get("/pages")]
pub async fn pages() -> Json<PagesResponse> {
    handlers::pages_handler().await
}

#[get("/jobs?<page>&<min_salary>&<max_salary>")]
pub async fn jobs(
    page: Option<u32>,
    min_salary: Option<u32>,
    max_salary: Option<u32>,
    state: &State<ServerState>,
) -> Result<Json<JobsPageResponse>, Json<StandardErrorResponse>> {
    handlers::jobs_page_handler(page, min_salary, max_salary, state).await
}

#[get("/analytics/roles")]
pub async fn demanding_roles(state: &State<ServerState>) -> Json<RolesResponse> {
    handlers::demanding_roles_handler(state).await
}

#[get("/analytics/applications?<min>&<max>")]
pub async fn applications_and_roles(
    min: Option<u32>,
    max: Option<u32>,
    state: &State<ServerState>,
) -> Json<ApplicationsResponse> {
    handlers::applications_handler(min, max, state).await
}

#[get("/analytics/technologies?<min_count>")]
pub async fn technologies_in_demand(
    min_count: Option<usize>,
    state: &State<ServerState>,
) -> Json<TechnologiesResponse> {
    handlers::technologies_handler(min_count, state).await
}

#[get("/resources?<category>")]
pub async fn resource_directory(
    category: Option<String>,
) -> Result<Json<ResourcesResponse>, Json<StandardErrorResponse>> {
    handlers::resources_handler(category).await
}

#[post("/refresh")]
pub async fn refresh(state: &State<ServerState>) -> Json<ActionResponse> {
    handlers::refresh_handler(state).await
}

#[get("/health")]
pub async fn health() -> Json<&'static str> {
    handlers::health_handler().await
}

#[options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Invalid request format".to_string(),
        "BAD_REQUEST".to_string(),
        vec![
            "Check the query parameters".to_string(),
            "Numeric filters must be non-negative integers".to_string(),
        ],
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec!["Try again in a few moments".to_string()],
    ))
}

// Main server start function
pub async fn start_web_server(config: EnvironmentConfig, api_key: String) -> Result<()> {
    let client = JobsClient::new(&config.api_base_url, api_key, config.page_limit)?;

    let figment = rocket::Config::figment()
        .merge(("port", config.port))
        .merge(("address", "0.0.0.0"));

    info!("Starting Remote Co. dashboard API");
    info!("Job API: {}", config.api_base_url);
    info!("Server: http://0.0.0.0:{}", config.port);

    let state = ServerState {
        config,
        client,
        cache: SessionCache::new(),
    };

    let _rocket = rocket::custom(figment)
        .attach(Cors)
        .manage(state)
        .register("/api", catchers![bad_request, internal_error])
        .mount(
            "/api",
            routes![
                pages,
                jobs,
                demanding_roles,
                applications_and_roles,
                technologies_in_demand,
                resource_directory,
                refresh,
                health,
                all_options,
            ],
        )
        .launch()
        .await?;

    Ok(())
}

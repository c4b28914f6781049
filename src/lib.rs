pub mod analytics;
pub mod environment;
pub mod filters;
pub mod jobs;
pub mod resources;
pub mod secrets;
pub mod web;

pub use environment::EnvironmentConfig;
pub use web::start_web_server;

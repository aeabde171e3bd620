pub mod health;
pub mod skills;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::job::handlers as job;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // HTML pages
        .route(
            "/",
            get(resume::handle_upload_page).post(resume::handle_upload),
        )
        .route("/job", get(job::handle_job_page).post(job::handle_job_submit))
        // JSON API
        .route("/api/v1/skills", get(skills::vocabulary_handler))
        .route("/api/v1/resumes", post(resume::handle_api_upload))
        .route("/api/v1/match", post(job::handle_api_match))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

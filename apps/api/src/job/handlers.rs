use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        Query, State,
    },
    response::Html,
    Form, Json,
};
use serde::Deserialize;
use tracing::{debug, info};

use crate::errors::{ApiError, AppError};
use crate::skills::{parse_skills_param, JobMatch};
use crate::state::AppState;

/// `?skills=Python,Docker`: resume skills carried over from the result page.
#[derive(Debug, Default, Deserialize)]
pub struct SkillsQuery {
    #[serde(default)]
    pub skills: String,
}

#[derive(Debug, Deserialize)]
pub struct JobForm {
    #[serde(default)]
    pub job_desc: String,
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub job_desc: String,
}

/// GET /job
pub async fn handle_job_page(
    State(state): State<AppState>,
    Query(query): Query<SkillsQuery>,
) -> Result<Html<String>, AppError> {
    let resume_skills = parse_skills_param(&query.skills);
    Ok(Html(state.views.job_form(&query.skills, &resume_skills)?))
}

/// POST /job
///
/// A body that is not a urlencoded form is read as an empty description.
pub async fn handle_job_submit(
    State(state): State<AppState>,
    Query(query): Query<SkillsQuery>,
    form: Result<Form<JobForm>, FormRejection>,
) -> Result<Html<String>, AppError> {
    let job_desc = match form {
        Ok(Form(form)) => form.job_desc,
        Err(rejection) => {
            debug!("Job form not readable, using an empty description: {rejection}");
            String::new()
        }
    };
    let resume_skills = parse_skills_param(&query.skills);
    let report = score(&state, &resume_skills, &job_desc);
    Ok(Html(state.views.job_result(&query.skills, &report)?))
}

/// POST /api/v1/match
pub async fn handle_api_match(
    State(state): State<AppState>,
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> Result<Json<JobMatch>, ApiError> {
    let Json(req) = payload.map_err(AppError::from)?;
    Ok(Json(score(&state, &req.skills, &req.job_desc)))
}

fn score(state: &AppState, resume_skills: &[String], job_desc: &str) -> JobMatch {
    let report = state.job_scorer.score(resume_skills, job_desc);
    info!(
        resume_skills = report.resume_skills.len(),
        matched = report.matched_skills.len(),
        score = report.match_score,
        "Job description compared"
    );
    report
}

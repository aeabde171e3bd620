use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    response::Html,
    Json,
};

use crate::errors::{ApiError, AppError};
use crate::resume::analysis::{analyze_upload, read_resume_field, ResumeAnalysis};
use crate::state::AppState;

/// GET /
pub async fn handle_upload_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    Ok(Html(state.views.upload_form()?))
}

/// POST /
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Html<String>, AppError> {
    let mut multipart = multipart?;
    let upload = read_resume_field(&mut multipart).await?;
    let analysis = analyze_upload(&state, upload).await?;
    Ok(Html(state.views.upload_result(&analysis)?))
}

/// POST /api/v1/resumes
pub async fn handle_api_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ResumeAnalysis>, ApiError> {
    let mut multipart = multipart.map_err(AppError::from)?;
    let upload = read_resume_field(&mut multipart).await?;
    let analysis = analyze_upload(&state, upload).await?;
    Ok(Json(analysis))
}

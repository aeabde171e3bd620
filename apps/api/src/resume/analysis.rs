use anyhow::Context;
use axum::extract::Multipart;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extraction::{extract_text, DocumentKind};
use crate::skills::{extract_skills, join_skills};
use crate::state::AppState;
use crate::uploads::{allowed_file, secure_filename};

/// Multipart field carrying the resume file.
pub const RESUME_FIELD: &str = "resume";

pub const NO_FILE_SELECTED: &str = "No file selected";
pub const INVALID_FILE_TYPE: &str = "Invalid file type. Only PDF and DOCX allowed.";

/// A file part pulled out of the upload form, before any validation.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Client-supplied name; may be empty when the browser sent no file.
    pub filename: String,
    pub data: Bytes,
}

/// Everything the result view needs about one uploaded resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    /// Sanitized name the file was saved under.
    pub filename: String,
    pub kind: DocumentKind,
    pub text: String,
    /// Matched skills in vocabulary order.
    pub skills: Vec<String>,
    /// `skills` joined with commas, for the job page query string.
    pub skills_str: String,
}

/// Reads the multipart body and returns the `resume` file part, if any.
/// Other fields are drained and ignored.
pub async fn read_resume_field(multipart: &mut Multipart) -> Result<Option<UploadedFile>, AppError> {
    let mut found = None;
    // Body-limit overflows surface here as 413, other multipart errors as 400.
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(RESUME_FIELD) || found.is_some() {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await?;
        found = Some(UploadedFile { filename, data });
    }
    Ok(found)
}

/// Validates the upload, saves it, extracts its text and matches skills.
///
/// Client errors are returned before anything touches the disk. Extraction
/// problems never fail the request; they show up as a marker in `text`.
pub async fn analyze_upload(
    state: &AppState,
    upload: Option<UploadedFile>,
) -> Result<ResumeAnalysis, AppError> {
    let upload = match upload {
        Some(u) if !u.filename.is_empty() => u,
        _ => return Err(AppError::Validation(NO_FILE_SELECTED.to_string())),
    };
    if !allowed_file(&upload.filename) {
        return Err(AppError::Validation(INVALID_FILE_TYPE.to_string()));
    }
    let kind = DocumentKind::from_filename(&upload.filename)
        .ok_or_else(|| AppError::Validation(INVALID_FILE_TYPE.to_string()))?;

    // Never empty: the extension letters always survive sanitizing.
    let filename = secure_filename(&upload.filename);

    let path = state.uploads.save(&filename, &upload.data).await?;

    let text = tokio::task::spawn_blocking(move || extract_text(&path, kind))
        .await
        .context("Extraction task did not complete")?;

    let skills = extract_skills(&text, &state.vocabulary);
    let skills_str = join_skills(&skills);

    info!(
        filename = %filename,
        kind = %kind,
        text_len = text.len(),
        skills = skills.len(),
        "Resume analyzed"
    );

    Ok(ResumeAnalysis {
        filename,
        kind,
        text,
        skills,
        skills_str,
    })
}

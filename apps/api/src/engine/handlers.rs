//! Axum route handlers for the analyze and customize endpoints.
//!
//! Multipart parsing and job-context resolution live here; everything past
//! "we have clean text and a job context" belongs to `analyzer`.

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::info;

use crate::engine::analyzer::{evaluate_and_extract, rewrite, CvAnalysis};
use crate::engine::schemas::NormalizedResume;
use crate::errors::AppError;
use crate::extractor::extract_text;
use crate::scraper::fetch_job_text;
use crate::state::AppState;

/// Job context used when the caller supplies neither a description nor a
/// working URL. Evaluation still runs, scored against industry baseline.
const DEFAULT_JOB_CONTEXT: &str =
    "General Tech Professional requirements (assess against standard industry best practices).";

/// Anything shorter than this is an empty or failed upload, not a résumé.
const MIN_CV_TEXT_CHARS: usize = 50;

/// The multipart fields both endpoints understand.
#[derive(Default)]
struct UploadForm {
    file_bytes: Option<Vec<u8>>,
    file_content_type: String,
    mode: Option<String>,
    job_description: Option<String>,
    job_url: Option<String>,
    analysis_context: Option<String>,
}

async fn read_upload_form(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                form.file_content_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;
                form.file_bytes = Some(bytes.to_vec());
            }
            "mode" => form.mode = Some(read_text_field(field).await?),
            "job_description" => form.job_description = Some(read_text_field(field).await?),
            "job_url" => form.job_url = Some(read_text_field(field).await?),
            "analysis_context" => form.analysis_context = Some(read_text_field(field).await?),
            _ => {}
        }
    }

    Ok(form)
}

async fn read_text_field(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("failed to read form field: {e}")))
}

fn require_cv_text(form: &UploadForm) -> Result<String, AppError> {
    let bytes = form
        .file_bytes
        .as_deref()
        .ok_or_else(|| AppError::Validation("multipart field 'file' is required".to_string()))?;

    extract_text(bytes, &form.file_content_type)
}

fn nonempty(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

/// POST /api/analyze
///
/// Evaluates an uploaded résumé against a job description (given as text,
/// as a URL to fetch, or defaulted) and extracts its verbatim structure.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<CvAnalysis>, AppError> {
    let form = read_upload_form(multipart).await?;

    // Job context precedence: explicit text, then fetched URL, then default
    let mut job_context = match nonempty(form.job_description.as_ref()) {
        Some(text) => text.to_string(),
        None => match nonempty(form.job_url.as_ref()) {
            Some(url) => fetch_job_text(&state.http, url).await,
            None => String::new(),
        },
    };
    if job_context.is_empty() {
        job_context = DEFAULT_JOB_CONTEXT.to_string();
    }

    let cv_text = require_cv_text(&form)?;
    if cv_text.trim().chars().count() < MIN_CV_TEXT_CHARS {
        return Err(AppError::Validation(
            "résumé text is too short or empty".to_string(),
        ));
    }

    info!("analyzing résumé ({} chars of text)", cv_text.chars().count());
    let analysis = evaluate_and_extract(state.backend.as_ref(), &cv_text, &job_context).await;

    Ok(Json(analysis))
}

/// POST /api/customize
///
/// Rewrites an uploaded résumé under the requested mode. Mode validation
/// happens inside `rewrite`, before any generation call.
pub async fn handle_customize(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<NormalizedResume>, AppError> {
    let form = read_upload_form(multipart).await?;

    let mode = form
        .mode
        .clone()
        .ok_or_else(|| AppError::Validation("multipart field 'mode' is required".to_string()))?;

    // Each mode reads its own context field
    let context = match mode.as_str() {
        "job_desc" => form.job_description.as_deref(),
        _ => form.analysis_context.as_deref(),
    };

    let cv_text = require_cv_text(&form)?;

    info!("rewriting résumé (mode: {mode})");
    let resume = rewrite(state.backend.as_ref(), &cv_text, &mode, context).await?;

    Ok(Json(resume))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonempty_filters_blank_fields() {
        assert_eq!(nonempty(Some(&"  hi  ".to_string())), Some("hi"));
        assert_eq!(nonempty(Some(&"   ".to_string())), None);
        assert_eq!(nonempty(None), None);
    }

    #[test]
    fn test_require_cv_text_demands_a_file() {
        let form = UploadForm::default();
        let result = require_cv_text(&form);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_require_cv_text_decodes_plain_text_upload() {
        let form = UploadForm {
            file_bytes: Some(b"Jane Doe, Rust engineer.".to_vec()),
            file_content_type: "text/plain".to_string(),
            ..UploadForm::default()
        };
        assert_eq!(require_cv_text(&form).unwrap(), "Jane Doe, Rust engineer.");
    }
}

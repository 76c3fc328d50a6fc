//! Generation Invoker — drives the evaluate, extract, and rewrite operations.
//!
//! Every operation follows the same shape: build prompt → one backend call →
//! normalize. Parameter validation happens before the backend is touched and
//! is the only error class that escapes this module. Generation-path
//! failures are absorbed: the caller always receives a structurally valid
//! result, possibly a zeroed/placeholder fallback carrying the diagnostic.

use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::engine::normalizer::{normalize, NormalizeError};
use crate::engine::prompts;
use crate::engine::schemas::{EvaluationReport, NormalizedResume};
use crate::errors::AppError;
use crate::llm_client::{BackendError, GenerationBackend, GenerationOptions};

/// Low sampling temperature for evaluation — scoring should be repeatable.
const EVALUATION_TEMPERATURE: f32 = 0.2;

/// Composite result of one analyze request. Field names on the wire match
/// what the editor frontend consumes.
#[derive(Debug, Clone, Serialize)]
pub struct CvAnalysis {
    #[serde(rename = "analysis")]
    pub evaluation: EvaluationReport,
    #[serde(rename = "cv_data")]
    pub extracted_resume: NormalizedResume,
}

/// Rewrite mode selector. Parsed from the request's `mode` field before any
/// generation work starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteMode {
    JobDesc,
    Analysis,
}

impl FromStr for RewriteMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "job_desc" => Ok(RewriteMode::JobDesc),
            "analysis" => Ok(RewriteMode::Analysis),
            other => Err(AppError::InvalidMode(format!(
                "unknown mode '{other}' — expected 'job_desc' or 'analysis'"
            ))),
        }
    }
}

/// Why a generation attempt produced no usable result. Exhaustively matched
/// at every call site — never silently propagated.
#[derive(Debug, Error)]
enum GenerationFailure {
    #[error("{0}")]
    Backend(#[from] BackendError),
    #[error("{0}")]
    Normalize(#[from] NormalizeError),
}

/// One backend call plus normalization into `T`.
async fn run_generation<T: DeserializeOwned>(
    backend: &dyn GenerationBackend,
    prompt: &str,
    options: GenerationOptions,
) -> Result<T, GenerationFailure> {
    let output = backend
        .generate(prompt, options)
        .await
        .map_err(GenerationFailure::Backend)?;
    normalize(output).map_err(GenerationFailure::Normalize)
}

fn warn_failure(operation: &str, failure: &GenerationFailure) {
    match failure {
        GenerationFailure::Backend(e) => warn!("{operation}: backend call failed: {e}"),
        GenerationFailure::Normalize(e) => warn!("{operation}: response rejected: {e}"),
    }
}

/// Evaluates a résumé against a job description. Never fails: any
/// generation-path error yields a zeroed fallback report with the
/// diagnostic embedded in `overall_summary`.
pub async fn evaluate(
    backend: &dyn GenerationBackend,
    cv_text: &str,
    job_desc: &str,
) -> EvaluationReport {
    let prompt = prompts::build_evaluation_prompt(cv_text, job_desc);
    let options = GenerationOptions {
        temperature: Some(EVALUATION_TEMPERATURE),
        response_schema: Some(EvaluationReport::response_schema()),
    };

    match run_generation::<EvaluationReport>(backend, &prompt, options).await {
        Ok(report) => report.clamp_scores(),
        Err(failure) => {
            warn_failure("evaluate", &failure);
            EvaluationReport::fallback(&failure.to_string())
        }
    }
}

/// Restructures the résumé text verbatim into `NormalizedResume`. Never
/// fails: on any generation-path error the editor still gets an empty
/// "Candidate" shell to render.
pub async fn extract_verbatim(backend: &dyn GenerationBackend, cv_text: &str) -> NormalizedResume {
    let prompt = prompts::build_extraction_prompt(cv_text);
    let options = GenerationOptions {
        temperature: None,
        response_schema: Some(NormalizedResume::response_schema()),
    };

    match run_generation(backend, &prompt, options).await {
        Ok(resume) => resume,
        Err(failure) => {
            warn_failure("extract_verbatim", &failure);
            NormalizedResume::fallback("Candidate", "")
        }
    }
}

/// Runs the evaluation and the verbatim extraction for one document.
///
/// The two calls are independent — both always execute exactly once, each
/// with its own fallback, and neither outcome gates the other. They are
/// joined concurrently since neither needs the other's output.
pub async fn evaluate_and_extract(
    backend: &dyn GenerationBackend,
    cv_text: &str,
    job_desc: &str,
) -> CvAnalysis {
    let (evaluation, extracted_resume) = tokio::join!(
        evaluate(backend, cv_text, job_desc),
        extract_verbatim(backend, cv_text),
    );

    CvAnalysis {
        evaluation,
        extracted_resume,
    }
}

/// Rewrites a résumé under the given mode.
///
/// Validation precedes invocation: an unknown mode or a `job_desc` call
/// without a job description fails here, before any backend call. Past
/// validation the operation never fails — generation-path errors yield an
/// "Error" placeholder résumé carrying the diagnostic.
pub async fn rewrite(
    backend: &dyn GenerationBackend,
    cv_text: &str,
    mode: &str,
    context: Option<&str>,
) -> Result<NormalizedResume, AppError> {
    let mode = RewriteMode::from_str(mode)?;
    let context = context.map(str::trim).filter(|c| !c.is_empty());

    let mode_instruction = match mode {
        RewriteMode::JobDesc => {
            let job_desc = context.ok_or_else(|| {
                AppError::InvalidModeInput(
                    "mode 'job_desc' requires a non-empty job description".to_string(),
                )
            })?;
            prompts::job_desc_mode_instruction(job_desc)
        }
        RewriteMode::Analysis => prompts::analysis_mode_instruction(context),
    };

    let prompt = prompts::build_rewrite_prompt(cv_text, &mode_instruction);
    let options = GenerationOptions {
        temperature: None,
        response_schema: Some(NormalizedResume::response_schema()),
    };

    Ok(match run_generation(backend, &prompt, options).await {
        Ok(resume) => resume,
        Err(failure) => {
            warn_failure("rewrite", &failure);
            NormalizedResume::fallback("Error", &format!("Error: {failure}"))
        }
    })
}

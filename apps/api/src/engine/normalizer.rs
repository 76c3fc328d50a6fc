//! Response Normalizer — reconciles raw backend output into typed schema
//! instances.
//!
//! Backends wrap JSON inconsistently: sometimes a clean structured document,
//! sometimes raw text, sometimes text buried in Markdown code fences. The
//! normalizer is deliberately lenient about the wrapping and strict about
//! the result: it either returns a valid instance or raises
//! `NormalizeError::MalformedResponse` for the invoker to absorb.

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::llm_client::GenerationOutput;

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("malformed backend response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

/// Builds a `T` from whatever the backend produced.
///
/// Already-parsed documents take the fast path; text goes through fence
/// stripping and a serde parse. Schema types default every missing field,
/// so a sparse-but-valid JSON document still normalizes cleanly.
pub fn normalize<T: DeserializeOwned>(output: GenerationOutput) -> Result<T, NormalizeError> {
    match output {
        GenerationOutput::Parsed(value) => Ok(serde_json::from_value(value)?),
        GenerationOutput::Text(text) => Ok(serde_json::from_str(strip_code_fences(&text))?),
    }
}

/// Strips Markdown code-fence wrapping from model output.
///
/// Precedence: the first ```json fence wins; failing that, the first plain
/// ``` fence pair; failing that, the trimmed text as-is. An unclosed fence
/// yields everything after the opening marker. Later fences are ignored.
pub fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();

    if let Some(start) = text.find("```json") {
        let rest = &text[start + "```json".len()..];
        return match rest.find("```") {
            Some(end) => rest[..end].trim(),
            None => rest.trim(),
        };
    }

    if let Some(start) = text.find("```") {
        let rest = &text[start + "```".len()..];
        return match rest.find("```") {
            Some(end) => rest[..end].trim(),
            None => rest.trim(),
        };
    }

    text
}

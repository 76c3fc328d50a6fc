//! Document text extraction — turns an uploaded résumé into plain text.
//!
//! Thin wrapper, deliberately dumb: PDF via `pdf-extract`, text passed
//! through lossily. Anything else is a caller error, not a fallback case.

use tracing::debug;

use crate::errors::AppError;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Extracts plain text from uploaded document bytes.
///
/// Content-type parameters (`; charset=...`) are ignored. Uploads with a
/// generic or missing content type are sniffed for the PDF magic header —
/// browsers are unreliable about typing file inputs.
pub fn extract_text(data: &[u8], content_type: &str) -> Result<String, AppError> {
    let media_type = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if media_type == "application/pdf" || data.starts_with(PDF_MAGIC) {
        let text = pdf_extract::extract_text_from_mem(data)
            .map_err(|e| AppError::Extraction(format!("failed to read PDF: {e}")))?;
        debug!("extracted {} chars from PDF upload", text.len());
        return Ok(text);
    }

    match media_type.as_str() {
        "text/plain" | "text/markdown" | "text/x-markdown" => {
            Ok(String::from_utf8_lossy(data).into_owned())
        }
        other => Err(AppError::Extraction(format!(
            "unsupported content type '{other}' — upload a PDF or plain-text résumé"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        let text = extract_text(b"Jane Doe\nRust engineer", "text/plain").unwrap();
        assert_eq!(text, "Jane Doe\nRust engineer");
    }

    #[test]
    fn test_content_type_parameters_are_ignored() {
        let text = extract_text(b"hello", "text/plain; charset=utf-8").unwrap();
        assert_eq!(text, "hello");
    }

    #[test]
    fn test_unsupported_content_type_is_rejected() {
        let result = extract_text(b"GIF89a", "image/gif");
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }

    #[test]
    fn test_corrupt_pdf_is_an_extraction_error() {
        let result = extract_text(b"%PDF-1.7 but not really a pdf", "application/pdf");
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }

    #[test]
    fn test_pdf_magic_overrides_generic_content_type() {
        // Sniffed as PDF despite octet-stream typing; garbage body still
        // lands in the extraction error path, not the unsupported one.
        let result = extract_text(b"%PDF-garbage", "application/octet-stream");
        match result {
            Err(AppError::Extraction(msg)) => assert!(msg.contains("PDF")),
            other => panic!("expected extraction error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_utf8_text_is_lossy_not_fatal() {
        let text = extract_text(&[0x4a, 0x61, 0xff, 0x6e, 0x65], "text/plain").unwrap();
        assert!(text.contains('J'));
        assert!(text.contains('\u{fffd}'));
    }
}

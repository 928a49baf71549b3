//! Extractor adapter: turns raw PDF bytes into text through a
//! [`PdfParser`](crate::traits::PdfParser) capability.
//!
//! This is the CPU-bound half of the pipeline. It is synchronous by design;
//! the pipeline runs it on the blocking pool so a slow parse never stalls
//! concurrent downloads.

use crate::error::ExtractError;
use crate::traits::{PdfDocument, PdfParser};

/// Extract text from every readable page of a PDF.
///
/// Document-level failures (encrypted, zero pages, nothing readable) abort
/// with `ExtractError::Processing`. A failure on a single page is logged
/// and the page skipped: one damaged page must not discard text
/// recoverable from the rest.
pub fn extract_text<P: PdfParser>(parser: &P, bytes: &[u8]) -> Result<String, ExtractError> {
    let doc = parser.open(bytes)?;

    if doc.is_encrypted() {
        return Err(ExtractError::Processing(
            "PDF is encrypted and cannot be processed".into(),
        ));
    }

    let page_count = doc.page_count();
    if page_count == 0 {
        return Err(ExtractError::Processing("PDF has no pages".into()));
    }

    let mut parts = Vec::new();
    for index in 0..page_count {
        match doc.page_text(index) {
            Ok(text) => {
                if !text.trim().is_empty() {
                    parts.push(text);
                }
            }
            Err(e) => {
                tracing::warn!(page = index + 1, error = %e, "Failed to extract text from page");
            }
        }
    }

    if parts.is_empty() {
        return Err(ExtractError::Processing(
            "No readable text found in PDF".into(),
        ));
    }

    Ok(parts.join("\n\n"))
}

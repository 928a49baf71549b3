use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use papyrus_core::models::{BatchReport, ExtractedText};

// ---------------------------------------------------------------------------
// Extract
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ExtractRequest {
    /// URL of the PDF to process
    pub url: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ExtractResponse {
    /// Normalized text extracted from the PDF
    pub text: String,
    /// Original PDF URL
    pub url: String,
    /// Number of characters in `text`
    pub character_count: usize,
}

impl From<ExtractedText> for ExtractResponse {
    fn from(e: ExtractedText) -> Self {
        Self {
            text: e.text,
            url: e.url,
            character_count: e.character_count,
        }
    }
}

// ---------------------------------------------------------------------------
// Batch
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct BatchExtractRequest {
    /// PDF URLs to process concurrently
    pub urls: Vec<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct BatchExtractResponse {
    pub results: HashMap<String, ExtractResponse>,
    pub errors: HashMap<String, String>,
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
}

impl From<BatchReport> for BatchExtractResponse {
    fn from(report: BatchReport) -> Self {
        Self {
            results: report
                .results
                .into_iter()
                .map(|(url, extracted)| (url, ExtractResponse::from(extracted)))
                .collect(),
            errors: report.errors,
            total: report.total,
            successful: report.successful,
            failed: report.failed,
        }
    }
}

// ---------------------------------------------------------------------------
// Health & errors
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Stable error type label (url_error, timeout_error, pdf_processing_error)
    pub error: String,
    /// Human-readable cause
    pub message: String,
}

use std::collections::HashMap;

/// A downloaded document, exactly as received from the transport.
///
/// Owned by a single pipeline invocation and discarded after extraction.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub bytes: Vec<u8>,
    /// Declared `Content-Type`, if the server sent one.
    pub content_type: Option<String>,
    /// Declared `Content-Length`, if the server sent one.
    pub content_length: Option<u64>,
}

impl RawDocument {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            content_type: None,
            content_length: None,
        }
    }
}

/// Normalized text extracted from one URL.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ExtractedText {
    pub text: String,
    pub url: String,
    /// `text.chars().count()` after normalization.
    pub character_count: usize,
}

/// Outcome of a batch extraction.
///
/// Every attempted URL lands in exactly one of `results` or `errors`,
/// and `total == successful + failed`.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct BatchReport {
    pub results: HashMap<String, ExtractedText>,
    pub errors: HashMap<String, String>,
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
}

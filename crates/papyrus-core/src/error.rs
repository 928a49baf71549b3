use thiserror::Error;

/// Classified failures surfaced by the extraction pipeline.
///
/// Exactly three kinds, chosen so the boundary layer can map each to a
/// distinct response status. Every failure is classified at the point of
/// detection and propagated unchanged; nothing is re-wrapped into a
/// different kind further up the stack.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The document could not be fetched: bad status, connection failure,
    /// size over limit, empty body.
    #[error("URL error: {0}")]
    Url(String),

    /// The fetch step exceeded its deadline.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// The document was fetched but could not be turned into usable text:
    /// encrypted, corrupt, zero pages, nothing extractable.
    #[error("PDF processing error: {0}")]
    Processing(String),
}

impl ExtractError {
    /// Stable machine-readable label for the error kind, used in API
    /// responses and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ExtractError::Url(_) => "url_error",
            ExtractError::Timeout(_) => "timeout_error",
            ExtractError::Processing(_) => "pdf_processing_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_display_includes_seconds() {
        let err = ExtractError::Timeout(30);
        assert_eq!(err.to_string(), "Request timed out after 30 seconds");
    }

    #[test]
    fn url_display_embeds_cause() {
        let err = ExtractError::Url("HTTP 404: Not Found".into());
        assert_eq!(err.to_string(), "URL error: HTTP 404: Not Found");
    }

    #[test]
    fn kinds_are_stable() {
        assert_eq!(ExtractError::Url("x".into()).kind(), "url_error");
        assert_eq!(ExtractError::Timeout(1).kind(), "timeout_error");
        assert_eq!(
            ExtractError::Processing("x".into()).kind(),
            "pdf_processing_error"
        );
    }
}

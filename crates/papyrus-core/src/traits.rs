use std::future::Future;

use crate::error::ExtractError;
use crate::models::RawDocument;

/// Fetches a remote document into memory, enforcing the configured
/// timeout and size limit.
pub trait Fetcher: Send + Sync + Clone {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<RawDocument, ExtractError>> + Send;
}

/// Opens a PDF from raw bytes.
///
/// The concrete parsing capability lives behind this seam so the pipeline
/// can be exercised without a real PDF library, and so the library can be
/// swapped without touching the pipeline.
pub trait PdfParser: Send + Sync + Clone {
    type Document: PdfDocument;

    /// Parse the document structure. Malformed input must yield
    /// `ExtractError::Processing`.
    fn open(&self, bytes: &[u8]) -> Result<Self::Document, ExtractError>;
}

/// An opened PDF, queried page by page.
///
/// Page indices run `0..page_count()` in document order. `page_text` is
/// allowed to fail per page; callers decide whether that aborts the
/// document.
pub trait PdfDocument {
    fn is_encrypted(&self) -> bool;
    fn page_count(&self) -> usize;
    fn page_text(&self, index: usize) -> Result<String, ExtractError>;
}

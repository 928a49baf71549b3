use lopdf::Document;
use papyrus_core::error::ExtractError;
use papyrus_core::traits::{PdfDocument, PdfParser};

/// PDF parsing capability backed by lopdf.
///
/// Parsing is CPU-bound and synchronous; the pipeline dispatches it to the
/// blocking pool, so nothing here may touch the async runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfParser;

impl LopdfParser {
    pub fn new() -> Self {
        Self
    }
}

impl PdfParser for LopdfParser {
    type Document = LopdfDocument;

    fn open(&self, bytes: &[u8]) -> Result<LopdfDocument, ExtractError> {
        let doc = Document::load_mem(bytes)
            .map_err(|_| ExtractError::Processing("Invalid or corrupted PDF file".into()))?;

        // get_pages returns pages keyed by 1-based page number, in order.
        let pages: Vec<u32> = doc.get_pages().keys().copied().collect();

        Ok(LopdfDocument { doc, pages })
    }
}

#[derive(Debug)]
pub struct LopdfDocument {
    doc: Document,
    pages: Vec<u32>,
}

impl PdfDocument for LopdfDocument {
    fn is_encrypted(&self) -> bool {
        self.doc.is_encrypted()
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, index: usize) -> Result<String, ExtractError> {
        let page_number = self
            .pages
            .get(index)
            .ok_or_else(|| ExtractError::Processing(format!("Page {index} out of range")))?;

        self.doc
            .extract_text(&[*page_number])
            .map_err(|e| ExtractError::Processing(format!("Text extraction failed: {e}")))
    }
}

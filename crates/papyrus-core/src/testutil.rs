//! Test utilities: mock implementations of the core traits.
//!
//! Handwritten mocks for dependency injection in unit tests.
//! Mocks use `Arc<Mutex<_>>` for interior mutability so tests can
//! configure responses and assert on recorded calls through clones.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::ExtractError;
use crate::models::RawDocument;
use crate::traits::{Fetcher, PdfDocument, PdfParser};

// ---------------------------------------------------------------------------
// MockFetcher
// ---------------------------------------------------------------------------

/// Mock fetcher with configurable responses.
///
/// Responses can be queued (each call pops the first) or keyed by URL
/// (for batch tests where completion order is nondeterministic). With
/// nothing configured, returns a default document.
#[derive(Clone, Default)]
pub struct MockFetcher {
    queue: Arc<Mutex<Vec<Result<RawDocument, ExtractError>>>>,
    by_url: Arc<Mutex<HashMap<String, Result<RawDocument, ExtractError>>>>,
}

impl MockFetcher {
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            queue: Arc::new(Mutex::new(vec![Ok(RawDocument::new(bytes.to_vec()))])),
            by_url: Arc::default(),
        }
    }

    pub fn with_error(error: ExtractError) -> Self {
        Self {
            queue: Arc::new(Mutex::new(vec![Err(error)])),
            by_url: Arc::default(),
        }
    }

    /// Responses keyed by URL; each is consumed on first fetch.
    pub fn by_url(
        responses: impl IntoIterator<Item = (String, Result<RawDocument, ExtractError>)>,
    ) -> Self {
        Self {
            queue: Arc::default(),
            by_url: Arc::new(Mutex::new(responses.into_iter().collect())),
        }
    }
}

impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<RawDocument, ExtractError> {
        if let Some(response) = self.by_url.lock().unwrap().remove(url) {
            return response;
        }
        let mut queue = self.queue.lock().unwrap();
        if queue.is_empty() {
            Ok(RawDocument::new(b"%PDF-1.4 default".to_vec()))
        } else {
            queue.remove(0)
        }
    }
}

// ---------------------------------------------------------------------------
// CountingFetcher
// ---------------------------------------------------------------------------

/// Fetcher that records how many calls are in flight at once.
///
/// Each fetch holds its slot across an await point so concurrent callers
/// genuinely overlap; used to verify the batch concurrency ceiling.
#[derive(Clone, Default)]
pub struct CountingFetcher {
    state: Arc<Mutex<CounterState>>,
}

#[derive(Default)]
struct CounterState {
    in_flight: usize,
    max_in_flight: usize,
}

impl CountingFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highest number of simultaneously in-flight fetches observed.
    pub fn max_in_flight(&self) -> usize {
        self.state.lock().unwrap().max_in_flight
    }
}

impl Fetcher for CountingFetcher {
    async fn fetch(&self, _url: &str) -> Result<RawDocument, ExtractError> {
        {
            let mut state = self.state.lock().unwrap();
            state.in_flight += 1;
            state.max_in_flight = state.max_in_flight.max(state.in_flight);
        }
        tokio::time::sleep(Duration::from_millis(25)).await;
        self.state.lock().unwrap().in_flight -= 1;
        Ok(RawDocument::new(b"%PDF-1.4 counted".to_vec()))
    }
}

// ---------------------------------------------------------------------------
// MockParser / MockPdf
// ---------------------------------------------------------------------------

/// Mock parsing capability with scripted per-page outcomes.
#[derive(Clone, Default)]
pub struct MockParser {
    encrypted: bool,
    pages: Arc<Vec<Result<String, String>>>,
    open_error: Arc<Mutex<Option<ExtractError>>>,
}

impl MockParser {
    /// A document with the given per-page outcomes, in page order.
    pub fn with_pages(pages: Vec<Result<String, ExtractError>>) -> Self {
        Self {
            pages: Arc::new(
                pages
                    .into_iter()
                    .map(|p| p.map_err(|e| e.to_string()))
                    .collect(),
            ),
            ..Self::default()
        }
    }

    /// A valid document with exactly one page of text.
    pub fn single_page(text: &str) -> Self {
        Self::with_pages(vec![Ok(text.to_string())])
    }

    /// A document that reports itself encrypted.
    pub fn encrypted() -> Self {
        Self {
            encrypted: true,
            pages: Arc::new(vec![Ok("unreachable".into())]),
            open_error: Arc::default(),
        }
    }

    /// A parser whose open step fails.
    pub fn with_open_error(error: ExtractError) -> Self {
        Self {
            open_error: Arc::new(Mutex::new(Some(error))),
            ..Self::default()
        }
    }
}

impl PdfParser for MockParser {
    type Document = MockPdf;

    fn open(&self, _bytes: &[u8]) -> Result<MockPdf, ExtractError> {
        if let Some(e) = self.open_error.lock().unwrap().take() {
            return Err(e);
        }
        Ok(MockPdf {
            encrypted: self.encrypted,
            pages: Arc::clone(&self.pages),
        })
    }
}

pub struct MockPdf {
    encrypted: bool,
    pages: Arc<Vec<Result<String, String>>>,
}

impl PdfDocument for MockPdf {
    fn is_encrypted(&self) -> bool {
        self.encrypted
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, index: usize) -> Result<String, ExtractError> {
        match self.pages.get(index) {
            Some(Ok(text)) => Ok(text.clone()),
            Some(Err(message)) => Err(ExtractError::Processing(message.clone())),
            None => Err(ExtractError::Processing(format!(
                "Page {index} out of range"
            ))),
        }
    }
}

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::error::ExtractError;
use crate::extract;
use crate::models::{BatchReport, ExtractedText};
use crate::text;
use crate::traits::{Fetcher, PdfParser};

/// Orchestrates the extraction pipeline: fetch → parse → normalize.
///
/// Generic over the transport and the parsing capability via traits,
/// enabling dependency injection and testability without real HTTP or a
/// real PDF library. Parsing runs on the blocking pool so the I/O
/// scheduler keeps servicing concurrent downloads.
#[derive(Clone)]
pub struct ExtractionService<F, P> {
    fetcher: F,
    parser: P,
}

impl<F, P> ExtractionService<F, P>
where
    F: Fetcher + 'static,
    P: PdfParser + 'static,
{
    pub fn new(fetcher: F, parser: P) -> Self {
        Self { fetcher, parser }
    }

    /// Run the full pipeline for a single URL.
    ///
    /// 1. Download the document (timeout and size limits enforced by the
    ///    fetcher).
    /// 2. Extract text on the blocking pool.
    /// 3. Normalize whitespace; an empty result after normalization is a
    ///    failure, not a valid response.
    ///
    /// Fetch and parse errors propagate unchanged. A worker that fails to
    /// complete (panic or runtime shutdown) surfaces as a `Processing`
    /// error; nothing escapes unclassified.
    pub async fn extract_from_url(&self, url: &str) -> Result<ExtractedText, ExtractError> {
        tracing::info!(%url, "Fetching document");
        let doc = self.fetcher.fetch(url).await?;
        tracing::info!(%url, bytes = doc.bytes.len(), "Download complete");

        let parser = self.parser.clone();
        let bytes = doc.bytes;
        let raw = tokio::task::spawn_blocking(move || extract::extract_text(&parser, &bytes))
            .await
            .map_err(|e| ExtractError::Processing(format!("Unexpected error: {e}")))??;

        let normalized = text::normalize(&raw);
        if normalized.is_empty() {
            return Err(ExtractError::Processing(
                "No text content found in PDF".into(),
            ));
        }

        let character_count = normalized.chars().count();
        tracing::info!(%url, character_count, "Extraction complete");

        Ok(ExtractedText {
            text: normalized,
            url: url.to_string(),
            character_count,
        })
    }

    /// Run the pipeline over many URLs with a concurrency ceiling.
    ///
    /// At most `max_concurrent` pipelines run at once; the rest wait for a
    /// permit. A failure on one URL never cancels the others — each URL is
    /// classified independently into `results` or `errors`. Duplicate
    /// input URLs are attempted once.
    pub async fn extract_batch(&self, urls: &[String], max_concurrent: usize) -> BatchReport {
        let mut seen = HashSet::new();
        let distinct: Vec<String> = urls
            .iter()
            .filter(|url| seen.insert(url.as_str()))
            .cloned()
            .collect();

        let semaphore = Arc::new(Semaphore::new(max_concurrent.max(1)));
        let mut tasks = JoinSet::new();

        for url in distinct {
            let service = self.clone();
            let semaphore = Arc::clone(&semaphore);
            tasks.spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .expect("batch semaphore never closed");
                let result = service.extract_from_url(&url).await;
                (url, result)
            });
        }

        let mut report = BatchReport::default();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((url, Ok(extracted))) => {
                    report.successful += 1;
                    report.results.insert(url, extracted);
                }
                Ok((url, Err(e))) => {
                    tracing::warn!(%url, error = %e, "Batch extraction failed");
                    report.failed += 1;
                    report.errors.insert(url, e.to_string());
                }
                Err(e) => {
                    tracing::error!(error = %e, "Batch task did not complete");
                }
            }
        }
        report.total = report.successful + report.failed;
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawDocument;
    use crate::testutil::{CountingFetcher, MockFetcher, MockParser};

    fn raw(bytes: &[u8]) -> RawDocument {
        RawDocument::new(bytes.to_vec())
    }

    #[tokio::test]
    async fn happy_path_single_page() {
        let svc = ExtractionService::new(
            MockFetcher::new(b"%PDF-1.4 ten bytes"),
            MockParser::single_page("hello"),
        );

        let result = svc
            .extract_from_url("https://example.com/doc.pdf")
            .await
            .unwrap();

        assert_eq!(result.text, "hello");
        assert_eq!(result.character_count, 5);
        assert_eq!(result.url, "https://example.com/doc.pdf");
    }

    #[tokio::test]
    async fn output_is_normalized() {
        let svc = ExtractionService::new(
            MockFetcher::new(b"%PDF-1.4"),
            MockParser::single_page("  hello    world  \n\n  second line  "),
        );

        let result = svc.extract_from_url("https://example.com").await.unwrap();

        assert_eq!(result.text, "hello world\nsecond line");
        assert_eq!(result.character_count, result.text.chars().count());
    }

    #[tokio::test]
    async fn fetch_error_propagates_unchanged() {
        let svc = ExtractionService::new(
            MockFetcher::with_error(ExtractError::Url("HTTP 404: Not Found".into())),
            MockParser::single_page("unreachable"),
        );

        let err = svc.extract_from_url("https://example.com").await.unwrap_err();

        assert!(matches!(err, ExtractError::Url(_)));
        assert!(err.to_string().contains("HTTP 404"));
    }

    #[tokio::test]
    async fn timeout_propagates_unchanged() {
        let svc = ExtractionService::new(
            MockFetcher::with_error(ExtractError::Timeout(30)),
            MockParser::single_page("unreachable"),
        );

        let err = svc.extract_from_url("https://example.com").await.unwrap_err();

        assert!(matches!(err, ExtractError::Timeout(30)));
    }

    #[tokio::test]
    async fn parse_error_propagates_unchanged() {
        let svc = ExtractionService::new(MockFetcher::new(b"%PDF-1.4"), MockParser::encrypted());

        let err = svc.extract_from_url("https://example.com").await.unwrap_err();

        assert!(matches!(err, ExtractError::Processing(_)));
        assert!(err.to_string().contains("encrypted"));
    }

    #[tokio::test]
    async fn batch_isolates_failures() {
        let fetcher = MockFetcher::by_url([
            ("https://a.example/ok.pdf".to_string(), Ok(raw(b"%PDF a"))),
            ("https://b.example/ok.pdf".to_string(), Ok(raw(b"%PDF b"))),
            (
                "https://c.example/missing.pdf".to_string(),
                Err(ExtractError::Url("HTTP 404: Not Found".into())),
            ),
        ]);
        let svc = ExtractionService::new(fetcher, MockParser::single_page("some text"));

        let urls: Vec<String> = [
            "https://a.example/ok.pdf",
            "https://b.example/ok.pdf",
            "https://c.example/missing.pdf",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        let report = svc.extract_batch(&urls, 2).await;

        assert_eq!(report.total, 3);
        assert_eq!(report.successful, 2);
        assert_eq!(report.failed, 1);
        assert!(report.results.contains_key("https://a.example/ok.pdf"));
        assert!(report.results.contains_key("https://b.example/ok.pdf"));
        assert!(
            report.errors["https://c.example/missing.pdf"].contains("HTTP 404"),
            "error message should carry the classified cause"
        );
    }

    #[tokio::test]
    async fn batch_respects_concurrency_ceiling() {
        let fetcher = CountingFetcher::new();
        let svc = ExtractionService::new(fetcher.clone(), MockParser::single_page("text"));

        let urls: Vec<String> = (0..8)
            .map(|i| format!("https://example.com/{i}.pdf"))
            .collect();

        let report = svc.extract_batch(&urls, 3).await;

        assert_eq!(report.total, 8);
        assert_eq!(report.successful, 8);
        assert!(
            fetcher.max_in_flight() <= 3,
            "observed {} concurrent fetches with a ceiling of 3",
            fetcher.max_in_flight()
        );
    }

    #[tokio::test]
    async fn batch_deduplicates_input_urls() {
        let svc = ExtractionService::new(
            MockFetcher::default(),
            MockParser::single_page("text"),
        );

        let urls: Vec<String> = [
            "https://example.com/same.pdf",
            "https://example.com/same.pdf",
            "https://example.com/other.pdf",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        let report = svc.extract_batch(&urls, 2).await;

        assert_eq!(report.total, 2);
        assert_eq!(report.successful + report.failed, report.total);
    }

    #[tokio::test]
    async fn empty_batch_yields_empty_report() {
        let svc = ExtractionService::new(
            MockFetcher::default(),
            MockParser::single_page("text"),
        );

        let report = svc.extract_batch(&[], 4).await;

        assert_eq!(report.total, 0);
        assert!(report.results.is_empty());
        assert!(report.errors.is_empty());
    }
}

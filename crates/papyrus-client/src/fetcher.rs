use std::time::Duration;

use futures::StreamExt;
use papyrus_core::config::Settings;
use papyrus_core::error::ExtractError;
use papyrus_core::models::RawDocument;
use papyrus_core::traits::Fetcher;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use url::Url;

/// HTTP downloader using reqwest.
///
/// Streams the response body in chunks and enforces two limits: a total
/// deadline for the whole request, and a maximum document size. The size
/// limit is checked twice — against the declared `Content-Length` before
/// any body bytes are read, and again cumulatively while streaming, which
/// guards against a missing or lying header. Redirects follow the client
/// defaults. One attempt per call; retries are a caller concern.
#[derive(Clone)]
pub struct ReqwestFetcher {
    client: Client,
    timeout_secs: u64,
    max_bytes: u64,
}

impl ReqwestFetcher {
    pub fn new(timeout: Duration, max_bytes: u64) -> Result<Self, ExtractError> {
        let timeout_secs = timeout.as_secs();
        let client = Client::builder()
            .user_agent("Papyrus/0.2 (PDF text extraction)")
            .timeout(timeout)
            .build()
            .map_err(|e| ExtractError::Url(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            timeout_secs,
            max_bytes,
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, ExtractError> {
        Self::new(
            Duration::from_secs(settings.request_timeout_secs),
            settings.max_file_size_bytes,
        )
    }

    fn classify(&self, e: reqwest::Error) -> ExtractError {
        if e.is_timeout() {
            ExtractError::Timeout(self.timeout_secs)
        } else if e.is_connect() {
            ExtractError::Url(format!("Connection failed: {e}"))
        } else {
            ExtractError::Url(format!("Download failed: {e}"))
        }
    }
}

impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Result<RawDocument, ExtractError> {
        validate_url(url)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::Url(format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_ascii_lowercase());

        // Format correctness is the parser's job; a surprising
        // Content-Type is only worth a warning here.
        if let Some(ct) = &content_type {
            if !ct.contains("pdf") {
                tracing::warn!(%url, content_type = %ct, "Content-Type is not PDF, proceeding");
            }
        }

        let content_length = response.content_length();
        if let Some(declared) = content_length {
            if declared > self.max_bytes {
                return Err(ExtractError::Url(format!("File too large: {declared} bytes")));
            }
        }

        let mut bytes: Vec<u8> = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| self.classify(e))?;
            if (bytes.len() + chunk.len()) as u64 > self.max_bytes {
                return Err(ExtractError::Url(format!(
                    "File exceeds maximum size limit of {} bytes",
                    self.max_bytes
                )));
            }
            bytes.extend_from_slice(&chunk);
        }

        if bytes.is_empty() {
            return Err(ExtractError::Url("Empty file downloaded".into()));
        }

        Ok(RawDocument {
            bytes,
            content_type,
            content_length,
        })
    }
}

/// Reject URLs the transport cannot meaningfully resolve before opening a
/// connection: unparseable URIs and non-HTTP schemes.
fn validate_url(url: &str) -> Result<(), ExtractError> {
    let parsed = Url::parse(url).map_err(|e| ExtractError::Url(format!("Invalid URL: {e}")))?;

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(ExtractError::Url(format!(
                "URL scheme '{scheme}' is not allowed (only http/https)"
            )));
        }
    }

    if parsed.host_str().is_none() {
        return Err(ExtractError::Url("URL has no host".to_string()));
    }

    Ok(())
}

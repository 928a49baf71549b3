//! Core of the Papyrus PDF text extraction service: error taxonomy,
//! configuration, trait seams, the extraction pipeline, and the batch
//! coordinator. Concrete transport and parsing implementations live in
//! `papyrus-client`.

pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod service;
pub mod testutil;
pub mod text;
pub mod traits;

pub use config::{ConfigError, Settings};
pub use error::ExtractError;
pub use models::{BatchReport, ExtractedText, RawDocument};
pub use service::ExtractionService;
pub use traits::{Fetcher, PdfDocument, PdfParser};

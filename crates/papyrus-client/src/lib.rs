//! Production implementations of the papyrus-core trait seams:
//! a streaming reqwest downloader and a lopdf parsing backend.

pub mod fetcher;
pub mod parser;

pub use fetcher::ReqwestFetcher;
pub use parser::LopdfParser;

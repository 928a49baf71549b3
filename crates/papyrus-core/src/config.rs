use thiserror::Error;

/// Configuration failed to load at startup.
#[derive(Error, Debug)]
#[error("Config error: {0}")]
pub struct ConfigError(pub String);

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Concurrency ceiling for batch extraction.
    pub max_concurrency: usize,
    /// Total deadline for a single download, in seconds.
    pub request_timeout_secs: u64,
    /// Maximum accepted document size, in bytes.
    pub max_file_size_bytes: u64,
}

impl Settings {
    /// Read configuration from environment variables.
    ///
    /// - `PAPYRUS_MAX_CONCURRENCY` (optional, defaults to 5)
    /// - `PAPYRUS_REQUEST_TIMEOUT` in seconds (optional, defaults to 30)
    /// - `PAPYRUS_MAX_FILE_SIZE_MB` (optional, defaults to 50)
    pub fn from_env() -> Result<Self, ConfigError> {
        let max_concurrency = read_positive("PAPYRUS_MAX_CONCURRENCY", 5)?;
        let request_timeout_secs = read_positive("PAPYRUS_REQUEST_TIMEOUT", 30)?;
        let max_file_size_mb = read_positive("PAPYRUS_MAX_FILE_SIZE_MB", 50)?;

        Ok(Self {
            max_concurrency: max_concurrency as usize,
            request_timeout_secs,
            max_file_size_bytes: max_file_size_mb * 1024 * 1024,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_concurrency: 5,
            request_timeout_secs: 30,
            max_file_size_bytes: 50 * 1024 * 1024,
        }
    }
}

fn read_positive(var: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(var) {
        Err(_) => Ok(default),
        Ok(raw) => parse_positive(var, &raw),
    }
}

fn parse_positive(var: &str, raw: &str) -> Result<u64, ConfigError> {
    let parsed: u64 = raw
        .parse()
        .map_err(|_| ConfigError(format!("Invalid {var} '{raw}': must be a positive integer")))?;
    if parsed == 0 {
        return Err(ConfigError(format!("{var} must be at least 1")));
    }
    Ok(parsed)
}

//! Location of the sales CSV and the HTTP client that downloads it.

use crate::error::{DataError, Result};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

/// Published location of the historical automobile sales CSV.
pub const DEFAULT_SOURCE_URL: &str = "https://cf-courses-data.s3.us.cloud-object-storage.appdomain.cloud/IBMDeveloperSkillsNetwork-DV0101EN-SkillsNetwork/Data%20Files/historical_automobile_sales.csv";

/// User agent sent with every download.
const USER_AGENT: &str = concat!("autosales/", env!("CARGO_PKG_VERSION"));

/// Request timeout for the CSV download.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the sales CSV is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Remote CSV fetched over HTTP(S)
    Url(String),
    /// Local CSV file
    File(PathBuf),
}

impl DataSource {
    /// Returns the URL when the source is remote.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Url(url) => Some(url),
            Self::File(_) => None,
        }
    }

    /// Whether the source requires a network download.
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Url(_))
    }
}

impl Default for DataSource {
    fn default() -> Self {
        Self::Url(DEFAULT_SOURCE_URL.to_string())
    }
}

impl FromStr for DataSource {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DataError::Parse("Empty data source".to_string()));
        }
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Ok(Self::Url(trimmed.to_string()))
        } else {
            Ok(Self::File(PathBuf::from(trimmed)))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{}", url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// HTTP client for downloading the sales CSV.
#[derive(Debug, Clone)]
pub struct SourceClient {
    client: reqwest::Client,
}

impl SourceClient {
    /// Create a client with the default timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(DataError::Network)?;

        Ok(Self { client })
    }

    /// Download the body at `url`.
    ///
    /// # Errors
    /// Returns `DataError::Http` when the server answers with a non-success status.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!(url, "requesting sales CSV");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataError::Http {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        info!(url, bytes = body.len(), "downloaded sales CSV");
        Ok(body.to_vec())
    }
}

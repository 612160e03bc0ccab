// ============================================================
// SOURCE RESOLVER
// ============================================================
// Decide what kind of input was given and fetch its raw CSV text

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::error::{AppError, Result};
use crate::domain::source::{SourceKind, UrlTarget};
use crate::infrastructure::encoding::decode_text;
use crate::infrastructure::storage::FileStore;
use crate::infrastructure::transport::HttpTransport;

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^https?://").unwrap());

static CSV_PATH_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.csv\s*$").unwrap());

/// Classify an input value. First match wins: URL scheme, then any comma
/// (inline CSV), then a `.csv` suffix.
pub fn classify(input: &str) -> Result<SourceKind> {
    if URL_PATTERN.is_match(input) {
        Ok(SourceKind::Url)
    } else if input.contains(',') {
        Ok(SourceKind::Inline)
    } else if CSV_PATH_PATTERN.is_match(input) {
        Ok(SourceKind::File)
    } else {
        Err(AppError::InvalidConversionType)
    }
}

/// Obtains raw CSV text from the filesystem, the network, or the input itself
#[derive(Clone)]
pub struct SourceResolver {
    files: Arc<dyn FileStore>,
    transport: Arc<dyn HttpTransport>,
}

impl SourceResolver {
    pub fn new(files: Arc<dyn FileStore>, transport: Arc<dyn HttpTransport>) -> Self {
        Self { files, transport }
    }

    /// Raw text for an input already classified by [`classify`]
    pub async fn fetch(&self, kind: SourceKind, input: &str) -> Result<String> {
        match kind {
            SourceKind::Url => self.fetch_url(input).await,
            SourceKind::Inline => Ok(input.to_string()),
            SourceKind::File => self.read_file(Path::new(input)).await,
        }
    }

    pub async fn read_file(&self, path: &Path) -> Result<String> {
        if !self.files.exists(path).await {
            debug!(path = %path.display(), "CSV file does not exist");
            return Err(AppError::FileNotFound(path.to_path_buf()));
        }

        let bytes = self.files.read_all(path).await?;
        info!(path = %path.display(), bytes = bytes.len(), "Read CSV file");
        Ok(decode_text(&bytes))
    }

    pub async fn fetch_url(&self, url: &str) -> Result<String> {
        let target = UrlTarget::parse(url);
        info!(
            scheme = target.scheme.as_str(),
            host = %target.host,
            path = %target.path,
            "Fetching CSV"
        );

        self.transport
            .get(target.scheme, &target.host, &target.path)
            .await
    }
}

// ============================================================
// CSV CONVERTER USE CASE
// ============================================================
// Resolve a CSV source and parse it into records

use std::path::Path;
use std::sync::Arc;
use tracing::info;

use super::source_resolver::{classify, SourceResolver};
use crate::domain::error::Result;
use crate::domain::record::ResultSet;
use crate::domain::source::SourceKind;
use crate::infrastructure::config::ConverterConfig;
use crate::infrastructure::csv::parse;
use crate::infrastructure::storage::{FileStore, LocalFileStore};
use crate::infrastructure::transport::{HttpTransport, ReqwestTransport};

/// CSV to record conversion for files, URLs and inline text.
///
/// Holds no per-call state; clones share the same collaborators and
/// concurrent conversions do not interact.
#[derive(Clone)]
pub struct CsvConverter {
    resolver: SourceResolver,
}

impl CsvConverter {
    /// Local disk and a default HTTP client
    pub fn new() -> Self {
        Self::with_collaborators(Arc::new(LocalFileStore), Arc::new(ReqwestTransport::new()))
    }

    /// Local disk and an HTTP client built from `config`
    pub fn with_config(config: &ConverterConfig) -> Result<Self> {
        config.validate()?;
        let transport = ReqwestTransport::with_config(config)?;
        Ok(Self::with_collaborators(Arc::new(LocalFileStore), Arc::new(transport)))
    }

    pub fn with_collaborators(
        files: Arc<dyn FileStore>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            resolver: SourceResolver::new(files, transport),
        }
    }

    /// Detect whether `input` is a URL, inline CSV or a `.csv` path and
    /// convert it accordingly
    pub async fn convert(&self, input: &str) -> Result<ResultSet> {
        let kind = classify(input)?;
        info!(kind = %kind, "Converting CSV");

        let text = self.resolver.fetch(kind, input).await?;
        Ok(Self::finish(kind, &text))
    }

    pub async fn convert_file(&self, path: impl AsRef<Path>) -> Result<ResultSet> {
        let text = self.resolver.read_file(path.as_ref()).await?;
        Ok(Self::finish(SourceKind::File, &text))
    }

    pub async fn convert_url(&self, url: &str) -> Result<ResultSet> {
        let text = self.resolver.fetch_url(url).await?;
        Ok(Self::finish(SourceKind::Url, &text))
    }

    /// Inline text never touches I/O
    pub async fn convert_string(&self, text: &str) -> Result<ResultSet> {
        Ok(Self::finish(SourceKind::Inline, text))
    }

    fn finish(kind: SourceKind, text: &str) -> ResultSet {
        let records = parse(text);
        info!(kind = %kind, records = records.len(), "CSV converted");
        records
    }
}

impl Default for CsvConverter {
    fn default() -> Self {
        Self::new()
    }
}

/// [`CsvConverter::convert`] with a default converter
pub async fn convert(input: &str) -> Result<ResultSet> {
    CsvConverter::new().convert(input).await
}

pub async fn convert_file(path: impl AsRef<Path>) -> Result<ResultSet> {
    CsvConverter::new().convert_file(path).await
}

pub async fn convert_url(url: &str) -> Result<ResultSet> {
    CsvConverter::new().convert_url(url).await
}

pub async fn convert_string(text: &str) -> Result<ResultSet> {
    CsvConverter::new().convert_string(text).await
}

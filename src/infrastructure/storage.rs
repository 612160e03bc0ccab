use async_trait::async_trait;
use std::path::Path;

/// Filesystem access used by file conversions
#[async_trait]
pub trait FileStore: Send + Sync {
    async fn exists(&self, path: &Path) -> bool;
    async fn read_all(&self, path: &Path) -> std::io::Result<Vec<u8>>;
}

/// Local disk through tokio's blocking-pool file API
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileStore;

#[async_trait]
impl FileStore for LocalFileStore {
    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }

    async fn read_all(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }
}

pub mod reqwest_client;

use crate::domain::error::Result;
use crate::domain::source::Scheme;
use async_trait::async_trait;

pub use reqwest_client::ReqwestTransport;

/// Network access used by URL conversions.
///
/// Implementations return the whole response body as text and report any
/// transport failure as `AppError::Fetch`.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, scheme: Scheme, host: &str, path: &str) -> Result<String>;
}

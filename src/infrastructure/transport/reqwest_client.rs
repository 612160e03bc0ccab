use super::HttpTransport;
use crate::domain::error::{AppError, Result};
use crate::domain::source::Scheme;
use crate::infrastructure::config::ConverterConfig;
use crate::infrastructure::encoding::decode_text;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_config(config: &ConverterConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.connect_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, scheme: Scheme, host: &str, path: &str) -> Result<String> {
        let url = format!("{}://{}{}", scheme.as_str(), host, path);
        debug!(url = %url, "Requesting remote CSV");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(AppError::fetch)?;

        // Error pages are parsed like any other body.
        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "Remote CSV request returned non-success status");
        }

        let body = response.bytes().await.map_err(AppError::fetch)?;
        debug!(url = %url, bytes = body.len(), "Received remote CSV");

        Ok(decode_text(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let host = listener.local_addr().unwrap().to_string();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buffer = vec![0u8; 4096];
            let read = socket.read(&mut buffer).await.unwrap();
            let request = String::from_utf8_lossy(&buffer[..read]).to_string();

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            request
        });

        (host, handle)
    }

    #[tokio::test]
    async fn test_get_returns_body() {
        let (host, server) = serve_once("200 OK", "Date,Value\n3,4\n5,6\n").await;
        let transport = ReqwestTransport::new();

        let body = transport
            .get(Scheme::Http, &host, "/data/prices.csv?s=AAPL")
            .await
            .unwrap();

        assert_eq!(body, "Date,Value\n3,4\n5,6\n");
        let request = server.await.unwrap();
        assert!(request.starts_with("GET /data/prices.csv?s=AAPL HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_get_sends_configured_user_agent() {
        let (host, server) = serve_once("200 OK", "a,b\n1,2\n").await;
        let config = ConverterConfig::new().with_user_agent("prices-importer/2.0");
        let transport = ReqwestTransport::with_config(&config).unwrap();

        transport.get(Scheme::Http, &host, "/").await.unwrap();

        let request = server.await.unwrap().to_lowercase();
        assert!(request.contains("user-agent: prices-importer/2.0"));
    }

    #[tokio::test]
    async fn test_non_success_status_still_returns_body() {
        let (host, server) = serve_once("404 Not Found", "error,detail\nmissing,table.csv\n").await;

        let body = ReqwestTransport::new()
            .get(Scheme::Http, &host, "/table.csv")
            .await
            .unwrap();

        assert_eq!(body, "error,detail\nmissing,table.csv\n");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_connection_refused_is_fetch_error() {
        let host = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().to_string()
        };

        let err = ReqwestTransport::new()
            .get(Scheme::Http, &host, "/table.csv")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Fetch(_)));
    }
}

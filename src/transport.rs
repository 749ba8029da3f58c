use crate::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Performs a single GET and returns the response body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<String>;
}

/// reqwest-backed transport. Every call builds and drops its own client, so
/// no connection outlives the request.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    timeout: Option<Duration>,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn new_client(&self) -> Result<Client> {
        let mut builder = Client::builder().pool_max_idle_per_host(0);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(builder.build()?)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<String> {
        let client = self.new_client()?;
        let resp = client.get(url).send().await?.error_for_status()?;
        Ok(resp.text().await?)
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn get(&self, url: &str) -> Result<String> {
        (**self).get(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_timeout() {
        assert_eq!(HttpTransport::new().timeout(), None);
    }

    #[test]
    fn keeps_configured_timeout() {
        let transport = HttpTransport::with_timeout(Duration::from_secs(3));
        assert_eq!(transport.timeout(), Some(Duration::from_secs(3)));
    }

    #[tokio::test]
    async fn unreachable_host_is_network_error() {
        // Grab a free port, then close it so the connect is refused.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let transport = HttpTransport::with_timeout(Duration::from_secs(2));
        let url = format!("http://127.0.0.1:{}/get.php?key=x", port);
        let err = transport.get(&url).await.unwrap_err();
        assert!(matches!(err, crate::error::Error::Network(_)));
    }
}

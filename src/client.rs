use crate::configuration::Settings;
use crate::error::Result;
use crate::parser::parse_proxies;
use crate::proxy::{Format, ProxyRequest, ProxyType};
use crate::transport::{HttpTransport, Transport};

use log::debug;

pub const API_URL: &str = "https://api.proxy.gg/get.php";

/// Client for the proxy.gg API.
///
/// Holds only the keyed endpoint and a transport, both read-only after
/// construction, so one client can serve concurrent callers.
pub struct ProxyClient<T: Transport = HttpTransport> {
    endpoint: String,
    transport: T,
}

impl ProxyClient<HttpTransport> {
    /// No request is made and the key is not checked.
    pub fn new(api_key: &str) -> Self {
        Self::with_transport(api_key, HttpTransport::new())
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let transport = match settings.timeout() {
            Some(timeout) => HttpTransport::with_timeout(timeout),
            None => HttpTransport::new(),
        };
        let base = settings.endpoint.as_deref().unwrap_or(API_URL);
        Self::with_endpoint(&settings.api_key, base, transport)
    }
}

impl<T: Transport> ProxyClient<T> {
    pub fn with_transport(api_key: &str, transport: T) -> Self {
        Self::with_endpoint(api_key, API_URL, transport)
    }

    /// `base` is the URL without a query string; `?key=` is appended to it.
    pub fn with_endpoint(api_key: &str, base: &str, transport: T) -> Self {
        Self {
            endpoint: format!("{}?key={}", base, api_key),
            transport,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The URL `fetch_raw_proxies` would request for these arguments.
    pub fn request_url(
        &self,
        proxy_type: ProxyType,
        quantity: u32,
        format: Format,
        country: Option<&str>,
    ) -> Result<String> {
        let request = ProxyRequest::new(proxy_type, quantity, format, country)?;
        Ok(request.url(&self.endpoint))
    }

    /// Fetches the unparsed response body in the requested format.
    ///
    /// Fails with `QuantityOutOfBounds` before touching the network when
    /// `quantity` is outside `1..=1000`. Transport failures are returned as is
    /// and never retried.
    pub async fn fetch_raw_proxies(
        &self,
        proxy_type: ProxyType,
        quantity: u32,
        format: Format,
        country: Option<&str>,
    ) -> Result<String> {
        let url = self.request_url(proxy_type, quantity, format, country)?;
        debug!(
            "requesting {} {} proxies as {} (country: {})",
            quantity,
            proxy_type,
            format,
            country.unwrap_or("any")
        );
        self.transport.get(&url).await
    }

    /// Fetches proxies in DOM format and returns each `ip:port` in the order
    /// the API listed them.
    pub async fn fetch_proxies(
        &self,
        proxy_type: ProxyType,
        quantity: u32,
        country: Option<&str>,
    ) -> Result<Vec<String>> {
        let body = self
            .fetch_raw_proxies(proxy_type, quantity, Format::Dom, country)
            .await?;
        let proxies = parse_proxies(&body);
        debug!("{} proxies found {}", proxy_type, proxies.len());
        Ok(proxies)
    }
}

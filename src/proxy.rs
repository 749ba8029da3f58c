use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 1000;

/// Proxy pools offered by the API, either by protocol or by target site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProxyType {
    Http,
    Https,
    Socks,
    Google,
    Sneaker,
    Shopify,
    Ebay,
    Strawpoll,
}

impl ProxyType {
    pub const ALL: [ProxyType; 8] = [
        ProxyType::Http,
        ProxyType::Https,
        ProxyType::Socks,
        ProxyType::Google,
        ProxyType::Sneaker,
        ProxyType::Shopify,
        ProxyType::Ebay,
        ProxyType::Strawpoll,
    ];

    /// Token sent as the `type` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProxyType::Http => "http",
            ProxyType::Https => "https",
            ProxyType::Socks => "socks",
            ProxyType::Google => "google",
            ProxyType::Sneaker => "sneaker",
            ProxyType::Shopify => "shopify",
            ProxyType::Ebay => "ebay",
            ProxyType::Strawpoll => "strawpoll",
        }
    }
}

impl fmt::Display for ProxyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProxyType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ProxyType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown proxy type: {}", s))
    }
}

/// Body serialization returned by the API. Only `Dom` is parsed by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Dom,
    Table,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Json, Format::Dom, Format::Table];

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Dom => "dom",
            Format::Table => "table",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown format: {}", s))
    }
}

/// A validated query against the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyRequest {
    pub proxy_type: ProxyType,
    pub quantity: u32,
    pub format: Format,
    pub country: Option<String>,
}

impl ProxyRequest {
    /// Fails with `QuantityOutOfBounds` unless `1 <= quantity <= 1000`.
    pub fn new(
        proxy_type: ProxyType,
        quantity: u32,
        format: Format,
        country: Option<&str>,
    ) -> Result<Self> {
        if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&quantity) {
            return Err(Error::QuantityOutOfBounds(quantity));
        }

        Ok(Self {
            proxy_type,
            quantity,
            format,
            country: country.map(str::to_string),
        })
    }

    /// Appends the query parameters to `endpoint`, which already carries `?key=`.
    /// The country code is passed through as given.
    pub fn url(&self, endpoint: &str) -> String {
        let mut url = format!(
            "{}&format={}&type={}&qty={}",
            endpoint, self.format, self.proxy_type, self.quantity
        );
        if let Some(country) = &self.country {
            url.push_str("&country=");
            url.push_str(country);
        }
        url
    }
}

pub mod client;
pub mod configuration;
pub mod error;
pub mod parser;
pub mod proxy;
pub mod transport;

pub use client::ProxyClient;
pub use error::{Error, Result};
pub use parser::parse_proxies;
pub use proxy::{Format, ProxyRequest, ProxyType};
pub use transport::{HttpTransport, Transport};

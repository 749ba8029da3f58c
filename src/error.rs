use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Quantity outside `1..=1000`, rejected before any request is sent.
    #[error("quantity must be between 1 and 1000, got {0}")]
    QuantityOutOfBounds(u32),

    /// DNS, TLS, timeout or non-2xx failure from the HTTP client.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failure reported by a custom transport.
    #[error("transport error: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport-level failure: DNS, connect, TLS, timeout, or a body that
    /// could not be read.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    Http { status: u16, url: String },

    #[error("malformed response body for {context}: {source}")]
    Parse {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid catalog base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

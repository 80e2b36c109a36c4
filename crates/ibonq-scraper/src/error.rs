use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid inquiry endpoint \"{url}\": {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("invalid selector for {context}: {reason}")]
    Selector { context: String, reason: String },
}

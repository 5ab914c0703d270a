use thiserror::Error;

/// Everything a provider call can fail with. Rejections carry the provider's
/// own error text; transport and parse failures wrap the underlying cause.
#[derive(Debug, Error)]
pub enum Error {
    /// The endpoint could not be reached or the HTTP exchange failed.
    /// Also raised when the HTTP client itself cannot be built, before
    /// any exchange is attempted.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The authorization endpoint answered with a non-empty error field.
    #[error("authorization rejected: {0}")]
    AuthRejected(String),

    /// The provider rejected a sell request.
    #[error("sell rejected: {0}")]
    SellRejected(String),

    /// The provider rejected a report request.
    #[error("report rejected: {0}")]
    ReportRejected(String),

    /// The response body did not parse as the expected structure.
    #[error("malformed response body: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

//! Error handling for the siamon metrics collector.

/// A specialized `Result` type for siamon operations.
pub type Result<T> = std::result::Result<T, MonitorError>;

/// The main error type for metrics collection and logging operations.
#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The node API could not be reached or returned a failure status
    #[error("API request failed: {0}")]
    Api(String),

    /// The node API responded, but the body did not match the expected shape
    #[error("Failed to parse API response: {0}")]
    Parse(String),

    /// A snapshot could not be rendered for console output
    #[error("Render error: {0}")]
    Render(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MonitorError {
    /// Create a new API transport error
    pub fn api_error(msg: impl Into<String>) -> Self {
        Self::Api(msg.into())
    }

    /// Create a new parse error
    pub fn parse_error(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a new render error
    pub fn render_error(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Create a new configuration error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<reqwest::Error> for MonitorError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            MonitorError::Parse(err.to_string())
        } else {
            MonitorError::Api(err.to_string())
        }
    }
}

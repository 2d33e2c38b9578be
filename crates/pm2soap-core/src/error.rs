use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Collection contains no requests")]
    EmptyCollection,

    #[error("Request '{0}' has no URL host to derive a base URL from")]
    MissingHost(String),

    #[error("Invalid basic credentials on request '{request}': {reason}")]
    InvalidBasicCredentials { request: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("XML error: {0}")]
    Xml(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl Error {
    /// Helper for creating configuration errors
    ///
    /// # Example
    /// ```
    /// use pm2soap_core::Error;
    /// let err = Error::config_error("Invalid soapui version");
    /// ```
    pub fn config_error(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Helper for creating basic credential decoding errors
    pub fn invalid_credentials(request: impl Into<String>, reason: impl ToString) -> Self {
        Error::InvalidBasicCredentials {
            request: request.into(),
            reason: reason.to_string(),
        }
    }

    /// Helper for wrapping XML emitter failures
    pub fn xml(err: impl ToString) -> Self {
        Error::Xml(err.to_string())
    }
}

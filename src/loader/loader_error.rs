use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum LoaderError {
    Client(String),
    Network(String),
    Status(u16),
    JsonParse(String),
    UnexpectedShape(String),
    Deserialize(String),
}

impl LoaderError {
    /// Transport problems as opposed to a reply we could not understand.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            LoaderError::Client(_) | LoaderError::Network(_) | LoaderError::Status(_)
        )
    }
}

impl fmt::Display for LoaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoaderError::Client(msg) => write!(f, "HTTP client error: {msg}"),
            LoaderError::Network(msg) => write!(f, "Network error: {msg}"),
            LoaderError::Status(code) => write!(f, "Upstream answered with HTTP {code}"),
            LoaderError::JsonParse(msg) => write!(f, "JSON parse error: {msg}"),
            LoaderError::UnexpectedShape(msg) => write!(f, "Unexpected data shape: {msg}"),
            LoaderError::Deserialize(msg) => write!(f, "Listing schema mismatch: {msg}"),
        }
    }
}

impl Error for LoaderError {}

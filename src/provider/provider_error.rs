use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ProviderError {
    Config(String),
    Network(String),
    JsonParse(String),
    UnexpectedShape(String),
    Deserialize(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Config(msg) => write!(f, "Config error: {msg}"),
            ProviderError::Network(msg) => write!(f, "Network error: {msg}"),
            ProviderError::JsonParse(msg) => write!(f, "JSON parse error: {msg}"),
            ProviderError::UnexpectedShape(msg) => write!(f, "Unexpected data shape: {msg}"),
            ProviderError::Deserialize(msg) => write!(f, "Deserialize error: {msg}"),
        }
    }
}

impl Error for ProviderError {}

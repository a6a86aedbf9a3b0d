//! Custom error types for homo-webview

use std::fmt;

/// Main error type for homo-webview operations
#[derive(Debug)]
pub enum HomoError {
    /// The loopback listener could not be bound
    Bind(String),
    /// Window or webview construction failed
    Window(String),
    /// A script could not be delivered to the webview
    Script(String),
    /// Envelope serialization errors
    Serialization(String),
    /// General I/O errors
    Io(std::io::Error),
}

impl fmt::Display for HomoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HomoError::Bind(msg) => write!(f, "Bind error: {}", msg),
            HomoError::Window(msg) => write!(f, "Window error: {}", msg),
            HomoError::Script(msg) => write!(f, "Script evaluation error: {}", msg),
            HomoError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            HomoError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for HomoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HomoError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for HomoError {
    fn from(err: std::io::Error) -> Self {
        HomoError::Io(err)
    }
}

impl From<serde_json::Error> for HomoError {
    fn from(err: serde_json::Error) -> Self {
        HomoError::Serialization(err.to_string())
    }
}

impl From<warp::Error> for HomoError {
    fn from(err: warp::Error) -> Self {
        HomoError::Bind(err.to_string())
    }
}

impl From<wry::Error> for HomoError {
    fn from(err: wry::Error) -> Self {
        HomoError::Window(err.to_string())
    }
}

impl From<tao::error::OsError> for HomoError {
    fn from(err: tao::error::OsError) -> Self {
        HomoError::Window(err.to_string())
    }
}

/// Result type alias for homo-webview operations
pub type Result<T> = std::result::Result<T, HomoError>;

//! Error types for terrascope

use std::fmt;
use std::io;

/// Result type for terrascope operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in terrascope operations
#[derive(Debug)]
pub enum Error {
    /// I/O error
    Io(io::Error),

    /// Invalid polygon geometry
    Geometry(String),

    /// Imagery provider rejected our credentials
    Auth(String),

    /// Imagery provider fetch failure
    Fetch {
        /// HTTP status reported by the provider, if the request got that far
        status: Option<u16>,
        /// Provider-supplied detail
        detail: String,
    },

    /// Provider payload could not be decoded into a pixel array
    Decode(String),

    /// Missing or invalid configuration
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Geometry(msg) => write!(f, "Invalid geometry: {}", msg),
            Error::Auth(msg) => write!(f, "Provider authentication failed: {}", msg),
            Error::Fetch { status: Some(code), detail } => {
                write!(f, "Provider fetch failed (HTTP {}): {}", code, detail)
            }
            Error::Fetch { status: None, detail } => {
                write!(f, "Provider fetch failed: {}", detail)
            }
            Error::Decode(msg) => write!(f, "Image decode failed: {}", msg),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::Io(error)
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Error::Fetch {
            status: error.status().map(|s| s.as_u16()),
            detail: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Geometry("ring too short".to_string());
        assert_eq!(err.to_string(), "Invalid geometry: ring too short");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_fetch_error_with_status() {
        let err = Error::Fetch {
            status: Some(503),
            detail: "service unavailable".to_string(),
        };
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_fetch_error_without_status() {
        let err = Error::Fetch {
            status: None,
            detail: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("connection refused"));
        assert!(!err.to_string().contains("HTTP"));
    }

    #[test]
    fn test_config_error() {
        let err = Error::Config("SH_CLIENT_ID not set".to_string());
        assert!(err.to_string().contains("SH_CLIENT_ID"));
    }
}

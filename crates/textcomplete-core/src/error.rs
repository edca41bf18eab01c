//! Error types for textcomplete.
//!
//! Most widget calls that would be "invalid" (navigating a hidden dropdown,
//! selecting from an empty one) are silent no-ops rather than errors. This
//! type covers the operations that can genuinely fail.

use std::path::PathBuf;

/// Result type alias for textcomplete operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in textcomplete.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration could not be decoded.
    #[error("Invalid dropdown configuration: {message}")]
    Config { message: String },

    /// Configuration file could not be read.
    #[error("Failed to read configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An inline style entry has an unusable property name.
    #[error("Invalid style property '{property}'")]
    InvalidStyle { property: String },

    /// An item index does not address a rendered item.
    #[error("Item index {index} out of range for {len} item(s)")]
    ItemOutOfRange { index: usize, len: usize },
}

impl Error {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a style error.
    pub fn invalid_style(property: impl Into<String>) -> Self {
        Self::InvalidStyle {
            property: property.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::ItemOutOfRange { index: 3, len: 2 };
        assert_eq!(err.to_string(), "Item index 3 out of range for 2 item(s)");

        let err = Error::invalid_style("");
        assert_eq!(err.to_string(), "Invalid style property ''");
    }

    #[test]
    fn test_io_error_has_source() {
        use std::error::Error as _;

        let err = Error::io(
            "dropdown.toml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.source().is_some());
        assert!(err.to_string().contains("dropdown.toml"));
    }
}

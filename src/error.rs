//! Error type shared by every helper in the crate.
//!
//! Library functions never terminate the process or hide failures behind
//! placeholder values. They return [`Error`] and leave the policy to the caller.

use std::path::PathBuf;

/// Errors returned by the helpers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input is not a `<number> <unit>` size string with a known unit.
    #[error("invalid size format: {input:?}")]
    InvalidFormat {
        /// The rejected input, after trimming and uppercasing
        input: String,
    },

    /// A filesystem or network operation failed.
    #[error("{context}: {source}")]
    Io {
        /// What was being attempted
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// A file could be read but did not contain valid JSON for the target type.
    #[error("failed to decode JSON from {}: {source}", .path.display())]
    Json {
        /// File that failed to decode
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The JSON document is valid but its top level is not an object.
    #[error("expected a JSON object at the top level of {}", .path.display())]
    NotAnObject {
        /// File whose top level is not an object
        path: PathBuf,
    },

    /// A token was requested with more random bytes than allowed.
    #[error("token length of {requested} bytes exceeds the maximum of {max}")]
    TokenTooLong {
        /// Requested number of random bytes
        requested: usize,
        /// Largest accepted number of random bytes
        max: usize,
    },

    /// A search query could not be compiled into a matcher.
    #[error("invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

impl Error {
    /// Wrap an I/O error with a short description of the failed operation.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_message() {
        let err = Error::InvalidFormat {
            input: "10 TB".to_string(),
        };
        assert_eq!(err.to_string(), "invalid size format: \"10 TB\"");
    }

    #[test]
    fn test_io_message_keeps_context() {
        let err = Error::io(
            "creating directory /nope",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "creating directory /nope: denied");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_token_too_long_message() {
        let err = Error::TokenTooLong {
            requested: 4096,
            max: 1024,
        };
        assert_eq!(
            err.to_string(),
            "token length of 4096 bytes exceeds the maximum of 1024"
        );
    }

    #[test]
    fn test_not_an_object_message() {
        let err = Error::NotAnObject {
            path: PathBuf::from("list.json"),
        };
        assert!(err.to_string().contains("list.json"));
    }
}

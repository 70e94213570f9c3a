//! Error types for the tube-dl library
//!
//! Provides an enumerated classification of everything that can go wrong
//! while validating URLs, resolving videos, or writing output files.

use std::fmt;

use rusty_ytdl::VideoError;

/// Main error type for tube-dl operations
#[derive(Debug)]
pub enum Error {
    /// String is not a recognized YouTube URL
    InvalidUrl(String),

    /// The extractor reports the video does not exist
    VideoNotFound(String),

    /// Private, members-only or otherwise unsupported video
    VideoUnavailable(String),

    /// Network connectivity failure in the extractor's transport
    Network(String),

    /// Any other failure while resolving or streaming the video
    Extraction(String),

    /// Invalid menu, count or confirmation input
    InvalidInput(String),

    /// File I/O error
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidUrl(url) => {
                write!(f, "Invalid URL '{}': not a YouTube link", url)
            }
            Error::VideoNotFound(msg) => {
                write!(f, "Video not found: {}", msg)
            }
            Error::VideoUnavailable(msg) => {
                write!(f, "Video unavailable: {}", msg)
            }
            Error::Network(msg) => {
                write!(f, "Network error: {}", msg)
            }
            Error::Extraction(msg) => {
                write!(f, "Extraction failed: {}", msg)
            }
            Error::InvalidInput(msg) => {
                write!(f, "Invalid input: {}", msg)
            }
            Error::Io(err) => {
                write!(f, "I/O error: {}", err)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<VideoError> for Error {
    fn from(err: VideoError) -> Self {
        match err {
            VideoError::VideoNotFound | VideoError::VideoSourceNotFound => {
                Error::VideoNotFound(err.to_string())
            }
            VideoError::VideoIsPrivate => Error::VideoUnavailable(err.to_string()),
            VideoError::ReqwestMiddleware(e) => Error::Network(e.to_string()),
            other => Error::Extraction(other.to_string()),
        }
    }
}

/// Convenience result type for tube-dl operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_url() {
        let err = Error::InvalidUrl("ftp://nope".to_string());
        assert!(err.to_string().contains("not a YouTube link"));
        assert!(err.to_string().contains("ftp://nope"));
    }

    #[test]
    fn test_io_error_source_preserved() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::from(io);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn test_not_found_classification() {
        let err = Error::from(VideoError::VideoNotFound);
        assert!(matches!(err, Error::VideoNotFound(_)));

        let err = Error::from(VideoError::VideoIsPrivate);
        assert!(matches!(err, Error::VideoUnavailable(_)));
    }
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! Error types for the FixLens FIX message decoder.
//!
//! This module provides a unified error hierarchy using `thiserror` for typed,
//! domain-specific errors across all FixLens operations.

use thiserror::Error;

/// Result type alias using [`FixLensError`] as the error type.
pub type Result<T> = std::result::Result<T, FixLensError>;

/// Top-level error type for all FixLens operations.
#[derive(Debug, Error)]
pub enum FixLensError {
    /// Error during message decoding.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Error during specification resolution.
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that occur during FIX message decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Input message is empty or whitespace only.
    #[error("empty message")]
    EmptyMessage,

    /// Both decoding strategies failed to extract any field.
    #[error("unable to parse message: structured strategy failed ({structured}); manual strategy failed ({manual})")]
    Unparsable {
        /// Failure cause reported by the structured strategy.
        structured: String,
        /// Failure cause reported by the manual strategy.
        manual: String,
    },

    /// Manual tokenization found no parsable tag=value fields.
    #[error("no parsable fields in input")]
    NoParsableFields,

    /// Message does not start with a BeginString field (tag 8).
    #[error("missing begin string (tag 8)")]
    MissingBeginString,

    /// Malformed field encountered by the structured tokenizer.
    #[error("malformed field at byte offset {offset}")]
    MalformedField {
        /// Byte offset of the offending field.
        offset: usize,
    },

    /// Invalid tag format (not a valid non-negative integer).
    #[error("invalid tag format: {0}")]
    InvalidTag(String),
}

/// Errors that occur while resolving a FIX specification.
///
/// These are internal to the tiered resolution process: the provider
/// swallows them and falls through to the next tier, so they never reach
/// the public API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// HTTP request failed (connect error, timeout, etc.).
    #[error("http request failed: {0}")]
    Http(String),

    /// Server returned a non-success status code.
    #[error("unexpected http status: {0}")]
    Status(u16),

    /// Specification document could not be parsed.
    #[error("malformed specification document: {0}")]
    Document(String),

    /// Local cache artifact could not be read or written.
    #[error("cache i/o error: {0}")]
    CacheIo(String),

    /// Local cache artifact has an invalid format.
    #[error("malformed cache artifact: {0}")]
    CacheFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::Unparsable {
            structured: "tokenizer rejected input".to_string(),
            manual: "no parsable fields in input".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unable to parse message: structured strategy failed (tokenizer rejected input); \
             manual strategy failed (no parsable fields in input)"
        );
    }

    #[test]
    fn test_fixlens_error_from_decode() {
        let decode_err = DecodeError::EmptyMessage;
        let err: FixLensError = decode_err.into();
        assert!(matches!(err, FixLensError::Decode(DecodeError::EmptyMessage)));
    }

    #[test]
    fn test_provider_error_display() {
        let err = ProviderError::Status(404);
        assert_eq!(err.to_string(), "unexpected http status: 404");
    }
}

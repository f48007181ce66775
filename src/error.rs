//! # Error Types
//!
//! This module defines the error type returned by every splitting, header and
//! decoding operation of this library.

use crate::sentences::SentenceType;

/// Result type used throughout the library.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// The two families of failure a decode can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input is not shaped like a sentence this library understands.
    Format,
    /// The input is a well-formed, known sentence, but not of the type the
    /// invoked decoder handles.
    Type,
}

/// Represents all possible errors that can occur while decoding a sentence.
///
/// Every variant owns its data so errors can outlive the input they were
/// produced from.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The sentence does not begin with `$`.
    #[error("format error: sentence must start with '$'")]
    MissingStartDelimiter,

    /// A line ending was required by the decoder configuration but the
    /// sentence does not end with `\r\n`.
    #[error("format error: sentence must end with CRLF")]
    MissingLineEnding,

    /// The first field is too short to hold a talker code and a sentence type.
    ///
    /// Contains the offending first field.
    #[error("format error: header field {0:?} is shorter than 5 characters")]
    ShortHeader(String),

    /// The sentence type is not one of the supported types.
    ///
    /// Contains the sentence type code found in the header.
    #[error("format error: {0} type is not supported")]
    UnsupportedSentence(String),

    /// The sentence has fewer fields than its type reads.
    #[error("format error: truncated {sentence_type} sentence, expected {expected} fields, found {found}")]
    Truncated {
        /// The type of the sentence being decoded
        sentence_type: SentenceType,
        /// Number of fields, header included, the decoder reads
        expected: usize,
        /// Number of fields present in the sentence
        found: usize,
    },

    /// The sentence is of a supported type, but not the one the decoder handles.
    #[error("type error: not {expected} type, found {found}")]
    UnexpectedSentence {
        /// The type handled by the invoked decoder
        expected: SentenceType,
        /// The type found in the sentence header
        found: SentenceType,
    },
}

impl Error {
    /// Returns the family this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnexpectedSentence { .. } => ErrorKind::Type,
            Error::MissingStartDelimiter
            | Error::MissingLineEnding
            | Error::ShortHeader(_)
            | Error::UnsupportedSentence(_)
            | Error::Truncated { .. } => ErrorKind::Format,
        }
    }

    /// Returns `true` if the input is not shaped like a supported sentence.
    pub fn is_format(&self) -> bool {
        self.kind() == ErrorKind::Format
    }

    /// Returns `true` if a known sentence was handed to the wrong decoder.
    pub fn is_type(&self) -> bool {
        self.kind() == ErrorKind::Type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind() {
        let format = [
            Error::MissingStartDelimiter,
            Error::MissingLineEnding,
            Error::ShortHeader("GPG".to_string()),
            Error::UnsupportedSentence("ZDA".to_string()),
            Error::Truncated {
                sentence_type: SentenceType::Gga,
                expected: 10,
                found: 3,
            },
        ];

        for error in &format {
            assert_eq!(error.kind(), ErrorKind::Format, "Failed: {error:?}");
            assert!(error.is_format());
            assert!(!error.is_type());
        }

        let error = Error::UnexpectedSentence {
            expected: SentenceType::Gga,
            found: SentenceType::Gll,
        };
        assert_eq!(error.kind(), ErrorKind::Type);
        assert!(error.is_type());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::UnsupportedSentence("ZDA".to_string()).to_string(),
            "format error: ZDA type is not supported"
        );
        assert_eq!(
            Error::UnexpectedSentence {
                expected: SentenceType::Gga,
                found: SentenceType::Gll,
            }
            .to_string(),
            "type error: not GGA type, found GLL"
        );
    }
}

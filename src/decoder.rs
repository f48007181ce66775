//! # Decoder Configuration
//!
//! Sentences usually arrive one per line. Depending on the transport feeding
//! this library they may or may not still carry their `\r\n` terminator; the
//! [`Decoder`] is configured with how to treat it.

use nom::{
    IResult, Parser,
    bytes::complete::tag,
    character::complete::anychar,
    combinator::{all_consuming, opt, peek, recognize},
    multi::many_till,
    sequence::terminated,
};

use crate::{Error, Fields, Frame, NmeaSentence, Result, Sentence, sentences};

/// Defines how the decoder should handle CRLF line endings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LineEndingMode {
    /// The sentence is taken as is.
    ///
    /// A trailing `\r\n` is not recognized and ends up in the last field (or in
    /// the checksum, if the sentence has one).
    #[default]
    Preserve,

    /// A trailing `\r\n` is removed if present.
    ///
    /// Use this mode when sentences come from a line reader that may keep
    /// line terminators.
    Optional,

    /// The sentence must end with `\r\n`, which is removed.
    ///
    /// The decoder will fail with [`Error::MissingLineEnding`] otherwise.
    /// Use this mode when parsing standard NMEA log files or serial port data.
    Required,
}

/// Builds a [`Decoder`].
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{DecoderBuilder, LineEndingMode, NmeaSentence};
///
/// let decoder = DecoderBuilder::new()
///     .line_ending_mode(LineEndingMode::Optional)
///     .build();
///
/// let sentence = decoder.decode_any("$GPGSV,2,1,08,01,40,083,46*75\r\n").unwrap();
/// assert!(matches!(sentence, Some(NmeaSentence::Gsv(ref gsv)) if gsv.checksum.as_deref() == Some("75")));
///
/// let strict = DecoderBuilder::new()
///     .line_ending_mode(LineEndingMode::Required)
///     .build();
/// assert!(strict.decode_any("$GPGSV,2,1,08,01,40,083,46*75").is_err());
/// ```
#[must_use]
#[derive(Debug, Default, Clone, Copy)]
pub struct DecoderBuilder {
    /// Line ending mode for the decoder.
    line_ending_mode: LineEndingMode,
}

impl DecoderBuilder {
    /// Creates a new builder with default settings.
    ///
    /// The default settings are:
    /// - Line ending mode: [`LineEndingMode::Preserve`]
    pub fn new() -> Self {
        DecoderBuilder {
            line_ending_mode: LineEndingMode::Preserve,
        }
    }

    /// Sets the line ending mode for the decoder.
    pub fn line_ending_mode(mut self, mode: LineEndingMode) -> Self {
        self.line_ending_mode = mode;
        self
    }

    /// Builds the decoder with the configured settings.
    pub fn build(self) -> Decoder {
        Decoder {
            line_ending_mode: self.line_ending_mode,
        }
    }
}

/// Splits and decodes sentences.
///
/// The free functions [`split`](crate::split), [`decode_any`](crate::decode_any)
/// and [`Sentence::decode`] use a default decoder.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Decoder {
    line_ending_mode: LineEndingMode,
}

impl Decoder {
    /// Creates a decoder with default settings.
    pub fn new() -> Self {
        DecoderBuilder::new().build()
    }

    /// Returns a builder to configure a decoder.
    pub fn builder() -> DecoderBuilder {
        DecoderBuilder::new()
    }

    /// Returns the configured line ending mode.
    pub fn line_ending_mode(&self) -> LineEndingMode {
        self.line_ending_mode
    }

    /// Splits a sentence into its fields.
    ///
    /// See [`split`](crate::split).
    pub fn split(&self, raw: &str) -> Result<Fields> {
        crate::split(self.strip_line_ending(raw)?)
    }

    /// Splits a sentence and extracts its header and checksum.
    pub fn frame(&self, raw: &str) -> Result<Frame> {
        Frame::parse(self.strip_line_ending(raw)?)
    }

    /// Decodes a sentence of type `T`.
    ///
    /// # Errors
    ///
    /// - [`Error::UnexpectedSentence`] if the sentence is of another supported type
    /// - any format error otherwise
    pub fn decode<T: Sentence>(&self, raw: &str) -> Result<T> {
        T::from_frame(&self.frame(raw)?)
    }

    /// Decodes a sentence of any supported type.
    ///
    /// Returns `Ok(None)` if the sentence type is not supported.
    pub fn decode_any(&self, raw: &str) -> Result<Option<NmeaSentence>> {
        sentences::dispatch(&self.frame(raw)?)
    }

    fn strip_line_ending<'a>(&self, raw: &'a str) -> Result<&'a str> {
        if self.line_ending_mode == LineEndingMode::Preserve {
            return Ok(raw);
        }

        match crlf(raw) {
            Ok((_, Some(sentence))) => Ok(sentence),
            _ if self.line_ending_mode == LineEndingMode::Required => {
                Err(Error::MissingLineEnding)
            }
            _ => Ok(raw),
        }
    }
}

/// Parses the text before a terminating `\r\n`, if the input ends with one.
///
/// Only the final `\r\n` is the terminator; any earlier one is kept.
fn crlf(i: &str) -> IResult<&str, Option<&str>> {
    let body = recognize(many_till(anychar, peek(all_consuming(tag("\r\n")))));
    opt(terminated(body, tag("\r\n"))).parse(i)
}

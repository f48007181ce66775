//! # Sentence Framing
//!
//! This module turns a raw sentence such as
//! `$GPGGA,123519,4807.038,N,01131.324,E,1,08,545.4,M,46.9,M,,*42` into the
//! pieces every decoder works from:
//!
//! - [`Fields`]: the comma-separated payload, header field included
//! - [`SentenceHeader`]: the talker code and sentence type taken from the first field
//! - the checksum text following the last `*`, recorded but never verified

use std::{fmt, ops::Index};

use nom::{IResult, Parser, bytes::complete::take, character::complete::char};

use crate::{Error, FieldValue, Result, sentences::SentenceType};

/// Marks the start of every sentence.
pub const START_DELIMITER: char = '$';

/// Separates the sentence payload from its checksum.
pub const CHECKSUM_DELIMITER: char = '*';

/// Separates two fields of the payload.
pub const FIELD_SEPARATOR: char = ',';

/// Ordered fields of a sentence.
///
/// Field `0` is the header field (talker code and sentence type), the fields
/// that follow are addressed by their fixed position only. Empty fields are
/// kept, so the position of every field matches its column in the sentence.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Fields(Vec<String>);

impl Fields {
    /// Returns the number of fields, header field included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no fields at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the field at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Returns the fields as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Returns an iterator over the fields.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Reads the fields in `start..end` as a `T`.
    ///
    /// Returns [`None`] if the range is out of bounds or `T` cannot hold that
    /// many fields.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea0183_decoder::split;
    ///
    /// let fields = split("$GPGLL,4807.038,N,01131.324,E,123519,A").unwrap();
    ///
    /// let latitude: Option<[String; 2]> = fields.value(1, 3);
    /// assert_eq!(latitude, Some(["4807.038".to_string(), "N".to_string()]));
    ///
    /// let status: Option<String> = fields.value(6, 7);
    /// assert_eq!(status.as_deref(), Some("A"));
    ///
    /// let missing: Option<String> = fields.value(7, 8);
    /// assert!(missing.is_none());
    /// ```
    pub fn value<T: FieldValue>(&self, start: usize, end: usize) -> Option<T> {
        self.0.get(start..end).and_then(T::from_fields)
    }
}

impl Index<usize> for Fields {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.0[index]
    }
}

impl<S: Into<String>> FromIterator<S> for Fields {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Fields(iter.into_iter().map(Into::into).collect())
    }
}

impl From<Fields> for Vec<String> {
    fn from(fields: Fields) -> Self {
        fields.0
    }
}

impl<const N: usize> PartialEq<[&str; N]> for Fields {
    fn eq(&self, other: &[&str; N]) -> bool {
        self.0.len() == N && self.0.iter().zip(other).all(|(a, b)| a == b)
    }
}

/// Talker code and sentence type of a sentence.
///
/// Both are fixed-width slices of the first field: `receiver` holds characters
/// `0..2`, `sentence_type` characters `2..5`. Neither is checked against the
/// known codes here; see [`SentenceHeader::known_type`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SentenceHeader {
    /// Talker (receiver) code, e.g. `GP`
    pub receiver: String,
    /// Sentence type code, e.g. `GGA`
    pub sentence_type: String,
}

impl SentenceHeader {
    /// Returns the sentence type if it is one of the supported types.
    pub fn known_type(&self) -> Option<SentenceType> {
        SentenceType::from_code(&self.sentence_type)
    }

    /// Returns a description of the talker, if the talker code is known.
    pub fn receiver_description(&self) -> Option<&'static str> {
        talker_description(&self.receiver)
    }
}

impl fmt::Display for SentenceHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.receiver, self.sentence_type)
    }
}

/// Describes a talker (receiver) code.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::talker_description;
///
/// assert_eq!(talker_description("GP"), Some("Global Positioning System"));
/// assert_eq!(talker_description("ZZ"), None);
/// ```
pub fn talker_description(code: &str) -> Option<&'static str> {
    match code {
        "GP" => Some("Global Positioning System"),
        "LC" => Some("Loran-C receiver"),
        "OM" => Some("Omega Navigation receiver"),
        "II" => Some("Integrated Instrumentation"),
        _ => None,
    }
}

/// Splits a raw sentence into its fields.
///
/// The sentence must start with `$`. Everything from the last `*` onward is
/// dropped, then every remaining `$` and `*` is removed, and the rest is split
/// on `,`. Empty fields are preserved.
///
/// # Errors
///
/// [`Error::MissingStartDelimiter`] if `raw` does not start with `$`.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::split;
///
/// assert_eq!(split("$GPGGA,1,2*42").unwrap(), ["GPGGA", "1", "2"]);
/// assert_eq!(split("$GPGGA,1,2").unwrap(), ["GPGGA", "1", "2"]);
/// assert_eq!(split("$GPGSA,A,,3").unwrap(), ["GPGSA", "A", "", "3"]);
/// assert!(split("GPGGA,1,2").is_err());
/// ```
pub fn split(raw: &str) -> Result<Fields> {
    let (body, _) = start_delimiter(raw).map_err(|_| Error::MissingStartDelimiter)?;

    let body = match body.rfind(CHECKSUM_DELIMITER) {
        Some(index) => &body[..index],
        None => body,
    };
    let body = body.replace([START_DELIMITER, CHECKSUM_DELIMITER], "");

    let fields: Fields = body.split(FIELD_SEPARATOR).collect();
    log::trace!("split {raw:?} into {} fields", fields.len());

    Ok(fields)
}

/// Extracts the header of a split sentence.
///
/// # Errors
///
/// [`Error::ShortHeader`] if the first field holds fewer than 5 characters.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{Fields, header};
///
/// let fields: Fields = ["GPGGA", "123519"].into_iter().collect();
/// let header = header(&fields).unwrap();
/// assert_eq!(header.receiver, "GP");
/// assert_eq!(header.sentence_type, "GGA");
/// ```
pub fn header(fields: &Fields) -> Result<SentenceHeader> {
    let first = fields.get(0).unwrap_or_default();
    let (_, (receiver, sentence_type)) =
        talker_and_type(first).map_err(|_| Error::ShortHeader(first.to_owned()))?;

    Ok(SentenceHeader {
        receiver: receiver.to_owned(),
        sentence_type: sentence_type.to_owned(),
    })
}

/// Returns the checksum text of a raw sentence: everything after its last `*`.
///
/// The checksum is not verified.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::checksum;
///
/// assert_eq!(checksum("$GPGSV,2,1,08,01,40,083,46*75"), Some("75"));
/// assert_eq!(checksum("$GPVTG,054.7,T,034.4,M,005.5,N,010.3,K"), None);
/// ```
pub fn checksum(raw: &str) -> Option<&str> {
    raw.rfind(CHECKSUM_DELIMITER)
        .map(|index| &raw[index + CHECKSUM_DELIMITER.len_utf8()..])
}

fn start_delimiter(i: &str) -> IResult<&str, char> {
    char(START_DELIMITER).parse(i)
}

fn talker_and_type(i: &str) -> IResult<&str, (&str, &str)> {
    (take(2u8), take(3u8)).parse(i)
}

/// A split sentence: its fields, header and checksum.
///
/// A frame is built once per raw sentence and handed to the decoders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Fields of the sentence, header field included
    pub fields: Fields,
    /// Header extracted from the first field
    pub header: SentenceHeader,
    /// Text following the last `*`, if any
    pub checksum: Option<String>,
}

impl Frame {
    /// Splits `raw` and extracts its header.
    ///
    /// # Errors
    ///
    /// Fails like [`split`] and [`header`].
    pub fn parse(raw: &str) -> Result<Self> {
        let fields = split(raw)?;
        let header = header(&fields)?;

        Ok(Frame {
            fields,
            header,
            checksum: checksum(raw).map(str::to_owned),
        })
    }

    /// Checks that this frame holds a sentence of type `expected`.
    ///
    /// # Errors
    ///
    /// - [`Error::UnexpectedSentence`] if the sentence is of another supported type
    /// - [`Error::UnsupportedSentence`] if the sentence type is not supported at all
    pub fn expect_type(&self, expected: SentenceType) -> Result<()> {
        match self.header.known_type() {
            Some(found) if found == expected => Ok(()),
            Some(found) => Err(Error::UnexpectedSentence { expected, found }),
            None => Err(Error::UnsupportedSentence(
                self.header.sentence_type.clone(),
            )),
        }
    }
}

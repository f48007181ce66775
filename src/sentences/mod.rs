mod gga;
mod gll;
mod gsa;
mod gsv;
mod rmc;
mod vtg;

pub use gga::Gga;
pub use gll::Gll;
pub use gsa::Gsa;
pub use gsv::Gsv;
pub use rmc::Rmc;
pub use vtg::Vtg;

use std::{fmt, str::FromStr};

use crate::{Decoder, Error, Frame, Result, SentenceHeader};

/// The supported sentence types.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentenceType {
    /// Global Positioning System Fix Data
    Gga,
    /// Geographic Position - Latitude/Longitude
    Gll,
    /// GPS DOP and active satellites
    Gsa,
    /// Satellites in View
    Gsv,
    /// Track made good and Ground speed
    Vtg,
    /// Recommended Minimum Navigation Information
    Rmc,
}

impl SentenceType {
    /// All supported sentence types.
    pub const ALL: [SentenceType; 6] = [
        SentenceType::Gga,
        SentenceType::Gll,
        SentenceType::Gsa,
        SentenceType::Gsv,
        SentenceType::Vtg,
        SentenceType::Rmc,
    ];

    /// Looks up a sentence type by its three letter code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "GGA" => Some(SentenceType::Gga),
            "GLL" => Some(SentenceType::Gll),
            "GSA" => Some(SentenceType::Gsa),
            "GSV" => Some(SentenceType::Gsv),
            "VTG" => Some(SentenceType::Vtg),
            "RMC" => Some(SentenceType::Rmc),
            _ => None,
        }
    }

    /// Returns the three letter code of the sentence type.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentenceType::Gga => "GGA",
            SentenceType::Gll => "GLL",
            SentenceType::Gsa => "GSA",
            SentenceType::Gsv => "GSV",
            SentenceType::Vtg => "VTG",
            SentenceType::Rmc => "RMC",
        }
    }

    /// Returns a short description of what the sentence carries.
    pub fn description(&self) -> &'static str {
        match self {
            SentenceType::Gga => "Global Positioning System Fix Data",
            SentenceType::Gll => "Geographic Position - Latitude/Longitude",
            SentenceType::Gsa => "GPS DOP and active satellites",
            SentenceType::Gsv => "Satellites in View",
            SentenceType::Vtg => "Track made good and Ground speed",
            SentenceType::Rmc => "Recommended Minimum Navigation Information",
        }
    }
}

impl fmt::Display for SentenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentenceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SentenceType::from_code(s).ok_or_else(|| Error::UnsupportedSentence(s.to_owned()))
    }
}

/// A decoder for one sentence type.
///
/// Implementations are derived with `#[derive(Sentence)]`, which reads the
/// position of every record field from its `#[nmea(...)]` attribute:
///
/// - `#[nmea(sentence_type = Variant)]` on the struct names the [`SentenceType`]
/// - `#[nmea(header)]` receives the [`SentenceHeader`]
/// - `#[nmea(field = N)]` receives field `N`
/// - `#[nmea(fields(START, END))]` receives fields `START..END`
/// - `#[nmea(checksum)]` receives the checksum text, if any
///
/// ## Example Usage
///
/// ```rust
/// use nmea0183_decoder::{Error, Gga, Sentence};
///
/// let gga = Gga::decode("$GPGGA,123519,4807.038,N,01131.324,E,1,08,545.4,M,46.9,M,,*42").unwrap();
/// assert_eq!(gga.time, "123519");
/// assert_eq!(gga.header().receiver, "GP");
///
/// // A known sentence of another type
/// let error = Gga::decode("$GPGLL,4807.038,N,01131.324,E,123519,A").unwrap_err();
/// assert!(error.is_type());
///
/// // An unsupported sentence type
/// let error = Gga::decode("$GPZDA,123519,04,07,2025,,").unwrap_err();
/// assert_eq!(error, Error::UnsupportedSentence("ZDA".to_string()));
/// ```
pub trait Sentence: Sized {
    /// The sentence type this decoder handles.
    const SENTENCE_TYPE: SentenceType;

    /// Number of fields, header field included, this decoder reads.
    const FIELD_COUNT: usize;

    /// Returns the header of the decoded sentence.
    fn header(&self) -> &SentenceHeader;

    /// Reads every record field from its position in `frame`.
    ///
    /// The sentence type is not checked; use [`Sentence::from_frame`].
    fn from_fields(frame: &Frame) -> Result<Self>;

    /// Decodes a split sentence.
    ///
    /// # Errors
    ///
    /// - [`Error::UnexpectedSentence`] if the sentence is of another supported type
    /// - [`Error::UnsupportedSentence`] if the sentence type is not supported
    /// - [`Error::Truncated`] if the sentence has fewer than [`Self::FIELD_COUNT`] fields
    fn from_frame(frame: &Frame) -> Result<Self> {
        frame.expect_type(Self::SENTENCE_TYPE)?;

        if frame.fields.len() < Self::FIELD_COUNT {
            return Err(Error::Truncated {
                sentence_type: Self::SENTENCE_TYPE,
                expected: Self::FIELD_COUNT,
                found: frame.fields.len(),
            });
        }

        Self::from_fields(frame)
    }

    /// Decodes a raw sentence with the default [`Decoder`].
    fn decode(raw: &str) -> Result<Self> {
        Decoder::new().decode(raw)
    }
}

/// A decoded sentence of any supported type.
///
/// ## Example Usage
///
/// ```rust
/// use nmea0183_decoder::{NmeaSentence, decode_any};
///
/// let sentence = decode_any("$GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E*68")
///     .unwrap()
///     .unwrap();
///
/// match sentence {
///     NmeaSentence::Rmc(rmc) => {
///         println!("Speed: {} knots", rmc.speed);
///         println!("Track: {}°", rmc.track);
///     }
///     other => println!("Other sentence: {}", other.sentence_type()),
/// }
///
/// // Unsupported sentence types are not an error
/// assert_eq!(decode_any("$GPZDA,123519,04,07,2025,,").unwrap(), None);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NmeaSentence {
    /// Global Positioning System Fix Data
    Gga(Gga),
    /// Geographic Position - Latitude/Longitude
    Gll(Gll),
    /// GPS DOP and active satellites
    Gsa(Gsa),
    /// Satellites in View
    Gsv(Gsv),
    /// Track made good and Ground speed
    Vtg(Vtg),
    /// Recommended Minimum Navigation Information
    Rmc(Rmc),
}

macro_rules! nmea_sentence_variants {
    ($($variant:ident),* $(,)?) => {
        impl NmeaSentence {
            /// Returns the type of the decoded sentence.
            pub fn sentence_type(&self) -> SentenceType {
                match self {
                    $(NmeaSentence::$variant(_) => $variant::SENTENCE_TYPE,)*
                }
            }

            /// Returns the header of the decoded sentence.
            pub fn header(&self) -> &SentenceHeader {
                match self {
                    $(NmeaSentence::$variant(sentence) => sentence.header(),)*
                }
            }
        }

        impl fmt::Display for NmeaSentence {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(NmeaSentence::$variant(sentence) => fmt::Display::fmt(sentence, f),)*
                }
            }
        }

        $(
            impl From<$variant> for NmeaSentence {
                fn from(sentence: $variant) -> Self {
                    NmeaSentence::$variant(sentence)
                }
            }
        )*

        type DecodeFn = fn(&Frame) -> Result<NmeaSentence>;

        /// One decoder per supported sentence type.
        static DECODERS: [(SentenceType, DecodeFn); 6] = [
            $(($variant::SENTENCE_TYPE, decode_as::<$variant>),)*
        ];
    };
}

nmea_sentence_variants!(Gga, Gll, Gsa, Gsv, Vtg, Rmc);

impl NmeaSentence {
    /// Returns the checksum text of the decoded sentence, for the types that record it.
    pub fn checksum(&self) -> Option<&str> {
        match self {
            NmeaSentence::Gga(gga) => gga.checksum.as_deref(),
            NmeaSentence::Gsa(gsa) => gsa.checksum.as_deref(),
            NmeaSentence::Gsv(gsv) => gsv.checksum.as_deref(),
            NmeaSentence::Rmc(rmc) => rmc.checksum.as_deref(),
            NmeaSentence::Gll(_) | NmeaSentence::Vtg(_) => None,
        }
    }
}

fn decode_as<T>(frame: &Frame) -> Result<NmeaSentence>
where
    T: Sentence + Into<NmeaSentence>,
{
    T::from_frame(frame).map(Into::into)
}

/// Decodes a split sentence with the decoder registered for its type.
///
/// Returns `Ok(None)` if no decoder handles the sentence type.
pub(crate) fn dispatch(frame: &Frame) -> Result<Option<NmeaSentence>> {
    let sentence_type = &frame.header.sentence_type;

    match DECODERS
        .iter()
        .find(|(registered, _)| registered.as_str() == sentence_type)
    {
        Some((_, decode)) => {
            log::debug!("decoding {} sentence", frame.header);
            decode(frame).map(Some)
        }
        None => {
            log::debug!("no decoder for {sentence_type:?} sentence, skipping");
            Ok(None)
        }
    }
}

/// Decodes a sentence of any supported type with the default [`Decoder`].
///
/// Returns `Ok(None)` if the sentence is well formed but its type is not supported.
///
/// # Errors
///
/// - [`Error::MissingStartDelimiter`] if the sentence does not start with `$`
/// - [`Error::ShortHeader`] if the header field is too short
/// - [`Error::Truncated`] if the sentence has fewer fields than its type reads
pub fn decode_any(raw: &str) -> Result<Option<NmeaSentence>> {
    Decoder::new().decode_any(raw)
}

/// Writes the labeled header lines shared by every record rendering.
fn write_header(f: &mut fmt::Formatter<'_>, header: &SentenceHeader) -> fmt::Result {
    writeln!(f, "* Receiver: {}", header.receiver)?;
    writeln!(f, "* Type: {}", header.sentence_type)
}

fn write_checksum(f: &mut fmt::Formatter<'_>, checksum: Option<&str>) -> fmt::Result {
    writeln!(f, "* Checksum: {}", checksum.unwrap_or_default())
}

//! # NMEA 0183 Decoder
//!
//! This library decodes NMEA 0183 sentences of the form
//! `$TTSSS,D1,D2,...,Dn*CC` into typed records.
//!
//! A sentence is split on commas, its first field gives the talker code
//! (`TT`, e.g. `GP`) and the sentence type (`SSS`, e.g. `GGA`), and every other
//! field is read from its fixed position into a named record field. Values are
//! kept as the raw text of the sentence, and the checksum is recorded without
//! being verified.
//!
//! Supported sentence types: GGA, GLL, GSA, GSV, VTG and RMC.
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_decoder::{Gga, NmeaSentence, Sentence, decode_any};
//!
//! // Decode a sentence of any supported type
//! let sentence = decode_any("$GPGLL,4807.038,N,01131.324,E,123519,A").unwrap();
//! if let Some(NmeaSentence::Gll(gll)) = sentence {
//!     assert_eq!(gll.latitude, ["4807.038", "N"]);
//! }
//!
//! // Or a sentence of a given type
//! let gga = Gga::decode("$GPGGA,123519,4807.038,N,01131.324,E,1,08,545.4,M,46.9,M,,*42").unwrap();
//! assert_eq!(gga.altitude, ["545.4", "M"]);
//! assert_eq!(gga.checksum.as_deref(), Some("42"));
//! ```

mod decoder;
pub mod error;
mod frame;
mod parse;
pub mod sentences;

pub use decoder::{Decoder, DecoderBuilder, LineEndingMode};
pub use error::{Error, ErrorKind, Result};
pub use frame::{
    CHECKSUM_DELIMITER, FIELD_SEPARATOR, Fields, Frame, START_DELIMITER, SentenceHeader, checksum,
    header, split, talker_description,
};
pub use nmea0183_decoder_derive::Sentence;
pub use parse::FieldValue;
pub use sentences::{
    Gga, Gll, Gsa, Gsv, NmeaSentence, Rmc, Sentence, SentenceType, Vtg, decode_any,
};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;

#[cfg(test)]
mod tests {
    mod decode;
    mod line_ending;
    mod split;
}

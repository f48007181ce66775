use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea0183_decoder, Sentence, SentenceHeader};

/// GLL - Geographic Position - Latitude/Longitude
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitudelongitude>
///
/// ```text
///         1       2 3        4 5         6
///         |       | |        | |         |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a*hh<CR><LF>
/// ```
///
/// The checksum is not recorded for this sentence.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq, Sentence)]
#[nmea(sentence_type = Gll)]
pub struct Gll {
    #[nmea(header)]
    /// Talker code and sentence type
    pub header: SentenceHeader,
    #[nmea(fields(1, 3))]
    /// Latitude and its hemisphere (`N` or `S`)
    pub latitude: [String; 2],
    #[nmea(fields(3, 5))]
    /// Longitude and its hemisphere (`E` or `W`)
    pub longitude: [String; 2],
    #[nmea(field = 5)]
    /// Fix time in UTC, `hhmmss`
    pub time: String,
    #[nmea(field = 6)]
    /// Data status: `A` = valid, `V` = invalid
    pub status: String,
}

impl fmt::Display for Gll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::write_header(f, &self.header)?;
        writeln!(f, "* Latitude: {}", self.latitude.join(","))?;
        writeln!(f, "* Longitude: {}", self.longitude.join(","))?;
        writeln!(f, "* Time: {}", self.time)?;
        writeln!(f, "* Status: {}", self.status)
    }
}

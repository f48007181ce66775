use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea0183_decoder, Sentence, SentenceHeader};

/// GSA - GPS DOP and active satellites
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsa_gps_dop_and_active_satellites>
///
/// ```text
///         1 2 3                      15 16  17
///         | | |                       | |   |
///  $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x,*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq, Sentence)]
#[nmea(sentence_type = Gsa)]
pub struct Gsa {
    #[nmea(header)]
    /// Talker code and sentence type
    pub header: SentenceHeader,
    #[nmea(field = 1)]
    /// Selection mode: `A` = automatic, `M` = manual
    pub mode: String,
    #[nmea(field = 2)]
    /// Fix type: 1 = no fix, 2 = 2D, 3 = 3D
    pub fix_type: String,
    #[nmea(fields(3, 15))]
    /// PRN numbers of the satellites used in the fix, empty for unused slots
    pub satellite_ids: heapless::Vec<String, 12>,
    #[nmea(field = 15)]
    /// Position Dilution of Precision
    pub pdop: String,
    #[nmea(field = 16)]
    /// Horizontal Dilution of Precision
    pub hdop: String,
    #[nmea(field = 17)]
    /// Vertical Dilution of Precision
    pub vdop: String,
    #[nmea(checksum)]
    /// Checksum text, not verified
    pub checksum: Option<String>,
}

impl Gsa {
    /// Returns the PRN numbers of the slots actually in use.
    pub fn used_satellite_ids(&self) -> impl Iterator<Item = &str> {
        self.satellite_ids
            .iter()
            .map(String::as_str)
            .filter(|id| !id.is_empty())
    }
}

impl fmt::Display for Gsa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::write_header(f, &self.header)?;
        writeln!(f, "* Mode: {}", self.mode)?;
        writeln!(f, "* Fix: {}", self.fix_type)?;
        writeln!(f, "* Satellites: {}", self.satellite_ids.join(","))?;
        writeln!(f, "* PDOP: {}", self.pdop)?;
        writeln!(f, "* HDOP: {}", self.hdop)?;
        writeln!(f, "* VDOP: {}", self.vdop)?;
        super::write_checksum(f, self.checksum.as_deref())
    }
}

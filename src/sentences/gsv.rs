use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea0183_decoder, Sentence, SentenceHeader};

/// GSV - Satellites in View
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsv_satellites_in_view>
///
/// ```text
///         1 2 3 4 5 6 7     n
///         | | | | | | |     |
///  $--GSV,x,x,x,x,x,x,x,...,x*hh<CR><LF>
/// ```
///
/// A receiver sends up to three GSV sentences per cycle. Only the first
/// satellite block of each sentence is read.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq, Sentence)]
#[nmea(sentence_type = Gsv)]
pub struct Gsv {
    #[nmea(header)]
    /// Talker code and sentence type
    pub header: SentenceHeader,
    #[nmea(field = 1)]
    /// Total number of GSV sentences in this group
    pub total_frames: String,
    #[nmea(field = 2)]
    /// Number of this sentence within the group
    pub frame_number: String,
    #[nmea(field = 3)]
    /// Total number of satellites in view
    pub satellite_count: String,
    #[nmea(field = 4)]
    /// PRN number of the first satellite
    pub first_satellite_id: String,
    #[nmea(field = 5)]
    /// Elevation of the first satellite in degrees
    pub elevation: String,
    #[nmea(field = 6)]
    /// Azimuth of the first satellite in degrees
    pub azimuth: String,
    #[nmea(field = 7)]
    /// Signal strength (SNR) of the first satellite in dB
    pub signal_strength: String,
    #[nmea(checksum)]
    /// Checksum text, not verified
    pub checksum: Option<String>,
}

impl fmt::Display for Gsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::write_header(f, &self.header)?;
        writeln!(f, "* Total Frames: {}", self.total_frames)?;
        writeln!(f, "* Current Frame: {}", self.frame_number)?;
        writeln!(f, "* Satellites: {}", self.satellite_count)?;
        writeln!(f, "* First Satellite ID: {}", self.first_satellite_id)?;
        writeln!(f, "* Elevation: {}°", self.elevation)?;
        writeln!(f, "* Azimuth: {}°", self.azimuth)?;
        writeln!(f, "* Signal Strength: {}", self.signal_strength)?;
        super::write_checksum(f, self.checksum.as_deref())
    }
}

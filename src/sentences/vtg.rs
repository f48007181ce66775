use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea0183_decoder, Sentence, SentenceHeader};

/// VTG - Track made good and Ground speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
///
/// ```text
///          1  2  3  4  5  6  7  8
///          |  |  |  |  |  |  |  |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K*hh<CR><LF>
/// ```
///
/// Every value is read together with its unit letter. The checksum is not
/// recorded for this sentence.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq, Sentence)]
#[nmea(sentence_type = Vtg)]
pub struct Vtg {
    #[nmea(header)]
    /// Talker code and sentence type
    pub header: SentenceHeader,
    #[nmea(fields(1, 3))]
    /// Course over ground in degrees true, unit `T`
    pub true_track: [String; 2],
    #[nmea(fields(3, 5))]
    /// Course over ground in degrees magnetic, unit `M`
    pub magnetic_track: [String; 2],
    #[nmea(fields(5, 7))]
    /// Speed over ground in knots, unit `N`
    pub speed_knots: [String; 2],
    #[nmea(fields(7, 9))]
    /// Speed over ground in km/h, unit `K`
    pub speed_kmh: [String; 2],
}

impl fmt::Display for Vtg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::write_header(f, &self.header)?;
        writeln!(f, "* Track Degrees: {}", self.true_track.join(","))?;
        writeln!(f, "* Track Magnetic: {}", self.magnetic_track.join(","))?;
        writeln!(f, "* Speed Knots: {}", self.speed_knots.join(","))?;
        writeln!(f, "* Speed Km/h: {}", self.speed_kmh.join(","))
    }
}

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea0183_decoder, Sentence, SentenceHeader};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         1         2 3       4 5        6  7   8   9    10 11
///         |         | |       | |        |  |   |   |    |  |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq, Sentence)]
#[nmea(sentence_type = Rmc)]
pub struct Rmc {
    #[nmea(header)]
    /// Talker code and sentence type
    pub header: SentenceHeader,
    #[nmea(field = 1)]
    /// Fix time in UTC, `hhmmss`
    pub hours: String,
    #[nmea(field = 2)]
    /// Receiver warning: `A` = OK, `V` = warning
    pub alert: String,
    #[nmea(fields(3, 5))]
    /// Latitude and its hemisphere (`N` or `S`)
    pub latitude: [String; 2],
    #[nmea(fields(5, 7))]
    /// Longitude and its hemisphere (`E` or `W`)
    pub longitude: [String; 2],
    #[nmea(field = 7)]
    /// Speed over ground in knots
    pub speed: String,
    #[nmea(field = 8)]
    /// Track angle in degrees true
    pub track: String,
    #[nmea(field = 9)]
    /// Fix date, `ddmmyy`
    pub date: String,
    #[nmea(fields(10, 12))]
    /// Magnetic variation in degrees and its direction (`E` or `W`)
    pub magnetic: [String; 2],
    #[nmea(checksum)]
    /// Checksum text, not verified
    pub checksum: Option<String>,
}

impl fmt::Display for Rmc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::write_header(f, &self.header)?;
        writeln!(f, "* Hours: {}", self.hours)?;
        writeln!(f, "* Alert: {}", self.alert)?;
        writeln!(f, "* Latitude: {}", self.latitude.join(","))?;
        writeln!(f, "* Longitude: {}", self.longitude.join(","))?;
        writeln!(f, "* Speed: {}", self.speed)?;
        writeln!(f, "* Track: {}", self.track)?;
        writeln!(f, "* Date: {}", self.date)?;
        writeln!(f, "* Magnetic: {}", self.magnetic.join(","))?;
        super::write_checksum(f, self.checksum.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, SentenceType};

    #[test]
    fn test_rmc_parsing() {
        let rmc =
            Rmc::decode("$GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E*68")
                .unwrap();

        assert_eq!(rmc.hours, "225446");
        assert_eq!(rmc.alert, "A");
        assert_eq!(rmc.latitude, ["4916.45", "N"]);
        assert_eq!(rmc.longitude, ["12311.12", "W"]);
        assert_eq!(rmc.speed, "000.5");
        assert_eq!(rmc.track, "054.7");
        assert_eq!(rmc.date, "191194");
        assert_eq!(rmc.magnetic, ["020.3", "E"]);
        assert_eq!(rmc.checksum.as_deref(), Some("68"));
    }

    #[test]
    fn test_rmc_wrong_type() {
        let result = Rmc::decode("$GPGGA,123519,4807.038,N,01131.324,E,1,08,545.4,M,46.9,M,,*42");
        assert_eq!(
            result,
            Err(Error::UnexpectedSentence {
                expected: SentenceType::Rmc,
                found: SentenceType::Gga,
            })
        );
    }

    #[test]
    fn test_rmc_cases() {
        let cases = [
            "$GPRMC,123519,A,4807.038,N,01131.000,E,0.20,0.83,230394,004.2,W,A",
            "$GPRMC,092725.00,A,4717.113,N,00833.915,E,0.0,0.0,010190,,,A",
            "$GPRMC,235959,V,0000.000,N,00000.000,W,10.5,180.0,311299,,",
        ];

        for &input in &cases {
            let result = Rmc::decode(input);
            assert!(result.is_ok(), "Failed: {input:?}\n\t{result:?}");
        }

        let result = Rmc::decode("$GPRMC,235959,V,0000.000,N,00000.000,W,10.5,180.0,311299");
        assert!(result.is_err(), "{result:?}");
    }
}

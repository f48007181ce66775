use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea0183_decoder, Sentence, SentenceHeader};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
///
/// Fields are read at fixed positions of the sentence, the header field being
/// position 0. The horizontal dilution, the geoidal separation and the DGPS
/// fields are not read.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq, Sentence)]
#[nmea(sentence_type = Gga)]
pub struct Gga {
    #[nmea(header)]
    /// Talker code and sentence type
    pub header: SentenceHeader,
    #[nmea(field = 1)]
    /// Fix time in UTC, `hhmmss`
    pub time: String,
    #[nmea(fields(2, 4))]
    /// Latitude and its hemisphere (`N` or `S`)
    pub latitude: [String; 2],
    #[nmea(fields(4, 6))]
    /// Longitude and its hemisphere (`E` or `W`)
    pub longitude: [String; 2],
    #[nmea(field = 6)]
    /// Fix quality: 0 = invalid, 1 = GPS fix, 2 = DGPS fix
    pub quality: String,
    #[nmea(field = 7)]
    /// Number of satellites being tracked
    pub satellites: String,
    #[nmea(fields(8, 10))]
    /// Altitude above mean sea level and its unit
    pub altitude: [String; 2],
    #[nmea(checksum)]
    /// Checksum text, not verified
    pub checksum: Option<String>,
}

impl fmt::Display for Gga {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::write_header(f, &self.header)?;
        writeln!(f, "* Time: {}", self.time)?;
        writeln!(f, "* Latitude: {}", self.latitude.join(","))?;
        writeln!(f, "* Longitude: {}", self.longitude.join(","))?;
        writeln!(f, "* Quality: {}", self.quality)?;
        writeln!(f, "* Satellites: {}", self.satellites)?;
        writeln!(f, "* Altitude: {}", self.altitude.join(","))?;
        super::write_checksum(f, self.checksum.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, SentenceType};

    #[test]
    fn test_gga_parsing() {
        let gga = Gga::decode("$GPGGA,123519,4807.038,N,01131.324,E,1,08,545.4,M,46.9,M,,*42")
            .unwrap();

        assert_eq!(gga.header.receiver, "GP");
        assert_eq!(gga.header.sentence_type, "GGA");
        assert_eq!(gga.time, "123519");
        assert_eq!(gga.latitude, ["4807.038", "N"]);
        assert_eq!(gga.longitude, ["01131.324", "E"]);
        assert_eq!(gga.quality, "1");
        assert_eq!(gga.satellites, "08");
        assert_eq!(gga.altitude, ["545.4", "M"]);
        assert_eq!(gga.checksum.as_deref(), Some("42"));
    }

    #[test]
    fn test_gga_empty_fields() {
        let cases = [
            "$GPGGA,,,,,,0,00,,,",
            "$GPGGA,,,,,,0,00,,,*66",
            "$GNGGA,001043.00,4404.14036,N,12118.85961,W,1,12,0.98,1113.0,M,-21.3,M,,",
        ];

        for &input in &cases {
            let result = Gga::decode(input);
            assert!(result.is_ok(), "Failed: {input:?}\n\t{result:?}");
        }

        let gga = Gga::decode("$GPGGA,,,,,,0,00,,,").unwrap();
        assert_eq!(gga.latitude, ["", ""]);
        assert_eq!(gga.checksum, None);
    }

    #[test]
    fn test_gga_truncated() {
        let cases = ["$GPGGA", "$GPGGA,123519", "$GPGGA,123519,4807.038,N,01131.324,E,1,08,545.4"];

        for &input in &cases {
            let result = Gga::decode(input);
            assert!(
                matches!(
                    result,
                    Err(Error::Truncated {
                        sentence_type: SentenceType::Gga,
                        expected: 10,
                        ..
                    })
                ),
                "Failed: {input:?}\n\t{result:?}"
            );
        }
    }

    #[test]
    fn test_gga_display() {
        let gga = Gga::decode("$GPGGA,123519,4807.038,N,01131.324,E,1,08,545.4,M,46.9,M,,*42")
            .unwrap();

        assert_eq!(
            gga.to_string(),
            "* Receiver: GP\n\
             * Type: GGA\n\
             * Time: 123519\n\
             * Latitude: 4807.038,N\n\
             * Longitude: 01131.324,E\n\
             * Quality: 1\n\
             * Satellites: 08\n\
             * Altitude: 545.4,M\n\
             * Checksum: 42\n"
        );
    }
}

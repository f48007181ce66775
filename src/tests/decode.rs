use crate::{
    Error, ErrorKind, Gga, Gll, Gsa, Gsv, NmeaSentence, Rmc, Sentence, SentenceType, Vtg,
    decode_any,
};

const GGA: &str = "$GPGGA,123519,4807.038,N,01131.324,E,1,08,545.4,M,46.9,M,,*42";
const GLL: &str = "$GPGLL,4807.038,N,01131.324,E,123519,1";
const GSA: &str = "$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39";
const GSV: &str = "$GPGSV,2,1,08,01,40,083,46*75";
const VTG: &str = "$GPVTG,054.7,T,034.4,M,005.5,N,010.3,K";
const RMC: &str = "$GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E*68";

const SENTENCES: [(SentenceType, &str); 6] = [
    (SentenceType::Gga, GGA),
    (SentenceType::Gll, GLL),
    (SentenceType::Gsa, GSA),
    (SentenceType::Gsv, GSV),
    (SentenceType::Vtg, VTG),
    (SentenceType::Rmc, RMC),
];

#[test]
fn test_dispatch_gga() {
    let Some(NmeaSentence::Gga(gga)) = decode_any(GGA).unwrap() else {
        panic!("Expected a GGA sentence");
    };

    assert_eq!(gga.time, "123519");
    assert_eq!(gga.latitude, ["4807.038", "N"]);
    assert_eq!(gga.longitude, ["01131.324", "E"]);
    assert_eq!(gga.quality, "1");
    assert_eq!(gga.satellites, "08");
    assert_eq!(gga.altitude, ["545.4", "M"]);
    assert_eq!(gga.checksum.as_deref(), Some("42"));
}

#[test]
fn test_dispatch_gll() {
    let Some(NmeaSentence::Gll(gll)) = decode_any(GLL).unwrap() else {
        panic!("Expected a GLL sentence");
    };

    assert_eq!(gll.latitude, ["4807.038", "N"]);
    assert_eq!(gll.longitude, ["01131.324", "E"]);
    assert_eq!(gll.time, "123519");
    assert_eq!(gll.status, "1");
}

#[test]
fn test_dispatch_rmc() {
    let Some(NmeaSentence::Rmc(rmc)) = decode_any(RMC).unwrap() else {
        panic!("Expected an RMC sentence");
    };

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
fn test_dispatch_every_type() {
    for (sentence_type, input) in SENTENCES {
        let result = decode_any(input);
        assert!(
            matches!(result, Ok(Some(ref sentence)) if sentence.sentence_type() == sentence_type),
            "Failed: {input:?}\n\t{result:?}"
        );

        let sentence = result.unwrap().unwrap();
        assert_eq!(sentence.header().receiver, "GP");
        assert_eq!(sentence.header().sentence_type, sentence_type.as_str());
    }
}

#[test]
fn test_dispatch_matches_direct_decoders() {
    assert_eq!(decode_any(GGA), Ok(Some(Gga::decode(GGA).unwrap().into())));
    assert_eq!(decode_any(GLL), Ok(Some(Gll::decode(GLL).unwrap().into())));
    assert_eq!(decode_any(GSA), Ok(Some(Gsa::decode(GSA).unwrap().into())));
    assert_eq!(decode_any(GSV), Ok(Some(Gsv::decode(GSV).unwrap().into())));
    assert_eq!(decode_any(VTG), Ok(Some(Vtg::decode(VTG).unwrap().into())));
    assert_eq!(decode_any(RMC), Ok(Some(Rmc::decode(RMC).unwrap().into())));
}

#[test]
fn test_decode_is_idempotent() {
    for (_, input) in SENTENCES {
        assert_eq!(decode_any(input), decode_any(input), "Failed: {input:?}");
    }
}

#[test]
fn test_dispatch_unsupported_type() {
    let cases = [
        "$GPZDA,123519,04,07,2025,,",
        "$GPDBT,12.34,f,3.76,M,2.05,F*3A",
        "$XXXXX",
        "$GPgga,123519",
    ];

    for &input in &cases {
        let result = decode_any(input);
        assert_eq!(result, Ok(None), "Failed: {input:?}");
    }
}

#[test]
fn test_dispatch_format_errors() {
    let cases = [
        ("", Error::MissingStartDelimiter),
        ("GPGGA,123519", Error::MissingStartDelimiter),
        ("$GPG", Error::ShortHeader("GPG".to_string())),
        (
            "$GPRMC,225446,A",
            Error::Truncated {
                sentence_type: SentenceType::Rmc,
                expected: 12,
                found: 3,
            },
        ),
    ];

    for (input, expected) in cases {
        let result = decode_any(input);
        assert_eq!(result, Err(expected), "Failed: {input:?}");
    }
}

#[test]
fn test_checksum_by_type() {
    let checksums = [
        (GGA, Some("42")),
        (GLL, None),
        (GSA, Some("39")),
        (GSV, Some("75")),
        (VTG, None),
        (RMC, Some("68")),
        ("$GPVTG,054.7,T,034.4,M,005.5,N,010.3,K*48", None),
    ];

    for (input, checksum) in checksums {
        let sentence = decode_any(input).unwrap().unwrap();
        assert_eq!(sentence.checksum(), checksum, "Failed: {input:?}");
    }
}

#[test]
fn test_decoder_type_check() {
    fn check<T: Sentence + std::fmt::Debug>() {
        for (sentence_type, input) in SENTENCES {
            let result = T::decode(input);

            if sentence_type == T::SENTENCE_TYPE {
                assert!(result.is_ok(), "Failed: {input:?}\n\t{result:?}");
            } else {
                let error = result.unwrap_err();
                assert_eq!(error.kind(), ErrorKind::Type, "Failed: {input:?}");
                assert_eq!(
                    error,
                    Error::UnexpectedSentence {
                        expected: T::SENTENCE_TYPE,
                        found: sentence_type,
                    }
                );
            }
        }

        let result = T::decode("$GPZDA,123519,04,07,2025,,");
        assert_eq!(
            result.unwrap_err(),
            Error::UnsupportedSentence("ZDA".to_string())
        );

        let result = T::decode("GPGGA,123519");
        assert_eq!(result.unwrap_err().kind(), ErrorKind::Format);
    }

    check::<Gga>();
    check::<Gll>();
    check::<Gsa>();
    check::<Gsv>();
    check::<Vtg>();
    check::<Rmc>();
}

#[test]
fn test_display() {
    let sentence = decode_any(GSV).unwrap().unwrap();

    assert_eq!(
        sentence.to_string(),
        "* Receiver: GP\n\
         * Type: GSV\n\
         * Total Frames: 2\n\
         * Current Frame: 1\n\
         * Satellites: 08\n\
         * First Satellite ID: 01\n\
         * Elevation: 40°\n\
         * Azimuth: 083°\n\
         * Signal Strength: 46\n\
         * Checksum: 75\n"
    );

    let sentence = decode_any(VTG).unwrap().unwrap();
    assert!(sentence.to_string().ends_with("* Speed Km/h: 010.3,K\n"));
}

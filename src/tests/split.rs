use crate::{Error, Fields, SentenceType, checksum, header, split};

#[test]
fn test_split_is_checksum_agnostic() {
    let with_checksum = split("$GPGGA,1,2*42").unwrap();
    let without_checksum = split("$GPGGA,1,2").unwrap();

    assert_eq!(with_checksum, ["GPGGA", "1", "2"]);
    assert_eq!(with_checksum, without_checksum);
}

#[test]
fn test_split_keeps_empty_fields() {
    assert_eq!(split("$GPGGA,,").unwrap(), ["GPGGA", "", ""]);
    assert_eq!(split("$").unwrap(), [""]);
    assert_eq!(split("$*42").unwrap(), [""]);

    let fields = split("$GPGGA,123519,4807.038,N,01131.324,E,1,08,545.4,M,46.9,M,,*42").unwrap();
    assert_eq!(fields.len(), 14);
    assert_eq!(fields.get(11), Some("M"));
    assert_eq!(fields.get(12), Some(""));
    assert_eq!(fields.get(13), Some(""));
    assert_eq!(fields.get(14), None);
}

#[test]
fn test_split_removes_delimiters() {
    // Only the text after the last '*' is dropped
    assert_eq!(split("$GPGGA,1*2,3*42").unwrap(), ["GPGGA", "12", "3"]);
    assert_eq!(split("$GP$GGA,1").unwrap(), ["GPGGA", "1"]);
    assert_eq!(split("$GPGGA,1,2*").unwrap(), ["GPGGA", "1", "2"]);
}

#[test]
fn test_split_requires_start_delimiter() {
    let cases = ["", "GPGGA,1,2", " $GPGGA,1,2", "!AIVDM,1,1,,A,13aEOK?P00PD2wVMdLDRhgvL289?,0*26"];

    for &input in &cases {
        let result = split(input);
        assert_eq!(result, Err(Error::MissingStartDelimiter), "Failed: {input:?}");
    }
}

#[test]
fn test_header() {
    let fields: Fields = ["GPGGA", "..."].into_iter().collect();
    let header = header(&fields).unwrap();

    assert_eq!(header.receiver, "GP");
    assert_eq!(header.sentence_type, "GGA");
    assert_eq!(header.known_type(), Some(SentenceType::Gga));
    assert_eq!(header.receiver_description(), Some("Global Positioning System"));
    assert_eq!(header.to_string(), "GPGGA");
}

#[test]
fn test_header_unknown_codes() {
    let header = header(&split("$XXZZZ,1").unwrap()).unwrap();

    assert_eq!(header.receiver, "XX");
    assert_eq!(header.sentence_type, "ZZZ");
    assert_eq!(header.known_type(), None);
    assert_eq!(header.receiver_description(), None);

    // Characters past the fifth are ignored
    let header = crate::header(&split("$IIGGAX,1").unwrap()).unwrap();
    assert_eq!(header.receiver, "II");
    assert_eq!(header.sentence_type, "GGA");
}

#[test]
fn test_header_too_short() {
    let cases = ["$", "$GP", "$GPGG", "$GPGG,A,3"];

    for &input in &cases {
        let fields = split(input).unwrap();
        let result = header(&fields);
        assert!(
            matches!(result, Err(Error::ShortHeader(_))),
            "Failed: {input:?}\n\t{result:?}"
        );
    }

    assert_eq!(
        header(&Fields::default()),
        Err(Error::ShortHeader(String::new()))
    );
}

#[test]
fn test_checksum() {
    assert_eq!(checksum("$GPGGA,1,2*42"), Some("42"));
    assert_eq!(checksum("$GPGGA,1*2,3*42"), Some("42"));
    assert_eq!(checksum("$GPGGA,1,2*"), Some(""));
    assert_eq!(checksum("$GPGGA,1,2"), None);
}

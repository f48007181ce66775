use nmea0183_decoder::{Decoder, Gga, LineEndingMode, NmeaSentence, Result, Sentence, decode_any};

fn print(result: Result<Option<NmeaSentence>>) {
    match result {
        Ok(Some(sentence)) => {
            println!("{sentence}");
        }
        Ok(None) => {
            println!("Unsupported sentence type, skipped\n");
        }
        Err(e) => {
            println!("{:?} error occurred: {}\n", e.kind(), e);
        }
    }
}

fn main() {
    let sentences = [
        "$GPGGA,123519,4807.038,N,01131.324,E,1,08,545.4,M,46.9,M,,*42",
        "$GPGLL,4807.038,N,01131.324,E,123519,1",
        "$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39",
        "$GPGSV,2,1,08,01,40,083,46*75",
        "$GPVTG,054.7,T,034.4,M,005.5,N,010.3,K",
        "$GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E*68",
    ];

    for sentence in sentences {
        print(decode_any(sentence));
    }

    print(decode_any("$GPZDA,123519,04,07,2025,,"));
    print(decode_any("GPGGA,123519"));
    print(decode_any("$GPRMC,225446,A"));

    match Gga::decode("$GPGLL,4807.038,N,01131.324,E,123519,1") {
        Ok(gga) => println!("{gga}"),
        Err(e) => println!("{:?} error occurred: {}\n", e.kind(), e),
    }

    let decoder = Decoder::builder()
        .line_ending_mode(LineEndingMode::Required)
        .build();
    print(decoder.decode_any("$GPGSV,2,1,08,01,40,083,46*75\r\n"));
    print(decoder.decode_any("$GPGSV,2,1,08,01,40,083,46*75"));
}

use proc_macro2::TokenStream;
use syn::{Data, DeriveInput, Error, Result};

use crate::generate::sentence::SentenceStruct;

mod sentence;

// Usage:
// #[derive(Sentence)]
// #[nmea(sentence_type = Gll)]
// pub struct Gll {
//     #[nmea(header)]
//     pub header: SentenceHeader,
//     #[nmea(fields(1, 3))]
//     pub latitude: [String; 2],
//     #[nmea(field = 5)]
//     pub time: String,
//     #[nmea(checksum)]
//     pub checksum: Option<String>,
// }

pub fn generate_sentence_impl(input: &DeriveInput) -> Result<TokenStream> {
    match &input.data {
        Data::Struct(datastruct) => SentenceStruct::from_datastruct(
            &input.ident,
            datastruct,
            &input.attrs,
            &input.generics,
        )?
        .generate_impl(),
        Data::Enum(_) => Err(Error::new(
            input.ident.span(),
            "nmea0183-decoder-derive: Enums not supported",
        )),
        Data::Union(_) => Err(Error::new(
            input.ident.span(),
            "nmea0183-decoder-derive: Unions not supported",
        )),
    }
}

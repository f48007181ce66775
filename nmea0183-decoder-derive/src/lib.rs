//! # A Rust procedural macro for fixed-position NMEA 0183 sentence decoders
//!
//! `nmea0183-decoder-derive` derives the `Sentence` trait of [`nmea0183-decoder`]
//! for plain structs. Each struct field names the position of the sentence
//! field it is read from, so a decoder is declared rather than written.
//!
//! It is not meant to be used on its own: the derive is re-exported by
//! [`nmea0183-decoder`] together with the trait it implements.
//!
//! [`nmea0183-decoder`]: https://crates.io/crates/nmea0183-decoder

use generate::generate_sentence_impl;
use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod config;
mod generate;
mod meta;
mod reader;

#[doc = include_str!("../README.md")]
#[proc_macro_derive(Sentence, attributes(nmea))]
pub fn derive_sentence(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate_sentence_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, DataStruct, Error, Fields, Generics, Ident, Result, spanned::Spanned};

use crate::{config::Config, meta, reader::Reader};

pub struct FieldReader {
    pub ident: Ident,
    pub reader: Reader,
}

pub struct SentenceStruct {
    pub name: Ident,
    pub config: Config,
    pub generics: Generics,
    pub readers: Vec<FieldReader>,
}

impl SentenceStruct {
    pub fn from_datastruct(
        name: &Ident,
        datastruct: &DataStruct,
        attributes: &[Attribute],
        generics: &Generics,
    ) -> Result<Self> {
        let attributes = meta::parse_top_level_attributes(attributes)?;
        let config = Config::from_meta_attributes(&attributes, name.span())?;

        let Fields::Named(fields) = &datastruct.fields else {
            return Err(Error::new(
                name.span(),
                "nmea0183-decoder-derive: Only structs with named fields are supported",
            ));
        };

        let mut readers = vec![];
        for field in &fields.named {
            let ident = field
                .ident
                .clone()
                .ok_or_else(|| Error::new(field.span(), "nmea0183-decoder-derive: Unnamed field"))?;
            let attributes = meta::parse_field_level_attributes(&field.attrs)?;

            let reader = attributes
                .iter()
                .find_map(Reader::from_attribute)
                .ok_or_else(|| {
                    Error::new(
                        field.span(),
                        "nmea0183-decoder-derive: Missing nmea attribute, expected `header`, `field`, `fields` or `checksum`",
                    )
                })?;

            readers.push(FieldReader { ident, reader });
        }

        let count = |wanted: &Reader| readers.iter().filter(|r| &r.reader == wanted).count();

        if count(&Reader::Header) != 1 {
            return Err(Error::new(
                name.span(),
                "nmea0183-decoder-derive: Exactly one field must carry the `header` attribute",
            ));
        }

        if count(&Reader::Checksum) > 1 {
            return Err(Error::new(
                name.span(),
                "nmea0183-decoder-derive: At most one field may carry the `checksum` attribute",
            ));
        }

        Ok(Self {
            name: name.clone(),
            config,
            generics: generics.clone(),
            readers,
        })
    }

    fn header_field(&self) -> Option<&Ident> {
        self.readers
            .iter()
            .find(|field| field.reader == Reader::Header)
            .map(|field| &field.ident)
    }

    /// Fields up to the last position read, header field included.
    fn field_count(&self) -> usize {
        self.readers
            .iter()
            .filter_map(|field| field.reader.end())
            .max()
            .unwrap_or(1)
    }

    pub fn generate_impl(&self) -> Result<TokenStream> {
        let name = &self.name;
        let frame = &self.config.frame_name;
        let sentence_type = &self.config.sentence_type;
        let field_count = self.field_count();
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        let header = self.header_field().ok_or_else(|| {
            Error::new(
                name.span(),
                "nmea0183-decoder-derive: Missing `header` attribute",
            )
        })?;

        let (idents, exprs): (Vec<_>, Vec<_>) = self
            .readers
            .iter()
            .map(|field| (&field.ident, field.reader.to_expr(frame)))
            .unzip();

        let impl_tokens = quote! {
            impl #impl_generics nmea0183_decoder::Sentence for #name #ty_generics #where_clause {
                const SENTENCE_TYPE: nmea0183_decoder::SentenceType =
                    nmea0183_decoder::SentenceType::#sentence_type;

                const FIELD_COUNT: usize = #field_count;

                fn header(&self) -> &nmea0183_decoder::SentenceHeader {
                    &self.#header
                }

                fn from_fields(
                    #frame: &nmea0183_decoder::Frame,
                ) -> nmea0183_decoder::Result<Self> {
                    Ok(Self {
                        #(#idents: #exprs,)*
                    })
                }
            }
        };

        Ok(impl_tokens)
    }
}

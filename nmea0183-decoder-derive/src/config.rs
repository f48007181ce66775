use proc_macro2::Span;
use syn::{Error, Ident, Result};

use crate::meta::{MetaArgument, MetaAttribute, MetaAttributeType};

#[derive(Clone)]
pub struct Config {
    pub frame_name: Ident,
    pub sentence_type: Ident,
}

impl Config {
    pub fn from_meta_attributes(attribute_list: &[MetaAttribute], span: Span) -> Result<Self> {
        let mut sentence_type = None;

        for meta in attribute_list {
            if let (MetaAttributeType::SentenceType, Some(MetaArgument::Variant(variant))) =
                (meta.r#type, meta.arg())
            {
                sentence_type = Some(variant.clone());
            }
        }

        let sentence_type = sentence_type.ok_or_else(|| {
            Error::new(
                span,
                "nmea0183-decoder-derive: Missing `#[nmea(sentence_type = ...)]` attribute",
            )
        })?;

        Ok(Self {
            frame_name: Ident::new("nmea_frame", Span::call_site()),
            sentence_type,
        })
    }
}

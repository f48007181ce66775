use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;

use crate::meta::{MetaArgument, MetaAttribute, MetaAttributeType};

/// Where a record field is read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reader {
    Checksum,
    Header,
    Range { start: usize, end: usize },
}

impl Reader {
    pub fn from_attribute(attribute: &MetaAttribute) -> Option<Self> {
        match (attribute.r#type, attribute.arg()) {
            (MetaAttributeType::Checksum, _) => Some(Self::Checksum),
            (MetaAttributeType::Header, _) => Some(Self::Header),
            (MetaAttributeType::Field, Some(MetaArgument::Position(position))) => {
                Some(Self::Range {
                    start: *position,
                    end: position + 1,
                })
            }
            (MetaAttributeType::Fields, Some(MetaArgument::Range(start, end))) => {
                Some(Self::Range {
                    start: *start,
                    end: *end,
                })
            }
            _ => None,
        }
    }

    /// One past the last field position read, if any.
    pub fn end(&self) -> Option<usize> {
        match self {
            Self::Range { end, .. } => Some(*end),
            _ => None,
        }
    }

    pub fn to_expr(&self, frame: &Ident) -> TokenStream {
        match self {
            Self::Checksum => quote! { #frame.checksum.clone() },
            Self::Header => quote! { #frame.header.clone() },
            Self::Range { start, end } => quote! {
                #frame.fields.value(#start, #end).ok_or_else(|| nmea0183_decoder::Error::Truncated {
                    sentence_type: <Self as nmea0183_decoder::Sentence>::SENTENCE_TYPE,
                    expected: <Self as nmea0183_decoder::Sentence>::FIELD_COUNT,
                    found: #frame.fields.len(),
                })?
            },
        }
    }
}

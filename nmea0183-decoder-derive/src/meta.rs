use std::{collections::HashSet, fmt::Display};

use proc_macro2::Span;
use syn::{
    Attribute, Error, Ident, Lit, LitInt, Result, Token, parenthesized,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    token::Paren,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum MetaAttributeType {
    Checksum,
    Field,
    Fields,
    Header,
    SentenceType,
}

impl MetaAttributeType {
    pub fn from_ident(ident: &Ident) -> Option<Self> {
        match ident.to_string().as_str() {
            "checksum" => Some(Self::Checksum),
            "field" => Some(Self::Field),
            "fields" => Some(Self::Fields),
            "header" => Some(Self::Header),
            "sentence_type" => Some(Self::SentenceType),
            _ => None,
        }
    }

    fn takes_argument(&self) -> bool {
        matches!(self, Self::Field | Self::Fields | Self::SentenceType)
    }
}

impl Display for MetaAttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Checksum => "checksum",
            Self::Field => "field",
            Self::Fields => "fields",
            Self::Header => "header",
            Self::SentenceType => "sentence_type",
        };
        write!(f, "{name}")
    }
}

#[derive(Clone, Debug)]
pub enum MetaArgument {
    /// A single field position
    Position(usize),
    /// A half-open range of field positions
    Range(usize, usize),
    /// A `SentenceType` variant
    Variant(Ident),
}

#[derive(Debug)]
pub struct MetaAttribute {
    pub r#type: MetaAttributeType,
    arg: Option<MetaArgument>,
    span: Span,
}

impl MetaAttribute {
    pub fn new(r#type: MetaAttributeType, arg: Option<MetaArgument>, span: Span) -> Self {
        Self { r#type, arg, span }
    }

    pub fn is_top_level(&self) -> bool {
        self.r#type == MetaAttributeType::SentenceType
    }

    pub fn is_field_level(&self) -> bool {
        !self.is_top_level()
    }

    pub fn arg(&self) -> Option<&MetaArgument> {
        self.arg.as_ref()
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

impl Parse for MetaAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let ident: Ident = input.parse()?;
        let attribute_type = MetaAttributeType::from_ident(&ident).ok_or_else(|| {
            Error::new(ident.span(), "nmea0183-decoder-derive: Unknown nmea attribute")
        })?;

        let arg = if attribute_type.takes_argument() {
            // read (value) or =value

            let arg = match attribute_type {
                MetaAttributeType::Field => {
                    let position: LitInt = parse_argument(input)?;
                    MetaArgument::Position(position.base10_parse()?)
                }
                MetaAttributeType::Fields => {
                    let FieldRange(start, end) = parse_argument(input)?;
                    MetaArgument::Range(start, end)
                }
                _ => MetaArgument::Variant(parse_argument(input)?),
            };
            Some(arg)
        } else {
            None
        };

        Ok(MetaAttribute::new(attribute_type, arg, ident.span()))
    }
}

impl Display for MetaAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.r#type)?;
        match &self.arg {
            Some(MetaArgument::Position(position)) => write!(f, " = {position}"),
            Some(MetaArgument::Range(start, end)) => write!(f, "({start}, {end})"),
            Some(MetaArgument::Variant(variant)) => write!(f, " = {variant}"),
            None => Ok(()),
        }
    }
}

/// `START, END` with `START < END`
struct FieldRange(usize, usize);

impl Parse for FieldRange {
    fn parse(input: ParseStream) -> Result<Self> {
        let start: LitInt = input.parse()?;
        let _: Token![,] = input.parse()?;
        let end: LitInt = input.parse()?;

        let (start_position, end_position) = (start.base10_parse()?, end.base10_parse()?);
        if start_position >= end_position {
            return Err(Error::new(
                end.span(),
                "nmea0183-decoder-derive: Field range end must be greater than its start",
            ));
        }

        Ok(FieldRange(start_position, end_position))
    }
}

#[derive(Debug)]
pub struct List<T: Parse>(pub Vec<T>);

impl<T: Parse> Parse for List<T> {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(List(
            Punctuated::<T, Token![,]>::parse_terminated(input)?
                .into_iter()
                .collect(),
        ))
    }
}

fn parse_argument<P: Parse>(input: ParseStream) -> Result<P> {
    if input.peek(Token![=]) {
        let _: Token![=] = input.parse()?;

        if let Ok(Lit::Str(string)) = input.fork().parse::<Lit>() {
            let _: Lit = input.parse()?;
            string.parse()
        } else {
            input.parse()
        }
    } else if input.peek(Paren) {
        let content;
        parenthesized!(content in input);
        content.parse()
    } else {
        Err(Error::new(
            input.span(),
            "nmea0183-decoder-derive: Expected '= <value>' or '(<value>)' for nmea attribute",
        ))
    }
}

fn parse_attribute_lists(attrs: &[Attribute]) -> Result<Vec<MetaAttribute>> {
    Ok(attrs
        .iter()
        .filter(|attr| attr.path().is_ident("nmea"))
        .map(|attr| attr.parse_args::<List<MetaAttribute>>())
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .flat_map(|list| list.0.into_iter())
        .collect())
}

pub fn parse_top_level_attributes(attrs: &[Attribute]) -> Result<Vec<MetaAttribute>> {
    let mut attributes_set = HashSet::new();

    parse_attribute_lists(attrs)?
        .into_iter()
        .map(|meta_attr| {
            if !meta_attr.is_top_level() {
                return Err(Error::new(
                    meta_attr.span(),
                    format!(
                        "nmea0183-decoder-derive: Attribute `{}` is not allowed at the top level",
                        meta_attr.r#type
                    ),
                ));
            }

            if !attributes_set.insert(meta_attr.r#type) {
                return Err(Error::new(
                    meta_attr.span(),
                    format!(
                        "nmea0183-decoder-derive: Duplicate nmea attribute `{}`",
                        meta_attr.r#type
                    ),
                ));
            }

            Ok(meta_attr)
        })
        .collect()
}

pub fn parse_field_level_attributes(attrs: &[Attribute]) -> Result<Vec<MetaAttribute>> {
    let mut first = None;

    parse_attribute_lists(attrs)?
        .into_iter()
        .map(|meta_attr| {
            if !meta_attr.is_field_level() {
                return Err(Error::new(
                    meta_attr.span(),
                    format!(
                        "nmea0183-decoder-derive: Attribute `{}` is not allowed at the field level",
                        meta_attr.r#type
                    ),
                ));
            }

            // A field is read from exactly one place.
            if let Some(previous) = first.replace(meta_attr.r#type) {
                return Err(Error::new(
                    meta_attr.span(),
                    format!(
                        "nmea0183-decoder-derive: Attribute `{}` cannot be used with `{previous}` attribute.",
                        meta_attr.r#type
                    ),
                ));
            }

            Ok(meta_attr)
        })
        .collect()
}

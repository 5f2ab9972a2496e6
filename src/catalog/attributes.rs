use std::ops::RangeInclusive;
use std::str::FromStr;

use thiserror::Error;

/// Hue, lightness and chroma as encoded in a RAL Design name.
///
/// The canonical token order is hue, then lightness, then chroma:
/// `"RAL 210 60 30"` is the color at hue angle 210, lightness 60, chroma 30.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesignAttributes {
    pub hue: u16,
    pub lightness: u8,
    pub chroma: u8,
}

impl DesignAttributes {
    /// Parse the `"RAL HHH LL CC"` naming scheme of the design catalog.
    pub(crate) fn parse(name: &str) -> Result<Self, AttributeParseError> {
        let rest = name
            .strip_prefix("RAL ")
            .ok_or(AttributeParseError::MissingPrefix)?;
        let tokens: Vec<&str> = rest.split_whitespace().collect();
        if tokens.len() != 3 {
            return Err(AttributeParseError::TokenCount(tokens.len()));
        }
        let hue: u16 = parse_token(tokens[0], "hue")?;
        if hue > 360 {
            return Err(AttributeParseError::BadToken {
                field: "hue",
                token: tokens[0].to_owned(),
            });
        }
        Ok(Self {
            hue,
            lightness: parse_token(tokens[1], "lightness")?,
            chroma: parse_token(tokens[2], "chroma")?,
        })
    }
}

fn parse_token<T: FromStr>(token: &str, field: &'static str) -> Result<T, AttributeParseError> {
    token.parse().map_err(|_| AttributeParseError::BadToken {
        field,
        token: token.to_owned(),
    })
}

/// Why a catalog name could not be parsed into [`DesignAttributes`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum AttributeParseError {
    #[error("name does not start with \"RAL \"")]
    MissingPrefix,
    #[error("expected 3 attribute tokens, found {0}")]
    TokenCount(usize),
    #[error("{field} token {token:?} is not valid")]
    BadToken { field: &'static str, token: String },
}

/// Inclusive bounds applied to parsed design attributes.
///
/// Unset fields match everything. Bounds never wrap, so a hue interval
/// crossing the 0 degree mark needs two separate queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeFilter {
    pub hue: Option<RangeInclusive<u16>>,
    pub lightness: Option<RangeInclusive<u8>>,
    pub chroma: Option<RangeInclusive<u8>>,
}

impl AttributeFilter {
    /// True when no bound is set at all.
    pub fn is_empty(&self) -> bool {
        self.hue.is_none() && self.lightness.is_none() && self.chroma.is_none()
    }

    pub(crate) fn matches(&self, attributes: &DesignAttributes) -> bool {
        self.hue
            .as_ref()
            .is_none_or(|range| range.contains(&attributes.hue))
            && self
                .lightness
                .as_ref()
                .is_none_or(|range| range.contains(&attributes.lightness))
            && self
                .chroma
                .as_ref()
                .is_none_or(|range| range.contains(&attributes.chroma))
    }
}

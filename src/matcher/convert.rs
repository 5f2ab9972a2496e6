use palette::white_point::D65;
use palette::{FromColor, Srgb};

use crate::{Error, Result};

/// CIE L*a*b* against the D65 reference white, f64 components throughout.
pub type Lab = palette::Lab<D65, f64>;
/// Cylindrical form of [`Lab`]: lightness, chroma and a hue angle.
pub type Lch = palette::Lch<D65, f64>;

/// A color's Lab coordinates together with their polar LCH form.
///
/// Both forms are derived once so either difference formula can run
/// without converting again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorCoordinates {
    pub lab: Lab,
    pub lch: Lch,
}

impl ColorCoordinates {
    pub fn from_lab(lab: Lab) -> Self {
        Self {
            lab,
            lch: lab_to_lch(lab),
        }
    }

    pub fn from_hex(input: &str) -> Result<Self> {
        Ok(Self::from_lab(hex_to_lab(input)?))
    }
}

/// Parse a hex color string into an 8-bit sRGB triplet.
///
/// A leading `#` is optional. Anything but exactly six hex digits is
/// rejected, including the CSS three-digit shorthand.
pub fn parse_hex(input: &str) -> Result<Srgb<u8>> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    hex_digits_to_srgb(digits).ok_or_else(|| {
        let count = digits.chars().count();
        Error::InvalidColorFormat {
            input: input.to_owned(),
            reason: if count == 6 {
                "contains non-hexadecimal characters".to_owned()
            } else {
                format!("expected 6 hex digits, found {count}")
            },
        }
    })
}

/// Decode exactly six hex digits into an sRGB triplet, `None` otherwise.
pub(crate) fn hex_digits_to_srgb(digits: &str) -> Option<Srgb<u8>> {
    // Checked digit by digit: from_str_radix tolerates a leading sign.
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let red = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let green = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let blue = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Srgb::new(red, green, blue))
}

/// Convert an 8-bit sRGB triplet to Lab.
///
/// Goes through the standard chain: sRGB gamma decoding, linear RGB to
/// XYZ, XYZ to Lab against the D65 white.
pub fn srgb_to_lab(srgb: Srgb<u8>) -> Lab {
    Lab::from_color(srgb.into_format::<f64>())
}

/// Parse a hex color and convert it to Lab in one step.
pub fn hex_to_lab(input: &str) -> Result<Lab> {
    Ok(srgb_to_lab(parse_hex(input)?))
}

/// Reparametrize Lab into its polar LCH form.
pub fn lab_to_lch(lab: Lab) -> Lch {
    Lch::from_color(lab)
}

/// Hue angle of an LCH color normalized into [0, 360) degrees.
pub(crate) fn hue_degrees(lch: &Lch) -> f64 {
    lch.hue.into_positive_degrees()
}

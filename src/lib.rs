pub use self::error::{Error, Result};

use std::ffi::OsString;
use std::ops::RangeInclusive;

use clap::Parser;

use catalog::{AttributeFilter, Catalog, PaletteId};
use matcher::{DifferenceMetric, MatchRequest};

mod arg_validators;
pub mod catalog;
mod error;
pub mod matcher;
mod render;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Colors to match, as hex triplets like '#2e2f33'
    #[arg(required(true))]
    colors: Vec<String>,
    /// Palette to match against
    #[arg(short, long, value_enum, default_value = "classic")]
    palette: PaletteId,
    /// Number of closest colors to show
    #[arg(short, long, default_value_t = 9, value_parser = arg_validators::validate_match_limit)]
    matches: usize,
    /// Color difference formula
    #[arg(long, value_enum, default_value = "ciede2000")]
    metric: DifferenceMetric,
    /// Only consider design colors with a name hue in this range
    #[arg(long, value_name = "MIN:MAX", value_parser = arg_validators::validate_hue_range)]
    hue: Option<RangeInclusive<u16>>,
    /// Only consider design colors with a name lightness in this range
    #[arg(long, value_name = "MIN:MAX", value_parser = arg_validators::validate_level_range)]
    lightness: Option<RangeInclusive<u8>>,
    /// Only consider design colors with a name chroma in this range
    #[arg(long, value_name = "MIN:MAX", value_parser = arg_validators::validate_level_range)]
    chroma: Option<RangeInclusive<u8>>,
    /// Print machine-readable JSON instead of the swatch table
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl Args {
    fn attribute_filter(&self) -> Option<AttributeFilter> {
        let filter = AttributeFilter {
            hue: self.hue.clone(),
            lightness: self.lightness.clone(),
            chroma: self.chroma.clone(),
        };
        (!filter.is_empty()).then_some(filter)
    }
}

pub fn run<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = Args::parse_from(args);
    let filter = args.attribute_filter();
    let catalog = Catalog::load(args.palette)?;
    if filter.is_some() && !catalog.supports_attributes() {
        return Err(Error::FilterNotSupported {
            palette: args.palette,
        });
    }
    for color in &args.colors {
        let request = MatchRequest {
            hex_color: color,
            limit: args.matches,
            metric: args.metric,
            filter: filter.as_ref(),
        };
        let matches = matcher::find_closest_colors(&catalog, &request)?;
        if args.json {
            render::print_matches_json(color, args.palette, args.metric, &matches)?;
        } else {
            render::print_matches(color, args.palette, args.metric, &matches)?;
            println!();
        }
    }
    Ok(())
}

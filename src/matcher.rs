pub use self::convert::{
    ColorCoordinates, Lab, Lch, hex_to_lab, lab_to_lch, parse_hex, srgb_to_lab,
};
pub(crate) use self::convert::hex_digits_to_srgb;
pub use self::metric::DifferenceMetric;
pub use self::rank::rank;

use serde::Serialize;

use crate::Result;
use crate::catalog::{AttributeFilter, Catalog};

mod convert;
mod metric;
mod rank;

/// One matching query as the caller hands it over.
#[derive(Debug, Clone)]
pub struct MatchRequest<'a> {
    /// Query color as a hex triplet, leading `#` optional.
    pub hex_color: &'a str,
    /// How many matches to return at most.
    pub limit: usize,
    /// Difference formula used for ranking.
    pub metric: DifferenceMetric,
    /// Bounds on design name attributes, if any.
    pub filter: Option<&'a AttributeFilter>,
}

/// A catalog entry scored against a query color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorMatch {
    pub name: String,
    pub hex: String,
    pub difference: f64,
}

/// Rank `catalog` against the query color, closest first.
///
/// The only failure mode is a malformed query color. A filter that
/// matches no entry produces an empty vec, not an error.
pub fn find_closest_colors(
    catalog: &Catalog,
    request: &MatchRequest<'_>,
) -> Result<Vec<ColorMatch>> {
    let query = ColorCoordinates::from_hex(request.hex_color)?;
    Ok(rank(
        &query,
        catalog,
        request.metric,
        request.limit,
        request.filter,
    ))
}

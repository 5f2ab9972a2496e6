use itertools::Itertools;

use crate::catalog::{AttributeFilter, Catalog};

use super::ColorMatch;
use super::convert::ColorCoordinates;
use super::metric::DifferenceMetric;

/// Scan the whole catalog once and keep the `limit` entries closest to
/// `query`.
///
/// Scores come from the coordinates precomputed at catalog load. The sort
/// is stable, so entries at the same difference keep their catalog order.
/// With an active filter, entries without parsed attributes are skipped.
pub fn rank(
    query: &ColorCoordinates,
    catalog: &Catalog,
    metric: DifferenceMetric,
    limit: usize,
    filter: Option<&AttributeFilter>,
) -> Vec<ColorMatch> {
    catalog
        .entries()
        .iter()
        .filter(|entry| match (filter, entry.attributes()) {
            (None, _) => true,
            (Some(filter), Some(attributes)) => filter.matches(attributes),
            (Some(_), None) => false,
        })
        .map(|entry| (metric.difference(query, entry.coordinates()), entry))
        .sorted_by(|(first, _), (second, _)| first.total_cmp(second))
        .take(limit)
        .map(|(difference, entry)| ColorMatch {
            name: entry.name().to_owned(),
            hex: entry.hex().to_owned(),
            difference,
        })
        .collect()
}

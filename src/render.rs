use owo_colors::{OwoColorize, Stream};
use palette::Srgb;
use serde::Serialize;

use crate::Result;
use crate::catalog::PaletteId;
use crate::matcher::{ColorMatch, DifferenceMetric, parse_hex};

const SWATCH: &str = "    ";

/// Print one query's matches as an aligned swatch table.
pub(crate) fn print_matches(
    hex_color: &str,
    palette: PaletteId,
    metric: DifferenceMetric,
    matches: &[ColorMatch],
) -> Result<()> {
    let query = parse_hex(hex_color)?;
    println!(
        "{} {}  {}",
        swatch(query),
        with_hash(hex_color),
        format!("({palette}, {metric})").dimmed()
    );

    if matches.is_empty() {
        println!("  {}", "no catalog entries match the given filters".dimmed());
        return Ok(());
    }

    let name_width = matches.iter().map(|m| m.name.len()).max().unwrap_or(0);
    for m in matches {
        let entry_color = parse_hex(m.hex.as_str())?;
        println!(
            "{} {:<name_width$}  #{}  {:>8.3}",
            swatch(entry_color),
            m.name,
            m.hex,
            m.difference
        );
    }
    Ok(())
}

/// Print one query's matches as a pretty-printed JSON document.
pub(crate) fn print_matches_json(
    hex_color: &str,
    palette: PaletteId,
    metric: DifferenceMetric,
    matches: &[ColorMatch],
) -> Result<()> {
    let report = MatchReport {
        query: hex_color,
        palette: palette.to_string(),
        metric: metric.to_string(),
        matches,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[derive(Serialize)]
struct MatchReport<'a> {
    query: &'a str,
    palette: String,
    metric: String,
    matches: &'a [ColorMatch],
}

/// Background-colored blank cell, plain spaces on terminals without color.
fn swatch(color: Srgb<u8>) -> String {
    SWATCH
        .if_supports_color(Stream::Stdout, |text| {
            text.on_truecolor(color.red, color.green, color.blue)
        })
        .to_string()
}

fn with_hash(hex: &str) -> String {
    if hex.starts_with('#') {
        hex.to_owned()
    } else {
        format!("#{hex}")
    }
}

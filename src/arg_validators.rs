use std::fmt::Display;
use std::ops::RangeInclusive;
use std::str::FromStr;

pub(crate) fn validate_match_limit(value: &str) -> Result<usize, String> {
    let limit = value
        .parse::<usize>()
        .map_err(|_| "Not a whole number".to_string())?;
    if limit == 0 {
        return Err("Number must be at least 1".to_string());
    }
    Ok(limit)
}

pub(crate) fn validate_hue_range(value: &str) -> Result<RangeInclusive<u16>, String> {
    parse_range(value, 360)
}

pub(crate) fn validate_level_range(value: &str) -> Result<RangeInclusive<u8>, String> {
    parse_range(value, 100)
}

/// Parse `MIN:MAX` into an inclusive range capped at `max`.
fn parse_range<T>(value: &str, max: T) -> Result<RangeInclusive<T>, String>
where
    T: FromStr + PartialOrd + Display + Copy,
{
    let Some((low, high)) = value.split_once(':') else {
        return Err("Expected a range like MIN:MAX".to_string());
    };
    let low = low
        .trim()
        .parse::<T>()
        .map_err(|_| format!("Lower bound {low:?} is not a valid number"))?;
    let high = high
        .trim()
        .parse::<T>()
        .map_err(|_| format!("Upper bound {high:?} is not a valid number"))?;
    if low > high {
        return Err("Lower bound must not exceed upper bound".to_string());
    }
    if high > max {
        return Err(format!("Upper bound must be at most {max}"));
    }
    Ok(low..=high)
}

//! ISO-8601 duration parser for `contentDetails.duration`

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, SweepError};

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^P(?:(?P<weeks>\d+)W)?(?:(?P<days>\d+)D)?(?:T(?:(?P<hours>\d+)H)?(?:(?P<minutes>\d+)M)?(?:(?P<seconds>\d+(?:\.\d+)?)S)?)?$",
    )
    .expect("duration pattern is valid")
});

/// Converts an ISO-8601 duration such as `PT1H2M3S` to seconds
///
/// Accepts the week, day, hour, minute and (fractional) second designators
/// YouTube emits. `P0D` and `PT0S` are zero.
///
/// # Errors
/// Returns `InvalidDuration` when the text is not a duration
///
/// # Example
/// ```
/// use tagsweep_core::parse_iso8601_duration;
/// assert_eq!(parse_iso8601_duration("PT1M30S").unwrap(), 90.0);
/// ```
pub fn parse_iso8601_duration(text: &str) -> Result<f64> {
    let invalid = || SweepError::InvalidDuration(text.to_string());

    // "P" and "PT" match the pattern but carry no components
    if text.len() < 3 || text.ends_with('T') {
        return Err(invalid());
    }

    let caps = DURATION_RE.captures(text).ok_or_else(invalid)?;

    let field = |name: &str, scale: f64| -> Result<f64> {
        match caps.name(name) {
            Some(m) => m
                .as_str()
                .parse::<f64>()
                .map(|v| v * scale)
                .map_err(|_| invalid()),
            None => Ok(0.0),
        }
    };

    Ok(field("weeks", 604_800.0)?
        + field("days", 86_400.0)?
        + field("hours", 3_600.0)?
        + field("minutes", 60.0)?
        + field("seconds", 1.0)?)
}

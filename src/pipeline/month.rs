//! Month resolution from the reporting period on the first page.
//!
//! The first page carries the period as a date range on a fixed line, e.g.
//! `01.03-31.03`. The month is read from the date that follows the first
//! dash. Only that one token is used; whether both ends of the range fall in
//! the same month is not checked.

use crate::error::ReportError;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Month number (as printed in the report) to English month name.
const MONTH_NAMES: [(&str, &str); 12] = [
    ("01", "January"),
    ("02", "February"),
    ("03", "March"),
    ("04", "April"),
    ("05", "May"),
    ("06", "June"),
    ("07", "July"),
    ("08", "August"),
    ("09", "September"),
    ("10", "October"),
    ("11", "November"),
    ("12", "December"),
];

/// Hyphen, en dash and em dash all show up between the two dates depending
/// on the font the report was rendered with.
const RANGE_SEPARATORS: [char; 3] = ['-', '\u{2013}', '\u{2014}'];

/// `DD.MM` (or `DD/MM`, `DD MM`) captures the month in group 1. Two digits
/// followed by a dash are the month of an ISO `YYYY-MM-DD` date and land in
/// group 2.
static RE_MONTH_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?:\d{2}[^\d-](\d{2})|(\d{2})-)").expect("static regex"));

/// Look up the English name of a two-digit month token.
pub fn month_name(token: &str) -> Option<&'static str> {
    MONTH_NAMES
        .iter()
        .find(|(number, _)| *number == token)
        .map(|(_, name)| *name)
}

/// Resolve the report month from the text of the first page.
///
/// `line_index` is the zero-based line holding the date range.
pub fn resolve_month(first_page: &str, line_index: usize) -> Result<&'static str, ReportError> {
    let lines: Vec<&str> = first_page.split('\n').collect();
    let date_range = lines
        .get(line_index)
        .ok_or(ReportError::DateLineMissing {
            index: line_index,
            lines: lines.len(),
        })?
        .trim();

    let token = month_token(date_range)?;
    let name = month_name(token).ok_or_else(|| ReportError::UnknownMonth {
        token: token.to_string(),
    })?;

    debug!("Date range '{}' → {}", date_range, name);
    Ok(name)
}

/// Pull the month token out of a date-range line.
fn month_token(date_range: &str) -> Result<&str, ReportError> {
    let (_, after) = date_range
        .split_once(RANGE_SEPARATORS)
        .ok_or_else(|| ReportError::DateSeparatorMissing {
            line: date_range.to_string(),
        })?;

    let caps = RE_MONTH_TOKEN
        .captures(after)
        .ok_or_else(|| ReportError::UnknownMonth {
            token: after.trim().to_string(),
        })?;

    // One of the two alternatives always participates in a match.
    let token = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
    Ok(token)
}

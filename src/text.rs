//! Stateless string adapters around the core: parsing interval lists
//! from text and formatting result lists for display.

use std::fmt::Display;
use std::str::FromStr;

use crate::Endpoint;
use crate::Interval;

/// Parses a comma-separated list of `start-end` tokens (optional
/// whitespace after each comma) into intervals.
///
/// Tokens must match `<digits>-<digits>` exactly.  Since a single
/// hyphen serves as the separator, the grammar cannot express negative
/// bounds: a token like `-7-35` has an extra hyphen, fails the match,
/// and is dropped.  Fractional tokens, empty tokens, and tokens whose
/// digits overflow `T` are dropped the same way.  Parsing never fails;
/// it degrades silently, and an empty input yields an empty list.
///
/// Reversed tokens such as `19-10` are bound-corrected by the
/// [`Interval`] constructor, not dropped.
pub fn parse<T: Endpoint + FromStr>(text: &str) -> Vec<Interval<T>> {
    text.split(',')
        .filter_map(|token| parse_token(token.trim_start()))
        .collect()
}

/// Parses a single `<digits>-<digits>` token, or nothing.
fn parse_token<T: Endpoint + FromStr>(token: &str) -> Option<Interval<T>> {
    let (start, end) = token.split_once('-')?;

    let all_digits =
        |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(start) || !all_digits(end) {
        return None;
    }

    Some(Interval::new(start.parse().ok()?, end.parse().ok()?))
}

/// Renders intervals as `"<start>-<end>"` tokens joined with `", "`.
/// An empty sequence yields an empty string.
pub fn format<T: Endpoint + Display>(intervals: &[Interval<T>]) -> String {
    intervals
        .iter()
        .map(|interval| interval.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

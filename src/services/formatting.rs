//! Danish display formatting for stock, prices and timestamps.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use thiserror::Error;

use crate::domain::types::StockUnit;

/// Civil timezone every report is rendered in.
pub const REPORT_TIMEZONE: Tz = chrono_tz::Europe::Copenhagen;

const API_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";
const MAX_FRACTION_DIGITS: usize = 9;
const DISPLAY_FORMAT: &str = "%d/%m/%Y kl. %H:%M";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("'{input}' is not a UTC timestamp of the form YYYY-MM-DDTHH:MM:SS.ffffffZ")]
pub struct TimestampParseError {
    pub input: String,
}

/// Formats a stock quantity with its localized unit.
///
/// Kilograms keep two decimals; every other unit is truncated to a whole
/// number.
pub fn format_stock(quantity: f64, unit_code: &str) -> String {
    format_stock_in(quantity, &StockUnit::parse(unit_code))
}

pub fn format_stock_in(quantity: f64, unit: &StockUnit) -> String {
    if unit.is_kilograms() {
        format!("{quantity:.2} {}", unit.label())
    } else {
        format!("{} {}", quantity.trunc() as i64, unit.label())
    }
}

/// Parses an API timestamp and renders it in Copenhagen time.
pub fn format_timestamp(value: &str) -> Result<String, TimestampParseError> {
    let utc = parse_api_timestamp(value)?;
    Ok(format_local(&utc.with_timezone(&REPORT_TIMEZONE)))
}

pub fn parse_api_timestamp(value: &str) -> Result<DateTime<Utc>, TimestampParseError> {
    let error = || TimestampParseError {
        input: value.to_string(),
    };
    if !has_fraction_digits(value) {
        return Err(error());
    }
    NaiveDateTime::parse_from_str(value, API_TIMESTAMP_FORMAT)
        .map(|naive| Utc.from_utc_datetime(&naive))
        .map_err(|_| error())
}

/// `%.f` alone accepts a missing or overlong fraction; the API always sends
/// `.` followed by 1 to 9 digits before the `Z`.
fn has_fraction_digits(value: &str) -> bool {
    value
        .strip_suffix('Z')
        .and_then(|rest| rest.rsplit_once('.'))
        .is_some_and(|(_, fraction)| {
            (1..=MAX_FRACTION_DIGITS).contains(&fraction.len())
                && fraction.bytes().all(|b| b.is_ascii_digit())
        })
}

/// Renders an already-localized timestamp as `DD/MM/YYYY kl. HH:MM`.
pub fn format_local<Z>(value: &DateTime<Z>) -> String
where
    Z: TimeZone,
    Z::Offset: std::fmt::Display,
{
    value.format(DISPLAY_FORMAT).to_string()
}

pub fn format_price(amount: f64, currency: &str) -> String {
    format!("{amount:.2} {currency}")
}

pub fn format_percent(percent: f64) -> String {
    format!("{percent:.1}%")
}

/// Discount badge text, e.g. `-25.0%`.
pub fn format_discount(percent: f64) -> String {
    format!("-{}", format_percent(percent))
}

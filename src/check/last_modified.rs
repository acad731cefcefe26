//! Parsing of the `Last-Modified` response header.
//!
//! Only the RFC 7231 preferred format (`IMF-fixdate`) is accepted:
//!
//! ```text
//! Last-Modified: Mon, 02 Jan 2006 15:04:05 GMT
//! ```
//!
//! The obsolete RFC 850 and `asctime` formats are rejected. The day of the
//! week must be one of the seven abbreviations but is not checked against the
//! date.
use chrono::{DateTime, NaiveDateTime, Utc};
use thiserror::Error;

/// `strftime` pattern of an `IMF-fixdate`.
pub const IMF_FIXDATE: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// `strftime` pattern of an `IMF-fixdate` after the day of the week.
const IMF_FIXDATE_DATE: &str = "%d %b %Y %H:%M:%S GMT";

const DAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("the response has no Last-Modified header")]
    Missing,
    #[error("cannot parse Last-Modified \"{value}\" as an IMF-fixdate: missing or unknown day of the week")]
    InvalidDayName { value: String },
    #[error("cannot parse Last-Modified \"{value}\" as an IMF-fixdate: {source}")]
    InvalidFormat { value: String, source: chrono::ParseError },
}

/// Parses the raw header value, `None` meaning the header was absent.
///
/// # Errors
///
/// Will return an error if the header is absent or is not an `IMF-fixdate`.
pub fn parse(header: Option<&str>) -> Result<DateTime<Utc>, Error> {
    let value = header.ok_or(Error::Missing)?;

    let date = value
        .split_once(", ")
        .filter(|(day_name, _)| DAY_NAMES.iter().any(|known| known.eq_ignore_ascii_case(day_name)))
        .map(|(_, date)| date)
        .ok_or_else(|| Error::InvalidDayName { value: value.to_owned() })?;

    NaiveDateTime::parse_from_str(date, IMF_FIXDATE_DATE)
        .map(|naive| naive.and_utc())
        .map_err(|source| Error::InvalidFormat {
            value: value.to_owned(),
            source,
        })
}

//! Template filters.

use chrono::NaiveDate;

/// Formats a post date in medium style, e.g. `Oct 17, 2026`.
pub fn as_post_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Formats a date as `YYYY-MM-DD` for `<time datetime>` attributes.
pub fn as_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

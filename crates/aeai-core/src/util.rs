//! Slug and date helpers shared across page assembly and views.

use chrono::{Datelike, NaiveDate};

/// Month names for human-readable date formatting.
const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Derive a display title from a kebab-case slug.
///
/// Used by detail pages when neither the CMS nor the fallback map knows the
/// slug: `"data-analyst"` becomes `"Data Analyst"`.
pub fn title_from_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn month_name(date: NaiveDate) -> &'static str {
    MONTHS[date.month0() as usize]
}

/// Format as `10 February 2025` (article meta lines).
pub fn format_date_long(date: NaiveDate) -> String {
    format!("{} {} {}", date.day(), month_name(date), date.year())
}

/// Format as `February 2025` (research listing).
pub fn format_month_year(date: NaiveDate) -> String {
    format!("{} {}", month_name(date), date.year())
}

/// Format as `February 10, 2025` (paper detail).
pub fn format_date_us(date: NaiveDate) -> String {
    format!("{} {}, {}", month_name(date), date.day(), date.year())
}

/// Parse an ISO `YYYY-MM-DD` date, tolerating absent or malformed input.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

//! Rendering of aggregated collections as columnar text or CSV

pub mod csv;
pub mod table;

pub use table::TableFormatter;

use chrono::{DateTime, Duration, Utc};

/// Column headings shared by the long and CSV formats.
pub const STATUS_HEADINGS: [&str; 4] = ["ID", "Posted at", "Screen name", "Text"];
pub const USER_HEADINGS: [&str; 10] = [
    "ID",
    "Since",
    "Last tweeted at",
    "Tweets",
    "Favorites",
    "Listed",
    "Following",
    "Followers",
    "Screen name",
    "Name",
];

/// Output format directive for the collection-producing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Short,
    Long,
    Csv,
}

impl Format {
    pub fn from_flags(csv: bool, long: bool) -> Self {
        if csv {
            Format::Csv
        } else if long {
            Format::Long
        } else {
            Format::Short
        }
    }
}

/// `ls`-style timestamp: time of day for the last six months, year
/// otherwise.
pub(crate) fn ls_time(time: Option<DateTime<Utc>>) -> String {
    match time {
        None => String::new(),
        Some(time) => {
            if Utc::now().signed_duration_since(time) < Duration::days(180) {
                time.format("%b %e %H:%M").to_string()
            } else {
                time.format("%b %e  %Y").to_string()
            }
        }
    }
}

pub(crate) fn csv_time(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M:%S %z").to_string()
}

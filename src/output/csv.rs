#![forbid(unsafe_code)]

//! CSV output for statuses, users and list information
//!
//! The heading row is omitted when the collection is empty. Fields are
//! quoted per RFC 4180 only when they contain a delimiter, quote or
//! newline.

use crate::output::{STATUS_HEADINGS, USER_HEADINGS, csv_time};
use crate::types::{Status, TwitterList, User};

pub const LIST_INFORMATION_HEADINGS: [&str; 10] = [
    "ID",
    "Description",
    "Slug",
    "Screen name",
    "Created at",
    "Members",
    "Subscribers",
    "Following",
    "Mode",
    "URL",
];

pub fn format_statuses(statuses: &[Status]) -> String {
    if statuses.is_empty() {
        return String::new();
    }
    let mut out = headings(&STATUS_HEADINGS);
    for status in statuses {
        out.push_str(&record(&[
            status.id.to_string(),
            csv_time(status.created_at),
            status.screen_name.clone(),
            status.text.clone(),
        ]));
    }
    out
}

pub fn format_users(users: &[User]) -> String {
    if users.is_empty() {
        return String::new();
    }
    let mut out = headings(&USER_HEADINGS);
    for user in users {
        out.push_str(&record(&[
            user.id.to_string(),
            csv_time(user.created_at),
            user.last_tweeted_at.map(csv_time).unwrap_or_default(),
            user.statuses_count.to_string(),
            user.favorites_count.to_string(),
            user.listed_count.to_string(),
            user.friends_count.to_string(),
            user.followers_count.to_string(),
            user.screen_name.clone(),
            user.name.clone(),
        ]));
    }
    out
}

pub fn format_list(list: &TwitterList) -> String {
    let mut out = headings(&LIST_INFORMATION_HEADINGS);
    out.push_str(&record(&[
        list.id.to_string(),
        list.description.clone().unwrap_or_default(),
        list.slug.clone(),
        list.screen_name.clone(),
        csv_time(list.created_at),
        list.member_count.to_string(),
        list.subscriber_count.to_string(),
        list.following.to_string(),
        list.mode.clone(),
        format!("https://twitter.com/{}/{}", list.screen_name, list.slug),
    ]));
    out
}

fn headings(headings: &[&str]) -> String {
    record(
        &headings
            .iter()
            .map(|h| h.to_string())
            .collect::<Vec<_>>(),
    )
}

fn record(fields: &[String]) -> String {
    let mut line = fields
        .iter()
        .map(|field| escape(field))
        .collect::<Vec<_>>()
        .join(",");
    line.push('\n');
    line
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

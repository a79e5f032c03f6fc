#![forbid(unsafe_code)]

//! Columnar terminal output
//!
//! Pure `format_*` methods return plain strings (and are what the tests
//! exercise); the `write_*` methods add color where the short status
//! format calls for it and stream to stdout.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::commands::list::{MemberAction, MembershipChange};
use crate::output::{STATUS_HEADINGS, USER_HEADINGS, ls_time};
use crate::types::{Status, TwitterList, User, UserRef};

pub struct TableFormatter {
    color_choice: ColorChoice,
}

impl TableFormatter {
    pub fn new(color_choice: ColorChoice) -> Self {
        TableFormatter { color_choice }
    }

    /// Short user format: one screen name per line.
    pub fn format_users(&self, users: &[User]) -> String {
        let mut out = String::new();
        for user in users {
            out.push_str(&user.screen_name);
            out.push('\n');
        }
        out
    }

    /// Long user format: aligned columns under [`USER_HEADINGS`].
    pub fn format_users_long(&self, users: &[User]) -> String {
        let rows = users
            .iter()
            .map(|user| {
                vec![
                    user.id.to_string(),
                    ls_time(Some(user.created_at)),
                    ls_time(user.last_tweeted_at),
                    user.statuses_count.to_string(),
                    user.favorites_count.to_string(),
                    user.listed_count.to_string(),
                    user.friends_count.to_string(),
                    user.followers_count.to_string(),
                    format!("@{}", user.screen_name),
                    user.name.clone(),
                ]
            })
            .collect();
        aligned(&USER_HEADINGS, rows)
    }

    /// Short status format: indented message blocks.
    pub fn format_statuses(&self, statuses: &[Status]) -> String {
        let mut out = String::new();
        for status in statuses {
            out.push_str(&format!("   @{}\n", status.screen_name));
            for line in status.text.lines() {
                out.push_str(&format!("   {line}\n"));
            }
            out.push('\n');
        }
        out
    }

    /// Long status format: aligned columns under [`STATUS_HEADINGS`],
    /// with newlines in the text collapsed.
    pub fn format_statuses_long(&self, statuses: &[Status]) -> String {
        let rows = statuses
            .iter()
            .map(|status| {
                vec![
                    status.id.to_string(),
                    ls_time(Some(status.created_at)),
                    format!("@{}", status.screen_name),
                    one_line(&status.text),
                ]
            })
            .collect();
        aligned(&STATUS_HEADINGS, rows)
    }

    /// Label/value block for `list information`. The description row is
    /// omitted when the list has none.
    pub fn format_list_information(&self, list: &TwitterList) -> String {
        let mut rows = vec![vec!["ID".to_string(), list.id.to_string()]];
        if let Some(description) = &list.description {
            rows.push(vec!["Description".to_string(), description.clone()]);
        }
        rows.push(vec!["Slug".to_string(), list.slug.clone()]);
        rows.push(vec![
            "Screen name".to_string(),
            format!("@{}", list.screen_name),
        ]);
        rows.push(vec![
            "Created at".to_string(),
            ls_time(Some(list.created_at)),
        ]);
        rows.push(vec!["Members".to_string(), list.member_count.to_string()]);
        rows.push(vec![
            "Subscribers".to_string(),
            list.subscriber_count.to_string(),
        ]);
        rows.push(vec![
            "Status".to_string(),
            if list.following {
                "Following".to_string()
            } else {
                "Not following".to_string()
            },
        ]);
        rows.push(vec!["Mode".to_string(), list.mode.clone()]);
        rows.push(vec![
            "URL".to_string(),
            format!("https://twitter.com/{}/{}", list.screen_name, list.slug),
        ]);

        let width = rows
            .iter()
            .map(|row| row[0].chars().count())
            .max()
            .unwrap_or(0);
        let mut out = String::new();
        for row in rows {
            out.push_str(format!("{:<width$}  {}", row[0], row[1]).trim_end());
            out.push('\n');
        }
        out
    }

    /// Confirmation for `list create`.
    pub fn format_list_created(&self, identity: &str, list: &TwitterList) -> String {
        format!("@{identity} created the list \"{}\".\n", list.slug)
    }

    /// Confirmation plus undo hint for `list add` / `list remove`.
    pub fn format_membership_change(&self, identity: &str, change: &MembershipChange) -> String {
        let number = change.users.len();
        let noun = if number == 1 { "member" } else { "members" };
        let (verb, preposition, undo) = match change.action {
            MemberAction::Added => ("added", "to", "remove"),
            MemberAction::Removed => ("removed", "from", "add"),
        };
        let id_flag = if change.by_id { "--id " } else { "" };
        let users = change
            .users
            .iter()
            .map(|user| match user {
                UserRef::Id(id) => id.to_string(),
                UserRef::ScreenName(name) => format!("@{name}"),
            })
            .collect::<Vec<_>>()
            .join(" ");
        format!(
            "@{identity} {verb} {number} {noun} {preposition} the list \"{slug}\".\n\n\
             Run `chirp list {undo} {id_flag}{slug} {users}` to undo.\n",
            slug = change.slug,
        )
    }

    pub fn write_users(&self, users: &[User]) -> io::Result<()> {
        self.write_plain(&self.format_users(users))
    }

    pub fn write_users_long(&self, users: &[User]) -> io::Result<()> {
        self.write_plain(&self.format_users_long(users))
    }

    /// Short status format with the screen name in bold yellow.
    pub fn write_statuses(&self, statuses: &[Status]) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.color_choice);
        for status in statuses {
            stdout.set_color(ColorSpec::new().set_bold(true).set_fg(Some(Color::Yellow)))?;
            write!(stdout, "   @{}", status.screen_name)?;
            stdout.reset()?;
            writeln!(stdout)?;
            for line in status.text.lines() {
                writeln!(stdout, "   {line}")?;
            }
            writeln!(stdout)?;
        }
        Ok(())
    }

    pub fn write_statuses_long(&self, statuses: &[Status]) -> io::Result<()> {
        self.write_plain(&self.format_statuses_long(statuses))
    }

    pub fn write_list_information(&self, list: &TwitterList) -> io::Result<()> {
        self.write_plain(&self.format_list_information(list))
    }

    pub fn write_list_created(&self, identity: &str, list: &TwitterList) -> io::Result<()> {
        self.write_plain(&self.format_list_created(identity, list))
    }

    pub fn write_membership_change(
        &self,
        identity: &str,
        change: &MembershipChange,
    ) -> io::Result<()> {
        self.write_plain(&self.format_membership_change(identity, change))
    }

    fn write_plain(&self, text: &str) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.color_choice);
        stdout.write_all(text.as_bytes())
    }
}

/// Collapses newline runs to single spaces.
fn one_line(text: &str) -> String {
    text.split('\n')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Left-aligned columns with a two-space gutter; trailing whitespace
/// trimmed per line. Empty input renders nothing, headings included.
fn aligned(headings: &[&str], rows: Vec<Vec<String>>) -> String {
    if rows.is_empty() {
        return String::new();
    }
    let mut widths: Vec<usize> = headings.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (index, cell) in row.iter().enumerate() {
            widths[index] = widths[index].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let mut push_row = |cells: &[String]| {
        let mut line = String::new();
        for (index, cell) in cells.iter().enumerate() {
            if index > 0 {
                line.push_str("  ");
            }
            line.push_str(&format!("{:<width$}", cell, width = widths[index]));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    };

    let heading_row: Vec<String> = headings.iter().map(|h| h.to_string()).collect();
    push_row(&heading_row);
    for row in &rows {
        push_row(row);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn formatter() -> TableFormatter {
        TableFormatter::new(ColorChoice::Never)
    }

    fn status(id: u64, screen_name: &str, text: &str) -> Status {
        Status {
            id,
            created_at: Utc.with_ymd_and_hms(2011, 10, 17, 20, 48, 22).single().unwrap(),
            screen_name: screen_name.to_string(),
            text: text.to_string(),
        }
    }

    fn user(screen_name: &str, name: &str) -> User {
        User {
            id: 1,
            screen_name: screen_name.to_string(),
            name: name.to_string(),
            created_at: Utc.with_ymd_and_hms(2008, 2, 1, 0, 0, 0).single().unwrap(),
            statuses_count: 12,
            favorites_count: 3,
            listed_count: 1,
            friends_count: 5,
            followers_count: 9,
            last_tweeted_at: None,
        }
    }

    #[test]
    fn test_short_users_one_per_line() {
        let out = formatter().format_users(&[user("alice", "Alice"), user("bob", "Bob")]);
        assert_eq!(out, "alice\nbob\n");
    }

    #[test]
    fn test_long_users_has_headings_and_alignment() {
        let out = formatter().format_users_long(&[user("alice", "Alice")]);
        let mut lines = out.lines();
        let heading = lines.next().unwrap();
        assert!(heading.starts_with("ID"));
        assert!(heading.contains("Screen name"));
        let row = lines.next().unwrap();
        assert!(row.contains("@alice"));
        assert!(row.contains("Alice"));
    }

    #[test]
    fn test_long_users_empty_renders_nothing() {
        assert_eq!(formatter().format_users_long(&[]), "");
    }

    #[test]
    fn test_short_statuses_blocks() {
        let out = formatter().format_statuses(&[status(1, "jack", "just setting up")]);
        assert_eq!(out, "   @jack\n   just setting up\n\n");
    }

    #[test]
    fn test_long_statuses_collapse_newlines() {
        let out = formatter().format_statuses_long(&[status(1, "jack", "two\n\nlines")]);
        assert!(out.contains("two lines"));
        assert!(!out.contains("two\n\nlines"));
    }

    #[test]
    fn test_list_information_rows() {
        let list = TwitterList {
            id: 8863586,
            slug: "presidents".to_string(),
            created_at: Utc.with_ymd_and_hms(2010, 3, 15, 12, 10, 13).single().unwrap(),
            screen_name: "sferik".to_string(),
            member_count: 2,
            subscriber_count: 1,
            mode: "public".to_string(),
            description: None,
            following: true,
        };
        let out = formatter().format_list_information(&list);
        assert!(out.contains("ID           8863586"));
        assert!(!out.contains("Description"));
        assert!(out.contains("Status       Following"));
        assert!(out.contains("URL          https://twitter.com/sferik/presidents"));
    }

    #[test]
    fn test_membership_added_message_and_undo() {
        let change = MembershipChange {
            slug: "presidents".to_string(),
            users: vec![
                UserRef::ScreenName("alice".to_string()),
                UserRef::ScreenName("bob".to_string()),
            ],
            by_id: false,
            action: MemberAction::Added,
        };
        let out = formatter().format_membership_change("me", &change);
        assert!(out.starts_with("@me added 2 members to the list \"presidents\"."));
        assert!(out.contains("Run `chirp list remove presidents @alice @bob` to undo."));
    }

    #[test]
    fn test_membership_removed_singular_by_id() {
        let change = MembershipChange {
            slug: "presidents".to_string(),
            users: vec![UserRef::Id(7)],
            by_id: true,
            action: MemberAction::Removed,
        };
        let out = formatter().format_membership_change("me", &change);
        assert!(out.starts_with("@me removed 1 member from the list \"presidents\"."));
        assert!(out.contains("Run `chirp list add --id presidents 7` to undo."));
    }

    #[test]
    fn test_list_created_message() {
        let list = TwitterList {
            id: 1,
            slug: "presidents".to_string(),
            created_at: Utc.with_ymd_and_hms(2010, 3, 15, 12, 10, 13).single().unwrap(),
            screen_name: "me".to_string(),
            member_count: 0,
            subscriber_count: 0,
            mode: "private".to_string(),
            description: None,
            following: true,
        };
        let out = formatter().format_list_created("me", &list);
        assert_eq!(out, "@me created the list \"presidents\".\n");
    }
}

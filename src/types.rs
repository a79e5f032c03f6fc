#![forbid(unsafe_code)]

//! Domain data model: tweets, users, lists and the reference syntax the
//! commands accept on the command line.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};
use clap::ValueEnum;

use crate::error::{Error, Result};

/// A single tweet, as consumed by the search and timeline commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub id: u64,
    pub created_at: DateTime<Utc>,
    pub screen_name: String,
    pub text: String,
}

/// A Twitter account, as returned by member and user-search listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub screen_name: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub statuses_count: u64,
    pub favorites_count: u64,
    pub listed_count: u64,
    pub friends_count: u64,
    pub followers_count: u64,
    /// Timestamp of the account's most recent tweet, when the API includes it.
    pub last_tweeted_at: Option<DateTime<Utc>>,
}

/// A Twitter list record, as returned by `list information` and `list create`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwitterList {
    pub id: u64,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub screen_name: String,
    pub member_count: u64,
    pub subscriber_count: u64,
    pub mode: String,
    pub description: Option<String>,
    pub following: bool,
}

/// An item that can flow through the pagination engine.
pub trait PagedItem {
    /// Numeric identifier. For statuses this decreases with recency and is
    /// the advancement key for max-id pagination.
    fn item_id(&self) -> u64;

    /// The text field the post-fetch regex filter matches against.
    fn match_text(&self) -> &str;
}

impl PagedItem for Status {
    fn item_id(&self) -> u64 {
        self.id
    }

    fn match_text(&self) -> &str {
        &self.text
    }
}

impl PagedItem for User {
    fn item_id(&self) -> u64 {
        self.id
    }

    fn match_text(&self) -> &str {
        &self.screen_name
    }
}

/// A user given on the command line, either as a numeric ID (under `--id`)
/// or as a screen name with any leading `@` sigils stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserRef {
    Id(u64),
    ScreenName(String),
}

impl UserRef {
    /// Parses a user argument. With `by_id` the argument must be a numeric
    /// ID; otherwise leading `@` sigils are stripped from the screen name.
    pub fn from_arg(arg: &str, by_id: bool) -> Result<Self> {
        if by_id {
            arg.parse::<u64>()
                .map(UserRef::Id)
                .map_err(|_| Error::InvalidReference(format!("'{arg}' is not a numeric user ID")))
        } else {
            let name = arg.trim_start_matches('@');
            if name.is_empty() {
                return Err(Error::InvalidReference(format!(
                    "'{arg}' is not a valid screen name"
                )));
            }
            Ok(UserRef::ScreenName(name.to_string()))
        }
    }
}

impl fmt::Display for UserRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRef::Id(id) => write!(f, "{id}"),
            UserRef::ScreenName(name) => write!(f, "{name}"),
        }
    }
}

/// An `[owner/]slug` list reference. When the owner part is omitted it
/// defaults to the active account's screen name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRef {
    pub owner: UserRef,
    pub slug: String,
}

impl ListRef {
    /// Splits an `[owner/]slug` argument. `identity` is the active account's
    /// screen name, used as the owner when no `/` is present. Malformed
    /// references fail here, before any network call.
    pub fn parse(arg: &str, by_id: bool, identity: &str) -> Result<Self> {
        match arg.split_once('/') {
            None => {
                if arg.is_empty() {
                    return Err(Error::InvalidReference("empty list reference".to_string()));
                }
                let owner = UserRef::from_arg(identity, false).map_err(|_| {
                    Error::InvalidReference(
                        "no list owner given and no account configured".to_string(),
                    )
                })?;
                Ok(ListRef {
                    owner,
                    slug: arg.to_string(),
                })
            }
            Some((owner, slug)) => {
                if owner.is_empty() || slug.is_empty() {
                    return Err(Error::InvalidReference(format!(
                        "'{arg}' is not an [owner/]list reference"
                    )));
                }
                Ok(ListRef {
                    owner: UserRef::from_arg(owner, by_id)?,
                    slug: slug.to_string(),
                })
            }
        }
    }
}

/// Sort key for user listings. Exactly one key is active at a time; the
/// default orders by screen name, case-insensitively.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum UserOrder {
    Favorites,
    Followers,
    Friends,
    Listed,
    #[default]
    ScreenName,
    Since,
    Tweets,
    Tweeted,
}

impl UserOrder {
    pub fn compare(self, a: &User, b: &User) -> Ordering {
        match self {
            UserOrder::Favorites => a.favorites_count.cmp(&b.favorites_count),
            UserOrder::Followers => a.followers_count.cmp(&b.followers_count),
            UserOrder::Friends => a.friends_count.cmp(&b.friends_count),
            UserOrder::Listed => a.listed_count.cmp(&b.listed_count),
            UserOrder::ScreenName => a
                .screen_name
                .to_lowercase()
                .cmp(&b.screen_name.to_lowercase()),
            UserOrder::Since => a.created_at.cmp(&b.created_at),
            UserOrder::Tweets => a.statuses_count.cmp(&b.statuses_count),
            // Accounts that have never tweeted sort first.
            UserOrder::Tweeted => a
                .last_tweeted_at
                .unwrap_or(DateTime::<Utc>::MIN_UTC)
                .cmp(&b.last_tweeted_at.unwrap_or(DateTime::<Utc>::MIN_UTC)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn user(screen_name: &str, followers: u64) -> User {
        User {
            id: 1,
            screen_name: screen_name.to_string(),
            name: screen_name.to_string(),
            created_at: Utc.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).single().unwrap(),
            statuses_count: 0,
            favorites_count: 0,
            listed_count: 0,
            friends_count: 0,
            followers_count: followers,
            last_tweeted_at: None,
        }
    }

    #[test]
    fn test_user_ref_strips_sigil() {
        assert_eq!(
            UserRef::from_arg("@alice", false).unwrap(),
            UserRef::ScreenName("alice".to_string())
        );
        assert_eq!(
            UserRef::from_arg("@@bob", false).unwrap(),
            UserRef::ScreenName("bob".to_string())
        );
        assert_eq!(
            UserRef::from_arg("carol", false).unwrap(),
            UserRef::ScreenName("carol".to_string())
        );
    }

    #[test]
    fn test_user_ref_numeric_id() {
        assert_eq!(UserRef::from_arg("7505382", true).unwrap(), UserRef::Id(7505382));
        assert!(matches!(
            UserRef::from_arg("alice", true),
            Err(Error::InvalidReference(_))
        ));
    }

    #[test]
    fn test_user_ref_bare_sigil_rejected() {
        assert!(matches!(
            UserRef::from_arg("@", false),
            Err(Error::InvalidReference(_))
        ));
        assert!(matches!(
            UserRef::from_arg("", false),
            Err(Error::InvalidReference(_))
        ));
    }

    #[test]
    fn test_list_ref_with_owner() {
        let list = ListRef::parse("alice/myslist", false, "me").unwrap();
        assert_eq!(list.owner, UserRef::ScreenName("alice".to_string()));
        assert_eq!(list.slug, "myslist");
    }

    #[test]
    fn test_list_ref_owner_sigil_stripped() {
        let list = ListRef::parse("@alice/myslist", false, "me").unwrap();
        assert_eq!(list.owner, UserRef::ScreenName("alice".to_string()));
    }

    #[test]
    fn test_list_ref_defaults_to_identity() {
        let list = ListRef::parse("myslist", false, "me").unwrap();
        assert_eq!(list.owner, UserRef::ScreenName("me".to_string()));
        assert_eq!(list.slug, "myslist");
    }

    #[test]
    fn test_list_ref_numeric_owner() {
        let list = ListRef::parse("123/myslist", true, "me").unwrap();
        assert_eq!(list.owner, UserRef::Id(123));
    }

    #[test]
    fn test_list_ref_malformed() {
        assert!(matches!(
            ListRef::parse("alice/", false, "me"),
            Err(Error::InvalidReference(_))
        ));
        assert!(matches!(
            ListRef::parse("/myslist", false, "me"),
            Err(Error::InvalidReference(_))
        ));
        assert!(matches!(
            ListRef::parse("", false, "me"),
            Err(Error::InvalidReference(_))
        ));
    }

    #[test]
    fn test_list_ref_requires_identity_when_owner_omitted() {
        assert!(matches!(
            ListRef::parse("myslist", false, ""),
            Err(Error::InvalidReference(_))
        ));
    }

    #[test]
    fn test_user_order_screen_name_case_insensitive() {
        let a = user("Zed", 0);
        let b = user("alice", 0);
        assert_eq!(UserOrder::ScreenName.compare(&b, &a), Ordering::Less);
    }

    #[test]
    fn test_user_order_numeric_key() {
        let a = user("a", 10);
        let b = user("b", 200);
        assert_eq!(UserOrder::Followers.compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_user_order_tweeted_handles_never_tweeted() {
        let mut a = user("a", 0);
        let mut b = user("b", 0);
        a.last_tweeted_at = None;
        b.last_tweeted_at = Some(Utc.with_ymd_and_hms(2020, 5, 1, 12, 0, 0).single().unwrap());
        assert_eq!(UserOrder::Tweeted.compare(&a, &b), Ordering::Less);
    }
}

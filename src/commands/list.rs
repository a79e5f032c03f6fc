#![forbid(unsafe_code)]

//! List management: add, create, information, members, remove, timeline

use crate::client::Api;
use crate::commands::{MAX_NUM_RESULTS, SortOptions, user_aggregator};
use crate::engine::pager::Strategy;
use crate::engine::{Aggregator, retry};
use crate::error::Result;
use crate::types::{ListRef, Status, TwitterList, User, UserRef};

/// Whether a membership change added or removed users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberAction {
    Added,
    Removed,
}

/// Outcome of `list add` / `list remove`, rendered by the caller
/// (including the undo hint).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipChange {
    pub slug: String,
    pub users: Vec<UserRef>,
    pub by_id: bool,
    pub action: MemberAction,
}

/// Adds members to a list owned by the authenticated account. The single
/// network call is wrapped in the bounded transient retry.
pub fn add(
    api: &impl Api,
    slug: &str,
    users: &[String],
    by_id: bool,
) -> Result<MembershipChange> {
    let refs = resolve_users(users, by_id)?;
    retry::transient(|| api.list_add_members(slug, &refs))?;
    Ok(MembershipChange {
        slug: slug.to_string(),
        users: refs,
        by_id,
        action: MemberAction::Added,
    })
}

/// Removes members from a list owned by the authenticated account.
pub fn remove(
    api: &impl Api,
    slug: &str,
    users: &[String],
    by_id: bool,
) -> Result<MembershipChange> {
    let refs = resolve_users(users, by_id)?;
    retry::transient(|| api.list_remove_members(slug, &refs))?;
    Ok(MembershipChange {
        slug: slug.to_string(),
        users: refs,
        by_id,
        action: MemberAction::Removed,
    })
}

/// Creates a new list.
pub fn create(
    api: &impl Api,
    slug: &str,
    description: Option<&str>,
    private: bool,
) -> Result<TwitterList> {
    api.list_create(slug, description, private)
}

/// Detailed information about one list.
pub fn information(api: &impl Api, identity: &str, list: &str, by_id: bool) -> Result<TwitterList> {
    let list = ListRef::parse(list, by_id, identity)?;
    api.list_info(&list)
}

/// All members of a list, via cursor pagination (no cap), ordered per the
/// sort options.
pub fn members(
    api: &impl Api,
    identity: &str,
    list: &str,
    by_id: bool,
    opts: SortOptions,
) -> Result<Vec<User>> {
    let list = ListRef::parse(list, by_id, identity)?;
    user_aggregator(opts).collect(Strategy::Cursor, |req| api.list_members(&list, req))
}

/// The most recent `number` tweets by a list's members.
pub fn timeline(
    api: &impl Api,
    identity: &str,
    list: &str,
    by_id: bool,
    number: usize,
    reverse: bool,
) -> Result<Vec<Status>> {
    let list = ListRef::parse(list, by_id, identity)?;
    let per_page = number.min(MAX_NUM_RESULTS);
    Aggregator::new()
        .reverse(reverse)
        .cap(Some(number))
        .collect(Strategy::Rpp { per_page }, |req| {
            api.list_timeline(&list, req)
        })
}

fn resolve_users(users: &[String], by_id: bool) -> Result<Vec<UserRef>> {
    users
        .iter()
        .map(|user| UserRef::from_arg(user, by_id))
        .collect()
}

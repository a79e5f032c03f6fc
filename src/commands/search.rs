#![forbid(unsafe_code)]

//! Search: all, favorites, list, mentions, retweets, timeline, users
//!
//! Only `all` and `users` hit endpoints with a server-side query. The rest
//! layer a local case-insensitive regex filter over a timeline endpoint,
//! fetching up to [`MAX_NUM_RESULTS`] raw tweets by max-id pagination and
//! filtering afterward.

use crate::client::Api;
use crate::commands::{MAX_NUM_RESULTS, SortOptions, user_aggregator};
use crate::engine::Aggregator;
use crate::engine::pager::{PageRequest, ResultBatch, Strategy};
use crate::error::Result;
use crate::types::{ListRef, Status, User, UserRef};

/// The most recent `number` tweets matching `query` (server-side search).
pub fn all(api: &impl Api, query: &str, number: usize, reverse: bool) -> Result<Vec<Status>> {
    let per_page = number.min(MAX_NUM_RESULTS);
    Aggregator::new()
        .reverse(reverse)
        .cap(Some(number))
        .collect(Strategy::Rpp { per_page }, |req| {
            api.search_tweets(query, req)
        })
}

/// Favorited tweets matching `query`.
pub fn favorites(api: &impl Api, query: &str) -> Result<Vec<Status>> {
    filtered(query, |req| api.favorites(req))
}

/// Tweets on a list matching `query`.
pub fn list(
    api: &impl Api,
    identity: &str,
    list: &str,
    by_id: bool,
    query: &str,
) -> Result<Vec<Status>> {
    let list = ListRef::parse(list, by_id, identity)?;
    filtered(query, |req| api.list_timeline(&list, req))
}

/// Tweets mentioning the authenticated account that match `query`.
pub fn mentions(api: &impl Api, query: &str) -> Result<Vec<Status>> {
    filtered(query, |req| api.mentions(req))
}

/// Tweets the authenticated account has retweeted that match `query`.
pub fn retweets(api: &impl Api, query: &str) -> Result<Vec<Status>> {
    filtered(query, |req| api.retweets(req))
}

/// Tweets in the home timeline, or in `user`'s timeline when given, that
/// match `query`.
pub fn timeline(
    api: &impl Api,
    user: Option<&str>,
    by_id: bool,
    query: &str,
) -> Result<Vec<Status>> {
    match user {
        Some(arg) => {
            let user = UserRef::from_arg(arg, by_id)?;
            filtered(query, |req| api.user_timeline(&user, req))
        }
        None => filtered(query, |req| api.home_timeline(req)),
    }
}

/// Users matching `query` (server-side search, page pagination), ordered
/// per the sort options.
pub fn users(api: &impl Api, query: &str, opts: SortOptions) -> Result<Vec<User>> {
    user_aggregator(opts).collect(Strategy::Page, |req| api.user_search(query, req))
}

/// Max-id pagination with the fixed per-request count, capped at
/// [`MAX_NUM_RESULTS`] raw tweets, then the regex filter. The cap bounds
/// raw fetched tweets, not filter survivors.
fn filtered<F>(query: &str, fetch: F) -> Result<Vec<Status>>
where
    F: FnMut(&PageRequest) -> Result<ResultBatch<Status>>,
{
    Aggregator::new()
        .filter(query)?
        .cap(Some(MAX_NUM_RESULTS))
        .collect(
            Strategy::MaxId {
                count: MAX_NUM_RESULTS,
            },
            fetch,
        )
}

//! The API seam between command handlers and the network

pub mod http;

pub use http::HttpApi;

use crate::engine::pager::{PageRequest, ResultBatch};
use crate::error::Result;
use crate::types::{ListRef, Status, TwitterList, User, UserRef};

/// The Twitter API surface the command handlers consume.
///
/// Each method issues one endpoint call; pagination state arrives through
/// the [`PageRequest`] the caller's fetch closure passes along. Methods must
/// be safe to call repeatedly with advancing state.
pub trait Api {
    /// One page of a list's members (cursor pagination).
    fn list_members(&self, list: &ListRef, req: &PageRequest) -> Result<ResultBatch<User>>;

    /// One page of tweets by a list's members.
    fn list_timeline(&self, list: &ListRef, req: &PageRequest) -> Result<ResultBatch<Status>>;

    /// Adds users to a list owned by the authenticated account. Mutating.
    fn list_add_members(&self, slug: &str, users: &[UserRef]) -> Result<()>;

    /// Removes users from a list owned by the authenticated account. Mutating.
    fn list_remove_members(&self, slug: &str, users: &[UserRef]) -> Result<()>;

    /// Creates a new list. Mutating.
    fn list_create(
        &self,
        slug: &str,
        description: Option<&str>,
        private: bool,
    ) -> Result<TwitterList>;

    /// Detailed information about one list.
    fn list_info(&self, list: &ListRef) -> Result<TwitterList>;

    /// One page of tweet search results.
    fn search_tweets(&self, query: &str, req: &PageRequest) -> Result<ResultBatch<Status>>;

    /// One page of the authenticated account's favorites.
    fn favorites(&self, req: &PageRequest) -> Result<ResultBatch<Status>>;

    /// One page of tweets mentioning the authenticated account.
    fn mentions(&self, req: &PageRequest) -> Result<ResultBatch<Status>>;

    /// One page of tweets the authenticated account has retweeted.
    fn retweets(&self, req: &PageRequest) -> Result<ResultBatch<Status>>;

    /// One page of a user's tweets.
    fn user_timeline(&self, user: &UserRef, req: &PageRequest) -> Result<ResultBatch<Status>>;

    /// One page of the authenticated account's home timeline.
    fn home_timeline(&self, req: &PageRequest) -> Result<ResultBatch<Status>>;

    /// One page of a user search.
    fn user_search(&self, query: &str, req: &PageRequest) -> Result<ResultBatch<User>>;
}

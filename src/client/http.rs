#![forbid(unsafe_code)]

//! Blocking HTTP implementation of the [`Api`] trait
//!
//! One reqwest client, bearer-token auth, JSON decoding into the domain
//! types. HTTP 5xx responses map to the transient fetch error class so
//! mutating commands can retry them; everything else is non-transient.

use chrono::{DateTime, Utc};
use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::client::Api;
use crate::config::Settings;
use crate::engine::pager::{PageRequest, ResultBatch};
use crate::error::{Error, Result};
use crate::types::{ListRef, Status, TwitterList, User, UserRef};

pub struct HttpApi {
    http: Client,
    base_url: String,
    token: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        HttpApi {
            http: Client::new(),
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Builds a client from the settings file, reading the bearer token
    /// from the configured environment variable.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let token = std::env::var(&settings.api.token_env).map_err(|_| {
            Error::Config(format!(
                "no API token found in ${}",
                settings.api.token_env
            ))
        })?;
        Ok(HttpApi::new(settings.api.base_url.clone(), token))
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    fn get<T: DeserializeOwned>(&self, path: &str, params: &[(&str, String)]) -> Result<T> {
        let response = self
            .http
            .get(self.url(path))
            .bearer_auth(&self.token)
            .query(params)
            .send()
            .map_err(|e| Error::fetch(format!("GET {path}: {e}")))?;
        decode(path, response)
    }

    fn post<T: DeserializeOwned>(&self, path: &str, params: &[(&str, String)]) -> Result<T> {
        let response = self
            .http
            .post(self.url(path))
            .bearer_auth(&self.token)
            .form(params)
            .send()
            .map_err(|e| Error::fetch(format!("POST {path}: {e}")))?;
        decode(path, response)
    }

    /// POST where only the status matters; the response body is discarded.
    fn post_unit(&self, path: &str, params: &[(&str, String)]) -> Result<()> {
        let _: serde_json::Value = self.post(path, params)?;
        Ok(())
    }
}

fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return response
            .json()
            .map_err(|e| Error::fetch(format!("decoding {path}: {e}")));
    }
    let body = response.text().unwrap_or_default();
    let message = format!("{path}: {} {}", status.as_u16(), body.trim());
    if status.is_server_error() {
        Err(Error::transient(message))
    } else {
        Err(Error::fetch(message))
    }
}

/// Query parameters for one pagination state.
fn page_params(req: &PageRequest) -> Vec<(&'static str, String)> {
    match req {
        PageRequest::Cursor { cursor } => vec![("cursor", cursor.to_string())],
        PageRequest::Page { page } => vec![("page", page.to_string())],
        PageRequest::MaxId { max_id, count } => {
            let mut params = vec![("count", count.to_string())];
            if let Some(id) = max_id {
                params.push(("max_id", id.to_string()));
            }
            params
        }
        PageRequest::Rpp { page, per_page } => vec![
            ("count", per_page.to_string()),
            ("page", page.to_string()),
        ],
    }
}

fn owner_params(list: &ListRef) -> Vec<(&'static str, String)> {
    let owner = match &list.owner {
        UserRef::Id(id) => ("owner_id", id.to_string()),
        UserRef::ScreenName(name) => ("owner_screen_name", name.clone()),
    };
    vec![owner, ("slug", list.slug.clone())]
}

fn user_param(user: &UserRef) -> (&'static str, String) {
    match user {
        UserRef::Id(id) => ("user_id", id.to_string()),
        UserRef::ScreenName(name) => ("screen_name", name.clone()),
    }
}

/// Comma-joined bulk membership parameters; ids and screen names may mix.
fn member_params(users: &[UserRef]) -> Vec<(&'static str, String)> {
    let mut ids = Vec::new();
    let mut names = Vec::new();
    for user in users {
        match user {
            UserRef::Id(id) => ids.push(id.to_string()),
            UserRef::ScreenName(name) => names.push(name.clone()),
        }
    }
    let mut params = Vec::new();
    if !ids.is_empty() {
        params.push(("user_id", ids.join(",")));
    }
    if !names.is_empty() {
        params.push(("screen_name", names.join(",")));
    }
    params
}

impl Api for HttpApi {
    fn list_members(&self, list: &ListRef, req: &PageRequest) -> Result<ResultBatch<User>> {
        let mut params = owner_params(list);
        params.push(("skip_status", "true".to_string()));
        params.extend(page_params(req));
        let page: WireMemberPage = self.get("lists/members.json", &params)?;
        let users = page.users.into_iter().map(WireUser::into_user).collect();
        Ok(ResultBatch::with_cursor(users, page.next_cursor))
    }

    fn list_timeline(&self, list: &ListRef, req: &PageRequest) -> Result<ResultBatch<Status>> {
        let mut params = owner_params(list);
        params.extend(page_params(req));
        let statuses: Vec<WireStatus> = self.get("lists/statuses.json", &params)?;
        Ok(ResultBatch::new(into_statuses(statuses)))
    }

    fn list_add_members(&self, slug: &str, users: &[UserRef]) -> Result<()> {
        let mut params = vec![("slug", slug.to_string())];
        params.extend(member_params(users));
        self.post_unit("lists/members/create_all.json", &params)
    }

    fn list_remove_members(&self, slug: &str, users: &[UserRef]) -> Result<()> {
        let mut params = vec![("slug", slug.to_string())];
        params.extend(member_params(users));
        self.post_unit("lists/members/destroy_all.json", &params)
    }

    fn list_create(
        &self,
        slug: &str,
        description: Option<&str>,
        private: bool,
    ) -> Result<TwitterList> {
        let mut params = vec![("name", slug.to_string())];
        if let Some(description) = description {
            params.push(("description", description.to_string()));
        }
        if private {
            params.push(("mode", "private".to_string()));
        }
        let list: WireList = self.post("lists/create.json", &params)?;
        Ok(list.into_list())
    }

    fn list_info(&self, list: &ListRef) -> Result<TwitterList> {
        let params = owner_params(list);
        let list: WireList = self.get("lists/show.json", &params)?;
        Ok(list.into_list())
    }

    fn search_tweets(&self, query: &str, req: &PageRequest) -> Result<ResultBatch<Status>> {
        let mut params = vec![("q", query.to_string())];
        params.extend(page_params(req));
        let page: WireSearchPage = self.get("search/tweets.json", &params)?;
        Ok(ResultBatch::new(into_statuses(page.statuses)))
    }

    fn favorites(&self, req: &PageRequest) -> Result<ResultBatch<Status>> {
        let statuses: Vec<WireStatus> = self.get("favorites/list.json", &page_params(req))?;
        Ok(ResultBatch::new(into_statuses(statuses)))
    }

    fn mentions(&self, req: &PageRequest) -> Result<ResultBatch<Status>> {
        let statuses: Vec<WireStatus> =
            self.get("statuses/mentions_timeline.json", &page_params(req))?;
        Ok(ResultBatch::new(into_statuses(statuses)))
    }

    fn retweets(&self, req: &PageRequest) -> Result<ResultBatch<Status>> {
        let statuses: Vec<WireStatus> =
            self.get("statuses/retweeted_by_me.json", &page_params(req))?;
        Ok(ResultBatch::new(into_statuses(statuses)))
    }

    fn user_timeline(&self, user: &UserRef, req: &PageRequest) -> Result<ResultBatch<Status>> {
        let mut params = vec![user_param(user)];
        params.extend(page_params(req));
        let statuses: Vec<WireStatus> = self.get("statuses/user_timeline.json", &params)?;
        Ok(ResultBatch::new(into_statuses(statuses)))
    }

    fn home_timeline(&self, req: &PageRequest) -> Result<ResultBatch<Status>> {
        let statuses: Vec<WireStatus> =
            self.get("statuses/home_timeline.json", &page_params(req))?;
        Ok(ResultBatch::new(into_statuses(statuses)))
    }

    fn user_search(&self, query: &str, req: &PageRequest) -> Result<ResultBatch<User>> {
        let mut params = vec![("q", query.to_string())];
        params.extend(page_params(req));
        let users: Vec<WireUser> = self.get("users/search.json", &params)?;
        Ok(ResultBatch::new(
            users.into_iter().map(WireUser::into_user).collect(),
        ))
    }
}

fn into_statuses(statuses: Vec<WireStatus>) -> Vec<Status> {
    statuses.into_iter().map(WireStatus::into_status).collect()
}

/// Twitter's legacy timestamp format, e.g. `Wed Aug 27 13:08:45 +0000 2008`.
mod twitter_time {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub const FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

    pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_str(&raw, FORMAT)
            .map(|t| t.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Deserialize)]
struct WireStatus {
    id: u64,
    #[serde(with = "twitter_time")]
    created_at: DateTime<Utc>,
    #[serde(alias = "full_text")]
    text: String,
    user: WireTweeter,
}

#[derive(Debug, Deserialize)]
struct WireTweeter {
    screen_name: String,
}

impl WireStatus {
    fn into_status(self) -> Status {
        Status {
            id: self.id,
            created_at: self.created_at,
            screen_name: self.user.screen_name,
            text: self.text,
        }
    }
}

#[derive(Debug, Deserialize)]
struct WireUser {
    id: u64,
    screen_name: String,
    name: String,
    #[serde(with = "twitter_time")]
    created_at: DateTime<Utc>,
    #[serde(default)]
    statuses_count: u64,
    // The API spells this the British way.
    #[serde(default, alias = "favourites_count")]
    favorites_count: u64,
    #[serde(default)]
    listed_count: u64,
    #[serde(default)]
    friends_count: u64,
    #[serde(default)]
    followers_count: u64,
    status: Option<WireUserStatus>,
}

#[derive(Debug, Deserialize)]
struct WireUserStatus {
    #[serde(with = "twitter_time")]
    created_at: DateTime<Utc>,
}

impl WireUser {
    fn into_user(self) -> User {
        User {
            id: self.id,
            screen_name: self.screen_name,
            name: self.name,
            created_at: self.created_at,
            statuses_count: self.statuses_count,
            favorites_count: self.favorites_count,
            listed_count: self.listed_count,
            friends_count: self.friends_count,
            followers_count: self.followers_count,
            last_tweeted_at: self.status.map(|s| s.created_at),
        }
    }
}

#[derive(Debug, Deserialize)]
struct WireMemberPage {
    users: Vec<WireUser>,
    next_cursor: i64,
}

#[derive(Debug, Deserialize)]
struct WireSearchPage {
    statuses: Vec<WireStatus>,
}

#[derive(Debug, Deserialize)]
struct WireList {
    id: u64,
    slug: String,
    #[serde(with = "twitter_time")]
    created_at: DateTime<Utc>,
    user: WireTweeter,
    #[serde(default)]
    member_count: u64,
    #[serde(default)]
    subscriber_count: u64,
    mode: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    following: bool,
}

impl WireList {
    fn into_list(self) -> TwitterList {
        TwitterList {
            id: self.id,
            slug: self.slug,
            created_at: self.created_at,
            screen_name: self.user.screen_name,
            member_count: self.member_count,
            subscriber_count: self.subscriber_count,
            mode: self.mode,
            description: self.description.filter(|d| !d.is_empty()),
            following: self.following,
        }
    }
}

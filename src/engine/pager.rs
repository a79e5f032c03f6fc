#![forbid(unsafe_code)]

//! Multi-strategy pagination over an injected fetch function
//!
//! The pager repeatedly invokes a fetch closure with advancing pagination
//! state until the strategy's termination rule fires or an optional result
//! cap is reached, returning all items concatenated in call order. A fetch
//! failure aborts the loop and propagates; no partial result is returned.

use crate::error::Result;
use crate::types::PagedItem;

/// Pagination state handed to the fetch function on each call. Exactly one
/// kind applies per strategy; the strategy is chosen per endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    /// Cursor token; 0 requests the first page.
    Cursor { cursor: i64 },
    /// 1-based page number.
    Page { page: usize },
    /// Upper id bound; `None` on the first call fetches the most recent
    /// items. `count` is the fixed per-request size.
    MaxId { max_id: Option<u64>, count: usize },
    /// Fixed-size page with an explicit per-page count.
    Rpp { page: usize, per_page: usize },
}

/// The items returned by one fetch call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultBatch<T> {
    pub items: Vec<T>,
    /// Cursor for the next page; 0 means no next page. Only the cursor
    /// strategy reads this.
    pub next_cursor: i64,
}

impl<T> ResultBatch<T> {
    /// A batch for the non-cursor strategies.
    pub fn new(items: Vec<T>) -> Self {
        ResultBatch {
            items,
            next_cursor: 0,
        }
    }

    pub fn with_cursor(items: Vec<T>, next_cursor: i64) -> Self {
        ResultBatch { items, next_cursor }
    }
}

/// Pagination strategy, with its termination rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Follow `next_cursor` from each response until the 0 sentinel.
    /// Used for membership/follower-style listings.
    Cursor,
    /// Increment a 1-based page number; an empty page is the natural end.
    /// Used for paged search results.
    Page,
    /// Page backward in time: after each batch, request items older than
    /// the oldest id seen. An empty batch ends pagination. `count` is the
    /// fixed per-request size the endpoint accepts.
    MaxId { count: usize },
    /// Results-per-page: fixed page size, a short page signals the end.
    Rpp { per_page: usize },
}

/// Executes repeated fetch calls under `strategy` until termination,
/// returning all items in call order, truncated to `cap` when given.
///
/// The cap counts raw fetched items; once the accumulated count reaches it,
/// no further call is issued. Without a cap, pagination runs to the
/// strategy's natural end. Note that an upstream short page (for example
/// under rate limiting) is indistinguishable from end-of-data for the page
/// and rpp strategies and terminates them; this is an accepted
/// approximation.
pub fn paginate<T, F>(strategy: Strategy, cap: Option<usize>, mut fetch: F) -> Result<Vec<T>>
where
    T: PagedItem,
    F: FnMut(&PageRequest) -> Result<ResultBatch<T>>,
{
    let mut items: Vec<T> = Vec::new();

    match strategy {
        Strategy::Cursor => {
            let mut cursor = 0i64;
            loop {
                if reached_cap(&items, cap) {
                    break;
                }
                let batch = fetch(&PageRequest::Cursor { cursor })?;
                cursor = batch.next_cursor;
                items.extend(batch.items);
                if cursor == 0 {
                    break;
                }
            }
        }
        Strategy::Page => {
            let mut page = 1;
            loop {
                if reached_cap(&items, cap) {
                    break;
                }
                let batch = fetch(&PageRequest::Page { page })?;
                if batch.items.is_empty() {
                    break;
                }
                items.extend(batch.items);
                page += 1;
            }
        }
        Strategy::MaxId { count } => {
            let mut max_id = None;
            loop {
                if reached_cap(&items, cap) {
                    break;
                }
                let batch = fetch(&PageRequest::MaxId { max_id, count })?;
                // Ids decrease with recency, so the minimum is the oldest
                // item in the batch. Preserved as-is even if a batch were
                // unsorted.
                let Some(oldest) = batch.items.iter().map(PagedItem::item_id).min() else {
                    break;
                };
                max_id = Some(oldest.saturating_sub(1));
                items.extend(batch.items);
            }
        }
        Strategy::Rpp { per_page } => {
            let mut page = 1;
            loop {
                if reached_cap(&items, cap) {
                    break;
                }
                let batch = fetch(&PageRequest::Rpp { page, per_page })?;
                let short = batch.items.len() < per_page;
                items.extend(batch.items);
                if short {
                    break;
                }
                page += 1;
            }
        }
    }

    if let Some(cap) = cap {
        items.truncate(cap);
    }
    Ok(items)
}

fn reached_cap<T>(items: &[T], cap: Option<usize>) -> bool {
    cap.is_some_and(|cap| items.len() >= cap)
}

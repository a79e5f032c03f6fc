#![forbid(unsafe_code)]

//! Post-pagination aggregation: filter, sort, reverse, cap
//!
//! The aggregator wraps the pager and applies result policy in a fixed
//! order once pagination completes: regex filter, sort, reverse, cap
//! truncation. The steps are pure functions of the collection and the
//! options; no network calls happen here.

use std::cmp::Ordering;

use regex::{Regex, RegexBuilder};

use crate::engine::pager::{self, PageRequest, ResultBatch, Strategy};
use crate::error::Result;
use crate::types::PagedItem;

type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering>;

/// Aggregation policy applied to a completed pagination run.
pub struct Aggregator<T> {
    filter: Option<Regex>,
    sort: Option<Comparator<T>>,
    reverse: bool,
    cap: Option<usize>,
}

impl<T: PagedItem> Aggregator<T> {
    pub fn new() -> Self {
        Aggregator {
            filter: None,
            sort: None,
            reverse: false,
            cap: None,
        }
    }

    /// Keep only items whose text matches `pattern`, case-insensitively.
    /// Applied after pagination completes, so it never limits how many raw
    /// items are fetched.
    pub fn filter(mut self, pattern: &str) -> Result<Self> {
        let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        self.filter = Some(regex);
        Ok(self)
    }

    /// Sort with the given comparator. Exactly one sort key is active at a
    /// time; the sort is stable.
    pub fn sort_by(mut self, compare: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
        self.sort = Some(Box::new(compare));
        self
    }

    /// Invert the final order.
    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Maximum number of raw items to fetch and retain. Enforced during
    /// pagination and again at the end of the pipeline.
    pub fn cap(mut self, cap: Option<usize>) -> Self {
        self.cap = cap;
        self
    }

    /// Runs pagination under `strategy`, then applies the aggregation steps.
    pub fn collect<F>(&self, strategy: Strategy, fetch: F) -> Result<Vec<T>>
    where
        F: FnMut(&PageRequest) -> Result<ResultBatch<T>>,
    {
        let items = pager::paginate(strategy, self.cap, fetch)?;
        Ok(self.apply(items))
    }

    /// The aggregation steps alone: filter, sort, reverse, cap, in that
    /// order. Pure; useful directly in tests.
    pub fn apply(&self, mut items: Vec<T>) -> Vec<T> {
        if let Some(regex) = &self.filter {
            items.retain(|item| regex.is_match(item.match_text()));
        }
        if let Some(compare) = &self.sort {
            items.sort_by(|a, b| compare(a, b));
        }
        if self.reverse {
            items.reverse();
        }
        if let Some(cap) = self.cap {
            items.truncate(cap);
        }
        items
    }
}

impl<T: PagedItem> Default for Aggregator<T> {
    fn default() -> Self {
        Aggregator::new()
    }
}

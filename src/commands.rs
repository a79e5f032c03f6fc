//! Command handlers for the list and search groups
//!
//! Handlers resolve user-supplied references, bind fetch closures to a
//! pagination strategy, and run the aggregator. They return data for the
//! renderer and never format output themselves.

pub mod list;
pub mod search;

use crate::engine::Aggregator;
use crate::types::{User, UserOrder};

/// Default number of results for the capped timeline/search commands.
pub const DEFAULT_NUM_RESULTS: usize = 20;

/// Largest per-request count the timeline and search endpoints accept.
pub const MAX_NUM_RESULTS: usize = 200;

/// Ordering options shared by the user-listing commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortOptions {
    pub order: UserOrder,
    /// Skip sorting entirely, keeping arrival order.
    pub unsorted: bool,
    pub reverse: bool,
}

/// An aggregator preconfigured with the user ordering options.
fn user_aggregator(opts: SortOptions) -> Aggregator<User> {
    let mut agg = Aggregator::new().reverse(opts.reverse);
    if !opts.unsorted {
        let order = opts.order;
        agg = agg.sort_by(move |a, b| order.compare(a, b));
    }
    agg
}

//! Pagination and aggregation engine

pub mod aggregator;
pub mod pager;
pub mod retry;

pub use aggregator::Aggregator;
pub use pager::{PageRequest, ResultBatch, Strategy, paginate};

#![forbid(unsafe_code)]

//! Chirp: a command-line Twitter client
//!
//! Chirp covers the `list` and `search` command groups. Each command
//! resolves its arguments, paginates a remote API endpoint through the
//! engine's fetch loop, aggregates the results, and renders them as
//! columnar text or CSV.

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod types;

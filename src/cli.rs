//! CLI argument parsing and command dispatch

pub mod args;
pub mod dispatch;

pub use args::{Cli, ColorArg, Command};
pub use dispatch::run;

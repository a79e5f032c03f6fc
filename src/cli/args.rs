#![forbid(unsafe_code)]

//! Clap argument definitions for the `chirp` binary

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::types::UserOrder;

#[derive(Debug, Parser)]
#[command(name = "chirp", version, about = "A command-line Twitter client")]
pub struct Cli {
    /// Path to the settings file (default: ~/.chirp.toml).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// When to colorize output.
    #[arg(long, global = true, value_enum, value_name = "WHEN")]
    pub color: Option<ColorArg>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage Twitter lists.
    #[command(subcommand)]
    List(ListCommand),
    /// Search tweets and users.
    #[command(subcommand)]
    Search(SearchCommand),
}

#[derive(Debug, Subcommand)]
pub enum ListCommand {
    /// Add members to a list you own.
    Add {
        /// Treat USERS as user IDs instead of screen names.
        #[arg(short = 'i', long)]
        id: bool,
        /// Slug of the list.
        list: String,
        /// Users to add.
        #[arg(required = true)]
        users: Vec<String>,
    },
    /// Create a new list.
    Create {
        /// Make the new list private.
        #[arg(short = 'p', long)]
        private: bool,
        /// Slug of the new list.
        list: String,
        /// Optional description.
        description: Option<String>,
    },
    /// Show detailed information about a list.
    #[command(alias = "details")]
    Information {
        #[command(flatten)]
        csv: CsvFlag,
        /// Treat LIST as `[owner_id/]slug` with IDs instead of screen names.
        #[arg(short = 'i', long)]
        id: bool,
        /// List reference: `[owner/]slug`.
        list: String,
    },
    /// List the members of a list.
    Members {
        #[command(flatten)]
        output: UserOutputArgs,
        /// Treat LIST as `[owner_id/]slug` with IDs instead of screen names.
        #[arg(short = 'i', long)]
        id: bool,
        /// List reference: `[owner/]slug`.
        list: String,
    },
    /// Remove members from a list you own.
    Remove {
        /// Treat USERS as user IDs instead of screen names.
        #[arg(short = 'i', long)]
        id: bool,
        /// Slug of the list.
        list: String,
        /// Users to remove.
        #[arg(required = true)]
        users: Vec<String>,
    },
    /// Show tweets posted by a list's members.
    #[command(alias = "tl")]
    Timeline {
        #[command(flatten)]
        output: StatusOutputArgs,
        /// Treat LIST as `[owner_id/]slug` with IDs instead of screen names.
        #[arg(short = 'i', long)]
        id: bool,
        /// Number of tweets to return.
        #[arg(short = 'n', long, value_name = "NUMBER")]
        number: Option<usize>,
        /// Reverse the order of the results.
        #[arg(short = 'r', long)]
        reverse: bool,
        /// List reference: `[owner/]slug`.
        list: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum SearchCommand {
    /// Search all public tweets.
    All {
        #[command(flatten)]
        output: StatusOutputArgs,
        /// Number of tweets to return.
        #[arg(short = 'n', long, value_name = "NUMBER")]
        number: Option<usize>,
        /// Reverse the order of the results.
        #[arg(short = 'r', long)]
        reverse: bool,
        query: String,
    },
    /// Search your favorited tweets.
    #[command(alias = "faves")]
    Favorites {
        #[command(flatten)]
        output: StatusOutputArgs,
        query: String,
    },
    /// Search tweets posted by a list's members.
    List {
        #[command(flatten)]
        output: StatusOutputArgs,
        /// Treat LIST as `[owner_id/]slug` with IDs instead of screen names.
        #[arg(short = 'i', long)]
        id: bool,
        /// List reference: `[owner/]slug`.
        list: String,
        query: String,
    },
    /// Search tweets mentioning you.
    #[command(alias = "replies")]
    Mentions {
        #[command(flatten)]
        output: StatusOutputArgs,
        query: String,
    },
    /// Search tweets you have retweeted.
    #[command(alias = "rts")]
    Retweets {
        #[command(flatten)]
        output: StatusOutputArgs,
        query: String,
    },
    /// Search your home timeline, or a user's timeline.
    #[command(alias = "tl")]
    Timeline {
        #[command(flatten)]
        output: StatusOutputArgs,
        /// Treat USER as a user ID instead of a screen name.
        #[arg(short = 'i', long)]
        id: bool,
        /// `[USER] QUERY`: with one argument, searches your home timeline.
        #[arg(num_args = 1..=2, value_name = "[USER] QUERY", required = true)]
        args: Vec<String>,
    },
    /// Search Twitter users.
    Users {
        #[command(flatten)]
        output: UserOutputArgs,
        query: String,
    },
}

/// Output flags shared by the status-producing commands.
#[derive(Debug, Clone, Copy, Args)]
pub struct StatusOutputArgs {
    /// Output in CSV format.
    #[arg(short = 'c', long)]
    pub csv: bool,
    /// Output in long format.
    #[arg(short = 'l', long)]
    pub long: bool,
}

/// Output and ordering flags shared by the user-listing commands.
#[derive(Debug, Clone, Copy, Args)]
pub struct UserOutputArgs {
    /// Output in CSV format.
    #[arg(short = 'c', long)]
    pub csv: bool,
    /// Output in long format.
    #[arg(short = 'l', long)]
    pub long: bool,
    /// Reverse the order of the results.
    #[arg(short = 'r', long)]
    pub reverse: bool,
    /// Field to sort by.
    #[arg(short = 's', long, value_enum, default_value = "screen-name")]
    pub sort: UserOrder,
    /// Skip sorting, keeping arrival order.
    #[arg(short = 'u', long)]
    pub unsorted: bool,
}

/// Lone CSV flag for the single-record commands.
#[derive(Debug, Clone, Copy, Args)]
pub struct CsvFlag {
    /// Output in CSV format.
    #[arg(short = 'c', long)]
    pub csv: bool,
}

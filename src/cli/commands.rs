//! CLI commands and argument parsing

use crate::client::CursorQueryParameters;
use crate::models::UserRef;
use crate::pagination::Cursor;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// Social network API command-line client
#[derive(Parser, Debug)]
#[command(name = "social-sdk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Client configuration file (YAML or JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
///
/// A user is given as a numeric id, `@screen_name` or a bare screen name.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the authenticated user
    Me,

    /// Show one user
    User {
        /// User to show
        #[arg(value_parser = UserRef::from_str)]
        user: UserRef,
    },

    /// List ids a user follows (the authenticated user by default)
    FriendIds {
        #[arg(value_parser = UserRef::from_str)]
        user: Option<UserRef>,

        #[command(flatten)]
        paging: PagingArgs,
    },

    /// List ids following a user (the authenticated user by default)
    FollowerIds {
        #[arg(value_parser = UserRef::from_str)]
        user: Option<UserRef>,

        #[command(flatten)]
        paging: PagingArgs,
    },

    /// List ids of blocked users
    BlockedIds {
        #[command(flatten)]
        paging: PagingArgs,
    },

    /// List blocked users
    BlockedUsers {
        #[command(flatten)]
        paging: PagingArgs,
    },

    /// List ids of users asking to follow you
    PendingRequests {
        #[command(flatten)]
        paging: PagingArgs,
    },

    /// List ids of protected users you asked to follow
    OutgoingRequests {
        #[command(flatten)]
        paging: PagingArgs,
    },

    /// List ids of muted users
    MutedIds {
        #[command(flatten)]
        paging: PagingArgs,
    },

    /// Show the relationship between two users
    Relationship {
        #[arg(value_parser = UserRef::from_str)]
        source: UserRef,
        #[arg(value_parser = UserRef::from_str)]
        target: UserRef,
    },
}

/// Paging flags shared by the list commands
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct PagingArgs {
    /// Stop after this many items
    #[arg(long)]
    pub max_items: Option<usize>,

    /// Items per request (endpoint maximum by default)
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Resume from a cursor printed by an earlier run
    #[arg(long, allow_negative_numbers = true)]
    pub cursor: Option<i64>,
}

impl PagingArgs {
    pub fn to_params(self) -> CursorQueryParameters {
        CursorQueryParameters {
            page_size: self.page_size,
            start_cursor: self.cursor.map(Cursor::new),
            max_items: self.max_items,
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}

//! CLI module
//!
//! Command-line interface over the API client.
//!
//! # Commands
//!
//! - `me` / `user` - Show a user
//! - `friend-ids` / `follower-ids` - Walk the social graph
//! - `blocked-ids` / `blocked-users` / `muted-ids` - Blocks and mutes
//! - `pending-requests` / `outgoing-requests` - Follow requests
//! - `relationship` - Relationship between two users

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, PagingArgs};
pub use runner::Runner;

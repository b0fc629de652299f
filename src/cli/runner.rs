//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat, PagingArgs};
use crate::client::Client;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::pagination::{Cursor, PageIterator};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

/// One page of a listing as printed by the list commands
#[derive(Serialize)]
struct PageMessage<T> {
    #[serde(rename = "type")]
    kind: &'static str,
    items: Vec<T>,
    previous_cursor: Cursor,
    next_cursor: Cursor,
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = self.client()?;
        self.run_with(&client).await
    }

    /// Run the CLI command against an existing client
    pub async fn run_with(&self, client: &Client) -> Result<()> {
        match &self.cli.command {
            Commands::Me => {
                let user = client.users().get_authenticated_user().await?;
                self.output(&user)
            }
            Commands::User { user } => {
                let user = client.users().get_user(user.clone()).await?;
                self.output(&user)
            }
            Commands::FriendIds { user, paging } => {
                let users = client.users();
                let pages = match user {
                    Some(user) => users.get_friend_ids_of(user.clone(), paging.to_params())?,
                    None => users.get_friend_ids(paging.to_params())?,
                };
                self.output_pages(pages, paging).await
            }
            Commands::FollowerIds { user, paging } => {
                let users = client.users();
                let pages = match user {
                    Some(user) => users.get_follower_ids_of(user.clone(), paging.to_params())?,
                    None => users.get_follower_ids(paging.to_params())?,
                };
                self.output_pages(pages, paging).await
            }
            Commands::BlockedIds { paging } => {
                let pages = client.users().get_blocked_user_ids(paging.to_params())?;
                self.output_pages(pages, paging).await
            }
            Commands::BlockedUsers { paging } => {
                let pages = client.users().get_blocked_users(paging.to_params())?;
                self.output_pages(pages, paging).await
            }
            Commands::PendingRequests { paging } => {
                let pages = client
                    .account()
                    .get_user_ids_requesting_friendship(paging.to_params())?;
                self.output_pages(pages, paging).await
            }
            Commands::OutgoingRequests { paging } => {
                let pages = client
                    .account()
                    .get_user_ids_you_requested_to_follow(paging.to_params())?;
                self.output_pages(pages, paging).await
            }
            Commands::MutedIds { paging } => {
                let pages = client.account().get_muted_user_ids(paging.to_params())?;
                self.output_pages(pages, paging).await
            }
            Commands::Relationship { source, target } => {
                let details = client
                    .friendships()
                    .get_relationship_between(source.clone(), target.clone())
                    .await?;
                self.output(&details)
            }
        }
    }

    /// Build the client from the `--config` file
    fn client(&self) -> Result<Client> {
        let path = self
            .cli
            .config
            .as_ref()
            .ok_or_else(|| Error::config("Config file not specified (use --config)"))?;
        let config = ClientConfig::load(path)?;
        Client::new(&config)
    }

    /// Print every page of a listing.
    ///
    /// Items past `--max-items` are dropped from the last page.
    async fn output_pages<T>(&self, mut pages: PageIterator<T>, paging: &PagingArgs) -> Result<()>
    where
        T: Serialize + Send + 'static,
    {
        let mut printed = 0usize;

        while pages.has_next() {
            let page = pages.next_page().await?;
            let mut items = page.items;
            if let Some(max) = paging.max_items {
                items.truncate(max.saturating_sub(printed));
            }
            printed += items.len();

            let message = PageMessage {
                kind: "PAGE",
                items,
                previous_cursor: page.previous_cursor,
                next_cursor: page.next_cursor,
            };
            self.output(&message)?;
        }

        info!(
            items = printed,
            pages = pages.state().pages_fetched,
            "Listing complete"
        );
        Ok(())
    }

    fn output<T: Serialize>(&self, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)?;
        self.output_message(&value);
        Ok(())
    }

    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}

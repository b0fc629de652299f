//! Follow requests, mutes and settings of the authenticated account

use super::params::{
    cursored, hydrated_users, CursorQueryParameters, DEFAULT_ID_PAGE_SIZE, DEFAULT_USER_PAGE_SIZE,
};
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use crate::models::{AccountSettings, User, UserRef};
use crate::pagination::PageIterator;
use std::sync::Arc;

/// Client for the account endpoints
#[derive(Debug, Clone)]
pub struct AccountClient {
    http: Arc<HttpClient>,
}

impl AccountClient {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Ids of users waiting for the authenticated (protected) account to
    /// accept their follow request
    pub fn get_user_ids_requesting_friendship(
        &self,
        params: CursorQueryParameters,
    ) -> Result<PageIterator<u64>> {
        self.ids("friendships/incoming.json", params)
    }

    /// Ids of protected users with a pending follow request from the
    /// authenticated account
    pub fn get_user_ids_you_requested_to_follow(
        &self,
        params: CursorQueryParameters,
    ) -> Result<PageIterator<u64>> {
        self.ids("friendships/outgoing.json", params)
    }

    /// Protected users with a pending follow request from the authenticated
    /// account
    pub fn get_users_you_requested_to_follow(
        &self,
        params: CursorQueryParameters,
    ) -> Result<PageIterator<User>> {
        hydrated_users(
            Arc::clone(&self.http),
            "friendships/outgoing.json",
            RequestConfig::new(),
            params,
        )
    }

    pub fn get_muted_user_ids(&self, params: CursorQueryParameters) -> Result<PageIterator<u64>> {
        self.ids("mutes/users/ids.json", params)
    }

    pub fn get_muted_users(&self, params: CursorQueryParameters) -> Result<PageIterator<User>> {
        cursored(
            Arc::clone(&self.http),
            "mutes/users/list.json",
            RequestConfig::new().query("skip_status", true),
            params,
            DEFAULT_USER_PAGE_SIZE,
        )
    }

    pub async fn mute_user(&self, user: UserRef) -> Result<User> {
        self.user_action("mutes/users/create.json", &user).await
    }

    pub async fn unmute_user(&self, user: UserRef) -> Result<User> {
        self.user_action("mutes/users/destroy.json", &user).await
    }

    pub async fn get_account_settings(&self) -> Result<AccountSettings> {
        self.http
            .get_json("account/settings.json", RequestConfig::new())
            .await
    }

    fn ids(&self, path: &'static str, params: CursorQueryParameters) -> Result<PageIterator<u64>> {
        cursored(
            Arc::clone(&self.http),
            path,
            RequestConfig::new(),
            params,
            DEFAULT_ID_PAGE_SIZE,
        )
    }

    async fn user_action(&self, path: &str, user: &UserRef) -> Result<User> {
        user.validate("user")?;
        let (key, value) = user.query_pair();
        self.http
            .post_json(path, RequestConfig::new().query(key, value))
            .await
    }
}

//! User lookups, social graph listings and block/follow actions

use super::params::{
    cursored, CursorQueryParameters, DEFAULT_ID_PAGE_SIZE, DEFAULT_USER_PAGE_SIZE,
};
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::models::{ImageSize, User, UserRef};
use crate::pagination::PageIterator;
use bytes::Bytes;
use std::sync::Arc;
use tracing::debug;

/// Most users `users/lookup` accepts in one call
pub const MAX_LOOKUP_USERS: usize = 100;

/// Client for the user endpoints
#[derive(Debug, Clone)]
pub struct UsersClient {
    http: Arc<HttpClient>,
}

impl UsersClient {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// The user the credentials belong to
    pub async fn get_authenticated_user(&self) -> Result<User> {
        self.http
            .get_json(
                "account/verify_credentials.json",
                RequestConfig::new().query("skip_status", true),
            )
            .await
    }

    pub async fn get_user(&self, user: UserRef) -> Result<User> {
        user.validate("user")?;
        self.http.get_json("users/show.json", user_query(&user)).await
    }

    /// Look up to [`MAX_LOOKUP_USERS`] users in one request.
    ///
    /// Unknown or suspended users are left out of the result rather than
    /// failing the call.
    pub async fn get_users(&self, users: &[UserRef]) -> Result<Vec<User>> {
        if users.is_empty() {
            return Ok(Vec::new());
        }
        if users.len() > MAX_LOOKUP_USERS {
            return Err(Error::invalid_parameter(
                "users",
                format!(
                    "at most {MAX_LOOKUP_USERS} users can be looked up at once, got {}",
                    users.len()
                ),
            ));
        }

        let config = lookup_query(users)?;
        debug!(count = users.len(), "Looking up users");
        self.http.get_json("users/lookup.json", config).await
    }

    /// Ids the authenticated user follows
    pub fn get_friend_ids(&self, params: CursorQueryParameters) -> Result<PageIterator<u64>> {
        self.ids("friends/ids.json", RequestConfig::new(), params)
    }

    /// Ids `user` follows
    pub fn get_friend_ids_of(
        &self,
        user: UserRef,
        params: CursorQueryParameters,
    ) -> Result<PageIterator<u64>> {
        user.validate("user")?;
        self.ids("friends/ids.json", user_query(&user), params)
    }

    /// Ids following the authenticated user
    pub fn get_follower_ids(&self, params: CursorQueryParameters) -> Result<PageIterator<u64>> {
        self.ids("followers/ids.json", RequestConfig::new(), params)
    }

    /// Ids following `user`
    pub fn get_follower_ids_of(
        &self,
        user: UserRef,
        params: CursorQueryParameters,
    ) -> Result<PageIterator<u64>> {
        user.validate("user")?;
        self.ids("followers/ids.json", user_query(&user), params)
    }

    pub fn get_blocked_user_ids(&self, params: CursorQueryParameters) -> Result<PageIterator<u64>> {
        self.ids("blocks/ids.json", RequestConfig::new(), params)
    }

    pub fn get_blocked_users(&self, params: CursorQueryParameters) -> Result<PageIterator<User>> {
        cursored(
            Arc::clone(&self.http),
            "blocks/list.json",
            RequestConfig::new().query("skip_status", true),
            params,
            DEFAULT_USER_PAGE_SIZE,
        )
    }

    pub async fn block_user(&self, user: UserRef) -> Result<User> {
        self.user_action("blocks/create.json", &user, RequestConfig::new()).await
    }

    pub async fn unblock_user(&self, user: UserRef) -> Result<User> {
        self.user_action("blocks/destroy.json", &user, RequestConfig::new()).await
    }

    /// Report `user` as a spammer, optionally blocking them as well
    pub async fn report_user_for_spam(&self, user: UserRef, perform_block: bool) -> Result<User> {
        self.user_action(
            "users/report_spam.json",
            &user,
            RequestConfig::new().query("perform_block", perform_block),
        )
        .await
    }

    pub async fn follow_user(&self, user: UserRef) -> Result<User> {
        self.user_action("friendships/create.json", &user, RequestConfig::new()).await
    }

    pub async fn unfollow_user(&self, user: UserRef) -> Result<User> {
        self.user_action("friendships/destroy.json", &user, RequestConfig::new()).await
    }

    /// Download the profile image of `user` in the given size
    pub async fn get_profile_image(&self, user: &User, size: ImageSize) -> Result<Bytes> {
        let url = user.profile_image_url(size).ok_or_else(|| {
            Error::invalid_parameter("user", format!("@{} has no profile image", user.screen_name))
        })?;
        debug!(%url, "Downloading profile image");
        self.http.get_bytes(&url).await
    }

    fn ids(
        &self,
        path: &'static str,
        base: RequestConfig,
        params: CursorQueryParameters,
    ) -> Result<PageIterator<u64>> {
        cursored(Arc::clone(&self.http), path, base, params, DEFAULT_ID_PAGE_SIZE)
    }

    async fn user_action(&self, path: &str, user: &UserRef, extra: RequestConfig) -> Result<User> {
        user.validate("user")?;
        let (key, value) = user.query_pair();
        self.http.post_json(path, extra.query(key, value)).await
    }
}

/// Hydrate `ids` into user objects, [`MAX_LOOKUP_USERS`] per request
pub(crate) async fn lookup_user_ids(http: &HttpClient, ids: &[u64]) -> Result<Vec<User>> {
    let mut users = Vec::with_capacity(ids.len());
    for batch in ids.chunks(MAX_LOOKUP_USERS) {
        let joined = batch
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        debug!(count = batch.len(), "Looking up users by id");
        let found: Vec<User> = http
            .get_json("users/lookup.json", RequestConfig::new().query("user_id", joined))
            .await?;
        users.extend(found);
    }
    Ok(users)
}

/// `user_id=..` or `screen_name=..`
pub(crate) fn user_query(user: &UserRef) -> RequestConfig {
    let (key, value) = user.query_pair();
    RequestConfig::new().query(key, value)
}

/// Comma-joined `user_id` and `screen_name` lists for the bulk endpoints
pub(crate) fn lookup_query(users: &[UserRef]) -> Result<RequestConfig> {
    let mut ids = Vec::new();
    let mut names = Vec::new();
    for user in users {
        user.validate("users")?;
        match user {
            UserRef::Id(id) => ids.push(id.to_string()),
            UserRef::ScreenName(name) => names.push(name.as_str()),
        }
    }

    Ok(RequestConfig::new()
        .query_opt("user_id", (!ids.is_empty()).then(|| ids.join(",")))
        .query_opt("screen_name", (!names.is_empty()).then(|| names.join(","))))
}

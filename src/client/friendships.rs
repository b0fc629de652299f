//! Relationships between users

use super::users::{lookup_query, lookup_user_ids, user_query};
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::models::{
    FriendshipAuthorizations, RelationshipDetails, RelationshipEnvelope, RelationshipState, User,
    UserRef,
};
use std::sync::Arc;

/// Most users `friendships/lookup` accepts in one call
pub const MAX_LOOKUP_RELATIONSHIPS: usize = 100;

/// Client for the friendship endpoints
#[derive(Debug, Clone)]
pub struct FriendshipsClient {
    http: Arc<HttpClient>,
}

impl FriendshipsClient {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Relationship between any two users
    pub async fn get_relationship_between(
        &self,
        source: UserRef,
        target: UserRef,
    ) -> Result<RelationshipDetails> {
        source.validate("source")?;
        target.validate("target")?;

        let (source_key, source_value) = source.query_pair_with("source_id", "source_screen_name");
        let (target_key, target_value) = target.query_pair_with("target_id", "target_screen_name");
        let config = RequestConfig::new()
            .query(source_key, source_value)
            .query(target_key, target_value);

        let envelope: RelationshipEnvelope =
            self.http.get_json("friendships/show.json", config).await?;
        Ok(envelope.relationship)
    }

    /// Relationships of the authenticated user with each of `users`
    pub async fn get_relationships_with(
        &self,
        users: &[UserRef],
    ) -> Result<Vec<RelationshipState>> {
        if users.is_empty() {
            return Err(Error::invalid_parameter("users", "target users cannot be empty"));
        }
        if users.len() > MAX_LOOKUP_RELATIONSHIPS {
            return Err(Error::invalid_parameter(
                "users",
                format!(
                    "at most {MAX_LOOKUP_RELATIONSHIPS} users per lookup, got {}",
                    users.len()
                ),
            ));
        }

        let config = lookup_query(users)?;
        self.http.get_json("friendships/lookup.json", config).await
    }

    /// Turn retweets and device notifications from `user` on or off
    pub async fn update_relationship(
        &self,
        user: UserRef,
        authorizations: FriendshipAuthorizations,
    ) -> Result<RelationshipDetails> {
        user.validate("user")?;
        let config = user_query(&user)
            .query("retweets", authorizations.retweets_enabled)
            .query("device", authorizations.device_notifications_enabled);

        let envelope: RelationshipEnvelope = self
            .http
            .post_json("friendships/update.json", config)
            .await?;
        Ok(envelope.relationship)
    }

    /// Ids of users whose retweets the authenticated user has turned off
    pub async fn get_user_ids_whose_retweets_are_muted(&self) -> Result<Vec<u64>> {
        self.http
            .get_json("friendships/no_retweets/ids.json", RequestConfig::new())
            .await
    }

    /// Users whose retweets the authenticated user has turned off
    pub async fn get_users_whose_retweets_are_muted(&self) -> Result<Vec<User>> {
        let ids = self.get_user_ids_whose_retweets_are_muted().await?;
        lookup_user_ids(&self.http, &ids).await
    }
}

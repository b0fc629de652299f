//! Relationship (friendship) objects

use serde::{Deserialize, Serialize};

/// One side of a relationship between two users
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipUser {
    pub id: u64,
    #[serde(default)]
    pub id_str: String,
    #[serde(default)]
    pub screen_name: String,
    #[serde(default)]
    pub following: bool,
    #[serde(default)]
    pub followed_by: bool,
    #[serde(default)]
    pub following_received: Option<bool>,
    #[serde(default)]
    pub following_requested: Option<bool>,
    #[serde(default)]
    pub notifications_enabled: Option<bool>,
    #[serde(default)]
    pub can_dm: Option<bool>,
    #[serde(default)]
    pub blocking: Option<bool>,
    #[serde(default)]
    pub blocked_by: Option<bool>,
    #[serde(default)]
    pub muting: Option<bool>,
    #[serde(default)]
    pub want_retweets: Option<bool>,
    #[serde(default)]
    pub marked_spam: Option<bool>,
}

/// Relationship between a source and a target user
///
/// Only the source side carries the authenticated-user specific flags
/// (blocking, muting, notifications...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipDetails {
    pub source: RelationshipUser,
    pub target: RelationshipUser,
}

impl RelationshipDetails {
    /// Source follows target and target follows source
    pub fn is_mutual(&self) -> bool {
        self.source.following && self.source.followed_by
    }
}

/// `friendships/show` wraps the details in a `relationship` object
#[derive(Debug, Deserialize)]
pub(crate) struct RelationshipEnvelope {
    pub relationship: RelationshipDetails,
}

/// Relationship of the authenticated user with one other user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipState {
    pub id: u64,
    #[serde(default)]
    pub id_str: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub screen_name: String,
    /// Raw connection flags, e.g. `following`, `followed_by`, `none`
    #[serde(default)]
    pub connections: Vec<String>,
}

impl RelationshipState {
    fn has(&self, connection: &str) -> bool {
        self.connections.iter().any(|c| c == connection)
    }

    pub fn following(&self) -> bool {
        self.has("following")
    }

    pub fn followed_by(&self) -> bool {
        self.has("followed_by")
    }

    pub fn following_requested(&self) -> bool {
        self.has("following_requested")
    }

    pub fn following_received(&self) -> bool {
        self.has("following_received")
    }

    pub fn blocking(&self) -> bool {
        self.has("blocking")
    }

    pub fn muting(&self) -> bool {
        self.has("muting")
    }
}

/// Per-relationship settings the authenticated user controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendshipAuthorizations {
    /// Show the target's retweets in the home timeline
    pub retweets_enabled: bool,
    /// Device notifications for the target's posts
    pub device_notifications_enabled: bool,
}

impl Default for FriendshipAuthorizations {
    fn default() -> Self {
        Self {
            retweets_enabled: true,
            device_notifications_enabled: false,
        }
    }
}

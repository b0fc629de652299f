//! User objects and user references

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Timestamp layout used by the API, e.g. `Wed Oct 10 20:19:24 +0000 2018`
const API_DATE_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

// ============================================================================
// User Reference
// ============================================================================

/// Identifies a user either by numeric id or by screen name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRef {
    /// Numeric user id
    Id(u64),
    /// Screen name, without the leading `@`
    ScreenName(String),
}

impl UserRef {
    /// Reference a user by id
    pub fn id(id: u64) -> Self {
        Self::Id(id)
    }

    /// Reference a user by screen name; a leading `@` is dropped
    pub fn screen_name(name: impl Into<String>) -> Self {
        let name = name.into();
        match name.strip_prefix('@') {
            Some(stripped) => Self::ScreenName(stripped.to_string()),
            None => Self::ScreenName(name),
        }
    }

    /// Fail with `InvalidParameter` when the reference cannot identify anyone
    pub fn validate(&self, parameter: &str) -> Result<()> {
        match self {
            Self::Id(0) => Err(Error::invalid_parameter(
                parameter,
                "user id must be greater than zero",
            )),
            Self::ScreenName(name) if name.trim().is_empty() => Err(Error::invalid_parameter(
                parameter,
                "screen name cannot be empty",
            )),
            _ => Ok(()),
        }
    }

    /// Query parameter for endpoints taking `user_id` / `screen_name`
    pub fn query_pair(&self) -> (&'static str, String) {
        self.query_pair_with("user_id", "screen_name")
    }

    /// Query parameter using endpoint-specific key names
    pub fn query_pair_with(
        &self,
        id_key: &'static str,
        name_key: &'static str,
    ) -> (&'static str, String) {
        match self {
            Self::Id(id) => (id_key, id.to_string()),
            Self::ScreenName(name) => (name_key, name.clone()),
        }
    }
}

impl fmt::Display for UserRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::ScreenName(name) => write!(f, "@{name}"),
        }
    }
}

impl FromStr for UserRef {
    type Err = Error;

    /// Digits parse as an id, anything else (optionally `@`-prefixed) as a screen name
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::invalid_parameter("user", "user reference cannot be empty"));
        }
        let user = match s.parse::<u64>() {
            Ok(id) => Self::Id(id),
            Err(_) => Self::screen_name(s),
        };
        user.validate("user")?;
        Ok(user)
    }
}

impl From<u64> for UserRef {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl From<&User> for UserRef {
    fn from(user: &User) -> Self {
        Self::Id(user.id)
    }
}

// ============================================================================
// User
// ============================================================================

/// Size variants of a profile image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSize {
    /// 48x48
    #[default]
    Normal,
    /// 73x73
    Bigger,
    /// 24x24
    Mini,
    /// As uploaded
    Original,
}

impl ImageSize {
    fn suffix(self) -> &'static str {
        match self {
            Self::Normal => "_normal",
            Self::Bigger => "_bigger",
            Self::Mini => "_mini",
            Self::Original => "",
        }
    }
}

/// A user account as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub id_str: String,
    #[serde(default)]
    pub name: String,
    pub screen_name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub protected: bool,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub followers_count: u64,
    #[serde(default)]
    pub friends_count: u64,
    #[serde(default)]
    pub listed_count: u64,
    #[serde(default)]
    pub favourites_count: u64,
    #[serde(default)]
    pub statuses_count: u64,
    #[serde(default, deserialize_with = "deserialize_api_date")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub profile_image_url_https: Option<String>,

    /// Whether the authenticated user follows this user
    #[serde(default)]
    pub following: Option<bool>,
    /// Whether the authenticated user asked to follow this protected user
    #[serde(default)]
    pub follow_request_sent: Option<bool>,
    #[serde(default)]
    pub muting: Option<bool>,
    #[serde(default)]
    pub blocking: Option<bool>,
}

impl User {
    /// Reference to this user
    pub fn user_ref(&self) -> UserRef {
        UserRef::from(self)
    }

    /// Profile image URL for the given size
    pub fn profile_image_url(&self, size: ImageSize) -> Option<String> {
        let url = self.profile_image_url_https.as_deref()?;
        if size == ImageSize::Normal {
            return Some(url.to_string());
        }

        Some(url.replacen("_normal", size.suffix(), 1))
    }
}

fn deserialize_api_date<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        Some(s) => DateTime::parse_from_str(&s, API_DATE_FORMAT)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

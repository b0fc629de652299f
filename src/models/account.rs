//! Account settings of the authenticated user

use serde::{Deserialize, Serialize};

/// Settings returned by `account/settings`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSettings {
    #[serde(default)]
    pub screen_name: String,
    #[serde(default)]
    pub protected: bool,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub always_use_https: bool,
    #[serde(default)]
    pub discoverable_by_email: bool,
    #[serde(default)]
    pub geo_enabled: bool,
    #[serde(default)]
    pub use_cookie_personalization: bool,
    #[serde(default)]
    pub allow_contributor_request: Option<String>,
    #[serde(default)]
    pub allow_dms_from: Option<String>,
    #[serde(default)]
    pub sleep_time: SleepTime,
    #[serde(default)]
    pub time_zone: Option<TimeZone>,
}

/// Hours during which notifications are muted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepTime {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub start_time: Option<u8>,
    #[serde(default)]
    pub end_time: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeZone {
    pub name: String,
    #[serde(default)]
    pub tzinfo_name: Option<String>,
    #[serde(default)]
    pub utc_offset: i32,
}

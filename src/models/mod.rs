//! Domain objects returned by the API
//!
//! Each type deserializes straight from the API's JSON shape. Unknown
//! fields are ignored so new server fields never break decoding.

mod account;
mod relationship;
mod user;

pub use account::{AccountSettings, SleepTime, TimeZone};
pub(crate) use relationship::RelationshipEnvelope;
pub use relationship::{
    FriendshipAuthorizations, RelationshipDetails, RelationshipState, RelationshipUser,
};
pub use user::{ImageSize, User, UserRef};

//! User Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// User UUID
pub type UserUuid = TypedUuid<UserRecord>;

/// User Record
///
/// Every product, category and supplier is owned by exactly one user.
#[derive(Debug, Clone)]
pub struct UserRecord {
    /// Unique user identifier.
    pub uuid: UserUuid,

    /// Human-readable user name.
    pub name: String,

    /// User creation timestamp.
    pub created_at: Timestamp,
}

//! Category Records

use jiff::Timestamp;

use crate::{domain::users::records::UserUuid, uuids::TypedUuid};

/// Category UUID
pub type CategoryUuid = TypedUuid<CategoryRecord>;

/// Category Record
#[derive(Debug, Clone)]
pub struct CategoryRecord {
    pub uuid: CategoryUuid,
    pub owner: UserUuid,
    pub name: String,
    pub created_at: Timestamp,
}

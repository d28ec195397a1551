//! Supplier Records

use jiff::Timestamp;

use crate::{domain::users::records::UserUuid, uuids::TypedUuid};

/// Supplier UUID
pub type SupplierUuid = TypedUuid<SupplierRecord>;

/// Supplier Record
#[derive(Debug, Clone)]
pub struct SupplierRecord {
    pub uuid: SupplierUuid,
    pub owner: UserUuid,
    pub name: String,
    pub created_at: Timestamp,
}

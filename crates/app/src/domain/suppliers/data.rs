//! Supplier Data

use crate::domain::suppliers::records::SupplierUuid;

/// New Supplier Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewSupplier {
    pub uuid: SupplierUuid,
    pub name: String,
}

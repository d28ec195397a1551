//! Suppliers service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;

use crate::domain::{
    suppliers::{
        data::NewSupplier, errors::SuppliersServiceError, records::SupplierRecord,
        repository::PgSuppliersRepository,
    },
    users::records::UserUuid,
};

#[derive(Debug, Clone)]
pub struct PgSuppliersService {
    repository: PgSuppliersRepository,
}

impl PgSuppliersService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgSuppliersRepository::new(pool),
        }
    }
}

#[async_trait]
impl SuppliersService for PgSuppliersService {
    async fn create_supplier(
        &self,
        owner: UserUuid,
        supplier: NewSupplier,
    ) -> Result<SupplierRecord, SuppliersServiceError> {
        self.repository
            .create_supplier(owner, supplier)
            .await
            .map_err(Into::into)
    }

    async fn list_suppliers(
        &self,
        owner: UserUuid,
    ) -> Result<Vec<SupplierRecord>, SuppliersServiceError> {
        self.repository
            .list_suppliers(owner)
            .await
            .map_err(Into::into)
    }
}

#[automock]
#[async_trait]
pub trait SuppliersService: Send + Sync {
    /// Creates a supplier owned by `owner`.
    async fn create_supplier(
        &self,
        owner: UserUuid,
        supplier: NewSupplier,
    ) -> Result<SupplierRecord, SuppliersServiceError>;

    /// Lists the suppliers owned by `owner`, sorted by name.
    async fn list_suppliers(
        &self,
        owner: UserUuid,
    ) -> Result<Vec<SupplierRecord>, SuppliersServiceError>;
}

//! Suppliers Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};

use crate::domain::{
    suppliers::{
        data::NewSupplier,
        records::{SupplierRecord, SupplierUuid},
    },
    users::records::UserUuid,
};

const CREATE_SUPPLIER_SQL: &str = include_str!("sql/create_supplier.sql");
const LIST_SUPPLIERS_SQL: &str = include_str!("sql/list_suppliers.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgSuppliersRepository {
    pool: PgPool,
}

impl PgSuppliersRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn create_supplier(
        &self,
        owner: UserUuid,
        supplier: NewSupplier,
    ) -> Result<SupplierRecord, sqlx::Error> {
        query_as::<Postgres, SupplierRecord>(CREATE_SUPPLIER_SQL)
            .bind(supplier.uuid.into_uuid())
            .bind(owner.into_uuid())
            .bind(supplier.name)
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn list_suppliers(
        &self,
        owner: UserUuid,
    ) -> Result<Vec<SupplierRecord>, sqlx::Error> {
        query_as::<Postgres, SupplierRecord>(LIST_SUPPLIERS_SQL)
            .bind(owner.into_uuid())
            .fetch_all(&self.pool)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for SupplierRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: SupplierUuid::from_uuid(row.try_get("uuid")?),
            owner: UserUuid::from_uuid(row.try_get("user_uuid")?),
            name: row.try_get("name")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}

//! Categories Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};

use crate::domain::{
    categories::{
        data::NewCategory,
        records::{CategoryRecord, CategoryUuid},
    },
    users::records::UserUuid,
};

const CREATE_CATEGORY_SQL: &str = include_str!("sql/create_category.sql");
const LIST_CATEGORIES_SQL: &str = include_str!("sql/list_categories.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgCategoriesRepository {
    pool: PgPool,
}

impl PgCategoriesRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn create_category(
        &self,
        owner: UserUuid,
        category: NewCategory,
    ) -> Result<CategoryRecord, sqlx::Error> {
        query_as::<Postgres, CategoryRecord>(CREATE_CATEGORY_SQL)
            .bind(category.uuid.into_uuid())
            .bind(owner.into_uuid())
            .bind(category.name)
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn list_categories(
        &self,
        owner: UserUuid,
    ) -> Result<Vec<CategoryRecord>, sqlx::Error> {
        query_as::<Postgres, CategoryRecord>(LIST_CATEGORIES_SQL)
            .bind(owner.into_uuid())
            .fetch_all(&self.pool)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for CategoryRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: CategoryUuid::from_uuid(row.try_get("uuid")?),
            owner: UserUuid::from_uuid(row.try_get("user_uuid")?),
            name: row.try_get("name")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}

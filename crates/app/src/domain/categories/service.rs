//! Categories service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;

use crate::domain::{
    categories::{
        data::NewCategory, errors::CategoriesServiceError, records::CategoryRecord,
        repository::PgCategoriesRepository,
    },
    users::records::UserUuid,
};

#[derive(Debug, Clone)]
pub struct PgCategoriesService {
    repository: PgCategoriesRepository,
}

impl PgCategoriesService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgCategoriesRepository::new(pool),
        }
    }
}

#[async_trait]
impl CategoriesService for PgCategoriesService {
    async fn create_category(
        &self,
        owner: UserUuid,
        category: NewCategory,
    ) -> Result<CategoryRecord, CategoriesServiceError> {
        self.repository
            .create_category(owner, category)
            .await
            .map_err(Into::into)
    }

    async fn list_categories(
        &self,
        owner: UserUuid,
    ) -> Result<Vec<CategoryRecord>, CategoriesServiceError> {
        self.repository
            .list_categories(owner)
            .await
            .map_err(Into::into)
    }
}

#[automock]
#[async_trait]
pub trait CategoriesService: Send + Sync {
    /// Creates a category owned by `owner`.
    async fn create_category(
        &self,
        owner: UserUuid,
        category: NewCategory,
    ) -> Result<CategoryRecord, CategoriesServiceError>;

    /// Lists the categories owned by `owner`, sorted by name.
    async fn list_categories(
        &self,
        owner: UserUuid,
    ) -> Result<Vec<CategoryRecord>, CategoriesServiceError>;
}

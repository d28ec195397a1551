//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    auth::{
        ApiToken, AuthServiceError, IssuedApiToken, hash_api_token,
        models::NewApiToken,
        repository::PgAuthRepository,
    },
    users::records::UserUuid,
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    repository: PgAuthRepository,
}

impl PgAuthService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgAuthRepository::new(pool),
        }
    }

    /// Issue a new API token for the given user.
    ///
    /// # Errors
    ///
    /// Returns an error if the user does not exist or the insert fails.
    pub async fn issue_api_token(&self, user: UserUuid) -> Result<IssuedApiToken, AuthServiceError> {
        let token = ApiToken::generate();

        let record = self
            .repository
            .create_api_token(&NewApiToken {
                uuid: Uuid::now_v7(),
                user,
                token_hash: token.hash(),
            })
            .await?;

        Ok(IssuedApiToken { token, record })
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserUuid, AuthServiceError> {
        self.repository
            .find_user_by_token_hash(&hash_api_token(bearer_token))
            .await?
            .ok_or(AuthServiceError::NotFound)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve the user owning an active bearer token.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserUuid, AuthServiceError>;
}

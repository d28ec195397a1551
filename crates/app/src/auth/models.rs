//! Auth data models.

use jiff::Timestamp;
use uuid::Uuid;

use crate::{auth::ApiToken, users::records::UserUuid};

/// API token persistence payload; only the hash of the token is stored.
#[derive(Debug, Clone)]
pub(crate) struct NewApiToken {
    pub uuid: Uuid,
    pub user: UserUuid,
    pub token_hash: String,
}

/// API token metadata persisted in storage.
#[derive(Debug, Clone)]
pub struct ApiTokenRecord {
    pub uuid: Uuid,
    pub user: UserUuid,
    pub created_at: Timestamp,
}

/// API token issuance result with one-time raw token.
#[derive(Debug)]
pub struct IssuedApiToken {
    pub token: ApiToken,
    pub record: ApiTokenRecord,
}

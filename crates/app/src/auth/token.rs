//! API token generation and hashing.

use std::fmt;

use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

/// API token prefix.
pub const API_TOKEN_PREFIX: &str = "mm_";

/// Number of random bytes encoded in a token.
pub const API_TOKEN_SECRET_BYTES: usize = 32;

/// A raw bearer token. Shown once when issued and never stored.
pub struct ApiToken(String);

impl ApiToken {
    #[must_use]
    pub fn generate() -> Self {
        let mut secret = [0_u8; API_TOKEN_SECRET_BYTES];

        OsRng.fill_bytes(&mut secret);

        let token = Self(format!("{API_TOKEN_PREFIX}{}", encode_hex(&secret)));

        secret.zeroize();

        token
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn hash(&self) -> String {
        hash_api_token(&self.0)
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(**redacted**)")
    }
}

impl Drop for ApiToken {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Lowercase hex SHA-256 of a raw token, as stored in `api_tokens.token_hash`.
#[must_use]
pub fn hash_api_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}

fn encode_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}

//! User credential store.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::password::{hash_password, verify_password};
use crate::error::StoreError;
use crate::models::User;

/// Persistence and verification for user credentials. Plaintext passwords
/// exist only as arguments here; only PHC hashes are stored.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Create a user. Fails with [`StoreError::DuplicateEmail`] when the
    /// email is already registered — exact, case-sensitive match on the
    /// stored string.
    async fn create(&self, email: &str, password: &str) -> Result<User, StoreError>;

    /// Load by email and check the password against the stored hash.
    /// Unknown email fails with [`StoreError::NotFound`], a wrong password
    /// with [`StoreError::BadCredentials`].
    async fn verify(&self, email: &str, password: &str) -> Result<User, StoreError>;
}

/// PostgreSQL implementation of [`UserStore`].
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create(&self, email: &str, password: &str) -> Result<User, StoreError> {
        let existing: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        if existing.is_some() {
            return Err(StoreError::DuplicateEmail);
        }

        let password_hash = hash_password(password)?;

        let user: User = sqlx::query_as(
            "INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING *",
        )
        .bind(email)
        .bind(&password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn verify(&self, email: &str, password: &str) -> Result<User, StoreError> {
        let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        let Some(user) = user else {
            return Err(StoreError::NotFound);
        };

        if !verify_password(password, &user.password_hash)? {
            return Err(StoreError::BadCredentials);
        }

        Ok(user)
    }
}

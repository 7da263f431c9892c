//! PostgreSQL account repository

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{error, info};
use uuid::Uuid;

use auth_core::domain::{Account, ProfilePatch};
use auth_core::error::DomainError;
use auth_core::repositories::AccountRepository;

pub struct PgAccountRepository {
    pool: PgPool,
    op_timeout: Duration,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool, op_timeout: Duration) -> Self {
        Self { pool, op_timeout }
    }

    /// Bound a statement by the configured per-call timeout. A timeout is
    /// transient, not a database error.
    async fn bounded<T, F>(&self, fut: F) -> Result<T, DomainError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.op_timeout, fut).await {
            Ok(result) => result.map_err(map_sqlx_error),
            Err(_) => Err(DomainError::DependencyUnavailable(format!(
                "database call exceeded {:?}",
                self.op_timeout
            ))),
        }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct AccountRow {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Account {
            id: row.id,
            email: row.email,
            password_hash: row.password_hash,
            first_name: row.first_name,
            last_name: row.last_name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn map_sqlx_error(e: sqlx::Error) -> DomainError {
    match &e {
        sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => {
            DomainError::DependencyUnavailable(e.to_string())
        }
        _ => {
            error!("Database error: {}", e);
            DomainError::Database(e.to_string())
        }
    }
}

const ACCOUNT_COLUMNS: &str =
    "id, email, password_hash, first_name, last_name, created_at, updated_at";

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Account>, DomainError> {
        let row: Option<AccountRow> = self
            .bounded(
                sqlx::query_as(&format!(
                    "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE id = $1"
                ))
                .bind(id)
                .fetch_optional(&self.pool),
            )
            .await?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let row: Option<AccountRow> = self
            .bounded(
                sqlx::query_as(&format!(
                    "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE LOWER(email) = LOWER($1)"
                ))
                .bind(email)
                .fetch_optional(&self.pool),
            )
            .await?;

        Ok(row.map(|r| r.into()))
    }

    async fn insert(&self, account: &Account) -> Result<Account, DomainError> {
        // The unique index on LOWER(email) serializes concurrent inserts;
        // the losing statement surfaces as a unique violation here.
        let sql = format!(
            r#"
            INSERT INTO accounts (id, email, password_hash, first_name, last_name, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {ACCOUNT_COLUMNS}
            "#
        );
        let fut = sqlx::query_as::<_, AccountRow>(&sql)
        .bind(account.id)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(account.created_at)
        .bind(account.updated_at)
        .fetch_one(&self.pool);

        match tokio::time::timeout(self.op_timeout, fut).await {
            Err(_) => Err(DomainError::DependencyUnavailable(format!(
                "database call exceeded {:?}",
                self.op_timeout
            ))),
            Ok(Err(e)) => {
                if let sqlx::Error::Database(db) = &e {
                    if db.is_unique_violation() {
                        return Err(DomainError::DuplicateIdentity(account.email.clone()));
                    }
                }
                Err(map_sqlx_error(e))
            }
            Ok(Ok(row)) => {
                info!("Created account {}", row.id);
                Ok(row.into())
            }
        }
    }

    async fn update(&self, id: &Uuid, patch: &ProfilePatch) -> Result<Account, DomainError> {
        let row: Option<AccountRow> = self
            .bounded(
                sqlx::query_as(&format!(
                    r#"
                    UPDATE accounts
                    SET first_name = COALESCE($2, first_name),
                        last_name  = COALESCE($3, last_name),
                        updated_at = NOW()
                    WHERE id = $1
                    RETURNING {ACCOUNT_COLUMNS}
                    "#
                ))
                .bind(id)
                .bind(&patch.first_name)
                .bind(&patch.last_name)
                .fetch_optional(&self.pool),
            )
            .await?;

        // An account that vanished mid-session is unauthenticated, not a
        // server error.
        row.map(Account::from).ok_or(DomainError::Unauthorized)
    }
}

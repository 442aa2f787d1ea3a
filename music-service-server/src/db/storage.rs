//! Storage gateway - the single shared database connection
//!
//! Uses the sqlx `Any` driver so the URL scheme picks the backend
//! (`postgres://` in deployments, `sqlite:` locally and in tests).
//! The pool is capped at one connection that is never recycled, which
//! serialises every statement issued by concurrent requests.

use std::fmt;

use sqlx::any::{AnyArguments, AnyPoolOptions, AnyRow};
use sqlx::query::Query;
use sqlx::{Any, AnyPool, Row};
use url::Url;

use super::DbError;

/// Statement parameter, bound positionally to `$1`, `$2`, ...
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    Int(i64),
    Text(String),
}

impl From<i64> for Param {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<&str> for Param {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for Param {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// Outcome of a data-mutating statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Execution {
    pub affected_rows: u64,
}

/// Database backend selected by the connection URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

impl Backend {
    pub fn from_url(url: &str) -> Result<Self, DbError> {
        let scheme = url.split(':').next().unwrap_or_default();
        match scheme {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "sqlite" => Ok(Self::Sqlite),
            other => Err(DbError::Config(format!(
                "unsupported database scheme '{}'",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Sqlite => "sqlite",
        }
    }
}

/// Connection settings supplied by the operator
#[derive(Clone)]
pub struct StorageConfig {
    /// Connection URL, e.g. `postgres://db.internal/music` or `sqlite://music.db`
    pub url: String,
    /// Overrides the user name embedded in the URL
    pub user: Option<String>,
    /// Overrides the password embedded in the URL
    pub password: Option<String>,
}

impl StorageConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            user: None,
            password: None,
        }
    }

    /// Final URL with credentials spliced in.
    ///
    /// SQLite URLs carry no credentials and are returned unchanged.
    pub fn connection_url(&self) -> Result<String, DbError> {
        if self.user.is_none() && self.password.is_none() {
            return Ok(self.url.clone());
        }
        if Backend::from_url(&self.url)? == Backend::Sqlite {
            tracing::debug!("ignoring database credentials for sqlite backend");
            return Ok(self.url.clone());
        }

        let mut url = Url::parse(&self.url)
            .map_err(|e| DbError::Config(format!("database url: {}", e)))?;
        if let Some(user) = &self.user {
            url.set_username(user)
                .map_err(|_| DbError::Config("database url cannot carry a user name".into()))?;
        }
        if let Some(password) = &self.password {
            url.set_password(Some(password))
                .map_err(|_| DbError::Config("database url cannot carry a password".into()))?;
        }
        Ok(url.to_string())
    }
}

impl fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageConfig")
            .field("url", &self.url)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Handle to the shared connection, cloned into request handlers.
#[derive(Debug, Clone)]
pub struct Storage {
    pool: AnyPool,
    backend: Backend,
}

impl Storage {
    /// Open the shared connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is unsupported or the connection fails.
    pub async fn connect(config: &StorageConfig) -> Result<Self, DbError> {
        sqlx::any::install_default_drivers();

        let backend = Backend::from_url(&config.url)?;
        let pool = AnyPoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect(&config.connection_url()?)
            .await?;

        tracing::debug!(backend = backend.as_str(), "database connection established");
        Ok(Self { pool, backend })
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Run a read query and return every row.
    pub async fn query(&self, sql: &str, params: &[Param]) -> Result<Vec<AnyRow>, DbError> {
        let rows = bind(sqlx::query(sql), params)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Run a read query and return the first row, if any.
    pub async fn query_optional(
        &self,
        sql: &str,
        params: &[Param],
    ) -> Result<Option<AnyRow>, DbError> {
        let row = bind(sqlx::query(sql), params)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Run a data-mutating statement.
    pub async fn execute(&self, sql: &str, params: &[Param]) -> Result<Execution, DbError> {
        let result = bind(sqlx::query(sql), params)
            .execute(&self.pool)
            .await?;
        Ok(Execution {
            affected_rows: result.rows_affected(),
        })
    }

    /// Run an `INSERT ... RETURNING id` and return the generated id.
    pub async fn insert(&self, sql: &str, params: &[Param]) -> Result<i64, DbError> {
        let row = bind(sqlx::query(sql), params)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get::<i64, _>("id")?)
    }

    /// Release the connection. Outstanding handles fail afterwards.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn bind<'q>(
    mut query: Query<'q, Any, AnyArguments<'q>>,
    params: &'q [Param],
) -> Query<'q, Any, AnyArguments<'q>> {
    for param in params {
        query = match param {
            Param::Int(v) => query.bind(*v),
            Param::Text(v) => query.bind(v.as_str()),
        };
    }
    query
}

//! Schema bootstrap
//!
//! Idempotent `CREATE TABLE IF NOT EXISTS` for the three tables. Existing
//! tables are left as they are; there is no versioning.

use super::{Backend, DbError, Storage};

const POSTGRES: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL UNIQUE,
        email TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS songs (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        genre TEXT NOT NULL,
        timestamp TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP,
        UNIQUE (name, genre)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS user_songs (
        user_id BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        song_id BIGINT NOT NULL REFERENCES songs(id) ON DELETE CASCADE,
        UNIQUE (user_id, song_id)
    )
    "#,
];

const SQLITE: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        email TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS songs (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        genre TEXT NOT NULL,
        timestamp TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
        UNIQUE (name, genre)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS user_songs (
        user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        song_id INTEGER NOT NULL REFERENCES songs(id) ON DELETE CASCADE,
        UNIQUE (user_id, song_id)
    )
    "#,
];

/// Create the users, songs and user_songs tables if they are missing.
pub async fn ensure_schema(storage: &Storage) -> Result<(), DbError> {
    tracing::info!(backend = storage.backend().as_str(), "Ensuring database schema...");

    let statements = match storage.backend() {
        Backend::Postgres => POSTGRES,
        Backend::Sqlite => SQLITE,
    };
    for sql in statements {
        storage.execute(sql, &[]).await?;
    }

    Ok(())
}

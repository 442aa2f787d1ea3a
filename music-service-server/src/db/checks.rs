//! Existence and uniqueness checks
//!
//! Each check is one read query. A storage failure is logged and returned
//! to the caller instead of being read as "does not exist".

use super::{DbError, Param, Storage};

async fn exists(
    storage: &Storage,
    check: &'static str,
    sql: &str,
    params: &[Param],
) -> Result<bool, DbError> {
    match storage.query_optional(sql, params).await {
        Ok(row) => Ok(row.is_some()),
        Err(e) => {
            tracing::warn!(check, error = %e, "existence check failed");
            Err(e)
        }
    }
}

pub async fn user_exists_by_name(storage: &Storage, name: &str) -> Result<bool, DbError> {
    exists(
        storage,
        "user_by_name",
        "SELECT 1 FROM users WHERE name = $1",
        &[Param::from(name)],
    )
    .await
}

pub async fn user_exists_by_id(storage: &Storage, id: i64) -> Result<bool, DbError> {
    exists(
        storage,
        "user_by_id",
        "SELECT 1 FROM users WHERE id = $1",
        &[Param::Int(id)],
    )
    .await
}

pub async fn song_exists_by_name_genre(
    storage: &Storage,
    name: &str,
    genre: &str,
) -> Result<bool, DbError> {
    exists(
        storage,
        "song_by_name_genre",
        "SELECT 1 FROM songs WHERE name = $1 AND genre = $2",
        &[Param::from(name), Param::from(genre)],
    )
    .await
}

pub async fn song_exists_by_id(storage: &Storage, id: i64) -> Result<bool, DbError> {
    exists(
        storage,
        "song_by_id",
        "SELECT 1 FROM songs WHERE id = $1",
        &[Param::Int(id)],
    )
    .await
}

pub async fn assignment_exists(
    storage: &Storage,
    user_id: i64,
    song_id: i64,
) -> Result<bool, DbError> {
    exists(
        storage,
        "assignment",
        "SELECT 1 FROM user_songs WHERE user_id = $1 AND song_id = $2",
        &[Param::Int(user_id), Param::Int(song_id)],
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{ensure_schema, StorageConfig};

    async fn seeded() -> Storage {
        let storage = Storage::connect(&StorageConfig::new("sqlite::memory:"))
            .await
            .unwrap();
        ensure_schema(&storage).await.unwrap();
        storage
            .execute(
                "INSERT INTO users (name, email) VALUES ($1, $2)",
                &[Param::from("ada"), Param::from("ada@example.com")],
            )
            .await
            .unwrap();
        storage
            .execute(
                "INSERT INTO songs (name, genre) VALUES ($1, $2)",
                &[Param::from("Blue"), Param::from("Jazz")],
            )
            .await
            .unwrap();
        storage
    }

    #[tokio::test]
    async fn user_checks() {
        let storage = seeded().await;
        assert!(user_exists_by_name(&storage, "ada").await.unwrap());
        assert!(!user_exists_by_name(&storage, "grace").await.unwrap());
        assert!(user_exists_by_id(&storage, 1).await.unwrap());
        assert!(!user_exists_by_id(&storage, 2).await.unwrap());
    }

    #[tokio::test]
    async fn song_checks_match_name_and_genre_together() {
        let storage = seeded().await;
        assert!(song_exists_by_name_genre(&storage, "Blue", "Jazz").await.unwrap());
        assert!(!song_exists_by_name_genre(&storage, "Blue", "Rock").await.unwrap());
        assert!(song_exists_by_id(&storage, 1).await.unwrap());
        assert!(!song_exists_by_id(&storage, 9).await.unwrap());
    }

    #[tokio::test]
    async fn assignment_check_is_ordered() {
        let storage = seeded().await;
        storage
            .execute(
                "INSERT INTO users (name, email) VALUES ($1, $2)",
                &[Param::from("grace"), Param::from("grace@example.com")],
            )
            .await
            .unwrap();
        storage
            .execute(
                "INSERT INTO user_songs (user_id, song_id) VALUES ($1, $2)",
                &[Param::Int(2), Param::Int(1)],
            )
            .await
            .unwrap();

        assert!(assignment_exists(&storage, 2, 1).await.unwrap());
        assert!(!assignment_exists(&storage, 1, 2).await.unwrap());
    }

    #[tokio::test]
    async fn storage_failure_is_not_reported_as_missing() {
        let storage = seeded().await;
        storage.close().await;
        assert!(user_exists_by_id(&storage, 1).await.is_err());
    }
}

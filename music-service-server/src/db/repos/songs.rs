//! Song repository

use std::collections::BTreeMap;

use serde::Serialize;
use sqlx::Row;

use crate::db::{DbError, Execution, Param, Storage};
use crate::models::{EntityId, NewSong};

/// Song entry in the `GET /songs` mapping, keyed by song id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SongListing {
    pub name: String,
    pub genre: String,
    pub timestamp: String,
}

/// Song repository
pub struct SongRepo<'a> {
    storage: &'a Storage,
}

impl<'a> SongRepo<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Insert a song and return the generated id. The timestamp is set by the database.
    pub async fn create(&self, song: &NewSong) -> Result<i64, DbError> {
        self.storage
            .insert(
                "INSERT INTO songs (name, genre) VALUES ($1, $2) RETURNING id",
                &[Param::from(song.name()), Param::from(song.genre())],
            )
            .await
    }

    /// All songs keyed by id.
    pub async fn list(&self) -> Result<BTreeMap<i64, SongListing>, DbError> {
        let rows = self
            .storage
            .query(
                r#"
                SELECT
                    s.id AS id,
                    s.name AS name,
                    s.genre AS genre,
                    CAST(s.timestamp AS TEXT) AS created
                FROM songs s
                ORDER BY s.id
                "#,
                &[],
            )
            .await?;

        rows.into_iter()
            .map(|r| -> Result<(i64, SongListing), DbError> {
                Ok((
                    r.try_get::<i64, _>("id")?,
                    SongListing {
                        name: r.try_get("name")?,
                        genre: r.try_get("genre")?,
                        timestamp: r.try_get("created")?,
                    },
                ))
            })
            .collect()
    }

    /// Delete a song; assignment rows go with it via ON DELETE CASCADE.
    pub async fn delete(&self, id: EntityId) -> Result<Execution, DbError> {
        self.storage
            .execute("DELETE FROM songs WHERE id = $1", &[Param::Int(id.get())])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{ensure_schema, StorageConfig};
    use crate::models::CreateSongRequest;

    fn new_song(name: &str, genre: &str) -> NewSong {
        NewSong::new(CreateSongRequest {
            name: Some(name.into()),
            genre: Some(genre.into()),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn list_carries_timestamp() {
        let storage = Storage::connect(&StorageConfig::new("sqlite::memory:"))
            .await
            .unwrap();
        ensure_schema(&storage).await.unwrap();
        let repo = SongRepo::new(&storage);

        assert!(repo.list().await.unwrap().is_empty());

        let id = repo.create(&new_song("A", "B")).await.unwrap();
        let songs = repo.list().await.unwrap();
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[&id].name, "A");
        assert_eq!(songs[&id].genre, "B");
        assert!(!songs[&id].timestamp.is_empty());
    }

    #[tokio::test]
    async fn same_name_other_genre_allowed() {
        let storage = Storage::connect(&StorageConfig::new("sqlite::memory:"))
            .await
            .unwrap();
        ensure_schema(&storage).await.unwrap();
        let repo = SongRepo::new(&storage);

        repo.create(&new_song("Blue", "Jazz")).await.unwrap();
        repo.create(&new_song("Blue", "Rock")).await.unwrap();
        let err = repo.create(&new_song("Blue", "Jazz")).await.unwrap_err();
        assert!(err.is_unique_violation());
    }
}

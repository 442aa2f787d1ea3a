//! Assignment repository - the user_songs relation

use crate::db::{DbError, Execution, Param, Storage};
use crate::models::EntityId;

/// Assignment repository
pub struct AssignmentRepo<'a> {
    storage: &'a Storage,
}

impl<'a> AssignmentRepo<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub async fn assign(&self, user_id: EntityId, song_id: EntityId) -> Result<Execution, DbError> {
        self.storage
            .execute(
                "INSERT INTO user_songs (user_id, song_id) VALUES ($1, $2)",
                &[Param::Int(user_id.get()), Param::Int(song_id.get())],
            )
            .await
    }

    pub async fn unassign(
        &self,
        user_id: EntityId,
        song_id: EntityId,
    ) -> Result<Execution, DbError> {
        self.storage
            .execute(
                "DELETE FROM user_songs WHERE user_id = $1 AND song_id = $2",
                &[Param::Int(user_id.get()), Param::Int(song_id.get())],
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{ensure_schema, StorageConfig};

    #[tokio::test]
    async fn pair_is_unique_and_removable() {
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

        let repo = AssignmentRepo::new(&storage);
        let one = EntityId::parse("id", "1").unwrap();

        assert_eq!(repo.assign(one, one).await.unwrap().affected_rows, 1);
        assert!(repo.assign(one, one).await.unwrap_err().is_unique_violation());
        assert_eq!(repo.unassign(one, one).await.unwrap().affected_rows, 1);
        assert_eq!(repo.unassign(one, one).await.unwrap().affected_rows, 0);
    }

    #[tokio::test]
    async fn deleting_user_cascades() {
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
        let one = EntityId::parse("id", "1").unwrap();
        AssignmentRepo::new(&storage).assign(one, one).await.unwrap();

        storage
            .execute("DELETE FROM users WHERE id = $1", &[Param::Int(1)])
            .await
            .unwrap();

        let left = storage.query("SELECT user_id FROM user_songs", &[]).await.unwrap();
        assert!(left.is_empty());
    }
}

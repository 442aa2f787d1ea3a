//! User repository
//!
//! - list: one LEFT JOIN through user_songs, folded per user (no N+1)
//! - get: same join restricted to one user

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use serde::Serialize;
use sqlx::Row;

use crate::db::{DbError, Execution, Param, Storage};
use crate::models::{EntityId, NewUser};

/// Song reference embedded in a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SongRef {
    pub name: String,
}

/// User entry in the `GET /users` mapping, keyed by user id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserListing {
    pub name: String,
    pub email: String,
    /// Assigned songs keyed by song id
    pub songs: BTreeMap<i64, SongRef>,
}

/// Single user with assigned songs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDetail {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub songs: Vec<SongRef>,
}

/// User repository
pub struct UserRepo<'a> {
    storage: &'a Storage,
}

impl<'a> UserRepo<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Insert a user and return the generated id.
    pub async fn create(&self, user: &NewUser) -> Result<i64, DbError> {
        self.storage
            .insert(
                "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id",
                &[Param::from(user.name()), Param::from(user.email())],
            )
            .await
    }

    /// All users with their assigned songs, keyed by user id.
    pub async fn list_with_songs(&self) -> Result<BTreeMap<i64, UserListing>, DbError> {
        let rows = self
            .storage
            .query(
                r#"
                SELECT
                    u.id AS user_id,
                    u.name AS user_name,
                    u.email AS email,
                    s.id AS song_id,
                    s.name AS song_name
                FROM users u
                LEFT JOIN user_songs us ON us.user_id = u.id
                LEFT JOIN songs s ON s.id = us.song_id
                ORDER BY u.id, s.id
                "#,
                &[],
            )
            .await?;

        let mut users = BTreeMap::new();
        for row in rows {
            let user_id: i64 = row.try_get("user_id")?;
            let user = match users.entry(user_id) {
                Entry::Occupied(e) => e.into_mut(),
                Entry::Vacant(e) => e.insert(UserListing {
                    name: row.try_get("user_name")?,
                    email: row.try_get("email")?,
                    songs: BTreeMap::new(),
                }),
            };

            let song_id: Option<i64> = row.try_get("song_id")?;
            let song_name: Option<String> = row.try_get("song_name")?;
            if let (Some(id), Some(name)) = (song_id, song_name) {
                user.songs.insert(id, SongRef { name });
            }
        }

        Ok(users)
    }

    /// One user with assigned songs, `None` if the id is unknown.
    pub async fn get_with_songs(&self, id: EntityId) -> Result<Option<UserDetail>, DbError> {
        let rows = self
            .storage
            .query(
                r#"
                SELECT
                    u.name AS user_name,
                    u.email AS email,
                    s.name AS song_name
                FROM users u
                LEFT JOIN user_songs us ON us.user_id = u.id
                LEFT JOIN songs s ON s.id = us.song_id
                WHERE u.id = $1
                ORDER BY s.id
                "#,
                &[Param::Int(id.get())],
            )
            .await?;

        let Some(first) = rows.first() else {
            return Ok(None);
        };

        let mut user = UserDetail {
            id: id.get(),
            name: first.try_get("user_name")?,
            email: first.try_get("email")?,
            songs: Vec::new(),
        };
        for row in &rows {
            if let Some(name) = row.try_get::<Option<String>, _>("song_name")? {
                user.songs.push(SongRef { name });
            }
        }

        Ok(Some(user))
    }

    /// Delete a user; assignment rows go with it via ON DELETE CASCADE.
    pub async fn delete(&self, id: EntityId) -> Result<Execution, DbError> {
        self.storage
            .execute("DELETE FROM users WHERE id = $1", &[Param::Int(id.get())])
            .await
    }
}

//! Song input

use serde::Deserialize;

use super::validation::required;
use super::ValidationError;

/// Body of `POST /songs`
#[derive(Debug, Default, Deserialize)]
pub struct CreateSongRequest {
    pub name: Option<String>,
    pub genre: Option<String>,
}

/// Validated song ready for insertion. `(name, genre)` is the natural key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSong {
    name: String,
    genre: String,
}

impl NewSong {
    pub fn new(req: CreateSongRequest) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required("name", req.name)?,
            genre: required("genre", req.genre)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genre_required() {
        let err = NewSong::new(CreateSongRequest {
            name: Some("Blue".into()),
            genre: Some(String::new()),
        })
        .unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "genre" });
    }

    #[test]
    fn null_name_is_missing() {
        let req: CreateSongRequest =
            serde_json::from_str(r#"{"name":null,"genre":"Jazz"}"#).unwrap();
        assert_eq!(
            NewSong::new(req).unwrap_err(),
            ValidationError::Missing { field: "name" }
        );
    }
}

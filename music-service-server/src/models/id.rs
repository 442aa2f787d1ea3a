//! Entity ids taken from request paths

use std::fmt;

use super::ValidationError;

/// Database id of a user or song, always >= 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(i64);

impl EntityId {
    /// Parse a path segment.
    ///
    /// # Example
    /// ```
    /// use music_service_server::models::EntityId;
    ///
    /// assert_eq!(EntityId::parse("id", "42").unwrap().get(), 42);
    /// assert!(EntityId::parse("id", "0").is_err());
    /// assert!(EntityId::parse("id", "-3").is_err());
    /// assert!(EntityId::parse("id", "abc").is_err());
    /// ```
    pub fn parse(field: &'static str, raw: &str) -> Result<Self, ValidationError> {
        match raw.parse::<i64>() {
            Ok(id) if id >= 1 => Ok(Self(id)),
            _ => Err(ValidationError::InvalidId { field }),
        }
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive() {
        assert_eq!(EntityId::parse("id", "1").unwrap().get(), 1);
        assert_eq!(EntityId::parse("id", "9000").unwrap().to_string(), "9000");
    }

    #[test]
    fn rejects_zero_negative_and_garbage() {
        for raw in ["0", "-1", "", "1.5", "12a", "99999999999999999999"] {
            let err = EntityId::parse("songId", raw).unwrap_err();
            assert_eq!(err, ValidationError::InvalidId { field: "songId" }, "input {:?}", raw);
        }
    }
}

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid id format: {0}")]
pub struct InvalidIdError(pub String);

/// Structural check every externally supplied identifier goes through
/// before it reaches a repository.
pub fn parse_id(raw: &str) -> Result<Uuid, InvalidIdError> {
    Uuid::parse_str(raw.trim()).map_err(|_| InvalidIdError(raw.to_string()))
}

//! Evaluation error types.
//!
//! An incorrect answer is never an error; these cover lookups that miss,
//! stored payloads that don't decode, and failures of the content store.

use std::fmt;

use thiserror::Error;

/// The kind of record a lookup was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Problem,
    Quiz,
    Question,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Problem => write!(f, "problem"),
            Entity::Quiz => write!(f, "quiz"),
            Entity::Question => write!(f, "question"),
        }
    }
}

/// Errors surfaced by the practice and quiz services.
#[derive(Debug, Error)]
pub enum EvalError {
    /// No record with this id exists (or it isn't published).
    #[error("{entity} not found: {id}")]
    NotFound { entity: Entity, id: i64 },

    /// A stored JSON column failed to decode into its expected shape.
    #[error("malformed {field} on {entity} {id}: {reason}")]
    MalformedData {
        entity: Entity,
        id: i64,
        field: &'static str,
        reason: String,
    },

    /// The content repository itself failed.
    #[error("content repository error: {0}")]
    Repository(#[source] anyhow::Error),
}

impl EvalError {
    pub fn not_found(entity: Entity, id: i64) -> Self {
        EvalError::NotFound { entity, id }
    }

    /// Returns `true` for unknown-id errors, which callers usually map to a
    /// "not found" response rather than an internal fault.
    pub fn is_not_found(&self) -> bool {
        matches!(self, EvalError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, EvalError>;

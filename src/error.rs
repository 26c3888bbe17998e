// src/error.rs
// Domain error types for the tracker core

use thiserror::Error;

/// The three stored collections, used to label errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Project,
    Task,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::User => write!(f, "User"),
            EntityKind::Project => write!(f, "Project"),
            EntityKind::Task => write!(f, "Task"),
        }
    }
}

/// Main error type for store operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error("{0} not found")]
    NotFound(EntityKind),

    #[error("{0} already exists")]
    AlreadyExists(EntityKind),
}

/// Convenience type alias for Result using TrackerError
pub type Result<T> = std::result::Result<T, TrackerError>;

impl TrackerError {
    pub fn kind(&self) -> EntityKind {
        match self {
            TrackerError::NotFound(kind) | TrackerError::AlreadyExists(kind) => *kind,
        }
    }
}

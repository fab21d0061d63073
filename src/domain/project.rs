//! Project Entity
//!
//! Represents a tracked software project with title, description,
//! technology, status and creation time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Project status: the only transition is Pending -> Completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Status {
    #[default]
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "completado")]
    Completed,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pendiente",
            Status::Completed => "completado",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "completado" => Status::Completed,
            _ => Status::Pending,
        }
    }
}

/// Status filter for the derived view. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Pending,
    Completed,
}

impl Filter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "todos",
            Filter::Pending => "pendiente",
            Filter::Completed => "completado",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "pendiente" => Filter::Pending,
            "completado" => Filter::Completed,
            _ => Filter::All,
        }
    }

    /// Whether a project with the given status passes this filter
    pub fn matches(&self, status: Status) -> bool {
        match self {
            Filter::All => true,
            Filter::Pending => status == Status::Pending,
            Filter::Completed => status == Status::Completed,
        }
    }
}

/// A tracked software project
///
/// Wire names follow the legacy storage format (Spanish field names, RFC 3339
/// date strings) so collections written by the original application load
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier, millisecond-timestamp derived, never reused
    pub id: i64,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "tecnologia")]
    pub technology: String,
    #[serde(rename = "estado")]
    pub status: Status,
    /// Creation time, immutable after creation
    #[serde(rename = "fecha")]
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Create a new pending project stamped with the current time
    pub fn new(id: i64, title: String, description: String, technology: String) -> Self {
        Self {
            id,
            title,
            description,
            technology,
            status: Status::Pending,
            created_at: Utc::now(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == Status::Completed
    }
}

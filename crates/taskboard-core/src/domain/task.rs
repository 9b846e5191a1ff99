//! Task Entity
//!
//! A single to-do record as owned by the remote service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::error::{ValidationError, ValidationResult};

/// Minimum title length (after trimming) accepted by the server
pub const TITLE_MIN_CHARS: usize = 2;
/// Maximum description length accepted by the server
pub const DESCRIPTION_MAX_CHARS: usize = 1000;

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "low" => Priority::Low,
            "high" => Priority::High,
            _ => Priority::Medium,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

/// A task record.
///
/// `id`, `created_at` and `updated_at` are assigned by the server; the
/// client only ever holds a cached copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    /// Blank descriptions from the server are normalized to `None`
    #[serde(default, deserialize_with = "blank_as_none", serialize_with = "none_as_blank")]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Full record to PUT for an edit: the draft's fields over this record
    pub fn apply_draft(&self, draft: &TaskDraft) -> Task {
        Task {
            title: draft.title.clone(),
            description: draft.description.clone(),
            completed: draft.completed,
            priority: draft.priority,
            ..self.clone()
        }
    }

    /// Full record to PUT for a completion toggle
    pub fn with_completed(&self, completed: bool) -> Task {
        Task {
            completed,
            ..self.clone()
        }
    }

    /// Draft pre-filled from this record, used by the edit form
    pub fn to_draft(&self) -> TaskDraft {
        TaskDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            completed: self.completed,
            priority: self.priority,
        }
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Create/update body: `{title, description, completed, priority}`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    #[serde(serialize_with = "none_as_blank")]
    pub description: Option<String>,
    pub completed: bool,
    pub priority: Priority,
}

fn none_as_blank<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(value.as_deref().unwrap_or(""))
}

impl TaskDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether the submit button should be enabled
    pub fn is_submittable(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Trim fields and apply the server's rules locally.
    pub fn validate(&self) -> ValidationResult<TaskDraft> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::Required("Title"));
        }
        if title.chars().count() < TITLE_MIN_CHARS {
            return Err(ValidationError::TitleTooShort { min: TITLE_MIN_CHARS });
        }

        let description = self
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty());
        if let Some(d) = description {
            if d.chars().count() > DESCRIPTION_MAX_CHARS {
                return Err(ValidationError::DescriptionTooLong { max: DESCRIPTION_MAX_CHARS });
            }
        }

        Ok(TaskDraft {
            title: title.to_string(),
            description: description.map(str::to_string),
            completed: self.completed,
            priority: self.priority,
        })
    }
}

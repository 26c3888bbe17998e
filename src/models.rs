// src/models.rs
// Domain types for users, projects, tasks and the derived analytics summary

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ═══════════════════════════════════════
// ENTITIES
// ═══════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// A project. `owner_id` is a weak reference and may point at a user that
/// does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub owner_id: Option<Uuid>,
}

/// A unit of work. `project_id` and `assigned_to_id` are unvalidated
/// references; dangling values are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub project_id: Uuid,
    pub assigned_to_id: Option<Uuid>,
}

impl Task {
    /// Past its due date while still open. Completed and cancelled tasks are
    /// never overdue.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.due_date {
            Some(due) => due < today && !self.status.is_closed(),
            None => false,
        }
    }
}

// ═══════════════════════════════════════
// ENUMS
// ═══════════════════════════════════════

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    #[default]
    New,
    InProgress,
    Blocked,
    Completed,
    Cancelled,
}

impl TaskStatus {
    pub fn is_completed(self) -> bool {
        match self {
            TaskStatus::Completed => true,
            TaskStatus::New
            | TaskStatus::InProgress
            | TaskStatus::Blocked
            | TaskStatus::Cancelled => false,
        }
    }

    /// Completed or cancelled: no further work expected.
    pub fn is_closed(self) -> bool {
        match self {
            TaskStatus::Completed | TaskStatus::Cancelled => true,
            TaskStatus::New | TaskStatus::InProgress | TaskStatus::Blocked => false,
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::New => write!(f, "NEW"),
            TaskStatus::InProgress => write!(f, "IN_PROGRESS"),
            TaskStatus::Blocked => write!(f, "BLOCKED"),
            TaskStatus::Completed => write!(f, "COMPLETED"),
            TaskStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NEW" => Ok(TaskStatus::New),
            "IN_PROGRESS" => Ok(TaskStatus::InProgress),
            "BLOCKED" => Ok(TaskStatus::Blocked),
            "COMPLETED" => Ok(TaskStatus::Completed),
            "CANCELLED" => Ok(TaskStatus::Cancelled),
            _ => Err(format!("Unknown task status: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskPriority::Low => write!(f, "LOW"),
            TaskPriority::Medium => write!(f, "MEDIUM"),
            TaskPriority::High => write!(f, "HIGH"),
            TaskPriority::Critical => write!(f, "CRITICAL"),
        }
    }
}

impl std::str::FromStr for TaskPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LOW" => Ok(TaskPriority::Low),
            "MEDIUM" => Ok(TaskPriority::Medium),
            "HIGH" => Ok(TaskPriority::High),
            "CRITICAL" => Ok(TaskPriority::Critical),
            _ => Err(format!("Unknown task priority: {s}")),
        }
    }
}

// ═══════════════════════════════════════
// ANALYTICS
// ═══════════════════════════════════════

/// Task counts for one user, or for the synthetic "Unassigned" bucket when
/// `user_id` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsItem {
    pub user_id: Option<Uuid>,
    pub user_name: String,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub overdue_tasks: usize,
    pub active_tasks: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub per_user: Vec<AnalyticsItem>,
    pub total_users: usize,
    pub total_projects: usize,
    pub total_tasks: usize,
}

// Request types for API

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    pub email: String,
}

impl CreateUserRequest {
    pub fn into_user(self) -> User {
        User {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            name: self.name,
            email: self.email,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateProjectRequest {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub owner_id: Option<Uuid>,
}

impl CreateProjectRequest {
    pub fn into_project(self) -> Project {
        Project {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            name: self.name,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            owner_id: self.owner_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    pub project_id: Uuid,
    #[serde(default)]
    pub assigned_to_id: Option<Uuid>,
}

impl CreateTaskRequest {
    pub fn into_task(self) -> Task {
        Task {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            status: self.status,
            priority: self.priority,
            project_id: self.project_id,
            assigned_to_id: self.assigned_to_id,
        }
    }
}

/// Query string for `GET /tasks`. Blank values (`?status=`) mean no filter;
/// values are matched case-insensitively.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TaskFilter {
    #[serde(default, deserialize_with = "blank_or_parsed")]
    pub status: Option<TaskStatus>,
    #[serde(default, deserialize_with = "blank_or_parsed")]
    pub priority: Option<TaskPriority>,
}

fn blank_or_parsed<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: std::str::FromStr<Err = String>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        self.status.is_none_or(|s| task.status == s)
            && self.priority.is_none_or(|p| task.priority == p)
    }
}

//! Standalone task and workflow record helpers.
//!
//! These sit beside the planning pipeline: simple constructors for task and
//! workflow records plus the one validated operation in the crate,
//! [`update_task_status`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::{now_rfc3339, timestamp_id};

/// Task priority level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

/// Lifecycle status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Blocked,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Blocked => "blocked",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a status string is not one of the known values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid status '{given}'. Must be one of: pending, in_progress, completed, blocked")]
pub struct InvalidStatus {
    /// The rejected input
    pub given: String,
}

impl FromStr for TaskStatus {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TaskStatus::Pending),
            "in_progress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            "blocked" => Ok(TaskStatus::Blocked),
            other => Err(InvalidStatus {
                given: other.to_string(),
            }),
        }
    }
}

/// A freshly created task record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    /// `task_<timestamp>`
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub created_at: String,
    pub updated_at: String,
}

/// Create a new pending task record.
pub fn create_task(title: &str, description: &str, priority: TaskPriority) -> TaskRecord {
    let now = now_rfc3339();
    TaskRecord {
        id: timestamp_id("task"),
        title: title.to_string(),
        description: description.to_string(),
        priority,
        status: TaskStatus::Pending,
        created_at: now.clone(),
        updated_at: now,
    }
}

/// Acknowledgement of a status change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub id: String,
    pub status: TaskStatus,
    pub updated_at: String,
    pub message: String,
}

/// Validate and apply a status change.
///
/// The status string must name one of the [`TaskStatus`] values; anything
/// else returns [`InvalidStatus`] for the caller to inspect.
pub fn update_task_status(task_id: &str, status: &str) -> Result<StatusUpdate, InvalidStatus> {
    let status: TaskStatus = status.parse()?;
    Ok(StatusUpdate {
        id: task_id.to_string(),
        status,
        updated_at: now_rfc3339(),
        message: format!("Task {} status updated to {}", task_id, status),
    })
}

/// A workflow record with ordered member tasks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowRecord {
    /// `workflow_<timestamp>`
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tasks: Vec<WorkflowTaskEntry>,
    pub status: String,
    pub created_at: String,
}

/// One task slot inside a [`WorkflowRecord`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowTaskEntry {
    /// `<workflow id>_task_<order>`
    pub id: String,
    pub title: String,
    /// 1-based position in the workflow
    pub order: usize,
    pub status: TaskStatus,
}

/// Create a workflow from an ordered list of task titles.
pub fn create_workflow(name: &str, tasks: &[String], description: &str) -> WorkflowRecord {
    let workflow_id = timestamp_id("workflow");
    let tasks = tasks
        .iter()
        .enumerate()
        .map(|(i, title)| WorkflowTaskEntry {
            id: format!("{}_task_{}", workflow_id, i + 1),
            title: title.clone(),
            order: i + 1,
            status: TaskStatus::Pending,
        })
        .collect();

    WorkflowRecord {
        id: workflow_id,
        name: name.to_string(),
        description: description.to_string(),
        tasks,
        status: "created".to_string(),
        created_at: now_rfc3339(),
    }
}

/// Simulated status lookup for a workflow id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowStatusReport {
    pub workflow_id: String,
    pub checked_at: String,
    pub message: String,
    pub note: String,
}

/// Report on a workflow's status. Simulated: no store backs this yet.
pub fn get_workflow_status(workflow_id: &str) -> WorkflowStatusReport {
    WorkflowStatusReport {
        workflow_id: workflow_id.to_string(),
        checked_at: now_rfc3339(),
        message: format!("Workflow {} status retrieved", workflow_id),
        note: "This is a simulated status check - in production this would query actual workflow data"
            .to_string(),
    }
}

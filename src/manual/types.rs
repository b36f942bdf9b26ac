//! Data types for parsed process manuals.

use serde::{Deserialize, Serialize};

/// A parsed markdown process manual.
///
/// Produced once by [`super::parse`] and never mutated afterwards; every
/// later stage builds wholly new structures from it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manual {
    /// Title from the top-level `#` heading (empty if none)
    #[serde(default)]
    pub title: String,

    /// Teams in document order
    #[serde(default)]
    pub teams: Vec<Team>,
}

/// A named group of workers and tasks.
///
/// Team names are not required to be unique; duplicates stay distinct
/// entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Team {
    /// Team name with any leading `Team:` label stripped
    pub name: String,

    /// Worker names in document order
    #[serde(default)]
    pub workers: Vec<String>,

    /// Tasks in document order
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// A single task with its checklist and requirement lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Task {
    /// Task title with any leading `Task:` label stripped
    pub title: String,

    /// Checklist item texts; checked state is not recorded
    #[serde(default)]
    pub checklist: Vec<String>,

    /// Items under a `**Conditions:**` label
    #[serde(default)]
    pub conditions: Vec<String>,

    /// Items under a `**Constraints:**` label
    #[serde(default)]
    pub constraints: Vec<String>,

    /// Items under a `**Data Required:**` label
    #[serde(default)]
    pub data_required: Vec<String>,

    /// Items under a `**Tools:**` label
    #[serde(default)]
    pub tools_needed: Vec<String>,
}

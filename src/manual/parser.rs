//! Line-oriented parser for markdown process manuals.
//!
//! Recognizes a small fixed grammar:
//! - `#` manual title, `##` team, `###` worker, `####` task
//! - `- [ ]` / `- [x]` checklist items
//! - `**Conditions:**`, `**Constraints:**`, `**Data Required:**`,
//!   `**Tools:**` section labels followed by plain `- ` bullets
//!
//! Parsing is total: unrecognized or out-of-place lines are dropped, never
//! an error.

use tracing::debug;

use super::types::{Manual, Task, Team};

/// Requirement list a plain bullet currently appends to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Conditions,
    Constraints,
    DataRequired,
    ToolsNeeded,
}

impl Section {
    fn from_label(line: &str) -> Option<Section> {
        match line {
            "**Conditions:**" => Some(Section::Conditions),
            "**Constraints:**" => Some(Section::Constraints),
            "**Data Required:**" => Some(Section::DataRequired),
            "**Tools:**" => Some(Section::ToolsNeeded),
            _ => None,
        }
    }

    fn list_mut(self, task: &mut Task) -> &mut Vec<String> {
        match self {
            Section::Conditions => &mut task.conditions,
            Section::Constraints => &mut task.constraints,
            Section::DataRequired => &mut task.data_required,
            Section::ToolsNeeded => &mut task.tools_needed,
        }
    }
}

/// Parser state threaded through a single pass over the input lines.
#[derive(Debug, Default)]
struct ParserState {
    manual: Manual,
    team: Option<Team>,
    task: Option<Task>,
    /// Survives task and team boundaries: a bullet after a new heading but
    /// before a new section label lands in that heading's task under the
    /// previous section.
    section: Option<Section>,
}

impl ParserState {
    /// Append the open task to its team, if both exist.
    fn finish_task(&mut self) {
        if let (Some(task), Some(team)) = (self.task.take(), self.team.as_mut()) {
            team.tasks.push(task);
        }
    }

    /// Append the open team (and its open task) to the manual.
    fn finish_team(&mut self) {
        self.finish_task();
        if let Some(team) = self.team.take() {
            self.manual.teams.push(team);
        }
    }
}

/// Strip an optional leading label like `Team:` and surrounding whitespace.
fn strip_label(text: &str, label: &str) -> String {
    let text = text.trim();
    text.strip_prefix(label).unwrap_or(text).trim().to_string()
}

/// Parse raw markdown into a [`Manual`].
pub fn parse(markdown: &str) -> Manual {
    let mut state = ParserState::default();

    for raw in markdown.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix("# ") {
            // Later titles overwrite earlier ones; no merge policy.
            state.manual.title = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix("## ") {
            state.finish_team();
            state.team = Some(Team {
                name: strip_label(rest, "Team:"),
                ..Team::default()
            });
        } else if let Some(rest) = line.strip_prefix("### ") {
            // Workers outside a team are dropped.
            if let Some(team) = state.team.as_mut() {
                team.workers.push(strip_label(rest, "Worker:"));
            }
        } else if let Some(rest) = line.strip_prefix("#### ") {
            // Tasks outside a team are dropped.
            if state.team.is_some() {
                state.finish_task();
                state.task = Some(Task {
                    title: strip_label(rest, "Task:"),
                    ..Task::default()
                });
            }
        } else if let Some(item) = line
            .strip_prefix("- [ ]")
            .or_else(|| line.strip_prefix("- [x]"))
        {
            // Checked state is discarded.
            if let Some(task) = state.task.as_mut() {
                task.checklist.push(item.trim().to_string());
            }
        } else if let Some(section) = Section::from_label(line) {
            state.section = Some(section);
        } else if let Some(item) = line.strip_prefix("- ") {
            // Plain bullets need both an open task and an active section.
            if let (Some(section), Some(task)) = (state.section, state.task.as_mut()) {
                section.list_mut(task).push(item.trim().to_string());
            }
        } else {
            debug!(line, "ignoring unrecognized manual line");
        }
    }

    state.finish_team();
    state.manual
}

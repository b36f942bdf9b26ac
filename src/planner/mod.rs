//! Workflow planning: ordered execution phases derived from a [`Manual`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ids::{now_rfc3339, timestamp_id};
use crate::manual::Manual;

/// Execution plan derived from a manual: one phase per team, in team order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowPlan {
    /// Timestamped plan identifier, e.g. `workflow_plan_20250828_101500`
    pub id: String,

    /// Manual title, or `Untitled Workflow` when the manual has none
    pub title: String,

    /// Phases in team order
    #[serde(default)]
    pub execution_phases: Vec<Phase>,

    /// Reserved for cross-phase dependencies; always empty in this stage
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// RFC 3339 creation timestamp
    pub created_at: String,
}

/// One team's slot in the sequential plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phase {
    /// 1-based position in the plan
    pub phase: usize,

    /// Name of the source team
    pub team_name: String,

    /// Index of the source team in the manual, carried so later stages can
    /// resolve the team directly instead of re-matching by name
    pub team_index: usize,

    /// Workers copied verbatim from the team
    #[serde(default)]
    pub workers: Vec<String>,

    /// Planned tasks in team task order
    #[serde(default)]
    pub tasks: Vec<PlannedTask>,
}

/// Derived task metrics; checklist and condition contents are not retained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedTask {
    /// Identifier scoped by phase and per-phase task index, `task_<p>_<n>`
    pub task_id: String,

    /// Task title from the manual
    pub title: String,

    /// Number of checklist items
    pub checklist_items: usize,

    /// Number of condition items
    pub conditions_count: usize,

    /// Tools the task declares
    #[serde(default)]
    pub tools_required: Vec<String>,

    /// Placeholder until estimation exists
    pub estimated_duration: String,

    /// True when the owning team has more than one worker
    pub parallel_execution: bool,
}

/// Build a [`WorkflowPlan`] from a parsed manual.
///
/// Phases are numbered 1-based in team order; no dependency graph is
/// computed beyond that linear order.
pub fn plan(manual: &Manual) -> WorkflowPlan {
    let title = if manual.title.is_empty() {
        "Untitled Workflow".to_string()
    } else {
        manual.title.clone()
    };

    let execution_phases: Vec<Phase> = manual
        .teams
        .iter()
        .enumerate()
        .map(|(team_index, team)| {
            let phase = team_index + 1;
            let parallel = team.workers.len() > 1;
            let tasks = team
                .tasks
                .iter()
                .enumerate()
                .map(|(n, task)| PlannedTask {
                    task_id: format!("task_{}_{}", phase, n + 1),
                    title: task.title.clone(),
                    checklist_items: task.checklist.len(),
                    conditions_count: task.conditions.len(),
                    tools_required: task.tools_needed.clone(),
                    estimated_duration: "TBD".to_string(),
                    parallel_execution: parallel,
                })
                .collect();

            Phase {
                phase,
                team_name: team.name.clone(),
                team_index,
                workers: team.workers.clone(),
                tasks,
            }
        })
        .collect();

    debug!(phases = execution_phases.len(), "planned workflow");

    WorkflowPlan {
        id: timestamp_id("workflow_plan"),
        title,
        execution_phases,
        dependencies: Vec::new(),
        created_at: now_rfc3339(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manual::parse;

    #[test]
    fn test_plan_empty_manual() {
        let plan = plan(&Manual::default());
        assert_eq!(plan.title, "Untitled Workflow");
        assert!(plan.execution_phases.is_empty());
        assert!(plan.dependencies.is_empty());
        assert!(plan.id.starts_with("workflow_plan_"));
    }

    #[test]
    fn test_plan_one_phase_per_team() {
        let manual = parse("# Guide\n## Ops\n## Data\n## Support\n");
        let plan = plan(&manual);
        assert_eq!(plan.title, "Guide");
        assert_eq!(plan.execution_phases.len(), 3);
        let numbers: Vec<usize> = plan.execution_phases.iter().map(|p| p.phase).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        let indices: Vec<usize> =
            plan.execution_phases.iter().map(|p| p.team_index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_plan_task_metrics() {
        let manual = parse(
            "## Ops\n### Alice\n#### Deploy\n- [ ] a\n- [ ] b\n\
             **Conditions:**\n- CI green\n**Tools:**\n- kubectl\n",
        );
        let plan = plan(&manual);
        let task = &plan.execution_phases[0].tasks[0];
        assert_eq!(task.task_id, "task_1_1");
        assert_eq!(task.checklist_items, 2);
        assert_eq!(task.conditions_count, 1);
        assert_eq!(task.tools_required, vec!["kubectl"]);
        assert_eq!(task.estimated_duration, "TBD");
    }

    #[test]
    fn test_plan_parallel_execution_flag() {
        let manual = parse(
            "## Solo\n### A\n#### T1\n## Pair\n### A\n### B\n#### T2\n",
        );
        let plan = plan(&manual);
        assert!(!plan.execution_phases[0].tasks[0].parallel_execution);
        assert!(plan.execution_phases[1].tasks[0].parallel_execution);
    }

    #[test]
    fn test_plan_task_ids_scoped_by_phase() {
        let manual = parse("## A\n#### T1\n#### T2\n## B\n#### T3\n");
        let plan = plan(&manual);
        assert_eq!(plan.execution_phases[0].tasks[0].task_id, "task_1_1");
        assert_eq!(plan.execution_phases[0].tasks[1].task_id, "task_1_2");
        assert_eq!(plan.execution_phases[1].tasks[0].task_id, "task_2_1");
    }
}

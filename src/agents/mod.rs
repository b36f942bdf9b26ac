//! Agent generation: coordinator and worker descriptors per team.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ids::{now_rfc3339, slug};
use crate::manual::Manual;
use crate::planner::WorkflowPlan;

/// Agents generated for a workflow plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedAgents {
    /// Plan identifier these agents were generated for
    pub workflow_id: String,

    /// Coordinator then workers, per team, in phase order
    #[serde(default)]
    pub agents: Vec<AgentDescriptor>,

    /// RFC 3339 generation timestamp
    pub generated_at: String,
}

/// A generated agent, tagged by role.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum AgentDescriptor {
    /// Coordinates a team's tasks and workers.
    TeamCoordinator(CoordinatorAgent),
    /// Executes tasks under a coordinator.
    TaskExecutor(WorkerAgent),
}

impl AgentDescriptor {
    /// Agent identifier regardless of role.
    pub fn agent_id(&self) -> &str {
        match self {
            AgentDescriptor::TeamCoordinator(a) => &a.agent_id,
            AgentDescriptor::TaskExecutor(a) => &a.agent_id,
        }
    }

    /// Display name regardless of role.
    pub fn name(&self) -> &str {
        match self {
            AgentDescriptor::TeamCoordinator(a) => &a.name,
            AgentDescriptor::TaskExecutor(a) => &a.name,
        }
    }

    /// Tools the agent requires, regardless of role.
    pub fn required_tools(&self) -> &[String] {
        match self {
            AgentDescriptor::TeamCoordinator(a) => &a.required_tools,
            AgentDescriptor::TaskExecutor(a) => &a.required_tools,
        }
    }
}

/// Team-level coordinator descriptor, one per team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoordinatorAgent {
    /// `agent_<team slug>_lead`
    pub agent_id: String,

    /// `<team> Lead Agent`
    pub name: String,

    pub description: String,

    /// Fixed coordination responsibilities
    pub responsibilities: Vec<String>,

    /// Titles of every task in the team
    pub managed_tasks: Vec<String>,

    /// Workers the coordinator supervises
    pub team_workers: Vec<String>,

    /// Deduplicated union of all task tools, sorted
    pub required_tools: Vec<String>,
}

/// Per-worker executor descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerAgent {
    /// `agent_<worker slug>`
    pub agent_id: String,

    /// `<worker> Worker Agent`
    pub name: String,

    pub description: String,

    /// Identifier of the coordinator this worker reports to; a lookup
    /// reference only, not ownership
    pub supervisor: String,

    /// Every task title in the team; assignment is uniform, not per-worker
    pub assigned_tasks: Vec<String>,

    /// Same tool union as the coordinator
    pub required_tools: Vec<String>,
}

const COORDINATOR_RESPONSIBILITIES: [&str; 4] = [
    "Task assignment and tracking",
    "Progress monitoring",
    "Condition validation",
    "Inter-team communication",
];

/// Generate one coordinator per team and one worker agent per team member.
///
/// Teams are resolved through the phase's `team_index`. An index that no
/// longer resolves (a hand-edited plan, for instance) skips the phase and
/// reports it.
pub fn generate(plan: &WorkflowPlan, manual: &Manual) -> GeneratedAgents {
    let mut agents = Vec::new();

    for phase in &plan.execution_phases {
        let Some(team) = manual.teams.get(phase.team_index) else {
            warn!(
                phase = phase.phase,
                team_name = %phase.team_name,
                team_index = phase.team_index,
                "phase references a team missing from the manual; skipping"
            );
            continue;
        };

        let task_titles: Vec<String> = team.tasks.iter().map(|t| t.title.clone()).collect();
        let required_tools: Vec<String> = team
            .tasks
            .iter()
            .flat_map(|t| t.tools_needed.iter().map(String::as_str))
            .collect::<BTreeSet<&str>>()
            .into_iter()
            .map(str::to_string)
            .collect();

        let coordinator_id = format!("agent_{}_lead", slug(&team.name));
        agents.push(AgentDescriptor::TeamCoordinator(CoordinatorAgent {
            agent_id: coordinator_id.clone(),
            name: format!("{} Lead Agent", team.name),
            description: format!("Coordinates tasks and manages workflow for {}", team.name),
            responsibilities: COORDINATOR_RESPONSIBILITIES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            managed_tasks: task_titles.clone(),
            team_workers: team.workers.clone(),
            required_tools: required_tools.clone(),
        }));

        for worker in &team.workers {
            agents.push(AgentDescriptor::TaskExecutor(WorkerAgent {
                agent_id: format!("agent_{}", slug(worker)),
                name: format!("{} Worker Agent", worker),
                description: format!("Executes specific tasks assigned to {}", worker),
                supervisor: coordinator_id.clone(),
                assigned_tasks: task_titles.clone(),
                required_tools: required_tools.clone(),
            }));
        }
    }

    GeneratedAgents {
        workflow_id: plan.id.clone(),
        agents,
        generated_at: now_rfc3339(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manual::parse;
    use crate::planner::plan;

    fn pipeline(markdown: &str) -> (Manual, GeneratedAgents) {
        let manual = parse(markdown);
        let plan = plan(&manual);
        let generated = generate(&plan, &manual);
        (manual, generated)
    }

    #[test]
    fn test_generate_empty_manual() {
        let (_, generated) = pipeline("");
        assert!(generated.agents.is_empty());
    }

    #[test]
    fn test_generate_one_coordinator_plus_one_per_worker() {
        let (_, generated) =
            pipeline("## Ops\n### Alice\n### Bob\n#### Deploy\n#### Verify\n");
        assert_eq!(generated.agents.len(), 3);
        assert!(matches!(
            generated.agents[0],
            AgentDescriptor::TeamCoordinator(_)
        ));
        assert!(matches!(generated.agents[1], AgentDescriptor::TaskExecutor(_)));
        assert!(matches!(generated.agents[2], AgentDescriptor::TaskExecutor(_)));
    }

    #[test]
    fn test_generate_coordinator_fields() {
        let (_, generated) = pipeline(
            "## Ops Team\n### Alice\n#### Deploy\n**Tools:**\n- kubectl\n\
             #### Verify\n- curl\n",
        );
        let AgentDescriptor::TeamCoordinator(lead) = &generated.agents[0] else {
            panic!("expected coordinator first");
        };
        assert_eq!(lead.agent_id, "agent_ops_team_lead");
        assert_eq!(lead.name, "Ops Team Lead Agent");
        assert_eq!(lead.managed_tasks, vec!["Deploy", "Verify"]);
        assert_eq!(lead.team_workers, vec!["Alice"]);
        assert_eq!(lead.required_tools, vec!["curl", "kubectl"]);
        assert_eq!(lead.responsibilities.len(), 4);
    }

    #[test]
    fn test_generate_worker_uniform_assignment() {
        let (_, generated) = pipeline(
            "## Ops\n### Alice\n### Bob\n#### Deploy\n**Tools:**\n- kubectl\n\
             #### Verify\n",
        );
        for agent in &generated.agents[1..] {
            let AgentDescriptor::TaskExecutor(worker) = agent else {
                panic!("expected worker");
            };
            assert_eq!(worker.assigned_tasks, vec!["Deploy", "Verify"]);
            assert_eq!(worker.required_tools, vec!["kubectl"]);
            assert_eq!(worker.supervisor, "agent_ops_lead");
        }
    }

    #[test]
    fn test_generate_tool_union_deduplicated() {
        let (_, generated) = pipeline(
            "## Ops\n### Alice\n#### A\n**Tools:**\n- kubectl\n\
             #### B\n- kubectl\n- helm\n",
        );
        assert_eq!(
            generated.agents[0].required_tools(),
            ["helm", "kubectl"]
        );
    }

    #[test]
    fn test_generate_skips_unresolvable_team_index() {
        let manual = parse("## Ops\n### Alice\n");
        let mut plan = plan(&manual);
        plan.execution_phases[0].team_index = 7;
        let generated = generate(&plan, &manual);
        assert!(generated.agents.is_empty());
    }

    #[test]
    fn test_generate_workflow_id_carried_from_plan() {
        let manual = parse("## Ops\n");
        let plan = plan(&manual);
        let generated = generate(&plan, &manual);
        assert_eq!(generated.workflow_id, plan.id);
    }
}

//! Tool matching: agent requirements against an available-tool catalog.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::agents::GeneratedAgents;
use crate::ids::now_rfc3339;

/// Tools considered available when the caller supplies none.
pub const DEFAULT_TOOL_CATALOG: [&str; 11] = [
    "create_task",
    "update_task_status",
    "create_workflow",
    "get_workflow_status",
    "parse_markdown_manual",
    "plan_workflow_from_manual",
    "generate_specialized_agents",
    "validate_conditions",
    "send_notification",
    "log_progress",
    "file_operations",
];

/// Outcome of matching every generated agent against the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolMatchResult {
    /// Plan identifier the agents were generated for
    pub workflow_id: String,

    /// One record per agent, in agent order
    #[serde(default)]
    pub agent_tool_assignments: Vec<AgentToolAssignment>,

    /// Every tool some agent needs but the catalog lacks; deduplicated,
    /// serialized in sorted order
    #[serde(default)]
    pub missing_tools: BTreeSet<String>,

    /// One recommendation per globally missing tool
    #[serde(default)]
    pub tool_recommendations: Vec<ToolRecommendation>,

    /// RFC 3339 matching timestamp
    pub matched_at: String,
}

/// Per-agent matched and missing tool lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentToolAssignment {
    pub agent_id: String,
    pub agent_name: String,

    /// Requirement list in the agent's own order
    #[serde(default)]
    pub required_tools: Vec<String>,

    /// Requirements present in the catalog (case-insensitive)
    #[serde(default)]
    pub matched_tools: Vec<String>,

    /// Requirements absent from the catalog
    #[serde(default)]
    pub missing_tools: Vec<String>,
}

/// Suggested follow-up for a missing tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolRecommendation {
    pub tool_name: String,
    pub suggested_implementation: String,
    pub priority: RecommendationPriority,
}

/// How urgently a missing tool should be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationPriority {
    Medium,
    High,
}

/// Core integration tools get flagged high.
fn priority_for(tool: &str) -> RecommendationPriority {
    match tool {
        "email" | "database" | "api" => RecommendationPriority::High,
        _ => RecommendationPriority::Medium,
    }
}

/// Match each agent's required tools against `available_tools`, falling back
/// to [`DEFAULT_TOOL_CATALOG`]. Matching is case-insensitive; missing tools
/// are collected globally and turned into recommendations.
pub fn match_tools(
    generated: &GeneratedAgents,
    available_tools: Option<&[String]>,
) -> ToolMatchResult {
    let catalog: Vec<String> = match available_tools {
        Some(tools) => tools.iter().map(|t| t.to_lowercase()).collect(),
        None => DEFAULT_TOOL_CATALOG.iter().map(|t| t.to_string()).collect(),
    };

    let mut missing_tools = BTreeSet::new();
    let mut agent_tool_assignments = Vec::with_capacity(generated.agents.len());

    for agent in &generated.agents {
        let mut matched = Vec::new();
        let mut missing = Vec::new();

        for tool in agent.required_tools() {
            if catalog.iter().any(|c| *c == tool.to_lowercase()) {
                matched.push(tool.clone());
            } else {
                missing.push(tool.clone());
                missing_tools.insert(tool.clone());
            }
        }

        agent_tool_assignments.push(AgentToolAssignment {
            agent_id: agent.agent_id().to_string(),
            agent_name: agent.name().to_string(),
            required_tools: agent.required_tools().to_vec(),
            matched_tools: matched,
            missing_tools: missing,
        });
    }

    debug!(
        agents = agent_tool_assignments.len(),
        missing = missing_tools.len(),
        "matched tools"
    );

    let tool_recommendations = missing_tools
        .iter()
        .map(|tool| ToolRecommendation {
            tool_name: tool.clone(),
            suggested_implementation: format!("function for {}", tool),
            priority: priority_for(tool),
        })
        .collect();

    ToolMatchResult {
        workflow_id: generated.workflow_id.clone(),
        agent_tool_assignments,
        missing_tools,
        tool_recommendations,
        matched_at: now_rfc3339(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::generate;
    use crate::manual::parse;
    use crate::planner::plan;

    fn generated_from(markdown: &str) -> GeneratedAgents {
        let manual = parse(markdown);
        generate(&plan(&manual), &manual)
    }

    #[test]
    fn test_match_empty_agents() {
        let result = match_tools(&generated_from(""), None);
        assert!(result.agent_tool_assignments.is_empty());
        assert!(result.missing_tools.is_empty());
        assert!(result.tool_recommendations.is_empty());
    }

    #[test]
    fn test_match_against_default_catalog() {
        let generated = generated_from(
            "## Ops\n### Alice\n#### T\n**Tools:**\n- create_task\n- kubectl\n",
        );
        let result = match_tools(&generated, None);
        // coordinator + one worker
        assert_eq!(result.agent_tool_assignments.len(), 2);
        for assignment in &result.agent_tool_assignments {
            assert_eq!(assignment.matched_tools, vec!["create_task"]);
            assert_eq!(assignment.missing_tools, vec!["kubectl"]);
        }
        assert_eq!(
            result.missing_tools.iter().collect::<Vec<_>>(),
            vec!["kubectl"]
        );
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let generated = generated_from(
            "## Ops\n### Alice\n#### T\n**Tools:**\n- Jira_Search\n",
        );
        let available = vec!["jira_search".to_string()];
        let result = match_tools(&generated, Some(&available));
        assert!(result.missing_tools.is_empty());
        assert_eq!(
            result.agent_tool_assignments[0].matched_tools,
            vec!["Jira_Search"]
        );
    }

    #[test]
    fn test_match_missing_set_deduplicated() {
        // Both agents in the team require the same missing tool.
        let generated = generated_from(
            "## Ops\n### Alice\n### Bob\n#### T\n**Tools:**\n- kubectl\n",
        );
        let result = match_tools(&generated, None);
        assert_eq!(result.agent_tool_assignments.len(), 3);
        assert_eq!(result.missing_tools.len(), 1);
        assert_eq!(result.tool_recommendations.len(), 1);
    }

    #[test]
    fn test_match_recommendation_priorities() {
        let generated = generated_from(
            "## Ops\n#### T\n**Tools:**\n- email\n- database\n- api\n- kubectl\n",
        );
        let result = match_tools(&generated, Some(&[][..]));
        for rec in &result.tool_recommendations {
            let expected = match rec.tool_name.as_str() {
                "email" | "database" | "api" => RecommendationPriority::High,
                _ => RecommendationPriority::Medium,
            };
            assert_eq!(rec.priority, expected);
            assert_eq!(
                rec.suggested_implementation,
                format!("function for {}", rec.tool_name)
            );
        }
        assert_eq!(result.tool_recommendations.len(), 4);
    }
}

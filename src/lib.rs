//! Converts markdown process manuals into planned agent workflows.
//!
//! Four stages form a linear pipeline, each consuming the previous stage's
//! output:
//!
//! 1. [`manual::parse`] - markdown text to a structured [`manual::Manual`]
//! 2. [`planner::plan`] - manual to ordered execution phases
//! 3. [`agents::generate`] - plan to coordinator/worker agent descriptors
//! 4. [`tools::match_tools`] - agent tool requirements against a catalog
//!
//! The pipeline only plans: it produces descriptive structures and never
//! executes anything. Every stage is total over its input; malformed
//! markdown degrades to dropped lines, never an error.

pub mod agents;
pub mod ids;
pub mod manual;
pub mod planner;
pub mod tasks;
pub mod tools;

pub use agents::{generate, GeneratedAgents};
pub use manual::{parse, Manual};
pub use planner::{plan, WorkflowPlan};
pub use tools::{match_tools, ToolMatchResult};

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use workflow_planner::{agents, manual, planner, tools};

/// Plan an agent workflow from a markdown process manual.
#[derive(Parser, Debug)]
#[command(name = "workflow-planner", version, about)]
struct Args {
    /// Path to the markdown manual
    manual: PathBuf,

    /// Available tool names (defaults to the built-in catalog)
    #[arg(long, value_delimiter = ',')]
    tools: Option<Vec<String>>,

    /// Pipeline stage to stop after
    #[arg(long, value_enum, default_value_t = Stage::Match)]
    stage: Stage,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Stage {
    /// Parse the manual and print it
    Parse,
    /// Build the workflow plan
    Plan,
    /// Generate agent descriptors
    Agents,
    /// Match agent tools against the catalog
    Match,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Json,
    Yaml,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let text = std::fs::read_to_string(&args.manual)
        .with_context(|| format!("Failed to read manual {}", args.manual.display()))?;

    let parsed = manual::parse(&text);
    if matches!(args.stage, Stage::Parse) {
        return print(&parsed, args.format);
    }

    let plan = planner::plan(&parsed);
    if matches!(args.stage, Stage::Plan) {
        return print(&plan, args.format);
    }

    let generated = agents::generate(&plan, &parsed);
    if matches!(args.stage, Stage::Agents) {
        return print(&generated, args.format);
    }

    let matched = tools::match_tools(&generated, args.tools.as_deref());
    print(&matched, args.format)
}

fn print<T: Serialize>(value: &T, format: Format) -> Result<()> {
    let rendered = match format {
        Format::Json => {
            serde_json::to_string_pretty(value).context("Failed to serialize result to JSON")?
        }
        Format::Yaml => {
            serde_yaml::to_string(value).context("Failed to serialize result to YAML")?
        }
    };
    println!("{}", rendered);
    Ok(())
}

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write as _;
use std::io;
use std::path::Path;
use tracing::{debug, info};
use waypoint_config::Config;
use waypoint_session::{InputEvent, Session, SessionReport};

/// One event from a script, with the line it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine {
    pub number: usize,
    pub event: InputEvent,
}

#[derive(Debug, Serialize)]
struct Step {
    line: usize,
    event: InputEvent,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct ReplayOutput<'a> {
    steps: &'a [Step],
    session: SessionReport,
}

pub fn handle_replay(script: &Path, json: bool, config: &Config) -> Result<()> {
    let text = if script == Path::new("-") {
        io::read_to_string(io::stdin()).context("Failed to read script from stdin")?
    } else {
        std::fs::read_to_string(script)
            .with_context(|| format!("Failed to read script {}", script.display()))?
    };
    let lines = parse_script(&text)?;
    info!(events = lines.len(), "replaying script");

    let mut session = Session::from_config(config);
    let steps = replay(&mut session, &lines);

    if json {
        let output = ReplayOutput {
            steps: &steps,
            session: session.report(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for step in &steps {
            match (&step.outcome, &step.error) {
                (_, Some(error)) => println!("{:>4}: error: {}", step.line, error),
                (Some(outcome), None) => println!("{:>4}: {}", step.line, outcome),
                (None, None) => {}
            }
        }
        println!();
        print!("{}", render_summary(&session));
    }

    Ok(())
}

/// Parse a script: one event per line, blank lines and `#` comments skipped.
pub fn parse_script(text: &str) -> Result<Vec<ScriptLine>> {
    let mut lines = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let number = idx + 1;
        let content = raw.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }
        let event = content
            .parse::<InputEvent>()
            .with_context(|| format!("line {}: '{}'", number, content))?;
        lines.push(ScriptLine { number, event });
    }
    Ok(lines)
}

/// Rejected events are recorded and the replay moves on, as an
/// interactive session would.
fn replay(session: &mut Session, lines: &[ScriptLine]) -> Vec<Step> {
    lines
        .iter()
        .map(|line| {
            let result = session.handle(line.event);
            debug!(line = line.number, ok = result.is_ok(), "event replayed");
            let (outcome, error) = match result {
                Ok(outcome) => (Some(outcome.to_string()), None),
                Err(e) => (None, Some(e.to_string())),
            };
            Step {
                line: line.number,
                event: line.event,
                outcome,
                error,
            }
        })
        .collect()
}

fn render_summary(session: &Session) -> String {
    let graph = session.graph();
    let mut out = String::new();

    let _ = writeln!(out, "Nodes: {}", graph.node_count());
    for node in graph.nodes() {
        let _ = writeln!(
            out,
            "  {} ({:.2}, {:.2})",
            node.label, node.position.x, node.position.y
        );
    }
    let _ = writeln!(out, "Edges: {}", graph.edge_count());
    for edge in graph.edges() {
        let _ = writeln!(out, "  {} - {}  {:.2}", edge.a, edge.b, edge.weight);
    }

    let path = session.path();
    match path.total_weight() {
        Some(weight) => {
            let _ = write!(out, "Path: {} (weight {:.2})", path.describe(), weight);
            if session.path_is_stale() {
                out.push_str(" [graph changed since]");
            }
            out.push('\n');
        }
        None => out.push_str("Path: none\n"),
    }
    out
}

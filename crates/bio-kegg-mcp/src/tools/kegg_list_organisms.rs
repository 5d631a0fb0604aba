//! Tool: kegg_list_organisms.

use bio_kegg::{parse_organisms, KeggSource, Organism};
use futures::future::BoxFuture;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::types::{ToolContent, ToolDefinition};

use super::{parse_args, Tool, ToolOutcome};

const MAX_ORGANISMS: usize = 50;

#[derive(Debug, Default, Deserialize)]
struct ListOrganismsParams {
    #[serde(default)]
    filter: Option<String>,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "kegg_list_organisms".to_string(),
        description: "List available organisms in KEGG".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "filter": {
                    "type": "string",
                    "description": "Optional filter for organism names"
                }
            }
        }),
    }
}

pub fn tool() -> Tool {
    Tool {
        definition: definition(),
        failure_label: "Error listing organisms",
        handler: run,
    }
}

fn run(args: Value, source: &dyn KeggSource) -> BoxFuture<'_, ToolOutcome> {
    Box::pin(execute(args, source))
}

pub async fn execute(args: Value, source: &dyn KeggSource) -> ToolOutcome {
    let params: ListOrganismsParams = parse_args(args)?;

    let Some(listing) = source.list_entries("organism").await? else {
        return Ok(vec![ToolContent::text("No organisms found")]);
    };

    let organisms = parse_organisms(&listing);
    Ok(vec![ToolContent::text(render(
        params.filter.as_deref(),
        &organisms,
    ))])
}

fn render(filter: Option<&str>, organisms: &[Organism]) -> String {
    let lines: Vec<String> = organisms
        .iter()
        .filter(|org| filter.map_or(true, |f| org.matches(f)))
        .take(MAX_ORGANISMS)
        .map(|org| format!("{}: {}", org.code, org.name))
        .collect();

    let scope = filter
        .map(|f| format!(" (filtered by '{f}')"))
        .unwrap_or_default();
    format!(
        "KEGG Organisms{scope} (first {MAX_ORGANISMS}):\n{}",
        lines.join("\n")
    )
}

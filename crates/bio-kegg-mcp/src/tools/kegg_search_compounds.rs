//! Tool: kegg_search_compounds. Keyword search through `find/<database>/<query>`.

use bio_kegg::{parse_listing, KeggSource, ListingRow};
use futures::future::BoxFuture;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::types::{ToolContent, ToolDefinition};

use super::{parse_args, Tool, ToolOutcome};

const DEFAULT_DATABASE: &str = "compound";
const MAX_RESULTS: usize = 20;

#[derive(Debug, Deserialize)]
struct SearchParams {
    query: String,
    #[serde(default)]
    database: Option<String>,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "kegg_search_compounds".to_string(),
        description: "Search for KEGG compounds by name or formula".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search query (compound name, formula, etc.)"
                },
                "database": {
                    "type": "string",
                    "description": "Database to search (default: 'compound')",
                    "default": DEFAULT_DATABASE
                }
            },
            "required": ["query"]
        }),
    }
}

pub fn tool() -> Tool {
    Tool {
        definition: definition(),
        failure_label: "Error searching compounds",
        handler: run,
    }
}

fn run(args: Value, source: &dyn KeggSource) -> BoxFuture<'_, ToolOutcome> {
    Box::pin(execute(args, source))
}

pub async fn execute(args: Value, source: &dyn KeggSource) -> ToolOutcome {
    let params: SearchParams = parse_args(args)?;
    let database = params.database.as_deref().unwrap_or(DEFAULT_DATABASE);

    let Some(listing) = source.find_entries(database, &params.query).await? else {
        return Ok(vec![ToolContent::text(format!(
            "No compounds found for query: {}",
            params.query
        ))]);
    };

    Ok(vec![ToolContent::text(render(&params.query, &listing))])
}

/// The cap counts raw lines, so malformed rows near the top still use up slots.
fn render(query: &str, listing: &str) -> String {
    let head: Vec<&str> = listing.lines().take(MAX_RESULTS).collect();
    let lines: Vec<String> = parse_listing(&head.join("\n"))
        .iter()
        .map(|row: &ListingRow| format!("{}: {}", row.id, row.label))
        .collect();
    format!(
        "Search results for '{query}' (first {MAX_RESULTS}):\n{}",
        lines.join("\n")
    )
}

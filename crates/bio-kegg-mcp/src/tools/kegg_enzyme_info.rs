//! Tool: kegg_enzyme_info. Looks enzymes up by EC number.

use bio_kegg::{Enzyme, KeggSource};
use futures::future::BoxFuture;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::types::{ToolContent, ToolDefinition};

use super::{parse_args, strip_id_prefix, Tool, ToolOutcome};

const ID_PREFIXES: &[&str] = &["ec:", "enzyme:"];

#[derive(Debug, Deserialize)]
struct EnzymeParams {
    enzyme_id: String,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "kegg_enzyme_info".to_string(),
        description: "Get information about a KEGG enzyme".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "enzyme_id": {
                    "type": "string",
                    "description": "KEGG enzyme ID (e.g., 'ec:1.1.1.1')"
                }
            },
            "required": ["enzyme_id"]
        }),
    }
}

pub fn tool() -> Tool {
    Tool {
        definition: definition(),
        failure_label: "Error retrieving enzyme info",
        handler: run,
    }
}

fn run(args: Value, source: &dyn KeggSource) -> BoxFuture<'_, ToolOutcome> {
    Box::pin(execute(args, source))
}

pub async fn execute(args: Value, source: &dyn KeggSource) -> ToolOutcome {
    let params: EnzymeParams = parse_args(args)?;
    let enzyme_id = strip_id_prefix(&params.enzyme_id, ID_PREFIXES);

    // EC numbers only resolve with the `ec:` database prefix
    let Some(record) = source.get_entry(&format!("ec:{enzyme_id}")).await? else {
        return Ok(vec![ToolContent::text(format!(
            "Enzyme not found: {enzyme_id}"
        ))]);
    };

    let enzyme = Enzyme::parse(&record)?;
    Ok(vec![ToolContent::text(render(enzyme_id, &enzyme))])
}

fn render(enzyme_id: &str, enzyme: &Enzyme) -> String {
    format!(
        "KEGG Enzyme: {enzyme_id}\n\
         Name: {}\n\
         Class: {}\n\
         Reaction: {}\n\
         Substrate: {}\n\
         Product: {}\n\
         Comment: {}",
        enzyme.name(),
        enzyme.class.join("; "),
        enzyme.reaction,
        enzyme.substrates.join("; "),
        enzyme.products.join("; "),
        enzyme.comment,
    )
}

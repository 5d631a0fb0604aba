//! Tool: kegg_find_pathways_by_compound. Reads the PATHWAY field of a compound record.

use bio_kegg::{Compound, KeggSource};
use futures::future::BoxFuture;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::types::{ToolContent, ToolDefinition};

use super::kegg_compound_info::COMPOUND_PREFIXES;
use super::{parse_args, strip_id_prefix, Tool, ToolOutcome};

#[derive(Debug, Deserialize)]
struct FindPathwaysParams {
    compound_id: String,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "kegg_find_pathways_by_compound".to_string(),
        description: "Find pathways containing a specific compound".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "compound_id": {
                    "type": "string",
                    "description": "KEGG compound ID (e.g., 'C00002')"
                }
            },
            "required": ["compound_id"]
        }),
    }
}

pub fn tool() -> Tool {
    Tool {
        definition: definition(),
        failure_label: "Error finding pathways",
        handler: run,
    }
}

fn run(args: Value, source: &dyn KeggSource) -> BoxFuture<'_, ToolOutcome> {
    Box::pin(execute(args, source))
}

pub async fn execute(args: Value, source: &dyn KeggSource) -> ToolOutcome {
    let params: FindPathwaysParams = parse_args(args)?;
    let compound_id = strip_id_prefix(&params.compound_id, COMPOUND_PREFIXES);

    let Some(record) = source.get_entry(compound_id).await? else {
        return Ok(vec![ToolContent::text(format!(
            "Compound not found: {compound_id}"
        ))]);
    };

    let compound = Compound::parse(&record)?;
    Ok(vec![ToolContent::text(render(compound_id, &compound))])
}

fn render(compound_id: &str, compound: &Compound) -> String {
    if compound.pathways.is_empty() {
        return format!("No pathways found for compound: {compound_id}");
    }

    let lines: Vec<String> = compound
        .pathways
        .iter()
        .map(|pathway| format!("{}: {}", pathway.id, pathway.name))
        .collect();
    format!(
        "Pathways containing compound {compound_id}:\n{}",
        lines.join("\n")
    )
}

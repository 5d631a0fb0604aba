//! Tool: kegg_compound_info.

use bio_kegg::{Compound, KeggSource};
use futures::future::BoxFuture;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::types::{ToolContent, ToolDefinition};

use super::{parse_args, strip_id_prefix, Tool, ToolOutcome};

/// Prefixes accepted in front of a compound id.
pub(crate) const COMPOUND_PREFIXES: &[&str] = &["cpd:", "compound:"];

#[derive(Debug, Deserialize)]
struct CompoundParams {
    compound_id: String,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "kegg_compound_info".to_string(),
        description: "Get information about a KEGG compound".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "compound_id": {
                    "type": "string",
                    "description": "KEGG compound ID (e.g., 'C00002', 'cpd:C00002')"
                }
            },
            "required": ["compound_id"]
        }),
    }
}

pub fn tool() -> Tool {
    Tool {
        definition: definition(),
        failure_label: "Error retrieving compound info",
        handler: run,
    }
}

fn run(args: Value, source: &dyn KeggSource) -> BoxFuture<'_, ToolOutcome> {
    Box::pin(execute(args, source))
}

pub async fn execute(args: Value, source: &dyn KeggSource) -> ToolOutcome {
    let params: CompoundParams = parse_args(args)?;
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
    format!(
        "KEGG Compound: {compound_id}\n\
         Name: {}\n\
         Formula: {}\n\
         Mass: {}\n\
         Comment: {}\n\
         Pathways: {} pathways\n\
         Enzymes: {} enzymes",
        compound.name(),
        compound.formula,
        compound.mass,
        compound.comment,
        compound.pathways.len(),
        compound.enzymes.len(),
    )
}

//! Tool: kegg_pathway_info. Summary of one pathway map plus a sample of its genes.

use bio_kegg::{KeggSource, Pathway};
use futures::future::BoxFuture;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::types::{ToolContent, ToolDefinition};

use super::{parse_args, strip_id_prefix, Tool, ToolOutcome};

const ID_PREFIXES: &[&str] = &["pathway:", "path:", "map:"];
const SAMPLE_GENES: usize = 10;

#[derive(Debug, Deserialize)]
struct PathwayParams {
    pathway_id: String,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "kegg_pathway_info".to_string(),
        description: "Get information about a KEGG pathway".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "pathway_id": {
                    "type": "string",
                    "description": "KEGG pathway ID (e.g., 'map00010', 'hsa00010')"
                }
            },
            "required": ["pathway_id"]
        }),
    }
}

pub fn tool() -> Tool {
    Tool {
        definition: definition(),
        failure_label: "Error retrieving pathway info",
        handler: run,
    }
}

fn run(args: Value, source: &dyn KeggSource) -> BoxFuture<'_, ToolOutcome> {
    Box::pin(execute(args, source))
}

pub async fn execute(args: Value, source: &dyn KeggSource) -> ToolOutcome {
    let params: PathwayParams = parse_args(args)?;
    let pathway_id = strip_id_prefix(&params.pathway_id, ID_PREFIXES);

    let Some(record) = source.get_entry(pathway_id).await? else {
        return Ok(vec![ToolContent::text(format!(
            "Pathway not found: {pathway_id}"
        ))]);
    };

    let pathway = Pathway::parse(&record)?;
    Ok(render(pathway_id, &pathway))
}

fn render(pathway_id: &str, pathway: &Pathway) -> Vec<ToolContent> {
    let mut content = vec![ToolContent::text(format!(
        "KEGG Pathway: {pathway_id}\n\
         Name: {}\n\
         Description: {}\n\
         Class: {}\n\
         Genes: {} genes\n\
         Compounds: {} compounds",
        pathway.name,
        pathway.description,
        pathway.class,
        pathway.genes.len(),
        pathway.compounds.len(),
    ))];

    if !pathway.genes.is_empty() {
        let sample: Vec<String> = pathway
            .genes
            .iter()
            .take(SAMPLE_GENES)
            .map(|gene| format!("{}: {}", gene.id, gene.name))
            .collect();
        content.push(ToolContent::text(format!(
            "Sample genes (first {SAMPLE_GENES}):\n{}",
            sample.join("\n")
        )));
    }

    content
}

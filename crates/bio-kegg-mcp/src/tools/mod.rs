//! KEGG tools exposed over `tools/call`.

pub mod executor;
pub mod kegg_compound_info;
pub mod kegg_enzyme_info;
pub mod kegg_find_pathways_by_compound;
pub mod kegg_list_organisms;
pub mod kegg_pathway_info;
pub mod kegg_search_compounds;
pub mod registry;

pub use executor::execute;
pub use registry::{Tool, ToolHandler, ToolOutcome, ToolRegistry};

use bio_kegg::{KeggError, KeggResult};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode tool arguments. Bad arguments are a tool failure, not a protocol error.
pub(crate) fn parse_args<T: DeserializeOwned>(args: Value) -> KeggResult<T> {
    if !args.is_object() {
        return Err(KeggError::InvalidArgument(format!(
            "arguments must be an object, got {args}"
        )));
    }
    serde_json::from_value(args).map_err(|e| KeggError::InvalidArgument(e.to_string()))
}

/// Drop the first matching database prefix (`cpd:C00002` -> `C00002`).
pub(crate) fn strip_id_prefix<'a>(id: &'a str, prefixes: &[&str]) -> &'a str {
    prefixes
        .iter()
        .find_map(|prefix| id.strip_prefix(prefix))
        .unwrap_or(id)
}

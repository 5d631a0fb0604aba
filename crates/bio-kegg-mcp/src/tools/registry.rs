//! Tool registration and lookup.

use std::collections::HashMap;

use bio_kegg::{KeggResult, KeggSource};
use futures::future::BoxFuture;
use serde_json::Value;

use crate::types::{McpError, McpResult, ToolContent, ToolDefinition};

use super::{
    kegg_compound_info, kegg_enzyme_info, kegg_find_pathways_by_compound, kegg_list_organisms,
    kegg_pathway_info, kegg_search_compounds,
};

/// What a tool handler produces: content blocks, or the reason it could not.
pub type ToolOutcome = KeggResult<Vec<ToolContent>>;

/// A tool's entry point.
pub type ToolHandler = for<'a> fn(Value, &'a dyn KeggSource) -> BoxFuture<'a, ToolOutcome>;

/// A registered tool: its descriptor, the label its failures are reported under, and its handler.
#[derive(Clone)]
pub struct Tool {
    pub definition: ToolDefinition,
    pub failure_label: &'static str,
    pub handler: ToolHandler,
}

impl std::fmt::Debug for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tool")
            .field("name", &self.definition.name)
            .field("failure_label", &self.failure_label)
            .finish_non_exhaustive()
    }
}

/// Fixed, ordered tool catalog. Contents never change after construction.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Vec<Tool>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Build a registry. Two tools with the same name is an error.
    pub fn new(tools: Vec<Tool>) -> McpResult<Self> {
        let mut index = HashMap::with_capacity(tools.len());
        for (position, tool) in tools.iter().enumerate() {
            let name = tool.definition.name.clone();
            if index.insert(name.clone(), position).is_some() {
                return Err(McpError::DuplicateTool(name));
            }
        }
        Ok(Self { tools, index })
    }

    /// The six KEGG tools, in `tools/list` order.
    pub fn kegg() -> McpResult<Self> {
        Self::new(vec![
            kegg_pathway_info::tool(),
            kegg_compound_info::tool(),
            kegg_enzyme_info::tool(),
            kegg_search_compounds::tool(),
            kegg_find_pathways_by_compound::tool(),
            kegg_list_organisms::tool(),
        ])
    }

    pub fn list(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.definition.clone()).collect()
    }

    /// Exact, case-sensitive lookup.
    pub fn resolve(&self, name: &str) -> McpResult<&Tool> {
        self.index
            .get(name)
            .map(|&position| &self.tools[position])
            .ok_or_else(|| McpError::ToolNotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

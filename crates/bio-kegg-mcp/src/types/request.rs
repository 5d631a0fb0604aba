//! MCP request parameter types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `tools/call` params. A missing `name` reads as empty and resolves to no tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolCallParams {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub arguments: Option<Value>,
}

impl ToolCallParams {
    /// Arguments as passed to the tool; absent or `null` becomes an empty mapping.
    pub fn arguments_or_empty(&self) -> Value {
        match &self.arguments {
            None | Some(Value::Null) => Value::Object(serde_json::Map::new()),
            Some(args) => args.clone(),
        }
    }
}

//! Runs a resolved tool and folds its outcome into content blocks.

use bio_kegg::KeggSource;
use serde_json::Value;

use crate::types::ToolCallResult;

use super::Tool;

/// Invoke `tool` with `args`. A handler failure becomes one text block
/// `"<failure label>: <error>"`; it never escapes as an error.
pub async fn execute(tool: &Tool, args: Value, source: &dyn KeggSource) -> ToolCallResult {
    let name = &tool.definition.name;
    tracing::debug!("Calling tool {name}");

    match (tool.handler)(args, source).await {
        Ok(content) => ToolCallResult { content },
        Err(e) => {
            tracing::warn!("Tool {name} failed: {e}");
            ToolCallResult::text(format!("{}: {e}", tool.failure_label))
        }
    }
}

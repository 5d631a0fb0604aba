//! Shared helpers: a scripted KEGG source and request builders.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use bio_kegg::{KeggError, KeggResult, KeggSource};
use bio_kegg_mcp::protocol::ProtocolHandler;
use bio_kegg_mcp::tools::ToolRegistry;

pub const PATHWAY_HSA00010: &str = include_str!("../../../bio-kegg/tests/fixtures/hsa00010.txt");
pub const COMPOUND_C00002: &str = include_str!("../../../bio-kegg/tests/fixtures/C00002.txt");
pub const ENZYME_1_1_1_1: &str = include_str!("../../../bio-kegg/tests/fixtures/ec_1.1.1.1.txt");
pub const ORGANISMS: &str = include_str!("../../../bio-kegg/tests/fixtures/organisms.tsv");
pub const FIND_ATP: &str = include_str!("../../../bio-kegg/tests/fixtures/find_compound_atp.tsv");

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Scripted,
    Failing,
    Panicking,
}

/// In-memory KEGG. Unknown keys are "not found"; every call is recorded.
#[derive(Debug, Default)]
pub struct MockKegg {
    entries: HashMap<String, String>,
    finds: HashMap<(String, String), String>,
    lists: HashMap<String, String>,
    mode: Mode,
    calls: Mutex<Vec<String>>,
}

impl MockKegg {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source preloaded with every fixture record.
    pub fn with_fixtures() -> Self {
        Self::new()
            .entry("hsa00010", PATHWAY_HSA00010)
            .entry("C00002", COMPOUND_C00002)
            .entry("ec:1.1.1.1", ENZYME_1_1_1_1)
            .find("compound", "ATP", FIND_ATP)
            .list("organism", ORGANISMS)
    }

    pub fn entry(mut self, id: &str, text: &str) -> Self {
        self.entries.insert(id.to_string(), text.to_string());
        self
    }

    pub fn find(mut self, database: &str, query: &str, text: &str) -> Self {
        self.finds
            .insert((database.to_string(), query.to_string()), text.to_string());
        self
    }

    pub fn list(mut self, database: &str, text: &str) -> Self {
        self.lists.insert(database.to_string(), text.to_string());
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self, call: String, found: Option<&String>) -> KeggResult<Option<String>> {
        self.calls.lock().unwrap().push(call.clone());
        match self.mode {
            Mode::Scripted => Ok(found.cloned()),
            Mode::Failing => Err(KeggError::Parse(format!("upstream hung up during {call}"))),
            Mode::Panicking => panic!("source exploded during {call}"),
        }
    }
}

#[async_trait]
impl KeggSource for MockKegg {
    async fn get_entry(&self, entry_id: &str) -> KeggResult<Option<String>> {
        self.answer(format!("get/{entry_id}"), self.entries.get(entry_id))
    }

    async fn find_entries(&self, database: &str, query: &str) -> KeggResult<Option<String>> {
        let key = (database.to_string(), query.to_string());
        self.answer(format!("find/{database}/{query}"), self.finds.get(&key))
    }

    async fn list_entries(&self, database: &str) -> KeggResult<Option<String>> {
        self.answer(format!("list/{database}"), self.lists.get(database))
    }
}

pub fn handler_with(source: Arc<MockKegg>) -> ProtocolHandler {
    ProtocolHandler::new(ToolRegistry::kegg().unwrap(), source)
}

pub fn handler() -> ProtocolHandler {
    handler_with(Arc::new(MockKegg::with_fixtures()))
}

/// Build an MCP JSON-RPC request.
pub fn mcp_request(id: Value, method: &str, params: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": method,
        "params": params
    })
}

pub fn tool_call(id: i64, name: &str, arguments: Value) -> Value {
    mcp_request(
        json!(id),
        "tools/call",
        json!({ "name": name, "arguments": arguments }),
    )
}

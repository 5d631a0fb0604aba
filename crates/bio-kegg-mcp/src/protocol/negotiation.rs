//! The `initialize` handshake.
//!
//! The server offers one fixed capability set. Client parameters are read only
//! for logging; nothing the client sends can make initialization fail.

use serde_json::Value;

use crate::types::{InitializeParams, InitializeResult, MCP_VERSION};

/// Answer an `initialize` request.
pub fn negotiate(params: Option<Value>) -> InitializeResult {
    let params = read_params(params);

    match params.protocol_version.as_deref() {
        Some(requested) if requested != MCP_VERSION => tracing::warn!(
            "Client requested protocol version {requested}, server speaks {MCP_VERSION}. Proceeding with server version."
        ),
        _ => {}
    }

    match &params.client_info {
        Some(client) => tracing::info!("Initialized with client: {} v{}", client.name, client.version),
        None => tracing::info!("Initialized with anonymous client"),
    }

    InitializeResult::default_result()
}

fn read_params(params: Option<Value>) -> InitializeParams {
    match params {
        None | Some(Value::Null) => InitializeParams::default(),
        Some(value) => serde_json::from_value(value).unwrap_or_else(|e| {
            tracing::debug!("Ignoring unreadable initialize params: {e}");
            InitializeParams::default()
        }),
    }
}

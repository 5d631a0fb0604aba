//! Request dispatcher. Routes each JSON-RPC request to its method handler and
//! turns every outcome, including a panic, into exactly one reply.

use std::any::Any;
use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use bio_kegg::KeggSource;
use futures::future::BoxFuture;
use futures::FutureExt;
use serde_json::Value;

use crate::tools::{self, ToolRegistry};
use crate::types::*;

use super::negotiation;

type MethodHandler =
    for<'a> fn(&'a ProtocolHandler, Option<Value>) -> BoxFuture<'a, McpResult<Value>>;

/// Dispatches decoded requests. Holds no per-request state.
pub struct ProtocolHandler {
    registry: ToolRegistry,
    source: Arc<dyn KeggSource>,
    methods: HashMap<&'static str, MethodHandler>,
    error_codes: ErrorCodeStyle,
}

impl ProtocolHandler {
    pub fn new(registry: ToolRegistry, source: Arc<dyn KeggSource>) -> Self {
        Self {
            registry,
            source,
            methods: method_table(),
            error_codes: ErrorCodeStyle::default(),
        }
    }

    pub fn with_error_codes(mut self, style: ErrorCodeStyle) -> Self {
        self.error_codes = style;
        self
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn error_codes(&self) -> ErrorCodeStyle {
        self.error_codes
    }

    /// Reply to a line that could not be decoded. The id is unknowable, so it is `null`.
    pub fn reject(&self, err: McpError) -> JsonRpcReply {
        tracing::warn!("Rejecting request: {}", err.detail());
        JsonRpcReply::Error(err.to_json_rpc_error(RequestId::Null, self.error_codes))
    }

    /// Handle one request. Never fails and never panics outward.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> JsonRpcReply {
        if request.jsonrpc != JSONRPC_VERSION {
            tracing::warn!(
                "Request {} has jsonrpc version '{}', expected {JSONRPC_VERSION}",
                request.id,
                request.jsonrpc
            );
        }

        let id = request.id.clone();
        let method = request.method.clone();
        tracing::debug!("-> {method} (id {id})");

        let result = match AssertUnwindSafe(self.dispatch(request))
            .catch_unwind()
            .await
        {
            Ok(result) => result,
            Err(panic) => Err(McpError::InternalError(format!(
                "handler panicked: {}",
                panic_message(panic.as_ref())
            ))),
        };

        match result {
            Ok(value) => JsonRpcReply::Response(JsonRpcResponse::new(id, value)),
            Err(e) => {
                tracing::warn!("{method} (id {id}) failed: {}", e.detail());
                JsonRpcReply::Error(e.to_json_rpc_error(id, self.error_codes))
            }
        }
    }

    async fn dispatch(&self, request: JsonRpcRequest) -> McpResult<Value> {
        let handler = self
            .methods
            .get(request.method.as_str())
            .ok_or_else(|| McpError::MethodNotFound(request.method.clone()))?;
        handler(self, request.params).await
    }

    async fn handle_initialize(&self, params: Option<Value>) -> McpResult<Value> {
        to_result(negotiation::negotiate(params))
    }

    async fn handle_tools_list(&self) -> McpResult<Value> {
        to_result(ToolListResult {
            tools: self.registry.list(),
        })
    }

    async fn handle_tools_call(&self, params: Option<Value>) -> McpResult<Value> {
        let call = match params {
            None | Some(Value::Null) => ToolCallParams::default(),
            Some(value @ Value::Object(_)) => serde_json::from_value::<ToolCallParams>(value)
                .map_err(|e| McpError::InvalidParams(e.to_string()))?,
            Some(other) => {
                return Err(McpError::InvalidParams(format!(
                    "expected an object, got {other}"
                )))
            }
        };

        let tool = self.registry.resolve(&call.name)?;
        let result = tools::execute(tool, call.arguments_or_empty(), self.source.as_ref()).await;
        to_result(result)
    }

    async fn handle_ping(&self) -> McpResult<Value> {
        Ok(Value::Object(serde_json::Map::new()))
    }
}

fn method_table() -> HashMap<&'static str, MethodHandler> {
    let mut methods: HashMap<&'static str, MethodHandler> = HashMap::new();
    methods.insert("initialize", initialize);
    methods.insert("tools/list", tools_list);
    methods.insert("tools/call", tools_call);
    methods.insert("ping", ping);
    methods
}

fn initialize(handler: &ProtocolHandler, params: Option<Value>) -> BoxFuture<'_, McpResult<Value>> {
    Box::pin(handler.handle_initialize(params))
}

fn tools_list(handler: &ProtocolHandler, _params: Option<Value>) -> BoxFuture<'_, McpResult<Value>> {
    Box::pin(handler.handle_tools_list())
}

fn tools_call(handler: &ProtocolHandler, params: Option<Value>) -> BoxFuture<'_, McpResult<Value>> {
    Box::pin(handler.handle_tools_call(params))
}

fn ping(handler: &ProtocolHandler, _params: Option<Value>) -> BoxFuture<'_, McpResult<Value>> {
    Box::pin(handler.handle_ping())
}

fn to_result<T: serde::Serialize>(value: T) -> McpResult<Value> {
    serde_json::to_value(value).map_err(|e| McpError::InternalError(e.to_string()))
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(msg) = panic.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

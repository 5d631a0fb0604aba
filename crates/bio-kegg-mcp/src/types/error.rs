//! Error types and JSON-RPC error codes for the MCP server.

use super::message::{JsonRpcError, RequestId};

/// The single code every protocol error carries in the default style.
pub const SENTINEL_ERROR_CODE: i32 = -1;

/// Standard JSON-RPC 2.0 error codes.
pub mod error_codes {
    pub const PARSE_ERROR: i32 = -32700;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;
}

/// Which code table protocol errors are rendered with. Messages are the same either way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorCodeStyle {
    /// Every protocol error is `-1`.
    #[default]
    Sentinel,
    /// Standard JSON-RPC codes.
    JsonRpc,
}

impl std::str::FromStr for ErrorCodeStyle {
    type Err = McpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sentinel" => Ok(Self::Sentinel),
            "jsonrpc" | "json-rpc" => Ok(Self::JsonRpc),
            other => Err(McpError::Config(format!(
                "unknown error code style '{other}' (expected 'sentinel' or 'jsonrpc')"
            ))),
        }
    }
}

/// All errors that can occur in the MCP server.
#[derive(thiserror::Error, Debug)]
pub enum McpError {
    /// The line could not be decoded into a request. Detail is for logs only.
    #[error("Invalid JSON")]
    ParseError(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Method not found: {0}")]
    MethodNotFound(String),

    #[error("Tool execution failed: Unknown tool: {0}")]
    ToolNotFound(String),

    #[error("Duplicate tool name: {0}")]
    DuplicateTool(String),

    /// Anything unexpected while handling a request. Detail is for logs only.
    #[error("Internal server error")]
    InternalError(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl McpError {
    pub fn code(&self, style: ErrorCodeStyle) -> i32 {
        use error_codes::*;
        if style == ErrorCodeStyle::Sentinel {
            return SENTINEL_ERROR_CODE;
        }
        match self {
            McpError::ParseError(_) => PARSE_ERROR,
            McpError::MethodNotFound(_) => METHOD_NOT_FOUND,
            McpError::InvalidParams(_) | McpError::ToolNotFound(_) => INVALID_PARAMS,
            McpError::DuplicateTool(_)
            | McpError::InternalError(_)
            | McpError::Config(_)
            | McpError::Io(_)
            | McpError::Json(_) => INTERNAL_ERROR,
        }
    }

    /// Message shown to the peer. Server-side faults never leak their detail.
    pub fn client_message(&self) -> String {
        match self {
            McpError::DuplicateTool(_)
            | McpError::Config(_)
            | McpError::Io(_)
            | McpError::Json(_) => McpError::InternalError(String::new()).to_string(),
            other => other.to_string(),
        }
    }

    /// Detail for the diagnostic log.
    pub fn detail(&self) -> String {
        match self {
            McpError::ParseError(detail) | McpError::InternalError(detail) => detail.clone(),
            other => other.to_string(),
        }
    }

    pub fn to_json_rpc_error(&self, id: RequestId, style: ErrorCodeStyle) -> JsonRpcError {
        JsonRpcError::new(id, self.code(style), self.client_message())
    }
}

pub type McpResult<T> = Result<T, McpError>;

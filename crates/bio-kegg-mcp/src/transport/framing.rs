//! Message framing for newline-delimited JSON.

use crate::types::{JsonRpcReply, JsonRpcRequest, McpError, McpResult};

/// Decode one line as a request.
///
/// Anything that is not a request object (bad JSON, an array, a missing
/// `method`, a structured `id`) is a parse error.
pub fn parse_request(line: &str) -> McpResult<JsonRpcRequest> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(McpError::ParseError("empty message".to_string()));
    }

    serde_json::from_str(trimmed).map_err(|e| McpError::ParseError(e.to_string()))
}

/// Serialize a reply to a single JSON line, trailing newline included.
pub fn frame_message(reply: &JsonRpcReply) -> McpResult<String> {
    let mut json = serde_json::to_string(reply)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{JsonRpcError, JsonRpcResponse, RequestId};
    use serde_json::json;

    #[test]
    fn test_parse_request() {
        let req = parse_request("  {\"jsonrpc\":\"2.0\",\"id\":3,\"method\":\"ping\"}\r\n").unwrap();
        assert_eq!(req.method, "ping");
        assert_eq!(req.id, RequestId::Number(3.into()));
    }

    #[test]
    fn test_non_requests_are_parse_errors() {
        for line in [
            "",
            "{not json",
            "[1,2,3]",
            "42",
            "{\"jsonrpc\":\"2.0\",\"id\":1}",
            "{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":7}",
            "{\"jsonrpc\":\"2.0\",\"id\":[1],\"method\":\"ping\"}",
        ] {
            assert!(
                matches!(parse_request(line), Err(McpError::ParseError(_))),
                "{line:?}"
            );
        }
    }

    #[test]
    fn test_frame_is_one_line() {
        let reply = JsonRpcReply::Response(JsonRpcResponse::new(
            RequestId::Number(1.into()),
            json!({"content": [{"type": "text", "text": "two\nlines"}]}),
        ));
        let framed = frame_message(&reply).unwrap();
        assert!(framed.ends_with('\n'));
        assert_eq!(framed.matches('\n').count(), 1);

        let reply = JsonRpcReply::Error(JsonRpcError::new(RequestId::Null, -1, "Invalid JSON".to_string()));
        assert_eq!(
            frame_message(&reply).unwrap(),
            "{\"jsonrpc\":\"2.0\",\"id\":null,\"error\":{\"code\":-1,\"message\":\"Invalid JSON\"}}\n"
        );
    }
}

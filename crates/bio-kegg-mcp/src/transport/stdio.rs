//! Stdio transport: reads JSON-RPC from stdin, writes to stdout.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::protocol::ProtocolHandler;
use crate::types::{McpError, McpResult};

use super::framing;

/// Line-oriented transport. One request is answered before the next line is read.
pub struct StdioTransport {
    handler: ProtocolHandler,
}

impl StdioTransport {
    pub fn new(handler: ProtocolHandler) -> Self {
        Self { handler }
    }

    pub fn handler(&self) -> &ProtocolHandler {
        &self.handler
    }

    /// Serve stdin/stdout until stdin closes.
    pub async fn run(&self) -> McpResult<()> {
        tracing::info!("Stdio transport started");
        let reader = BufReader::new(tokio::io::stdin());
        let writer = tokio::io::stdout();
        self.serve(reader, writer).await.inspect_err(|e| {
            tracing::error!("Stdio transport stopped: {e}");
        })
    }

    /// Serve any line stream. Returns `Ok` on end of input and `Err` only
    /// when a stream itself fails.
    pub async fn serve<R, W>(&self, mut reader: R, mut writer: W) -> McpResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                tracing::info!("EOF on input, shutting down");
                break;
            }

            let reply = match std::str::from_utf8(&buf) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    match framing::parse_request(line) {
                        Ok(request) => self.handler.handle_request(request).await,
                        Err(e) => self.handler.reject(e),
                    }
                }
                Err(e) => self
                    .handler
                    .reject(McpError::ParseError(format!("input is not UTF-8: {e}"))),
            };

            let framed = framing::frame_message(&reply)?;
            writer.write_all(framed.as_bytes()).await?;
            writer.flush().await?;
        }

        Ok(())
    }
}

//! BioKegg MCP server: KEGG lookups as Model Context Protocol tools over stdio.

pub mod config;
pub mod protocol;
pub mod tools;
pub mod transport;
pub mod types;

pub use config::{ConfigOverrides, ServerConfig};
pub use protocol::ProtocolHandler;
pub use tools::ToolRegistry;
pub use transport::StdioTransport;

//! BioKegg MCP server entry point.

use std::sync::Arc;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use bio_kegg::KeggClient;
use bio_kegg_mcp::config::{ConfigOverrides, ServerConfig};
use bio_kegg_mcp::protocol::ProtocolHandler;
use bio_kegg_mcp::tools::{self, ToolRegistry};
use bio_kegg_mcp::transport::StdioTransport;
use bio_kegg_mcp::types::InitializeResult;

#[derive(Parser)]
#[command(
    name = "bio-kegg-mcp",
    about = "MCP server exposing KEGG pathway, compound, enzyme and organism lookups",
    version
)]
struct Cli {
    /// KEGG REST base URL [env: KEGG_REST_BASE, default: https://rest.kegg.jp].
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Per-request timeout in seconds [env: KEGG_TIMEOUT_SECS, default: 30].
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Protocol error codes: sentinel or jsonrpc [env: KEGG_MCP_ERROR_CODES, default: sentinel].
    #[arg(long, global = true)]
    error_codes: Option<String>,

    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP server over stdio (default).
    Serve,

    /// Print server capabilities as JSON.
    Info,

    /// List the available tools.
    Tools,

    /// Run one tool and print its output.
    ///
    /// Example:
    ///   bio-kegg-mcp call kegg_compound_info --args '{"compound_id":"C00002"}'
    Call {
        /// Tool name.
        tool: String,

        /// Tool arguments as a JSON object.
        #[arg(long, default_value = "{}")]
        args: String,
    },

    /// Generate shell completion scripts.
    ///
    /// Examples:
    ///   bio-kegg-mcp completions bash > ~/.local/share/bash-completion/completions/bio-kegg-mcp
    ///   bio-kegg-mcp completions zsh > ~/.zfunc/_bio-kegg-mcp
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let overrides = ConfigOverrides {
        base_url: cli.base_url,
        timeout_secs: cli.timeout_secs,
        error_codes: cli.error_codes,
    };

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let config = ServerConfig::resolve(overrides)?;
            let client = KeggClient::new(&config.base_url, config.timeout)?;
            tracing::info!("BioKegg MCP server");
            tracing::info!("KEGG endpoint: {} (timeout {:?})", client.base_url(), config.timeout);

            let handler = ProtocolHandler::new(ToolRegistry::kegg()?, Arc::new(client))
                .with_error_codes(config.error_codes);
            StdioTransport::new(handler).run().await?;
        }

        Commands::Info => {
            let init = InitializeResult::default_result();
            let registry = ToolRegistry::kegg()?;
            let tools = registry.list();
            let info = serde_json::json!({
                "server": init.server_info,
                "protocol_version": init.protocol_version,
                "capabilities": init.capabilities,
                "tools": tools.iter().map(|t| &t.name).collect::<Vec<_>>(),
                "tool_count": tools.len(),
            });
            println!("{}", serde_json::to_string_pretty(&info)?);
        }

        Commands::Tools => {
            for tool in ToolRegistry::kegg()?.list() {
                println!("{:<32} {}", tool.name, tool.description);
            }
        }

        Commands::Call { tool, args } => {
            let config = ServerConfig::resolve(overrides)?;
            let registry = ToolRegistry::kegg()?;
            let tool = registry.resolve(&tool)?;
            let args: serde_json::Value = serde_json::from_str(&args)
                .map_err(|e| anyhow::anyhow!("--args is not valid JSON: {e}"))?;
            let client = KeggClient::new(&config.base_url, config.timeout)?;

            let result = tools::execute(tool, args, &client).await;
            let blocks: Vec<&str> = result.content.iter().map(|c| c.as_text()).collect();
            println!("{}", blocks.join("\n\n"));
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "bio-kegg-mcp", &mut std::io::stdout());
        }
    }

    Ok(())
}

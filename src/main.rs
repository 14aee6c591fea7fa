//! Auto-parts agent - CLI entry point
//!
//! Lists the tools and preamble for an agent runtime, or invokes one tool
//! directly the way the runtime would.

use autoparts_agent::{agent::Agent, config::Config};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "autoparts-agent", version, about = "Auto-parts catalog tools for LLM agents")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List tool names and usage contracts
    Tools,
    /// Print the instruction preamble
    Preamble,
    /// Print function-calling schemas as JSON
    Schemas,
    /// Print the runtime settings as JSON
    Settings,
    /// Invoke one tool with a single string input
    Call {
        /// Tool name, e.g. search_part
        tool: String,
        /// Positional values, comma-joined for multi-argument tools
        input: String,
    },
}

impl Command {
    /// Only tool calls can reach the completion service.
    fn needs_api_key(&self) -> bool {
        matches!(self, Command::Call { .. })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "autoparts_agent=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = if cli.command.needs_api_key() {
        Config::from_env()?
    } else {
        Config::from_env_with_key(std::env::var("OPENAI_API_KEY").unwrap_or_default())?
    };
    info!(
        catalog = %config.catalog_url,
        model = %config.description_model,
        "Loaded configuration"
    );

    let agent = Agent::new(config);

    match cli.command {
        Command::Tools => {
            for tool in agent.tools().list_tools() {
                println!("{}\n{}\n", tool.name, tool.description);
            }
        }
        Command::Preamble => println!("{}", agent.preamble()),
        Command::Schemas => {
            println!(
                "{}",
                serde_json::to_string_pretty(&agent.tools().get_tool_schemas())?
            );
        }
        Command::Settings => {
            println!("{}", serde_json::to_string_pretty(agent.settings())?);
        }
        Command::Call { tool, input } => {
            println!("{}", agent.invoke(&tool, &input).await);
        }
    }

    Ok(())
}

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use kbkit_core::{
    Config, Dispatcher, KbRequest, Operation, Scope, ToolRegistry, config, tools,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "kbkit")]
#[command(about = "kbkit - Knowledge-base command wrappers", long_about = None)]
struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file (defaults to ./.kbkit.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the knowledge base
    Search {
        query: String,
        #[arg(long, default_value = "all")]
        scope: Scope,
        #[arg(long)]
        category: Option<String>,
    },
    /// Validate YAML files against the schema
    Validate { path: String },
    /// Show knowledge-base statistics
    Stats,
    /// Rebuild the search index
    Index {
        #[arg(long)]
        force: bool,
    },
    /// Print the tool specs as JSON
    Tools,
    /// Execute a tool (kb_search, ...) or an operation (search, rebuild-index, ...)
    /// with JSON arguments
    Call {
        tool: String,
        #[arg(default_value = "{}")]
        args: String,
    },
    /// List scaffolded agents in the working directory
    Agents,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    kbkit_cli::init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", style("❌ Error:").red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;

    let config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => Config::load_or_default(&cwd)?,
    };

    let dispatcher = Arc::new(Dispatcher::with_process_runner(config.kb));

    match cli.command {
        Commands::Search {
            query,
            scope,
            category,
        } => {
            print!(
                "{}",
                dispatcher.search(&query, scope, category.as_deref()).await
            );
        }
        Commands::Validate { path } => {
            print!("{}", dispatcher.validate(&path).await);
        }
        Commands::Stats => {
            print!("{}", dispatcher.stats().await?);
        }
        Commands::Index { force } => {
            print!("{}", dispatcher.rebuild_index(force).await?);
        }
        Commands::Tools => {
            let registry = ToolRegistry::new();
            tools::register_kb_tools(&registry, dispatcher);
            println!("{}", serde_json::to_string_pretty(&registry.get_specs())?);
        }
        Commands::Call { tool, args } => {
            let args: serde_json::Value = serde_json::from_str(&args)
                .map_err(|e| anyhow::anyhow!("Invalid JSON arguments: {}", e))?;

            let registry = ToolRegistry::new();
            tools::register_kb_tools(&registry, dispatcher.clone());

            if registry.contains(&tool) {
                let result = registry.execute(&tool, args).await;
                if !result.success {
                    anyhow::bail!("{}", result.text());
                }
                print!("{}", result.output);
            } else {
                let operation: Operation = tool.parse()?;
                let request = KbRequest::from_params(operation, &args)?;
                print!("{}", dispatcher.dispatch(&request).await?);
            }
        }
        Commands::Agents => {
            kbkit_cli::agents::list_agents(&cwd)?;
        }
    }

    Ok(())
}

//! Typegraph CLI entry point

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use typegraph_core::{GraphConfig, IncludeFlags, OutputFormat};

mod commands;

#[derive(Parser)]
#[command(name = "typegraph", version)]
#[command(about = "Type dependency graph extraction and rendering", long_about = None)]
struct Cli {
    /// Path to the code-model JSON document to analyze
    model: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Graphviz)]
    format: Format,

    /// Root type to start from (defaults to the model's entry root)
    #[arg(short, long)]
    root: Option<String>,

    /// Follow base types
    #[arg(long)]
    base: bool,

    /// Follow derived classes and interfaces
    #[arg(long)]
    derived: bool,

    /// Follow interface implementations
    #[arg(long)]
    implementations: bool,

    /// Follow implemented interfaces
    #[arg(long)]
    interfaces: bool,

    /// Follow member field types
    #[arg(long)]
    members: bool,

    /// Unwrap generic type arguments
    #[arg(long)]
    type_args: bool,

    /// Admit enum types into the graph
    #[arg(long)]
    enums: bool,

    /// Exclude a type by canonical name (repeatable)
    #[arg(long = "exclude", value_name = "NAME")]
    exclude: Vec<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Graphviz,
    Mermaid,
}

impl Cli {
    fn into_config(self) -> (PathBuf, GraphConfig) {
        let include = IncludeFlags {
            base: self.base,
            derived: self.derived,
            implementations: self.implementations,
            interfaces: self.interfaces,
            members: self.members,
            type_args: self.type_args,
            enums: self.enums,
        };
        let config = GraphConfig {
            format: match self.format {
                Format::Graphviz => OutputFormat::Graphviz,
                Format::Mermaid => OutputFormat::Mermaid,
            },
            root: self.root,
            // no relationship flag at all means "follow everything"
            include: include.normalized(),
            exclude: self.exclude,
        };
        (self.model, config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Diagram text goes to stdout; logs stay on stderr.
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let (model_path, config) = cli.into_config();
    commands::graph(model_path, config).await
}

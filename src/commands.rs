//! CLI command implementations

use std::path::PathBuf;

use typegraph_core::{
    BuildStats, CodeModel, DiagramSink, GraphBuilder, GraphConfig, GraphError, GraphvizEmitter,
    MermaidEmitter, OutputFormat, SymbolId,
};
use typegraph_model::JsonModel;

/// Load the code model, resolve the root, and stream the diagram to
/// stdout. Loading and root resolution fail before any diagram text is
/// written, so output never ends up with a dangling header.
pub async fn graph(model_path: PathBuf, config: GraphConfig) -> anyhow::Result<()> {
    let model = JsonModel::load(&model_path)?;
    let root = resolve_root(&model, &config)?;
    tracing::info!(root = %model.canonical_name(root), "building symbol graph");

    let stdout = std::io::stdout();
    let out = stdout.lock();
    let stats = match config.format {
        OutputFormat::Graphviz => run(&model, root, &config, GraphvizEmitter::new(out)).await?,
        OutputFormat::Mermaid => run(&model, root, &config, MermaidEmitter::new(out)).await?,
    };

    tracing::info!("emitted {} nodes, {} edges", stats.nodes, stats.edges);
    Ok(())
}

fn resolve_root(model: &JsonModel, config: &GraphConfig) -> Result<SymbolId, GraphError> {
    match &config.root {
        Some(name) => model
            .type_by_name(name)
            .ok_or_else(|| GraphError::RootNotFound(name.clone())),
        None => model.entry_root().ok_or(GraphError::NoEntryRoot),
    }
}

async fn run(
    model: &JsonModel,
    root: SymbolId,
    config: &GraphConfig,
    mut sink: impl DiagramSink,
) -> Result<BuildStats, GraphError> {
    sink.header()?;
    let mut builder = GraphBuilder::new(config);
    let stats = builder.build(model, root, &mut sink).await?;
    sink.footer()?;
    Ok(stats)
}

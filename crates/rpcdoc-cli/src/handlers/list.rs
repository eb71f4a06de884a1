//! List command handler

use crate::cli::ListArgs;
use crate::config::Config;
use crate::error::Result;
use crate::handlers::utils::{load_catalog, resolve_paths};
use crate::logging::timing::Timer;
use crate::output::{MethodSummary, OutputWriter};
use rpcdoc_schemas::MethodCatalog;
use tracing::{info, instrument};

/// Handle the list command
#[instrument(skip_all, fields(network = ?args.network))]
pub fn handle_list(args: ListArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::new("list_command");
    let paths = resolve_paths(&args.paths, config)?;
    let catalog = load_catalog(&paths, config, None, output)?;
    output.debug(&format!(
        "Loaded {} method(s) from {} path(s)",
        catalog.len(),
        paths.len()
    ))?;

    let summaries = summarize(&catalog, args.network.as_deref());
    info!(listed = summaries.len(), total = catalog.len(), "Listing methods");

    if !output.is_human() {
        return output.data(&summaries);
    }

    if summaries.is_empty() {
        output.warning("No methods found")?;
        return Ok(());
    }

    output.table(
        &MethodSummary::HEADERS,
        summaries.iter().map(MethodSummary::cells).collect(),
    )?;
    output.info(&format!("{} method(s)", summaries.len()))
}

/// Summaries in catalog order, optionally restricted to one network
pub fn summarize(catalog: &MethodCatalog, network: Option<&str>) -> Vec<MethodSummary> {
    match network {
        Some(network) => catalog
            .by_network(network)
            .map(MethodSummary::from_doc)
            .collect(),
        None => catalog.iter().map(MethodSummary::from_doc).collect(),
    }
}

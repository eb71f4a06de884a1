//! Params command handler

use crate::cli::ParamsArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::handlers::utils::{load_catalog, resolve_paths};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use rpcdoc_schemas::{DocGenerator, MethodCatalog, ParamRow, Section};
use tracing::{info, instrument};

/// Handle the params command
#[instrument(skip_all, fields(method = %args.method, section = ?args.section))]
pub fn handle_params(args: ParamsArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("params_command", &args.method);
    let paths = resolve_paths(&args.paths, config)?;
    let catalog = load_catalog(&paths, config, args.max_depth, output)?;

    let section = Section::from(args.section);
    let rows = method_rows(&catalog, &args.method, section, config, args.max_depth)?;
    info!(rows = rows.len(), "Flattened parameter tree");

    if let Some(doc) = catalog.get(&args.method) {
        let schema = doc.schema(section);
        output.section(&format!("{} {} params", doc.method, section))?;
        output.info(&format!("Type: {}", schema.param_type.label()))?;
        if let Some(description) = &schema.description {
            output.info(description)?;
        }
    }

    output.rows(&rows)
}

/// Rows for one section of one method, rendered with the configured indent
pub fn method_rows(
    catalog: &MethodCatalog,
    method: &str,
    section: Section,
    config: &Config,
    max_depth: Option<usize>,
) -> Result<Vec<ParamRow>> {
    let doc = catalog.get(method).ok_or_else(|| Error::MethodNotFound {
        name: method.to_string(),
    })?;

    let mut generator_config = config.render.generator_config();
    if let Some(max_depth) = max_depth {
        generator_config.max_depth = max_depth;
    }

    Ok(DocGenerator::with_config(generator_config).rows(doc, section)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rpcdoc_schemas::{MethodDoc, ParamNode, ParamSchema, ParamType};

    fn catalog() -> MethodCatalog {
        let tracer = ParamNode::new("tracer", ParamType::Object).with_children(
            ParamType::Object,
            vec![ParamNode::new("onlyTopCall", ParamType::Boolean)],
        );
        let doc = MethodDoc::new("debug_traceTransaction", "ethereum", 170).with_request(
            ParamSchema::new(
                ParamType::Array,
                vec![ParamNode::new("hash", ParamType::String), tracer],
            ),
        );

        let mut catalog = MethodCatalog::new();
        catalog.insert(doc).unwrap();
        catalog
    }

    #[test]
    fn test_rows_follow_render_settings() {
        let mut config = Config::default();
        config.render.indent_width = 4;

        let rows = method_rows(&catalog(), "debug_traceTransaction", Section::Request, &config, None)
            .unwrap();
        let outline: Vec<_> = rows
            .iter()
            .map(|row| format!("{}{}", row.indent, row.name))
            .collect();
        assert_eq!(outline, vec!["hash", "tracer", "    onlyTopCall"]);
    }

    #[test]
    fn test_depth_override_rejects_deep_trees() {
        let config = Config::default();
        let result = method_rows(
            &catalog(),
            "debug_traceTransaction",
            Section::Request,
            &config,
            Some(1),
        );
        assert!(matches!(result, Err(Error::Render(_))));
    }

    #[test]
    fn test_unknown_method() {
        let result = method_rows(&catalog(), "eth_nope", Section::Response, &Config::default(), None);
        match result {
            Err(Error::MethodNotFound { name }) => assert_eq!(name, "eth_nope"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}

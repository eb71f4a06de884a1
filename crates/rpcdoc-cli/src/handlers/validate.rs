//! Validation command handler

use crate::cli::ValidateArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::handlers::utils::{definition_files, loader, resolve_paths};
use crate::logging::timing::Timer;
use crate::output::{OutputWriter, ValidationFailure, ValidationReport};
use rpcdoc_schemas::{LoaderError, SchemaWalker};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, info, instrument, warn};

/// Handle the validate command
#[instrument(skip_all, fields(paths = args.paths.len(), detailed = args.detailed))]
pub fn handle_validate(args: ValidateArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::new("validate_command");
    let paths = resolve_paths(&args.paths, config)?;
    output.info(&format!("Validating {} path(s)", paths.len()))?;

    let report = validate_paths(&paths, config)?;
    info!(
        checked = report.checked,
        failed = report.failures.len(),
        "Validation finished"
    );

    output.validation_report(&report)?;
    if args.detailed && !report.valid.is_empty() {
        output.section("Valid Methods")?;
        for method in &report.valid {
            output.success(&format!("✓ {}", method))?;
        }
    }

    if report.is_valid() {
        Ok(())
    } else {
        Err(Error::ValidationFailed {
            failed: report.failures.len(),
            checked: report.checked,
        })
    }
}

/// Check every definition under `paths`, collecting all failures
pub fn validate_paths(paths: &[PathBuf], config: &Config) -> Result<ValidationReport> {
    // Parse without validating so each record is checked and reported separately
    let loader = loader(config, None, false);
    let walker = SchemaWalker::with_config(loader.config().walker);

    let mut report = ValidationReport::default();
    let mut sources: HashMap<String, PathBuf> = HashMap::new();

    for file in definition_files(&loader, paths)? {
        let docs = match loader.load_file(&file) {
            Ok(docs) => docs,
            Err(error) => {
                warn!(file = %file.display(), error = %error, "Definition file rejected");
                report.checked += 1;
                report.failures.push(ValidationFailure::from_loader(&error));
                continue;
            }
        };

        for doc in docs {
            report.checked += 1;

            if let Some(first) = sources.get(&doc.method) {
                let error = LoaderError::DuplicateMethod {
                    method: doc.method.clone(),
                    first: first.clone(),
                    second: file.clone(),
                };
                report.failures.push(ValidationFailure::from_loader(&error));
                continue;
            }
            sources.insert(doc.method.clone(), file.clone());

            match doc.validate_with(&walker) {
                Ok(()) => {
                    debug!(method = %doc.method, "Method is valid");
                    report.valid.push(doc.method);
                }
                Err(error) => {
                    warn!(file = %file.display(), error = %error, "Method failed validation");
                    report.failures.push(ValidationFailure::from_method(&file, &error));
                }
            }
        }
    }

    Ok(report)
}

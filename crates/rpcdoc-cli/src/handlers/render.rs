//! Render command handler

use crate::cli::RenderArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::handlers::utils::{load_catalog, resolve_paths};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use rpcdoc_schemas::{DocGenerator, GeneratorConfig, MethodCatalog, MethodDoc};
use serde::Serialize;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, instrument};

/// One rendered page, as reported in machine output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedPage {
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
}

/// Where rendered pages go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    /// All pages concatenated into one file
    File(PathBuf),
    /// One `{method}.md` per page
    Directory(PathBuf),
}

impl Destination {
    /// `--save-to` wins over `paths.output_dir`. A target that is an existing
    /// directory, or has no extension, is treated as a directory.
    pub fn resolve(save_to: Option<PathBuf>, config: &Config) -> Self {
        match save_to {
            Some(path) if path.is_dir() || path.extension().is_none() => Self::Directory(path),
            Some(path) => Self::File(path),
            None => match &config.paths.output_dir {
                Some(dir) => Self::Directory(dir.clone()),
                None => Self::Stdout,
            },
        }
    }
}

/// Handle the render command
#[instrument(skip_all, fields(method = ?args.method))]
pub fn handle_render(args: RenderArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::new("render_command");
    let paths = resolve_paths(&args.paths, config)?;
    let catalog = load_catalog(&paths, config, args.max_depth, output)?;

    let generator = DocGenerator::with_config(generator_config(&args, config));
    let docs = select(&catalog, args.method.as_deref())?;

    let progress = if config.output.progress && docs.len() > 1 {
        output.progress_bar(docs.len() as u64, "Rendering pages")
    } else {
        None
    };

    let mut pages = Vec::with_capacity(docs.len());
    for doc in docs {
        debug!(method = %doc.method, "Rendering page");
        pages.push((doc.method.clone(), generator.generate(doc)?));
        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }
    info!(pages = pages.len(), "Rendered pages");

    let destination = Destination::resolve(args.save_to, config);
    let rendered = write_pages(&pages, &destination)?;

    match destination {
        Destination::Stdout if output.is_human() => {
            let joined: Vec<&str> = pages.iter().map(|(_, page)| page.as_str()).collect();
            output.write(&joined.join("\n"))
        }
        Destination::Stdout => output.data(&rendered),
        Destination::File(path) | Destination::Directory(path) => {
            output.success(&format!(
                "✓ Wrote {} page(s) to {}",
                pages.len(),
                path.display()
            ))?;
            if output.is_human() {
                Ok(())
            } else {
                output.data(&rendered)
            }
        }
    }
}

/// Render settings from the config file, adjusted by command flags
pub fn generator_config(args: &RenderArgs, config: &Config) -> GeneratorConfig {
    let mut generator_config = config.render.generator_config();
    if args.no_snippets {
        generator_config.include_snippets = false;
    }
    if args.no_toc {
        generator_config.include_toc = false;
    }
    if let Some(max_depth) = args.max_depth {
        generator_config.max_depth = max_depth;
    }
    generator_config
}

/// The one requested method, or every method in name order
pub fn select<'a>(catalog: &'a MethodCatalog, method: Option<&str>) -> Result<Vec<&'a MethodDoc>> {
    match method {
        Some(name) => catalog
            .get(name)
            .map(|doc| vec![doc])
            .ok_or_else(|| Error::MethodNotFound {
                name: name.to_string(),
            }),
        None => Ok(catalog.iter().collect()),
    }
}

/// Write pages to their destination and describe what was written
pub fn write_pages(pages: &[(String, String)], destination: &Destination) -> Result<Vec<RenderedPage>> {
    match destination {
        Destination::Stdout => Ok(pages
            .iter()
            .map(|(method, page)| RenderedPage {
                method: method.clone(),
                path: None,
                markdown: Some(page.clone()),
            })
            .collect()),
        Destination::File(path) => {
            create_parent(path)?;
            let joined: Vec<&str> = pages.iter().map(|(_, page)| page.as_str()).collect();
            fs::write(path, joined.join("\n"))?;
            Ok(pages
                .iter()
                .map(|(method, _)| RenderedPage {
                    method: method.clone(),
                    path: Some(path.clone()),
                    markdown: None,
                })
                .collect())
        }
        Destination::Directory(dir) => {
            fs::create_dir_all(dir)?;
            pages
                .iter()
                .map(|(method, page)| {
                    let path = page_path(dir, method)?;
                    fs::write(&path, page)?;
                    Ok(RenderedPage {
                        method: method.clone(),
                        path: Some(path),
                        markdown: None,
                    })
                })
                .collect()
        }
    }
}

/// `{dir}/{method}.md`, refusing names that would leave `dir`
fn page_path(dir: &Path, method: &str) -> Result<PathBuf> {
    let file_name = format!("{}.md", method);
    let mut components = Path::new(&file_name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !method.contains('\\') => Ok(dir.join(file_name)),
        _ => Err(Error::other(format!(
            "Method '{}' cannot be written as a page file name",
            method
        ))),
    }
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

//! Method page generator
//!
//! Copyright (c) 2025 Rpcdoc Team
//! Licensed under the Apache-2.0 license

use crate::documentation::rows::{ParamRenderer, ParamRow, RendererConfig};
use crate::documentation::templates::{Template, TemplateType};
use crate::method::{MethodCatalog, MethodDoc, Section};
use crate::params::{ParamType, SchemaError, SchemaWalker, DEFAULT_MAX_DEPTH};
use thiserror::Error;
use tracing::debug;

/// Documentation generator configuration
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Include table of contents
    pub include_toc: bool,
    /// Include code samples
    pub include_snippets: bool,
    /// Include the literal example response
    pub include_response_example: bool,
    /// List the JSON-RPC envelope fields above the request params
    pub include_envelope: bool,
    /// Spaces of indentation per nesting level
    pub indent_width: usize,
    /// Maximum depth for nested params
    pub max_depth: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            include_toc: true,
            include_snippets: true,
            include_response_example: true,
            include_envelope: true,
            indent_width: RendererConfig::default().indent_width,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Result type for generator operations
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Generator error types
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// A parameter tree was rejected; no page is produced
    #[error("Cannot render {section} params of '{method}': {source}")]
    InvalidSchema {
        method: String,
        section: Section,
        source: SchemaError,
    },
}

/// JSON-RPC fields present on every request
const ENVELOPE: [(&str, ParamType); 3] = [
    ("id", ParamType::Integer),
    ("jsonrpc", ParamType::String),
    ("method", ParamType::String),
];

/// Renders method records as markdown pages
#[derive(Debug, Clone, Default)]
pub struct DocGenerator {
    config: GeneratorConfig,
}

impl DocGenerator {
    /// Create a new documentation generator
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    /// Create a generator with custom configuration
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Flatten and render one section's params
    pub fn rows(&self, doc: &MethodDoc, section: Section) -> GeneratorResult<Vec<ParamRow>> {
        let walker = SchemaWalker::with_max_depth(self.config.max_depth);
        let renderer = ParamRenderer::with_indent_width(self.config.indent_width);

        renderer
            .render_schema(&walker, doc.schema(section))
            .map_err(|source| GeneratorError::InvalidSchema {
                method: doc.method.clone(),
                section,
                source,
            })
    }

    /// Generate the full page for one method
    pub fn generate(&self, doc: &MethodDoc) -> GeneratorResult<String> {
        // Both trees are walked before anything is written
        let request_rows = self.rows(doc, Section::Request)?;
        let response_rows = self.rows(doc, Section::Response)?;

        let mut page = Template::header(&doc.method, &doc.network_display(), doc.cu);
        page.push_str(&Template::paragraph(&doc.description));

        let sections = self.collect_sections(doc);
        if self.config.include_toc && !sections.is_empty() {
            page.push_str(&Template::table_of_contents(&sections));
        }

        for section in sections {
            page.push_str(&Template::section_heading(section));
            match section {
                TemplateType::UseCases => page.push_str(&Template::bullet_list(&doc.use_cases)),
                TemplateType::Constraints => {
                    page.push_str(&Template::bullet_list(&doc.constraints))
                }
                TemplateType::CodeSamples => {
                    for snippet in &doc.code_snippets {
                        page.push_str(&Template::code_snippet(snippet));
                    }
                }
                TemplateType::ExampleResponse => {
                    page.push_str(&Template::code_block("json", doc.response_json.trim()))
                }
                TemplateType::RequestParams => {
                    page.push_str(&self.request_params(doc.request.param_type, &request_rows))
                }
                TemplateType::ResponseParams => page.push_str(&self.response_params(
                    doc.response.param_type,
                    doc.response.description.as_deref(),
                    &response_rows,
                )),
            }
        }

        page.push_str(&Template::footer());

        debug!(
            method = %doc.method,
            request_rows = request_rows.len(),
            response_rows = response_rows.len(),
            "generated method page"
        );
        Ok(page)
    }

    /// Generate pages for every method in the catalog, in name order.
    /// Stops at the first method that cannot be rendered.
    pub fn generate_all(&self, catalog: &MethodCatalog) -> GeneratorResult<Vec<(String, String)>> {
        catalog
            .iter()
            .map(|doc| Ok((doc.method.clone(), self.generate(doc)?)))
            .collect()
    }

    fn request_params(&self, schema_type: ParamType, rows: &[ParamRow]) -> String {
        let mut section = String::new();

        if self.config.include_envelope {
            for (name, param_type) in ENVELOPE {
                section.push_str(&Template::field_line(name, param_type.label()));
            }
        }
        section.push_str(&Template::field_line("Parameters", schema_type.label()));

        for row in rows {
            section.push_str(&Template::param_row(row));
        }

        if rows.is_empty() {
            section.push_str("This method takes no parameters.\n");
        }
        section.push('\n');
        section
    }

    fn response_params(
        &self,
        schema_type: ParamType,
        description: Option<&str>,
        rows: &[ParamRow],
    ) -> String {
        let mut section = Template::field_line("Result", schema_type.label());
        if let Some(description) = description {
            section.push('\n');
            section.push_str(&Template::paragraph(description));
        }
        for row in rows {
            section.push_str(&Template::param_row(row));
        }
        section.push('\n');
        section
    }

    /// Sections that will appear on the page, in page order
    fn collect_sections(&self, doc: &MethodDoc) -> Vec<TemplateType> {
        let mut sections = Vec::new();

        if !doc.use_cases.is_empty() {
            sections.push(TemplateType::UseCases);
        }
        if !doc.constraints.is_empty() {
            sections.push(TemplateType::Constraints);
        }
        if self.config.include_snippets && !doc.code_snippets.is_empty() {
            sections.push(TemplateType::CodeSamples);
        }
        if self.config.include_response_example && !doc.response_json.trim().is_empty() {
            sections.push(TemplateType::ExampleResponse);
        }
        sections.push(TemplateType::RequestParams);
        sections.push(TemplateType::ResponseParams);

        sections
    }
}

/// Generate a page with the default configuration
pub fn generate_page(doc: &MethodDoc) -> GeneratorResult<String> {
    DocGenerator::new().generate(doc)
}

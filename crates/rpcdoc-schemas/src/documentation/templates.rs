//! Markdown templates for method pages
//!
//! Copyright (c) 2025 Rpcdoc Team
//! Licensed under the Apache-2.0 license

use crate::documentation::rows::{EnumOption, ParamRow};
use crate::method::CodeSnippet;

/// Page section headings, also used as table of contents entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateType {
    UseCases,
    Constraints,
    CodeSamples,
    ExampleResponse,
    RequestParams,
    ResponseParams,
}

impl TemplateType {
    pub fn title(self) -> &'static str {
        match self {
            TemplateType::UseCases => "Use Cases",
            TemplateType::Constraints => "Constraints",
            TemplateType::CodeSamples => "Code Samples",
            TemplateType::ExampleResponse => "Example Response",
            TemplateType::RequestParams => "Request Params",
            TemplateType::ResponseParams => "Response Params",
        }
    }

    /// GitHub-style heading anchor
    pub fn anchor(self) -> String {
        self.title().to_lowercase().replace(' ', "-")
    }
}

/// Markdown fragment builders
pub struct Template;

impl Template {
    /// Page title line, e.g. `# eth_chainId - Ethereum [Value: 0CU]`
    pub fn header(method: &str, network: &str, cu: u32) -> String {
        format!("# {} - {} [Value: {}CU]\n\n", method, network, cu)
    }

    /// Free-text paragraph; empty text yields nothing
    pub fn paragraph(text: &str) -> String {
        let text = text.trim();
        if text.is_empty() {
            String::new()
        } else {
            format!("{}\n\n", text)
        }
    }

    pub fn section_heading(section: TemplateType) -> String {
        format!("## {}\n\n", section.title())
    }

    /// Generate table of contents
    pub fn table_of_contents(sections: &[TemplateType]) -> String {
        let mut result = String::from("## Table of Contents\n\n");

        for section in sections {
            result.push_str(&format!("- [{}](#{})\n", section.title(), section.anchor()));
        }

        result.push('\n');
        result
    }

    pub fn bullet_list(items: &[String]) -> String {
        let mut result = String::new();
        for item in items {
            result.push_str(&format!("- {}\n", item));
        }
        result.push('\n');
        result
    }

    /// One code sample under a language subheading
    pub fn code_snippet(snippet: &CodeSnippet) -> String {
        format!(
            "### {}\n\n{}",
            snippet.language.display_name(),
            Self::code_block(snippet.language.fence(), &snippet.code)
        )
    }

    pub fn code_block(language: &str, code: &str) -> String {
        format!("```{}\n{}\n```\n\n", language, code.trim_end())
    }

    /// A fixed row whose name and type label are known up front
    pub fn field_line(name: &str, type_label: &str) -> String {
        format!("- **{}** _{}_\n", name, type_label)
    }

    /// One parameter row and its enum options
    pub fn param_row(row: &ParamRow) -> String {
        let mut result = format!("{}- **{}** _{}_", row.indent, row.name, row.type_label);
        if let Some(ref description) = row.description {
            result.push_str(&format!(": {}", description));
        }
        result.push('\n');

        if !row.enum_options.is_empty() {
            result.push_str(&Self::enum_values(&row.indent, &row.enum_options));
        }
        result
    }

    /// Enum options nested one level under their parameter
    pub fn enum_values(indent: &str, options: &[EnumOption]) -> String {
        let mut result = String::new();
        for option in options {
            result.push_str(&format!("{}  - `{}`", indent, option.value));
            if option.is_default {
                result.push_str(" (default)");
            }
            if let Some(ref description) = option.description {
                result.push_str(&format!(": {}", description));
            }
            result.push('\n');
        }
        result
    }

    /// Generate footer section
    pub fn footer() -> String {
        "---\n\n*Generated by rpcdoc*\n".to_string()
    }
}

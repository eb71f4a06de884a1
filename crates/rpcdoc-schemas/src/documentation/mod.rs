//! Method page generation
//!
//! This module turns validated method records into markdown reference pages:
//! parameter trees are flattened by the walker, converted to [`ParamRow`]s,
//! and laid out with the fragments in [`Template`].
//!
//! Copyright (c) 2025 Rpcdoc Team
//! Licensed under the Apache-2.0 license

pub mod generator;
pub mod rows;
pub mod templates;

pub use generator::{generate_page, DocGenerator, GeneratorConfig, GeneratorError, GeneratorResult};
pub use rows::{EnumOption, ParamRenderer, ParamRow, RendererConfig};
pub use templates::{Template, TemplateType};

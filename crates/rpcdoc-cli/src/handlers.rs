//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

mod completions;
mod config;
mod list;
mod params;
mod render;
mod utils;
mod validate;

pub use completions::handle_completions;
pub use config::handle_config;
pub use list::handle_list;
pub use params::handle_params;
pub use render::handle_render;
pub use validate::handle_validate;

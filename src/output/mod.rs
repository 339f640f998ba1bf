//! Report formatting and display
//!
//! - `tree` - indented text tree with a bracketed stats suffix per line
//! - `json` - nested JSON objects
//!
//! Both consume the display tree produced by [`crate::tree::project`].

mod config;
mod json;
mod tree;
mod utils;

// Re-export public types and functions
pub use config::{OutputConfig, UnitMode};
pub use json::{JsonNode, render_json};
pub use tree::{Summary, TreeFormatter};
pub use utils::{format_percent, format_size};

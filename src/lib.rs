//! etree - disk usage of a directory tree, as an indented tree or nested JSON

pub mod error;
pub mod output;
pub mod report;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::Error;
pub use output::{OutputConfig, Summary, TreeFormatter, UnitMode, render_json};
pub use report::{Report, ReportOptions, run};
pub use tree::{
    ExcludeFilter, Node, PercentMode, SizeMetric, TreeWalker, ViewConfig, WalkStats, WalkerConfig,
    annotate, project,
};

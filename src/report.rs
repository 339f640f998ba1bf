//! End-to-end report generation: build, annotate, project, render

use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::output::{OutputConfig, Summary, TreeFormatter, UnitMode, render_json};
use crate::tree::{
    Node, PercentMode, SizeMetric, TreeWalker, ViewConfig, WalkStats, WalkerConfig, annotate,
    project,
};

/// Everything that shapes a single report.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    pub walker: WalkerConfig,
    pub view: ViewConfig,
    pub percent_mode: PercentMode,
    pub output: OutputConfig,
    /// JSON output with this indentation instead of the text tree.
    pub json_indent: Option<i32>,
}

impl ReportOptions {
    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.walker.exclude.push(name.into());
        self
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.view.max_depth = Some(depth);
        self
    }

    pub fn dirs_only(mut self, yes: bool) -> Self {
        self.view.dirs_only = yes;
        self
    }

    pub fn percent_mode(mut self, mode: PercentMode) -> Self {
        self.percent_mode = mode;
        self
    }

    pub fn units(mut self, units: UnitMode) -> Self {
        self.output.units = units;
        self
    }

    pub fn metric(mut self, metric: SizeMetric) -> Self {
        self.walker.metric = metric;
        self
    }

    pub fn json(mut self, indent: i32) -> Self {
        self.json_indent = Some(indent);
        self
    }
}

/// A built report: the full annotated tree and the tree to display.
#[derive(Debug, Clone)]
pub struct Report {
    pub full: Node,
    pub display: Node,
    pub stats: WalkStats,
}

impl Report {
    /// Walk `root` and prepare both trees.
    pub fn build(root: &Path, options: &ReportOptions) -> Result<Self> {
        let (mut full, stats) = TreeWalker::new(options.walker.clone()).walk_with_stats(root)?;
        annotate(&mut full, options.percent_mode);
        let display = project(&full, &options.view);
        debug!(
            root = %root.display(),
            size = full.size(),
            files = full.file_count().unwrap_or(0),
            others = stats.others,
            "built usage tree"
        );
        Ok(Self {
            full,
            display,
            stats,
        })
    }

    pub fn summary(&self) -> Summary {
        Summary::of(&self.full).with_others(self.stats.others)
    }

    /// Render as JSON when `options.json_indent` is set, as a plain text tree
    /// followed by the summary otherwise.
    pub fn render(&self, options: &ReportOptions) -> serde_json::Result<String> {
        match options.json_indent {
            Some(indent) => render_json(&self.display, indent).map(|mut json| {
                json.push('\n');
                json
            }),
            None => {
                let formatter = TreeFormatter::new(options.output);
                let mut text = formatter.format(&self.display);
                text.push('\n');
                text.push_str(&formatter.format_summary(&self.summary()));
                Ok(text)
            }
        }
    }
}

/// Produce the report for `root` and the process exit code.
///
/// On success the string is the rendered report and the code is 0. On failure
/// the string is the message for the error stream, e.g.
/// `Error: Directory does not exist`.
pub fn run(root: &Path, options: &ReportOptions) -> (String, i32) {
    let report = match Report::build(root, options) {
        Ok(report) => report,
        Err(e) => {
            debug!(path = %e.path().display(), error = ?e, "report failed");
            return (format!("Error: {}\n", e), e.exit_code());
        }
    };
    match report.render(options) {
        Ok(output) => (output, 0),
        Err(e) => (format!("Error: {}\n", e), 1),
    }
}

//! Tree formatter for text output
//!
//! Writes one line per visible node, each ending with a bracketed stats
//! suffix, e.g. `├── foo/ [ 9.00 B, 33.33%, 3 ]`.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

use crate::tree::Node;

use super::config::OutputConfig;
use super::utils::{child_prefix, connector, dir_label, format_percent, format_size};

/// Totals of a full (unprojected) tree, shown below the rendered tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub directories: u64,
    pub files: u64,
    /// Special entries (sockets, fifos, devices) seen but not sized.
    pub others: u64,
    pub size: u64,
}

impl Summary {
    /// Totals for `root`, not counting the root directory itself.
    pub fn of(root: &Node) -> Self {
        Self {
            directories: root.dir_count(),
            files: root.file_count().unwrap_or(0),
            others: 0,
            size: root.size(),
        }
    }

    pub fn with_others(mut self, others: u64) -> Self {
        self.others = others;
        self
    }
}

/// Formatter for text tree output.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render `node` and its visible descendants as plain text.
    pub fn format(&self, node: &Node) -> String {
        let mut out = NoColor::new(Vec::new());
        self.write(&mut out, node, None).expect("writing to a Vec cannot fail");
        String::from_utf8_lossy(&out.into_inner()).into_owned()
    }

    /// Render the summary footer line as plain text.
    ///
    /// The count of special entries only appears when there are any.
    pub fn format_summary(&self, summary: &Summary) -> String {
        let others = if summary.others > 0 {
            format!(", {} other", summary.others)
        } else {
            String::new()
        };
        format!(
            "{} directories, {} files{}, {} total\n",
            summary.directories,
            summary.files,
            others,
            format_size(summary.size, self.config.units)
        )
    }

    /// Print the tree (and an optional summary) to stdout, coloured if configured.
    pub fn print(&self, node: &Node, summary: Option<&Summary>) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write(&mut stdout, node, summary)
    }

    /// Write the tree (and an optional summary) to any colour-capable writer.
    pub fn write<W: WriteColor>(
        &self,
        out: &mut W,
        node: &Node,
        summary: Option<&Summary>,
    ) -> io::Result<()> {
        self.write_node(out, node, "", true, true)?;
        if let Some(summary) = summary {
            writeln!(out)?;
            write!(out, "{}", self.format_summary(summary))?;
        }
        Ok(())
    }

    fn write_node<W: WriteColor>(
        &self,
        out: &mut W,
        node: &Node,
        prefix: &str,
        is_last: bool,
        is_root: bool,
    ) -> io::Result<()> {
        if !is_root {
            write!(out, "{}{}", prefix, connector(is_last))?;
        }

        match node {
            Node::File { name, .. } => {
                write!(out, "{}", name)?;
            }
            Node::Dir { name, .. } => {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                write!(out, "{}", dir_label(name))?;
                out.reset()?;
            }
        }

        write!(out, " ")?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{}", self.stats(node))?;
        out.reset()?;
        writeln!(out)?;

        let new_prefix = if is_root {
            String::new()
        } else {
            child_prefix(prefix, is_last)
        };
        let children = node.children();
        for (i, child) in children.iter().enumerate() {
            let child_is_last = i == children.len() - 1;
            self.write_node(out, child, &new_prefix, child_is_last, false)?;
        }
        Ok(())
    }

    fn stats(&self, node: &Node) -> String {
        let size = format_size(node.size(), self.config.units);
        let usage = format_percent(node.usage());
        match node.file_count() {
            Some(count) => format!("[ {}, {}, {} ]", size, usage, count),
            None => format!("[ {}, {} ]", size, usage),
        }
    }
}

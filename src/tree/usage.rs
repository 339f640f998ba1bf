//! Usage percentage annotation

use super::node::Node;

/// Reference size a node's usage percentage is computed against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PercentMode {
    /// Percentage of the immediate parent.
    #[default]
    Relative,
    /// Percentage of the root.
    Absolute,
}

/// Set the usage percentage of every node in `root`.
///
/// The root is always 100%. A zero-sized reference yields 0% for the nodes
/// measured against it.
pub fn annotate(root: &mut Node, mode: PercentMode) {
    let total = root.size();
    root.set_usage(100.0);
    annotate_children(root, total, mode);
}

fn annotate_children(parent: &mut Node, total: u64, mode: PercentMode) {
    let reference = match mode {
        PercentMode::Relative => parent.size(),
        PercentMode::Absolute => total,
    };
    for child in parent.children_mut() {
        child.set_usage(percent(child.size(), reference));
        annotate_children(child, total, mode);
    }
}

fn percent(size: u64, reference: u64) -> f64 {
    if reference == 0 {
        0.0
    } else {
        100.0 * size as f64 / reference as f64
    }
}

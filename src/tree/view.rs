//! Display projection of a usage tree

use super::config::ViewConfig;
use super::node::Node;

/// Copy `root` with depth limiting and dirs-only filtering applied.
///
/// Only `children` sequences change. Every node that remains keeps the size,
/// file count and usage it had in the full tree, so a directory at the depth
/// limit still reports the total of everything hidden beneath it.
pub fn project(root: &Node, view: &ViewConfig) -> Node {
    project_node(root, 0, view)
}

fn project_node(node: &Node, depth: usize, view: &ViewConfig) -> Node {
    match node {
        Node::File { .. } => node.clone(),
        Node::Dir {
            name,
            size,
            file_count,
            usage,
            children,
        } => {
            let at_max_depth = view.max_depth.is_some_and(|max| depth >= max);
            let children = if at_max_depth {
                Vec::new()
            } else {
                children
                    .iter()
                    .filter(|child| !view.dirs_only || child.is_dir())
                    .map(|child| project_node(child, depth + 1, view))
                    .collect()
            };
            Node::Dir {
                name: name.clone(),
                size: *size,
                file_count: *file_count,
                usage: *usage,
                children,
            }
        }
    }
}

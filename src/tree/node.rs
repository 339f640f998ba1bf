//! In-memory usage tree

/// One entry of the usage tree.
///
/// A `Dir` owns its children outright, so the tree has no back-references and
/// cannot contain cycles. Directory totals are computed once, from the
/// children, when the node is constructed with [`Node::dir`].
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    File {
        name: String,
        size: u64,
        /// Usage percentage, zero until annotated.
        usage: f64,
    },
    Dir {
        name: String,
        size: u64,
        /// Number of files (not directories) anywhere below this directory.
        file_count: u64,
        usage: f64,
        children: Vec<Node>,
    },
}

impl Node {
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Node::File {
            name: name.into(),
            size,
            usage: 0.0,
        }
    }

    /// Build a directory node whose size and file count are the sums over `children`.
    pub fn dir(name: impl Into<String>, children: Vec<Node>) -> Self {
        let size = children.iter().map(Node::size).sum();
        let file_count = children
            .iter()
            .map(|child| match child {
                Node::File { .. } => 1,
                Node::Dir { file_count, .. } => *file_count,
            })
            .sum();
        Node::Dir {
            name: name.into(),
            size,
            file_count,
            usage: 0.0,
            children,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::File { name, .. } => name,
            Node::Dir { name, .. } => name,
        }
    }

    pub fn size(&self) -> u64 {
        match self {
            Node::File { size, .. } | Node::Dir { size, .. } => *size,
        }
    }

    pub fn usage(&self) -> f64 {
        match self {
            Node::File { usage, .. } | Node::Dir { usage, .. } => *usage,
        }
    }

    pub(crate) fn set_usage(&mut self, value: f64) {
        match self {
            Node::File { usage, .. } | Node::Dir { usage, .. } => *usage = value,
        }
    }

    /// File count for directories, `None` for files.
    pub fn file_count(&self) -> Option<u64> {
        match self {
            Node::File { .. } => None,
            Node::Dir { file_count, .. } => Some(*file_count),
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Dir { .. })
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::File { .. } => &[],
            Node::Dir { children, .. } => children,
        }
    }

    pub(crate) fn children_mut(&mut self) -> &mut [Node] {
        match self {
            Node::File { .. } => &mut [],
            Node::Dir { children, .. } => children,
        }
    }

    /// Find a direct child by name.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children().iter().find(|c| c.name() == name)
    }

    /// Number of directories below this node, not counting the node itself.
    pub fn dir_count(&self) -> u64 {
        self.children()
            .iter()
            .filter(|c| c.is_dir())
            .map(|c| 1 + c.dir_count())
            .sum()
    }
}

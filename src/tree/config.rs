//! Configuration types for building and viewing the usage tree

/// How the size of a single file is measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SizeMetric {
    /// Exact byte length of the file.
    #[default]
    Apparent,
    /// Space allocated on disk (512-byte blocks on Unix).
    Allocated,
}

/// Configuration for tree building.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Entry names pruned at any depth, matched exactly against the final path component.
    pub exclude: Vec<String>,
    pub metric: SizeMetric,
}

/// Display-only projection of a built tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewConfig {
    /// Levels below the root to show; `None` shows the whole tree.
    pub max_depth: Option<usize>,
    pub dirs_only: bool,
}

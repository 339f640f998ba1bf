//! Usage tree construction
//!
//! Building a report is a three step pipeline over one in-memory tree:
//!
//! - `TreeWalker`: walks the filesystem to full depth, pruning excluded names,
//!   and sizes every directory from its children
//! - `annotate`: assigns usage percentages (relative to parent or to root)
//! - `project`: derives the display tree (depth limit, dirs only) without
//!   touching any computed value

mod config;
mod filter;
mod node;
mod source;
mod usage;
mod view;
mod walker;

// Re-export public types
pub use config::{SizeMetric, ViewConfig, WalkerConfig};
pub use filter::ExcludeFilter;
pub use node::Node;
pub use source::{EntryKind, FsSizeSource, SizeSource, Stat};
pub use usage::{PercentMode, annotate};
pub use view::project;
pub use walker::{TreeWalker, WalkStats};

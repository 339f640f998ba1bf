//! TreeWalker - builds the full usage tree in memory

use std::io;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{Error, Result};

use super::config::WalkerConfig;
use super::filter::ExcludeFilter;
use super::node::Node;
use super::source::{EntryKind, FsSizeSource, SizeSource};

/// Counts gathered during a walk for entries that never become nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Sockets, fifos, devices and other entries that are neither files nor
    /// directories.
    pub others: u64,
}

/// Depth-first walker that sizes every entry below a root directory.
///
/// The walk always goes to full depth so that every directory total is exact;
/// depth limiting is a display concern handled by [`project`](super::project).
pub struct TreeWalker<S = FsSizeSource> {
    filter: ExcludeFilter,
    source: S,
}

impl TreeWalker<FsSizeSource> {
    pub fn new(config: WalkerConfig) -> Self {
        Self {
            filter: ExcludeFilter::new(config.exclude),
            source: FsSizeSource::new(config.metric),
        }
    }
}

impl<S: SizeSource> TreeWalker<S> {
    /// Replace the filesystem access layer.
    pub fn with_source<T: SizeSource>(self, source: T) -> TreeWalker<T> {
        TreeWalker {
            filter: self.filter,
            source,
        }
    }

    /// Build the tree rooted at `root`, which must be an existing directory.
    pub fn walk(&self, root: &Path) -> Result<Node> {
        self.walk_with_stats(root).map(|(node, _)| node)
    }

    /// Like [`walk`](Self::walk), also returning counts of entries that were
    /// seen but not sized.
    pub fn walk_with_stats(&self, root: &Path) -> Result<(Node, WalkStats)> {
        let stat = self.source.stat(root).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::NotFound {
                path: root.to_path_buf(),
            },
            _ => Error::io(root, e),
        })?;

        if stat.kind != EntryKind::Dir {
            return Err(Error::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        let entries = self.source.list(root).map_err(|e| Error::io(root, e))?;
        let mut stats = WalkStats::default();
        let children = self.walk_entries(entries, &mut stats);
        Ok((Node::dir(root_name(root), children), stats))
    }

    fn walk_entries(
        &self,
        mut entries: Vec<(String, PathBuf)>,
        stats: &mut WalkStats,
    ) -> Vec<Node> {
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        if !self.filter.is_empty() {
            entries.retain(|(name, path)| {
                if self.filter.should_exclude(name) {
                    trace!(path = %path.display(), "excluded");
                    return false;
                }
                true
            });
        }

        let mut nodes = Vec::with_capacity(entries.len());
        for (name, path) in entries {
            if let Some(node) = self.walk_entry(name, &path, stats) {
                nodes.push(node);
            }
        }
        nodes
    }

    /// Size one entry below the root. Entries that vanish or cannot be read
    /// are left out rather than failing the whole walk.
    fn walk_entry(&self, name: String, path: &Path, stats: &mut WalkStats) -> Option<Node> {
        let stat = match self.source.stat(path) {
            Ok(stat) => stat,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "skipping entry");
                return None;
            }
        };

        match stat.kind {
            EntryKind::File => Some(Node::file(name, stat.size)),
            // Not followed: a link back up the tree would never terminate.
            EntryKind::Dir if stat.symlink => {
                trace!(path = %path.display(), "not following directory symlink");
                None
            }
            EntryKind::Dir => match self.source.list(path) {
                Ok(entries) => Some(Node::dir(name, self.walk_entries(entries, stats))),
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "skipping unreadable directory");
                    None
                }
            },
            EntryKind::Other => {
                debug!(path = %path.display(), "counting special file");
                stats.others += 1;
                None
            }
        }
    }
}

/// Name shown for the root: the path as given, minus one trailing separator.
fn root_name(root: &Path) -> String {
    let mut name = root.to_string_lossy().into_owned();
    if name.len() > 1 && (name.ends_with('/') || name.ends_with(MAIN_SEPARATOR)) {
        name.pop();
    }
    name
}

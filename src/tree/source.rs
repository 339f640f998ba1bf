//! Filesystem access used by the tree walker

use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::config::SizeMetric;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    /// Sockets, fifos, devices.
    Other,
}

/// Result of statting one entry. `kind` and `size` describe the symlink
/// target when `symlink` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub size: u64,
    pub kind: EntryKind,
    pub symlink: bool,
}

/// Source of entry sizes and directory listings.
pub trait SizeSource {
    /// Stat `path`, following a symlink to its target.
    fn stat(&self, path: &Path) -> io::Result<Stat>;

    /// List the entries of a directory as `(name, path)` pairs in any order.
    fn list(&self, path: &Path) -> io::Result<Vec<(String, PathBuf)>>;
}

/// [`SizeSource`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSizeSource {
    metric: SizeMetric,
}

impl FsSizeSource {
    pub fn new(metric: SizeMetric) -> Self {
        Self { metric }
    }

    fn measure(&self, meta: &Metadata) -> u64 {
        match self.metric {
            SizeMetric::Apparent => meta.len(),
            SizeMetric::Allocated => allocated_size(meta),
        }
    }
}

impl SizeSource for FsSizeSource {
    fn stat(&self, path: &Path) -> io::Result<Stat> {
        let link_meta = fs::symlink_metadata(path)?;
        let symlink = link_meta.file_type().is_symlink();
        let meta = if symlink { fs::metadata(path)? } else { link_meta };

        let kind = if meta.is_dir() {
            EntryKind::Dir
        } else if meta.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        };

        Ok(Stat {
            size: self.measure(&meta),
            kind,
            symlink,
        })
    }

    fn list(&self, path: &Path) -> io::Result<Vec<(String, PathBuf)>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            match entry {
                Ok(entry) => entries.push((
                    entry.file_name().to_string_lossy().into_owned(),
                    entry.path(),
                )),
                Err(e) => debug!(dir = %path.display(), error = %e, "skipping unreadable entry"),
            }
        }
        Ok(entries)
    }
}

#[cfg(unix)]
fn allocated_size(meta: &Metadata) -> u64 {
    use std::os::unix::fs::MetadataExt;
    meta.blocks() * 512
}

#[cfg(not(unix))]
fn allocated_size(meta: &Metadata) -> u64 {
    meta.len()
}

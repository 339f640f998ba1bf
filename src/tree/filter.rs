//! Name-based exclusion

use std::collections::HashSet;

/// Prunes entries by exact, case-sensitive name.
///
/// Names are compared against the last path component only, so `"foo"`
/// matches an entry called `foo` at any depth but never `foo.txt` or `a/foo`.
#[derive(Debug, Clone, Default)]
pub struct ExcludeFilter {
    names: HashSet<String>,
}

impl ExcludeFilter {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn should_exclude(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

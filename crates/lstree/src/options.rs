use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path_info::PathInfo;

pub(crate) type Predicate = dyn Fn(&PathInfo) -> bool;

/// Configuration for a listing call.
///
/// Built with [`ListOptions::new`] and the `with_*` setters, or converted
/// from a bare path for the common no-options case:
///
/// ```no_run
/// use lstree::{list_files, ListOptions};
///
/// let all = list_files("some/dir")?;
/// let txt = list_files(ListOptions::new("some/dir").with_glob("*.txt").with_recursive(true))?;
/// # Ok::<(), lstree::Error>(())
/// ```
pub struct ListOptions {
    pub(crate) path: PathBuf,
    pub(crate) filter: Option<Box<Predicate>>,
    pub(crate) glob: Option<String>,
    pub(crate) recursive: bool,
}

impl ListOptions {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            filter: None,
            glob: None,
            recursive: false,
        }
    }

    /// Keep only entries for which `filter` returns true. Filtering controls
    /// result membership only: a rejected directory is still descended into
    /// when `recursive` is set.
    pub fn with_filter(mut self, filter: impl Fn(&PathInfo) -> bool + 'static) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    /// Keep only entries whose name matches the shell-style glob pattern.
    /// Glob rejection happens before the filter predicate is consulted.
    pub fn with_glob(mut self, glob: impl Into<String>) -> Self {
        self.glob = Some(glob.into());
        self
    }

    /// Walk subdirectories, flattening all qualifying descendants into the
    /// same result list in pre-order.
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Usage errors are raised unconditionally, never absorbed by an
    /// [`crate::ErrorPolicy`].
    pub(crate) fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(Error::EmptyPath);
        }
        Ok(())
    }
}

impl fmt::Debug for ListOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListOptions")
            .field("path", &self.path)
            .field("filter", &self.filter.as_ref().map(|_| "<predicate>"))
            .field("glob", &self.glob)
            .field("recursive", &self.recursive)
            .finish()
    }
}

impl From<&str> for ListOptions {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for ListOptions {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl From<&Path> for ListOptions {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}

impl From<PathBuf> for ListOptions {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

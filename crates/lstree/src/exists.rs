use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::policy::{guarded, ErrorPolicy};

/// True when `path` names a regular file. Default policy suppresses stat
/// failures to `false`.
pub fn file_exists(path: impl AsRef<Path>) -> Result<bool> {
    file_exists_with(path, &mut ErrorPolicy::default())
}

pub fn file_exists_with(path: impl AsRef<Path>, policy: &mut ErrorPolicy<'_>) -> Result<bool> {
    let path = path.as_ref();
    guarded(policy, path, false, || {
        Ok(fs::symlink_metadata(path)?.file_type().is_file())
    })
}

/// True when `path` names a directory.
pub fn dir_exists(path: impl AsRef<Path>) -> Result<bool> {
    dir_exists_with(path, &mut ErrorPolicy::default())
}

pub fn dir_exists_with(path: impl AsRef<Path>, policy: &mut ErrorPolicy<'_>) -> Result<bool> {
    let path = path.as_ref();
    guarded(policy, path, false, || {
        Ok(fs::symlink_metadata(path)?.file_type().is_dir())
    })
}

/// True when `path` names any lstat-visible entry, including a dangling
/// symlink.
pub fn path_exists(path: impl AsRef<Path>) -> Result<bool> {
    path_exists_with(path, &mut ErrorPolicy::default())
}

pub fn path_exists_with(path: impl AsRef<Path>, policy: &mut ErrorPolicy<'_>) -> Result<bool> {
    let path = path.as_ref();
    guarded(policy, path, false, || {
        fs::symlink_metadata(path)?;
        Ok(true)
    })
}

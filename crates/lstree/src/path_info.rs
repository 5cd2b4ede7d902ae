use std::fs::{self, Metadata};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::policy::{guarded, ErrorPolicy};

/// Descriptor of a single filesystem entry.
///
/// Built from one `lstat`-style metadata call: a symlink is described as
/// itself, never as its target, so broken or cyclic links cannot fail a
/// tree walk. Both kind flags are false for entries that are neither a
/// regular file nor a directory (sockets, symlinks, ...).
#[derive(Debug, Clone)]
pub struct PathInfo {
    /// Final path segment.
    pub name: String,

    /// The path as given by the caller or constructed during traversal.
    pub path: PathBuf,

    /// Lexically absolutized form of `path`.
    pub full_path: PathBuf,

    pub is_dir: bool,
    pub is_file: bool,

    /// The raw metadata record, retained for callers that need size,
    /// timestamps, or mode bits.
    pub metadata: Metadata,
}

impl PathInfo {
    fn resolve(path: &Path) -> Result<Self> {
        let metadata = fs::symlink_metadata(path)?;
        let file_type = metadata.file_type();
        Ok(Self {
            name: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            path: path.to_path_buf(),
            // Not fs::canonicalize: that follows symlinks and fails on
            // broken ones, which would contradict the lstat classification.
            full_path: std::path::absolute(path)?,
            is_dir: file_type.is_dir(),
            is_file: file_type.is_file(),
            metadata,
        })
    }
}

/// Describe `path` under the default [`ErrorPolicy::Suppress`] policy:
/// `Ok(None)` when the entry cannot be statted.
pub fn path_info(path: impl AsRef<Path>) -> Result<Option<PathInfo>> {
    path_info_with(path, &mut ErrorPolicy::default())
}

/// Describe `path`, resolving a stat failure through `policy` with the path
/// itself as the state token. Default value is `None`.
pub fn path_info_with(
    path: impl AsRef<Path>,
    policy: &mut ErrorPolicy<'_>,
) -> Result<Option<PathInfo>> {
    let path = path.as_ref();
    guarded(policy, path, None, || PathInfo::resolve(path).map(Some))
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;
    use crate::error::Error;

    #[test]
    fn describes_a_regular_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("text.txt");
        File::create(&file).unwrap().write_all(b"hello").unwrap();

        let info = path_info(&file).unwrap().expect("file should resolve");

        assert_eq!(info.name, "text.txt");
        assert_eq!(info.path, file);
        assert!(info.is_file);
        assert!(!info.is_dir);
        assert_eq!(info.metadata.len(), 5);
    }

    #[test]
    fn describes_a_directory() {
        let dir = tempdir().unwrap();

        let info = path_info(dir.path()).unwrap().expect("dir should resolve");

        assert!(info.is_dir);
        assert!(!info.is_file);
    }

    #[test]
    fn full_path_is_absolute_and_idempotent() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("text.txt");
        File::create(&file).unwrap();

        let info = path_info(&file).unwrap().unwrap();
        assert!(info.full_path.is_absolute());

        // Resolving an already-absolute path yields the same full_path.
        let again = path_info(&info.full_path).unwrap().unwrap();
        assert_eq!(again.full_path, info.full_path);
    }

    #[test]
    fn missing_path_defaults_to_none() {
        assert!(path_info("PATH_NOT_EXIST.__ABC__").unwrap().is_none());
    }

    #[test]
    fn missing_path_propagates_when_asked() {
        let err = path_info_with("PATH_NOT_EXIST.__ABC__", &mut ErrorPolicy::Propagate)
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn missing_path_reports_once_with_the_path_as_state() {
        let mut recorded = Vec::new();
        let mut handler =
            |state: &Path, err: &Error| recorded.push((state.to_path_buf(), err.is_not_found()));

        let info = path_info_with(
            "PATH_NOT_EXIST.__ABC__",
            &mut ErrorPolicy::Report(&mut handler),
        )
        .unwrap();

        assert!(info.is_none());
        assert_eq!(recorded, vec![(PathBuf::from("PATH_NOT_EXIST.__ABC__"), true)]);
    }

    #[cfg(unix)]
    #[test]
    fn symlink_is_classified_as_itself() {
        let dir = tempdir().unwrap();
        let link = dir.path().join("dangling");
        std::os::unix::fs::symlink("PATH_NOT_EXIST.__ABC__", &link).unwrap();

        let info = path_info(&link).unwrap().expect("lstat must not follow the link");
        assert!(!info.is_file);
        assert!(!info.is_dir);
    }
}

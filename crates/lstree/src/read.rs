use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::policy::{guarded, ErrorPolicy};

/// Read the whole file at `path` as UTF-8 text. Default policy suppresses
/// failures (missing file, unreadable file, invalid UTF-8) to `None`.
pub fn read_text_file(path: impl AsRef<Path>) -> Result<Option<String>> {
    read_text_file_with(path, &mut ErrorPolicy::default())
}

pub fn read_text_file_with(
    path: impl AsRef<Path>,
    policy: &mut ErrorPolicy<'_>,
) -> Result<Option<String>> {
    let path = path.as_ref();
    guarded(policy, path, None, || Ok(Some(fs::read_to_string(path)?)))
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn round_trips_file_content_exactly() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("text.txt");
        let content = "line one\nline two\n\ttabbed";
        File::create(&file)
            .unwrap()
            .write_all(content.as_bytes())
            .unwrap();

        assert_eq!(read_text_file(&file).unwrap().as_deref(), Some(content));
    }

    #[test]
    fn missing_file_defaults_to_none() {
        assert_eq!(read_text_file("PATH_NOT_EXIST.__ABC__").unwrap(), None);
    }

    #[test]
    fn missing_file_propagates_when_asked() {
        let err = read_text_file_with("PATH_NOT_EXIST.__ABC__", &mut ErrorPolicy::Propagate)
            .unwrap_err();
        assert!(err.is_not_found());
    }
}

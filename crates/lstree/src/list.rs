use std::ffi::OsString;
use std::fs;
use std::path::Path;

use glob::Pattern;
use tracing::debug;

use crate::error::Result;
use crate::options::ListOptions;
use crate::path_info::{path_info_with, PathInfo};
use crate::policy::ErrorPolicy;

/// Which entry kinds a glob pattern is checked against. Entries outside the
/// target kind pass the glob gate untested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GlobTarget {
    All,
    Dirs,
    Files,
}

impl GlobTarget {
    fn applies_to(self, info: &PathInfo) -> bool {
        match self {
            GlobTarget::All => true,
            GlobTarget::Dirs => info.is_dir,
            GlobTarget::Files => info.is_file,
        }
    }
}

/// List the entries under a path, of any kind.
///
/// Accepts a bare path or a full [`ListOptions`]; uses the default
/// [`ErrorPolicy::Suppress`] policy, under which an unreadable directory
/// contributes nothing and the rest of the walk continues.
pub fn list_paths(options: impl Into<ListOptions>) -> Result<Vec<PathInfo>> {
    list_paths_with(options, &mut ErrorPolicy::default())
}

pub fn list_paths_with(
    options: impl Into<ListOptions>,
    policy: &mut ErrorPolicy<'_>,
) -> Result<Vec<PathInfo>> {
    list_with_target(&options.into(), policy, GlobTarget::All, None)
}

/// List only directories. The glob pattern, when set, is checked against
/// directory names only.
pub fn list_dirs(options: impl Into<ListOptions>) -> Result<Vec<PathInfo>> {
    list_dirs_with(options, &mut ErrorPolicy::default())
}

pub fn list_dirs_with(
    options: impl Into<ListOptions>,
    policy: &mut ErrorPolicy<'_>,
) -> Result<Vec<PathInfo>> {
    list_with_target(
        &options.into(),
        policy,
        GlobTarget::Dirs,
        Some(|info: &PathInfo| info.is_dir),
    )
}

/// List only regular files. The glob pattern, when set, is checked against
/// file names only.
pub fn list_files(options: impl Into<ListOptions>) -> Result<Vec<PathInfo>> {
    list_files_with(options, &mut ErrorPolicy::default())
}

pub fn list_files_with(
    options: impl Into<ListOptions>,
    policy: &mut ErrorPolicy<'_>,
) -> Result<Vec<PathInfo>> {
    list_with_target(
        &options.into(),
        policy,
        GlobTarget::Files,
        Some(|info: &PathInfo| info.is_file),
    )
}

fn list_with_target(
    opt: &ListOptions,
    policy: &mut ErrorPolicy<'_>,
    target: GlobTarget,
    kind: Option<fn(&PathInfo) -> bool>,
) -> Result<Vec<PathInfo>> {
    opt.validate()?;
    // An unparsable pattern is a usage error like an empty path, raised
    // before any traversal and never absorbed by the policy.
    let pattern = opt.glob.as_deref().map(Pattern::new).transpose()?;

    debug!(
        path = %opt.path.display(),
        recursive = opt.recursive,
        glob = opt.glob.as_deref(),
        "listing paths"
    );

    let user = opt.filter.as_deref();
    let predicate = move |info: &PathInfo| {
        kind.is_none_or(|kind| kind(info)) && user.is_none_or(|filter| filter(info))
    };

    let mut acc = Vec::new();
    list_paths_core(
        &opt.path,
        policy,
        &predicate,
        opt.recursive,
        pattern.as_ref(),
        target,
        &mut acc,
    )?;
    Ok(acc)
}

/// One level of the walk: enumerate `path`, resolve each child, gate it
/// through glob-then-predicate, and descend into subdirectories with the
/// same accumulator so the result flattens pre-order.
fn list_paths_core(
    path: &Path,
    policy: &mut ErrorPolicy<'_>,
    predicate: &dyn Fn(&PathInfo) -> bool,
    recursive: bool,
    glob: Option<&Pattern>,
    target: GlobTarget,
    acc: &mut Vec<PathInfo>,
) -> Result<()> {
    let names = match child_names(path) {
        Ok(names) => names,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "directory read failed");
            // The current path is the state token for this failure site;
            // siblings already accumulated are kept.
            return policy.absorb(path, err, ());
        }
    };

    for name in names {
        let child = path.join(&name);
        let Some(info) = path_info_with(&child, policy)? else {
            // Unresolvable under a suppressing policy: no result entry,
            // no recursion.
            continue;
        };

        let glob_rejected = match glob {
            Some(pattern) if target.applies_to(&info) => !pattern.matches(&info.name),
            _ => false,
        };

        let descend_into = (recursive && info.is_dir).then(|| info.full_path.clone());

        // Glob rejection short-circuits: the predicate never sees the entry.
        if !glob_rejected && predicate(&info) {
            acc.push(info);
        }

        // Filtering controls membership, not reachability: a rejected
        // directory is still walked.
        if let Some(dir) = descend_into {
            list_paths_core(&dir, policy, predicate, recursive, glob, target, acc)?;
        }
    }

    Ok(())
}

fn child_names(path: &Path) -> Result<Vec<OsString>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(path)? {
        names.push(entry?.file_name());
    }
    Ok(names)
}

//! # lstree
//!
//! Synchronous filesystem traversal with per-call error policies.
//!
//! The crate wraps the host filesystem's blocking primitives (lstat,
//! directory enumeration, whole-file reads) behind a small API: describe one
//! path ([`path_info`]), test existence and kind ([`file_exists`],
//! [`dir_exists`], [`path_exists`]), read a text file ([`read_text_file`]),
//! and recursively list directory trees with glob and predicate filtering
//! ([`list_paths`], [`list_dirs`], [`list_files`]).
//!
//! Every operation resolves filesystem failures through an [`ErrorPolicy`]
//! chosen per call: propagate the error, suppress it with a documented
//! default, or report it to a handler and continue. The listing engine
//! applies the chosen policy uniformly at every depth, so one unreadable
//! subtree never aborts an otherwise-successful scan unless the caller
//! asked it to.
//!
//! ```no_run
//! use lstree::{list_files, ListOptions};
//!
//! let sources = list_files(ListOptions::new("src").with_glob("*.rs").with_recursive(true))?;
//! for file in &sources {
//!     println!("{} ({} bytes)", file.full_path.display(), file.metadata.len());
//! }
//! # Ok::<(), lstree::Error>(())
//! ```

mod error;
mod exists;
mod list;
mod options;
mod path_info;
mod policy;
mod read;

pub use error::{Error, Result};
pub use exists::{
    dir_exists, dir_exists_with, file_exists, file_exists_with, path_exists, path_exists_with,
};
pub use list::{
    list_dirs, list_dirs_with, list_files, list_files_with, list_paths, list_paths_with,
};
pub use options::ListOptions;
pub use path_info::{path_info, path_info_with, PathInfo};
pub use policy::ErrorPolicy;
pub use read::{read_text_file, read_text_file_with};

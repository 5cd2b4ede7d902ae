use std::fmt;
use std::path::Path;

use crate::error::{Error, Result};

/// How a failed filesystem operation is handled.
///
/// Every operation in this crate takes a `&mut ErrorPolicy` (or defaults to
/// [`ErrorPolicy::Suppress`]) and resolves each filesystem failure through it:
///
/// - `Propagate`: the failure surfaces as `Err` and aborts the call.
/// - `Suppress`: the failure is swallowed and the operation's documented
///   default value (`None`, `false`, or an empty/partial list) is returned.
/// - `Report`: like `Suppress`, but the handler is first invoked with the
///   state token in effect at the failure site and the error itself.
///
/// The state token is the path being touched when the failure occurred. A
/// recursive listing establishes a fresh state for each subtree it descends
/// into while the handler stays fixed for the whole call, so one handler can
/// collect a trail of `(path, error)` pairs across an entire walk.
pub enum ErrorPolicy<'h> {
    Propagate,
    Suppress,
    Report(&'h mut dyn FnMut(&Path, &Error)),
}

impl Default for ErrorPolicy<'_> {
    fn default() -> Self {
        ErrorPolicy::Suppress
    }
}

impl fmt::Debug for ErrorPolicy<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorPolicy::Propagate => f.write_str("Propagate"),
            ErrorPolicy::Suppress => f.write_str("Suppress"),
            ErrorPolicy::Report(_) => f.write_str("Report(..)"),
        }
    }
}

impl ErrorPolicy<'_> {
    /// Resolve a failure: propagate it, or swallow it (reporting first when
    /// a handler is installed) and hand back `default`.
    pub(crate) fn absorb<T>(&mut self, state: &Path, err: Error, default: T) -> Result<T> {
        match self {
            ErrorPolicy::Propagate => Err(err),
            ErrorPolicy::Suppress => Ok(default),
            ErrorPolicy::Report(handler) => {
                handler(state, &err);
                Ok(default)
            }
        }
    }
}

/// Run `op`, resolving any failure through `policy` with `state` as the
/// token a `Report` handler receives.
pub(crate) fn guarded<T>(
    policy: &mut ErrorPolicy<'_>,
    state: &Path,
    default: T,
    op: impl FnOnce() -> Result<T>,
) -> Result<T> {
    match op() {
        Ok(value) => Ok(value),
        Err(err) => policy.absorb(state, err, default),
    }
}

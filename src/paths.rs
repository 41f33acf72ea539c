//! Directory creation and path normalization.

use std::fs::{self, DirBuilder};
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Mode requested for new directories; the process umask still applies.
pub const DEFAULT_DIR_MODE: u32 = 0o777;

/// Create `path` and any missing parents with [`DEFAULT_DIR_MODE`].
///
/// Succeeds if the directory already exists.
///
/// # Errors
///
/// Returns [`Error::Io`] if any component cannot be created, or if `path`
/// exists and is not a directory.
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<()> {
    ensure_dir_with_mode(path, DEFAULT_DIR_MODE)
}

/// Create `path` and any missing parents with the given Unix mode bits.
///
/// `mode` is ignored on platforms without Unix permissions.
///
/// # Errors
///
/// Returns [`Error::Io`] if the directory cannot be created.
pub fn ensure_dir_with_mode(path: impl AsRef<Path>, mode: u32) -> Result<()> {
    let path = path.as_ref();
    let mut builder = DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    builder
        .create(path)
        .map_err(|e| Error::io(format!("could not create directory {}", path.display()), e))?;

    tracing::debug!(path = %path.display(), "directory ready");
    Ok(())
}

/// Create every path in `paths`, stopping at the first failure.
///
/// # Errors
///
/// Returns the error of the first directory that could not be created.
pub fn ensure_dirs<I, P>(paths: I) -> Result<()>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    paths.into_iter().try_for_each(ensure_dir)
}

/// Expand a leading `~` in a path to the user's home directory.
///
/// Paths that don't start with `~` are returned unchanged.
///
/// # Examples
///
/// ```
/// # use std::path::PathBuf;
/// # use helper_kit::paths::expand_tilde;
/// let absolute = PathBuf::from("/absolute/path");
/// assert_eq!(expand_tilde(&absolute), PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

/// Absolute, lexically cleaned form of `path`.
///
/// A leading `~` is expanded, relative paths are joined onto the current
/// directory, and `.`/`..` components are folded away. Symlinks are not
/// resolved and the path does not need to exist.
///
/// # Errors
///
/// Returns [`Error::Io`] if `path` is relative and the current directory
/// cannot be determined.
pub fn clean_path(path: impl AsRef<Path>) -> Result<PathBuf> {
    let expanded = expand_tilde(path.as_ref());
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        std::env::current_dir()
            .map_err(|e| Error::io("path cleaning error", e))?
            .join(expanded)
    };

    Ok(normalize_lexically(&absolute))
}

/// Fold `.` and `..` components without touching the filesystem.
///
/// `..` never climbs above the root.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !matches!(
                    cleaned.components().next_back(),
                    None | Some(Component::RootDir | Component::Prefix(_))
                ) {
                    cleaned.pop();
                }
            }
            other => cleaned.push(other),
        }
    }

    cleaned
}

/// Whether `path` is missing or has zero length.
#[must_use]
pub fn file_is_empty(path: impl AsRef<Path>) -> bool {
    !fs::metadata(path).is_ok_and(|metadata| metadata.len() > 0)
}

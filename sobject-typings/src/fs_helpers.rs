//! Filesystem helpers shared across `sobject-typings` modules.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::error::TypingsError;

/// Opens a directory if it exists, returning `None` when the path is missing.
pub fn open_optional_dir(path: &Utf8Path) -> Result<Option<Dir>, TypingsError> {
    match Dir::open_ambient_dir(path, ambient_authority()) {
        Ok(dir) => Ok(Some(dir)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(TypingsError::io(path, err)),
    }
}

/// Ensures a directory exists, creating missing parents, and returns a handle
/// to it.
///
/// A directory created by someone else between the open and the create is
/// accepted.
pub fn ensure_dir(path: &Utf8Path) -> Result<Dir, TypingsError> {
    if let Some(dir) = open_optional_dir(path)? {
        return Ok(dir);
    }
    Dir::create_ambient_dir_all(path, ambient_authority())
        .map_err(|io_err| TypingsError::io(path, io_err))?;
    Dir::open_ambient_dir(path, ambient_authority()).map_err(|io_err| TypingsError::io(path, io_err))
}

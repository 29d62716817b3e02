//! Declaration file writer using `cap_std` for filesystem operations.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::fs_utf8::{Dir, File, OpenOptions};
use std::io::Write;

use crate::error::TypingsError;
use crate::fs_helpers::ensure_dir;

/// Extension appended to each object name.
pub const TYPESCRIPT_TYPE_EXT: &str = ".d.ts";

/// Permission bits for generated files: readable by everyone, writable by none.
#[cfg(unix)]
pub const READ_ONLY_MODE: u32 = 0o444;

/// Writes a declaration file for `object_name` under `target_folder`.
///
/// Creates the folder and any missing parents, removes a previous file of the
/// same name, then writes `content` to a read-only file. Returns the path of
/// the written file.
///
/// # Errors
///
/// Returns `TypingsError::Io` if the folder cannot be created, the stale file
/// cannot be removed, or the new file cannot be written.
pub fn write_typing(
    target_folder: &Utf8Path,
    object_name: &str,
    content: &str,
) -> Result<Utf8PathBuf, TypingsError> {
    let dir = ensure_dir(target_folder)?;
    write_typing_in(&dir, target_folder, object_name, content)
}

/// Writes a declaration file into an already opened folder.
///
/// `root` is the path `dir` was opened from and is only used for the returned
/// path and error reporting.
///
/// # Errors
///
/// Returns `TypingsError::Io` if the stale file cannot be removed or the new
/// file cannot be written.
pub fn write_typing_in(
    dir: &Dir,
    root: &Utf8Path,
    object_name: &str,
    content: &str,
) -> Result<Utf8PathBuf, TypingsError> {
    let filename = format!("{object_name}{TYPESCRIPT_TYPE_EXT}");
    let file_path = root.join(&filename);

    // Replace in place: the previous file is gone before the new one exists.
    match dir.remove_file(&filename) {
        Ok(()) => tracing::trace!(path = %file_path, "removed stale typing"),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => return Err(TypingsError::io(&file_path, err)),
    }

    let mut file = dir
        .open_with(&filename, OpenOptions::new().write(true).create_new(true))
        .map_err(|io_err| TypingsError::io(&file_path, io_err))?;
    file.write_all(content.as_bytes())
        .map_err(|io_err| TypingsError::io(&file_path, io_err))?;
    mark_read_only(file).map_err(|io_err| TypingsError::io(&file_path, io_err))?;

    Ok(file_path)
}

#[cfg(unix)]
fn mark_read_only(file: File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    file.into_std()
        .set_permissions(std::fs::Permissions::from_mode(READ_ONLY_MODE))
}

#[cfg(not(unix))]
fn mark_read_only(file: File) -> std::io::Result<()> {
    let file = file.into_std();
    let mut permissions = file.metadata()?.permissions();
    permissions.set_readonly(true);
    file.set_permissions(permissions)
}

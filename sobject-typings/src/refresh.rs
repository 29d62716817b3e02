//! Loading describe payloads gathered by an SObject refresh.

use camino::Utf8Path;
use cap_std::fs_utf8::Dir;
use std::io::Read;

use crate::error::TypingsError;
use crate::fs_helpers::open_optional_dir;
use crate::schema::{SObject, SObjectRefreshOutput};

/// File holding the standard object describes.
pub const STANDARD_DESCRIBE_FILE: &str = "standard.json";
/// File holding the custom object describes.
pub const CUSTOM_DESCRIBE_FILE: &str = "custom.json";

/// Reads the standard and custom describe payloads from `describe_dir`.
///
/// Each file is a JSON array of describe objects. A missing directory or file
/// contributes no objects.
///
/// # Errors
///
/// Returns `TypingsError::Io` if a file exists but cannot be read, or
/// `TypingsError::DescribeJson` if it does not parse.
pub fn load_refresh_output(
    sfdx_path: &Utf8Path,
    describe_dir: &Utf8Path,
) -> Result<SObjectRefreshOutput, TypingsError> {
    let Some(dir) = open_optional_dir(describe_dir)? else {
        tracing::warn!(path = %describe_dir, "describe directory not found");
        return Ok(SObjectRefreshOutput::new(sfdx_path, Vec::new(), Vec::new()));
    };

    let standard = read_sobjects(&dir, &describe_dir.join(STANDARD_DESCRIBE_FILE))?;
    let custom = read_sobjects(&dir, &describe_dir.join(CUSTOM_DESCRIBE_FILE))?;
    tracing::debug!(
        standard = standard.len(),
        custom = custom.len(),
        "loaded SObject describes"
    );
    Ok(SObjectRefreshOutput::new(sfdx_path, standard, custom))
}

fn read_sobjects(dir: &Dir, path: &Utf8Path) -> Result<Vec<SObject>, TypingsError> {
    let Some(file_name) = path.file_name() else {
        return Ok(Vec::new());
    };
    let mut file = match dir.open(file_name) {
        Ok(file) => file,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(TypingsError::io(path, err)),
    };

    let mut buffer = String::new();
    file.read_to_string(&mut buffer)
        .map_err(|err| TypingsError::io(path, err))?;
    serde_json::from_str(&buffer).map_err(|source| TypingsError::DescribeJson {
        path: path.to_path_buf(),
        source,
    })
}

//! Writer for generated import strings.

use std::path::{Path, PathBuf};

use super::error::ExportError;

/// File name for a report/fight export, e.g. `mdt_import_aBcD1234eFgH5678_fight_7.txt`
pub fn export_filename(report: &str, fight_id: u32) -> String {
    format!("mdt_import_{report}_fight_{fight_id}.txt")
}

/// Write an import string into `dir`, creating the directory if needed.
/// Returns the full path written.
pub fn write_export(
    dir: &Path,
    report: &str,
    fight_id: u32,
    payload: &str,
) -> Result<PathBuf, ExportError> {
    let path = dir.join(export_filename(report, fight_id));
    write_payload(&path, payload)?;
    Ok(path)
}

/// Write a payload verbatim to `path`, creating parent directories.
pub fn write_payload(path: &Path, payload: &str) -> Result<(), ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ExportError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    std::fs::write(path, payload).map_err(|source| ExportError::WriteFile {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), bytes = payload.len(), "Import string saved");
    Ok(())
}

#![doc = include_str!("../README.md")]

use respak_shared::StringsDocument;
use std::path::Path;

pub mod collect;
pub mod declarations;
pub mod error;
pub mod pack;

pub use collect::{collect_into, collect_names, strings_files};
pub use declarations::{render_declarations, write_declarations};
pub use error::RespakGenerateError;
pub use pack::{PackTargets, pack, pack_file, pack_file_name};

/// Reads and parses a JSON strings file.
pub fn read_strings_document(path: &Path) -> Result<StringsDocument, RespakGenerateError> {
    let content = fs_err::read_to_string(path)
        .map_err(|e| RespakGenerateError::Io(path.to_path_buf(), e))?;
    serde_json::from_str(&content).map_err(|e| RespakGenerateError::Json(path.to_path_buf(), e))
}

/// Writes `content` to `path` unless the file already holds exactly that.
///
/// Returns whether the file was written.
pub(crate) fn write_if_changed(path: &Path, content: &str) -> Result<bool, RespakGenerateError> {
    let io_err = |e| RespakGenerateError::Io(path.to_path_buf(), e);

    if path.exists() && fs_err::read_to_string(path).map_err(io_err)? == content {
        tracing::debug!("File unchanged: {}", path.display());
        return Ok(false);
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs_err::create_dir_all(parent).map_err(io_err)?;
    }
    fs_err::write(path, content).map_err(io_err)?;
    tracing::debug!("Wrote {}", path.display());
    Ok(true)
}

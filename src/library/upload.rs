use std::{fs, path::Path};

use super::{
    PDF_EXTENSION,
    error::{LibraryError, LibraryResult},
    listing::{DirectoryReader, list_files_with_extension},
};

/// A file received from a client, held in memory until it is stored.
#[derive(Debug, Clone)]
pub struct IncomingFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl IncomingFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

/// Prefixes `name` with `sequence` unless the segment before its first `-`
/// already parses as an integer.
pub fn sequenced_name(name: &str, sequence: usize) -> String {
    let leading = name.split('-').next().unwrap_or_default();
    if leading.parse::<i64>().is_ok() {
        name.to_string()
    } else {
        format!("{sequence}-{name}")
    }
}

/// Writes `files` into `folder`, numbering them after the PDFs already there.
///
/// Stops at the first failed write. Files written before the failure are kept.
pub fn store_files(
    reader: &dyn DirectoryReader,
    folder: &Path,
    files: &[IncomingFile],
) -> LibraryResult<Vec<String>> {
    fs::create_dir_all(folder).map_err(|err| LibraryError::storage(folder, err))?;

    let existing = list_files_with_extension(reader, folder, PDF_EXTENSION)?.len();

    let mut stored = Vec::with_capacity(files.len());
    for (index, file) in files.iter().enumerate() {
        let name = sequenced_name(&file.name, existing + index + 1);
        let path = folder.join(&name);
        fs::write(&path, &file.bytes).map_err(|err| LibraryError::storage(&path, err))?;
        stored.push(name);
    }

    Ok(stored)
}

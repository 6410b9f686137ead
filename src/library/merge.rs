use std::path::{Path, PathBuf};

use super::{
    PDF_EXTENSION,
    error::{BoxError, LibraryError, LibraryResult},
    listing::{DirectoryReader, list_files_with_extension},
};

/// Concatenates PDF inputs, in the given order, into one output file.
///
/// An existing file at `output` is replaced.
pub trait PdfMerger: Send + Sync {
    fn merge(&self, inputs: &[PathBuf], output: &Path) -> Result<(), BoxError>;
}

/// Location of the merged output for `folder`: a sibling of the folder.
pub fn merged_output_path(tenant_root: &Path, folder: &str) -> PathBuf {
    tenant_root.join(format!("{folder}{PDF_EXTENSION}"))
}

/// Merges every PDF in `<tenant_root>/<folder>` into `<tenant_root>/<folder>.pdf`.
pub fn merge_folder(
    reader: &dyn DirectoryReader,
    merger: &dyn PdfMerger,
    tenant_root: &Path,
    folder: &str,
) -> LibraryResult<PathBuf> {
    let folder_path = tenant_root.join(folder);
    let files = list_files_with_extension(reader, &folder_path, PDF_EXTENSION)?;
    if files.is_empty() {
        return Err(LibraryError::NoInput {
            folder: folder.to_string(),
        });
    }

    let inputs: Vec<PathBuf> = files.iter().map(|name| folder_path.join(name)).collect();
    let output = merged_output_path(tenant_root, folder);

    merger
        .merge(&inputs, &output)
        .map_err(|source| LibraryError::Merge {
            folder: folder.to_string(),
            source,
        })?;

    Ok(output)
}

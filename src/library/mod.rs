//! Folder bookkeeping around PDF uploads: ordering, listing, storing,
//! deleting and merging.

mod delete;
mod error;
mod listing;
mod merge;
mod ordering;
mod upload;

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

pub use delete::delete_files;
pub use error::{BoxError, LibraryError, LibraryResult};
pub use listing::{DirectoryReader, FsDirectoryReader, list_files_with_extension};
pub use merge::{PdfMerger, merge_folder, merged_output_path};
pub use upload::{IncomingFile, store_files};

pub const PDF_EXTENSION: &str = ".pdf";

/// Bundles the directory reader and merge backend used by the orchestration
/// functions so handlers can share one cheap clone.
#[derive(Clone)]
pub struct PdfLibrary {
    reader: Arc<dyn DirectoryReader>,
    merger: Arc<dyn PdfMerger>,
}

impl PdfLibrary {
    pub fn new(reader: Arc<dyn DirectoryReader>, merger: Arc<dyn PdfMerger>) -> Self {
        Self { reader, merger }
    }

    pub fn list(&self, folder: &Path) -> LibraryResult<Vec<String>> {
        list_files_with_extension(self.reader.as_ref(), folder, PDF_EXTENSION)
    }

    pub fn store(&self, folder: &Path, files: &[IncomingFile]) -> LibraryResult<Vec<String>> {
        store_files(self.reader.as_ref(), folder, files)
    }

    pub fn delete(&self, folder: &Path, names: &[String]) -> LibraryResult<usize> {
        delete_files(self.reader.as_ref(), folder, names)
    }

    pub fn merge(&self, tenant_root: &Path, folder: &str) -> LibraryResult<PathBuf> {
        merge_folder(
            self.reader.as_ref(),
            self.merger.as_ref(),
            tenant_root,
            folder,
        )
    }
}

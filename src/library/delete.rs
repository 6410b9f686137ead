use std::{collections::HashSet, fs, path::Path};

use super::{
    error::{LibraryError, LibraryResult},
    listing::DirectoryReader,
};

/// Removes `names` from `folder`, or every file in it when `names` is empty.
///
/// Repeated names count once. All names are checked before anything is
/// removed, so a missing name leaves the folder untouched. A failure while
/// removing stops the batch and keeps earlier removals. Returns the number of
/// files removed.
pub fn delete_files(
    reader: &dyn DirectoryReader,
    folder: &Path,
    names: &[String],
) -> LibraryResult<usize> {
    if names.is_empty() {
        return delete_all(reader, folder);
    }

    let mut seen = HashSet::new();
    let targets: Vec<&String> = names.iter().filter(|name| seen.insert(*name)).collect();

    if let Some(missing) = targets.iter().find(|name| !folder.join(name).is_file()) {
        return Err(LibraryError::NotFound {
            name: (*missing).clone(),
        });
    }

    for name in &targets {
        let path = folder.join(name);
        fs::remove_file(&path).map_err(|err| LibraryError::storage(&path, err))?;
    }

    Ok(targets.len())
}

fn delete_all(reader: &dyn DirectoryReader, folder: &Path) -> LibraryResult<usize> {
    let entries = reader
        .read_dir(folder)
        .map_err(|err| LibraryError::directory_read(folder, err))?;

    let mut removed = 0;
    for entry in entries.iter().filter(|entry| !entry.is_dir) {
        let path = folder.join(&entry.name);
        fs::remove_file(&path).map_err(|err| LibraryError::storage(&path, err))?;
        removed += 1;
    }

    Ok(removed)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::library::{FsDirectoryReader, PDF_EXTENSION, list_files_with_extension};
    use tempfile::{TempDir, tempdir};

    fn folder_with(files: &[&str]) -> (TempDir, PathBuf) {
        let root = tempdir().expect("temp dir");
        let folder = root.path().join("test-folder");
        fs::create_dir_all(&folder).unwrap();
        for file in files {
            fs::write(folder.join(file), b"%PDF").unwrap();
        }
        (root, folder)
    }

    fn remaining(folder: &Path) -> Vec<String> {
        list_files_with_extension(&FsDirectoryReader, folder, PDF_EXTENSION).unwrap()
    }

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn deletes_only_named_files() {
        let (_root, folder) = folder_with(&["1-document.pdf", "2-document.pdf", "3-document.pdf"]);

        let removed = delete_files(
            &FsDirectoryReader,
            &folder,
            &names(&["1-document.pdf", "2-document.pdf"]),
        )
        .expect("delete");

        assert_eq!(removed, 2);
        assert_eq!(remaining(&folder), vec!["3-document.pdf"]);
    }

    #[test]
    fn empty_list_deletes_everything() {
        let (_root, folder) = folder_with(&["1-document.pdf", "2-document.pdf", "notes.txt"]);
        fs::create_dir(folder.join("keep")).unwrap();

        let removed = delete_files(&FsDirectoryReader, &folder, &[]).expect("delete all");

        assert_eq!(removed, 3);
        assert!(remaining(&folder).is_empty());
        assert!(folder.join("keep").is_dir());
    }

    #[test]
    fn missing_name_fails_without_deleting() {
        let (_root, folder) = folder_with(&["1-document.pdf", "2-document.pdf"]);

        let err = delete_files(
            &FsDirectoryReader,
            &folder,
            &names(&["1-document.pdf", "nonexistent.pdf"]),
        )
        .unwrap_err();

        assert!(matches!(err, LibraryError::NotFound { ref name } if name == "nonexistent.pdf"));
        assert_eq!(remaining(&folder), vec!["1-document.pdf", "2-document.pdf"]);
    }

    #[test]
    fn repeated_names_are_removed_once() {
        let (_root, folder) = folder_with(&["1-a.pdf", "2-b.pdf"]);

        let removed = delete_files(&FsDirectoryReader, &folder, &names(&["1-a.pdf", "1-a.pdf"]))
            .expect("delete");

        assert_eq!(removed, 1);
        assert_eq!(remaining(&folder), vec!["2-b.pdf"]);
    }

    #[test]
    fn directories_are_not_deletable_by_name() {
        let (_root, folder) = folder_with(&["1-document.pdf"]);
        fs::create_dir(folder.join("sub")).unwrap();

        let err = delete_files(&FsDirectoryReader, &folder, &names(&["sub"])).unwrap_err();
        assert!(matches!(err, LibraryError::NotFound { .. }));
    }

    #[test]
    fn delete_all_on_missing_folder_reports_read_error() {
        let root = tempdir().expect("temp dir");
        let err = delete_files(&FsDirectoryReader, &root.path().join("absent"), &[]).unwrap_err();
        assert!(err.is_missing_directory());
    }
}

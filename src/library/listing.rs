use std::{fs, io, path::Path};

use tracing::debug;

use super::{
    error::{LibraryError, LibraryResult},
    ordering::sort_filenames,
};

/// Minimal view of a directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    pub is_dir: bool,
}

impl DirEntryInfo {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }
}

/// Capability to enumerate a directory, injected so listing can be tested
/// without touching the filesystem.
pub trait DirectoryReader: Send + Sync {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntryInfo>>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FsDirectoryReader;

impl DirectoryReader for FsDirectoryReader {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntryInfo>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            // Names that are not valid UTF-8 can never be addressed over HTTP.
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            entries.push(if entry.file_type()?.is_dir() {
                DirEntryInfo::directory(name)
            } else {
                DirEntryInfo::file(name)
            });
        }
        Ok(entries)
    }
}

/// Lists the files in `dir` ending with `extension`, in merge order.
pub fn list_files_with_extension(
    reader: &dyn DirectoryReader,
    dir: &Path,
    extension: &str,
) -> LibraryResult<Vec<String>> {
    debug!(dir = %dir.display(), extension, "listing folder");
    let entries = reader
        .read_dir(dir)
        .map_err(|err| LibraryError::directory_read(dir, err))?;

    let mut matched: Vec<String> = entries
        .into_iter()
        .filter(|entry| !entry.is_dir && entry.name.ends_with(extension))
        .map(|entry| entry.name)
        .collect();
    sort_filenames(&mut matched);

    Ok(matched)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    struct FakeReader {
        result: Result<Vec<DirEntryInfo>, io::ErrorKind>,
    }

    impl FakeReader {
        fn with(entries: Vec<DirEntryInfo>) -> Self {
            Self {
                result: Ok(entries),
            }
        }

        fn failing(kind: io::ErrorKind) -> Self {
            Self { result: Err(kind) }
        }
    }

    impl DirectoryReader for FakeReader {
        fn read_dir(&self, _path: &Path) -> io::Result<Vec<DirEntryInfo>> {
            self.result.clone().map_err(io::Error::from)
        }
    }

    fn list(reader: &FakeReader) -> LibraryResult<Vec<String>> {
        list_files_with_extension(reader, &PathBuf::from("/test/dir"), ".pdf")
    }

    #[test]
    fn orders_pdfs_by_sequence_number() {
        let reader = FakeReader::with(vec![
            DirEntryInfo::file("2-document.pdf"),
            DirEntryInfo::file("12-document.pdf"),
            DirEntryInfo::file("1-document.pdf"),
        ]);

        assert_eq!(
            list(&reader).unwrap(),
            vec!["1-document.pdf", "2-document.pdf", "12-document.pdf"]
        );
    }

    #[test]
    fn skips_other_extensions_and_directories() {
        let reader = FakeReader::with(vec![
            DirEntryInfo::file("1-document.pdf"),
            DirEntryInfo::file("document.txt"),
            DirEntryInfo::directory("folder"),
            DirEntryInfo::directory("nested.pdf"),
        ]);

        assert_eq!(list(&reader).unwrap(), vec!["1-document.pdf"]);
    }

    #[test]
    fn extension_match_is_case_sensitive() {
        let reader = FakeReader::with(vec![
            DirEntryInfo::file("1-upper.PDF"),
            DirEntryInfo::file("2-lower.pdf"),
        ]);

        assert_eq!(list(&reader).unwrap(), vec!["2-lower.pdf"]);
    }

    #[test]
    fn falls_back_to_lexicographic_order() {
        let reader = FakeReader::with(vec![
            DirEntryInfo::file("c-document.pdf"),
            DirEntryInfo::file("a-document.pdf"),
            DirEntryInfo::file("b-document.pdf"),
        ]);

        assert_eq!(
            list(&reader).unwrap(),
            vec!["a-document.pdf", "b-document.pdf", "c-document.pdf"]
        );
    }

    #[test]
    fn empty_directory_yields_empty_list() {
        let reader = FakeReader::with(vec![DirEntryInfo::file("notes.txt")]);
        assert!(list(&reader).unwrap().is_empty());
    }

    #[test]
    fn read_failure_is_reported() {
        let reader = FakeReader::failing(io::ErrorKind::PermissionDenied);
        let err = list(&reader).unwrap_err();
        assert!(matches!(err, LibraryError::DirectoryRead { .. }));
        assert!(!err.is_missing_directory());

        let reader = FakeReader::failing(io::ErrorKind::NotFound);
        assert!(list(&reader).unwrap_err().is_missing_directory());
    }

    #[test]
    fn filesystem_reader_reports_kinds() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(dir.path().join("1-a.pdf"), b"%PDF").expect("write file");
        fs::create_dir(dir.path().join("sub")).expect("create dir");

        let mut entries = FsDirectoryReader.read_dir(dir.path()).expect("read dir");
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(
            entries,
            vec![DirEntryInfo::file("1-a.pdf"), DirEntryInfo::directory("sub")]
        );
    }
}

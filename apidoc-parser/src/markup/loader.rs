//! Resolves document names against a project root and feeds the parser.
//!
//! A document is either a single `<name>.txt` file or a directory named
//! `<name>` holding one file per category. Directory files are parsed
//! independently and concatenated in sorted file-name order, so exports are
//! deterministic across platforms.

use super::document::Document;
use super::parser::parse_str;
use super::DEFAULT_EXTENSION;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors surfaced while locating or reading a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Neither a directory nor a `.txt` file exists for the document name.
    NotFound(PathBuf),
    /// The document resolved to a directory with no files inside.
    EmptyDirectory(PathBuf),
    /// An underlying read failed.
    Io { path: PathBuf, message: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NotFound(path) => {
                write!(f, "document doesn't exist at '{}'", path.display())
            }
            LoadError::EmptyDirectory(path) => {
                write!(f, "document directory '{}' has no data inside", path.display())
            }
            LoadError::Io { path, message } => {
                write!(f, "failed to read '{}': {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// Load and parse the document `name` under `root`.
///
/// An existing directory wins over the single-file form; otherwise the
/// default extension is appended and a single file is read.
pub fn load_document(root: &Path, name: &str) -> Result<Document, LoadError> {
    let dir_path = root.join(name);
    if dir_path.is_dir() {
        return load_directory(&dir_path);
    }

    let file_path = root.join(format!("{name}{DEFAULT_EXTENSION}"));
    if !file_path.is_file() {
        return Err(LoadError::NotFound(file_path));
    }
    parse_file(&file_path)
}

/// Enumerate all documents (files and directories) under the project root.
pub fn list_documents(root: &Path) -> Result<Vec<PathBuf>, LoadError> {
    if !root.is_dir() {
        return Err(LoadError::NotFound(root.to_path_buf()));
    }
    let entries = fs::read_dir(root).map_err(|err| LoadError::Io {
        path: root.to_path_buf(),
        message: err.to_string(),
    })?;
    let mut documents = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| LoadError::Io {
            path: root.to_path_buf(),
            message: err.to_string(),
        })?;
        documents.push(entry.path());
    }
    documents.sort();
    Ok(documents)
}

fn load_directory(path: &Path) -> Result<Document, LoadError> {
    let entries = fs::read_dir(path).map_err(|err| LoadError::Io {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| LoadError::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        if entry.path().is_file() {
            files.push(entry.path());
        }
    }
    if files.is_empty() {
        return Err(LoadError::EmptyDirectory(path.to_path_buf()));
    }
    files.sort();

    let mut document = Document::default();
    for file in files {
        let part = parse_file(&file)?;
        document.categories.extend(part.categories);
    }
    Ok(document)
}

fn parse_file(path: &Path) -> Result<Document, LoadError> {
    let source = fs::read_to_string(path).map_err(|err| LoadError::Io {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    Ok(parse_str(&source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const SAMPLE: &str = "> DOCUMENT DATA <\n|>Intro\n|#Text=hello\n";

    #[test]
    fn loads_a_single_file_document_by_name() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("manual.txt"), SAMPLE).unwrap();

        let doc = load_document(dir.path(), "manual").unwrap();
        assert_eq!(doc.category_count(), 1);
        assert_eq!(doc.categories[0].title, "Intro");
    }

    #[test]
    fn missing_document_reports_the_resolved_path() {
        let dir = tempdir().unwrap();
        let err = load_document(dir.path(), "nope").unwrap_err();
        match err {
            LoadError::NotFound(path) => {
                assert!(path.ends_with("nope.txt"));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn directory_documents_concatenate_in_file_name_order() {
        let dir = tempdir().unwrap();
        let doc_dir = dir.path().join("manual");
        fs::create_dir(&doc_dir).unwrap();
        fs::write(
            doc_dir.join("b.txt"),
            "> DOCUMENT DATA <\n|>Second\n",
        )
        .unwrap();
        fs::write(
            doc_dir.join("a.txt"),
            "> DOCUMENT DATA <\n|>First\n",
        )
        .unwrap();

        let doc = load_document(dir.path(), "manual").unwrap();
        let titles: Vec<_> = doc.categories.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["First", "Second"]);
    }

    #[test]
    fn empty_directory_is_a_distinct_error() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("manual")).unwrap();
        let err = load_document(dir.path(), "manual").unwrap_err();
        assert!(matches!(err, LoadError::EmptyDirectory(_)));
    }

    #[test]
    fn list_documents_returns_sorted_entries() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::create_dir(dir.path().join("c")).unwrap();

        let docs = list_documents(dir.path()).unwrap();
        let names: Vec<_> = docs
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.txt", "b.txt", "c"]);
    }
}

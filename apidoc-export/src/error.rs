//! Error type shared by the export pipeline.

use std::fmt;
use std::path::PathBuf;

/// Errors that abort an export.
///
/// Everything here is terminal for the current export call; files already
/// written before the failure stay on disk (no rollback, by design).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// The HTML template lacks one of the four required macros. Carries the
    /// exact macro string so callers can report precisely what is missing.
    MissingMacro(&'static str),
    /// The export target directory does not exist.
    TargetDirMissing(PathBuf),
    /// An element's computed insertion index fell past the end of the page.
    ElementInsertion {
        category: String,
        index: usize,
        line_count: usize,
    },
    /// A page or stylesheet write failed.
    Io { path: PathBuf, message: String },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::MissingMacro(name) => {
                write!(f, "html template doesn't contain the required '{name}' macro")
            }
            ExportError::TargetDirMissing(path) => {
                write!(f, "target directory '{}' doesn't exist", path.display())
            }
            ExportError::ElementInsertion {
                category,
                index,
                line_count,
            } => write!(
                f,
                "element insertion index in category '{category}' is higher than expected \
                 ({index} vs {line_count}); please fix your source"
            ),
            ExportError::Io { path, message } => {
                write!(f, "failed to write '{}': {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for ExportError {}

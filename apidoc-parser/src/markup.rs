//! The markup format: model, grammar constants, parser and loader.
//!
//! Layout mirrors the processing order:
//!
//! - [`text`]     shared string transforms (escaping, slugs, digits)
//! - [`document`] the parsed model (`Document` → `Category` → `Element`)
//! - [`parser`]   the line-driven state machine
//! - [`loader`]   file/directory resolution feeding the parser

pub mod document;
pub mod loader;
pub mod parser;
pub mod text;

/// Everything before this marker line (compared after trimming) is ignored.
pub const DOCUMENT_DATA_MARKER: &str = "> DOCUMENT DATA <";

/// A trimmed line starting with this marker opens a new category.
pub const CATEGORY_MARKER: &str = "|>";

/// A category line ending with this marker is read-only (sidebar text only).
pub const READONLY_END_MARKER: &str = "<|";

/// A left-trimmed line starting with this marker opens a new element.
pub const ELEMENT_MARKER: &str = "|#";

/// Lines between these two markers are appended to the open element without
/// an inserted line break; the marker lines themselves are never emitted.
pub const NEW_LINE_IGNORE_START: &str = "|NEW_LINE_IGNORE_START";
pub const NEW_LINE_IGNORE_END: &str = "|NEW_LINE_IGNORE_END";

/// Attribute value that inserts a visual break instead of nesting.
pub const SPACE_ATTRIBUTE: &str = "Space";

/// Extension appended when a document name resolves to a single file.
pub const DEFAULT_EXTENSION: &str = ".txt";

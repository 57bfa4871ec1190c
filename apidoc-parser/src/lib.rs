//! # apidoc-parser
//!
//! A parser for the APi documentation markup format.
//!
//! The markup is strictly line oriented: everything before the literal
//! `> DOCUMENT DATA <` marker is ignored, `|>` opens a category, `|#` opens
//! an element inside it. The parser turns raw text into an ordered
//! [`Document`](markup::Document) of categories and elements; it performs no
//! rendering of its own.
//!
//! Documents may be stored as a single file or as a directory with one file
//! per category; see [`markup::loader`] for the resolution rules.

pub mod markup;

pub use markup::document::{Category, Document, Element};
pub use markup::loader::{list_documents, load_document, LoadError};
pub use markup::parser::{parse_lines, parse_str};

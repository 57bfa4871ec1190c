//! HTML export for parsed APi documentation.
//!
//! This crate turns an [`apidoc_parser`] document into a static HTML site:
//! one page per category, a shared sidebar, and a copied stylesheet.
//!
//! The file structure follows the pipeline:
//!
//! ```text
//! .
//! ├── error.rs        # ExportError
//! ├── ordering.rs     # attribute resolution / navigation order
//! ├── styles.rs       # CodeStyle + the built-in style table
//! ├── highlight.rs    # regex highlighting + macro expansion
//! ├── template.rs     # template macro discovery
//! ├── page.rs         # per-category page assembly
//! └── publish.rs      # orchestration + file writing
//! ```
//!
//! This is a pure pipeline crate: apart from `publish` writing the final
//! files, nothing touches the environment, and no code here prints or
//! prompts — that belongs to the CLI.

pub mod error;
pub mod highlight;
pub mod ordering;
pub mod page;
pub mod publish;
pub mod styles;
pub mod template;

pub use error::ExportError;
pub use highlight::Highlighter;
pub use ordering::{resolve, Arrangement};
pub use publish::{publish, ExportReport, ExportSpec, STYLE_SHEET_NAME};
pub use styles::{built_in_styles, CodeStyle};

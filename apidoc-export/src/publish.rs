//! Export orchestration: resolve, render, write.
//!
//! [`publish`] drives the whole pipeline for one document. Pages are written
//! category by category; a failure partway through leaves the earlier files
//! on disk. That partial output is accepted and documented — the tool is a
//! single-shot batch exporter, re-running it overwrites the directory.

use crate::error::ExportError;
use crate::highlight::Highlighter;
use crate::ordering::resolve;
use crate::page::render_page;
use crate::styles::CodeStyle;
use crate::template::TemplateMacros;
use apidoc_parser::markup::text::slugify;
use apidoc_parser::Category;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the copied stylesheet in the target directory.
pub const STYLE_SHEET_NAME: &str = "style.css";

/// Everything one export run needs.
#[derive(Debug)]
pub struct ExportSpec<'a> {
    pub categories: &'a [Category],
    pub document_title: &'a str,
    pub target_dir: PathBuf,
    pub template_lines: Vec<String>,
    pub css_text: String,
    pub highlight: bool,
    pub extra_styles: Vec<CodeStyle>,
}

impl<'a> ExportSpec<'a> {
    pub fn new(
        categories: &'a [Category],
        document_title: &'a str,
        target_dir: impl AsRef<Path>,
        template_lines: Vec<String>,
        css_text: String,
    ) -> Self {
        Self {
            categories,
            document_title,
            target_dir: target_dir.as_ref().to_path_buf(),
            template_lines,
            css_text,
            highlight: true,
            extra_styles: Vec::new(),
        }
    }

    pub fn with_highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }

    pub fn with_extra_styles(mut self, extra_styles: Vec<CodeStyle>) -> Self {
        self.extra_styles = extra_styles;
        self
    }
}

/// Files produced by a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub files: Vec<PathBuf>,
}

/// Export every category to its own HTML page plus the stylesheet.
pub fn publish(spec: ExportSpec<'_>) -> Result<ExportReport, ExportError> {
    if !spec.target_dir.is_dir() {
        return Err(ExportError::TargetDirMissing(spec.target_dir));
    }

    let macros = TemplateMacros::scan(&spec.template_lines)?;
    let arrangement = resolve(spec.categories);
    let highlighter = Highlighter::new(&spec.extra_styles);

    let mut files = Vec::with_capacity(spec.categories.len() + 1);
    for index in 0..spec.categories.len() {
        let lines = render_page(
            &spec.template_lines,
            macros,
            spec.categories,
            &arrangement,
            index,
            spec.document_title,
            &highlighter,
            spec.highlight,
        )?;
        let path = spec
            .target_dir
            .join(format!("{}.html", slugify(arrangement.title(index))));
        write_lines(&path, &lines)?;
        files.push(path);
    }

    let css_path = spec.target_dir.join(STYLE_SHEET_NAME);
    fs::write(&css_path, &spec.css_text).map_err(|err| ExportError::Io {
        path: css_path.clone(),
        message: err.to_string(),
    })?;
    files.push(css_path);

    Ok(ExportReport { files })
}

fn write_lines(path: &Path, lines: &[String]) -> Result<(), ExportError> {
    let mut contents = String::new();
    for line in lines {
        contents.push_str(line);
        contents.push('\n');
    }
    fs::write(path, contents).map_err(|err| ExportError::Io {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

//! HTML template macro discovery.
//!
//! The template must carry four macros: two replacement macros found by
//! substring (`|PAGE_HEAD|`, `|DOCS_TITLE|`) and two insertion markers that
//! must stand alone on their line (`<!--CATEGORIES-->`, `<!--CONTAINER-->`,
//! compared after trimming). The first occurrence of each wins.

use crate::error::ExportError;

/// Replaced with the current category's title.
pub const HEAD_MACRO: &str = "|PAGE_HEAD|";
/// Replaced with the document title.
pub const TITLE_MACRO: &str = "|DOCS_TITLE|";
/// Sidebar entries are inserted directly after this line.
pub const CATEGORIES_MACRO: &str = "<!--CATEGORIES-->";
/// Element blocks are inserted directly after this line.
pub const CONTAINER_MACRO: &str = "<!--CONTAINER-->";

/// Line positions of the four required template macros.
///
/// `categories` and `container` are insertion indices (the line after the
/// marker); `head` and `title` are the lines carrying the replacement macro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateMacros {
    pub head: usize,
    pub title: usize,
    pub categories: usize,
    pub container: usize,
}

impl TemplateMacros {
    /// Scan the template once. A missing macro fails with exactly that
    /// macro's name.
    pub fn scan(lines: &[String]) -> Result<Self, ExportError> {
        let mut head = None;
        let mut title = None;
        let mut categories = None;
        let mut container = None;

        for (index, line) in lines.iter().enumerate() {
            let trimmed = line.trim();
            if head.is_none() && line.contains(HEAD_MACRO) {
                head = Some(index);
            }
            if title.is_none() && line.contains(TITLE_MACRO) {
                title = Some(index);
            }
            if categories.is_none() && trimmed == CATEGORIES_MACRO {
                categories = Some(index + 1);
            }
            if container.is_none() && trimmed == CONTAINER_MACRO {
                container = Some(index + 1);
            }
        }

        Ok(Self {
            head: head.ok_or(ExportError::MissingMacro(HEAD_MACRO))?,
            title: title.ok_or(ExportError::MissingMacro(TITLE_MACRO))?,
            categories: categories.ok_or(ExportError::MissingMacro(CATEGORIES_MACRO))?,
            container: container.ok_or(ExportError::MissingMacro(CONTAINER_MACRO))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn scan_locates_all_four_macros() {
        let lines = template(&[
            "<title>|PAGE_HEAD|</title>",
            "<h1>|DOCS_TITLE|</h1>",
            "  <!--CATEGORIES-->",
            "<main>",
            "<!--CONTAINER-->",
            "</main>",
        ]);
        let macros = TemplateMacros::scan(&lines).unwrap();
        assert_eq!(macros.head, 0);
        assert_eq!(macros.title, 1);
        assert_eq!(macros.categories, 3);
        assert_eq!(macros.container, 5);
    }

    #[test]
    fn insertion_markers_must_stand_alone() {
        let lines = template(&[
            "|PAGE_HEAD|",
            "|DOCS_TITLE|",
            "<div><!--CATEGORIES--></div>",
            "<!--CONTAINER-->",
        ]);
        let err = TemplateMacros::scan(&lines).unwrap_err();
        assert_eq!(err, ExportError::MissingMacro(CATEGORIES_MACRO));
    }

    #[test]
    fn first_occurrence_wins() {
        let lines = template(&[
            "|PAGE_HEAD| and |DOCS_TITLE|",
            "<!--CATEGORIES-->",
            "<!--CATEGORIES-->",
            "<!--CONTAINER-->",
        ]);
        let macros = TemplateMacros::scan(&lines).unwrap();
        assert_eq!(macros.head, 0);
        assert_eq!(macros.title, 0);
        assert_eq!(macros.categories, 2);
    }
}

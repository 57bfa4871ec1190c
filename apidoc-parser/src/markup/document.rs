//! The parsed document model.
//!
//! A [`Document`] owns an ordered list of [`Category`] nodes, each owning an
//! ordered list of [`Element`] nodes. The model is plain data: once the
//! parser has produced it, nothing mutates it. Presentation concerns
//! (navigation order, priority-digit stripping) are computed by the exporter
//! as separate views over this tree.

use super::SPACE_ATTRIBUTE;
use serde::Serialize;

/// A single content unit inside a category.
///
/// `style_class` becomes the class of the wrapping HTML block; `"Code"`
/// additionally routes the text through the syntax highlighter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub style_class: String,
    pub text: String,
}

impl Element {
    pub fn new(style_class: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            style_class: style_class.into(),
            text: text.into(),
        }
    }

    /// Append a body line, preceded by a line break.
    pub fn append_line(&mut self, line: &str) {
        self.text.push('\n');
        self.text.push_str(line);
    }

    /// Append a body line with no inserted line break (ignore-region mode).
    pub fn append_raw(&mut self, line: &str) {
        self.text.push_str(line);
    }
}

/// A navigable section of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub title: String,
    /// Attribute after `|` in the directive line: either the `Space` break
    /// marker or the title of the category this one nests under.
    pub parent_attribute: Option<String>,
    /// Read-only categories carry no elements and render as plain sidebar
    /// text instead of a link.
    pub read_only: bool,
    pub elements: Vec<Element>,
}

impl Category {
    /// Build a category from the directive remainder (markers already
    /// stripped). The first `|` separates the title from its attribute.
    pub fn from_directive(raw: &str, read_only: bool) -> Self {
        let (title, parent_attribute) = match raw.find('|') {
            Some(pos) => {
                let attribute: String =
                    raw[pos..].chars().filter(|c| *c != '|').collect();
                let attribute = attribute.trim().to_string();
                (
                    raw[..pos].trim().to_string(),
                    (!attribute.is_empty()).then_some(attribute),
                )
            }
            None => (raw.trim().to_string(), None),
        };
        Self {
            title,
            parent_attribute,
            read_only,
            elements: Vec::new(),
        }
    }

    pub fn has_attribute(&self) -> bool {
        self.parent_attribute.is_some()
    }

    /// True when the attribute requests a visual break in the sidebar.
    pub fn is_break(&self) -> bool {
        self.parent_attribute.as_deref() == Some(SPACE_ATTRIBUTE)
    }

    /// True when the attribute nests this category under another one.
    pub fn is_nested(&self) -> bool {
        self.has_attribute() && !self.is_break()
    }
}

/// One fully parsed document: the ordered category list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub categories: Vec<Category>,
}

impl Document {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn element_count(&self) -> usize {
        self.categories.iter().map(|c| c.elements.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_without_attribute_is_plain_title() {
        let cat = Category::from_directive("Getting Started", false);
        assert_eq!(cat.title, "Getting Started");
        assert_eq!(cat.parent_attribute, None);
        assert!(!cat.has_attribute());
    }

    #[test]
    fn directive_splits_title_and_attribute() {
        let cat = Category::from_directive("Meshes|Components", false);
        assert_eq!(cat.title, "Meshes");
        assert_eq!(cat.parent_attribute.as_deref(), Some("Components"));
        assert!(cat.is_nested());
        assert!(!cat.is_break());
    }

    #[test]
    fn space_attribute_marks_a_break() {
        let cat = Category::from_directive("Changelog|Space", false);
        assert!(cat.is_break());
        assert!(!cat.is_nested());
    }

    #[test]
    fn attribute_whitespace_and_extra_pipes_are_dropped() {
        let cat = Category::from_directive("Title | Group ", false);
        assert_eq!(cat.title, "Title");
        assert_eq!(cat.parent_attribute.as_deref(), Some("Group"));
    }

    #[test]
    fn empty_attribute_collapses_to_none() {
        let cat = Category::from_directive("Title|", false);
        assert_eq!(cat.title, "Title");
        assert_eq!(cat.parent_attribute, None);
    }

    #[test]
    fn element_appends_lines_with_breaks() {
        let mut el = Element::new("Text", "first");
        el.append_line("second");
        el.append_raw("third");
        assert_eq!(el.text, "first\nsecondthird");
    }
}

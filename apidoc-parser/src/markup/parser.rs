//! Line-driven parser for the markup format.
//!
//! The grammar is a single forward pass over the input lines, modeled as an
//! explicit state machine:
//!
//! | State             | Meaning                                      |
//! |-------------------|----------------------------------------------|
//! | `Skipping`        | before the `> DOCUMENT DATA <` marker        |
//! | `AwaitingCategory`| reading, but no category open                |
//! | `InCategory`      | a category is open, no element yet           |
//! | `InElement`       | an element is accumulating body lines        |
//!
//! Directive lines (`|>` category start, `|#` element start) drive the
//! transitions; every other line is either element body text or ignored.
//! Malformed element directives (no `=`, empty class) leave no element open
//! and parsing continues — the format recovers locally, it never fails hard.

use super::document::{Category, Document, Element};
use super::{
    CATEGORY_MARKER, DOCUMENT_DATA_MARKER, ELEMENT_MARKER, NEW_LINE_IGNORE_END,
    NEW_LINE_IGNORE_START, READONLY_END_MARKER,
};

/// Parse a full source string. Lines are split on `\n` with any trailing
/// `\r` removed, so Windows sources parse identically.
pub fn parse_str(source: &str) -> Document {
    parse_lines(source.lines())
}

/// Parse an ordered sequence of lines into a [`Document`].
///
/// Absence of the document-data marker simply yields an empty document; the
/// caller decides whether zero categories deserve an advisory notice.
pub fn parse_lines<I>(lines: I) -> Document
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut parser = Parser::new();
    for line in lines {
        parser.feed(line.as_ref());
    }
    parser.finish()
}

enum State {
    Skipping,
    AwaitingCategory,
    InCategory {
        category: Category,
    },
    InElement {
        category: Category,
        element: Element,
        /// Inside a `|NEW_LINE_IGNORE_*` region: append body lines raw.
        raw_mode: bool,
    },
}

/// Incremental parser; [`feed`](Parser::feed) one line at a time, then
/// [`finish`](Parser::finish) to flush whatever is still open.
pub struct Parser {
    categories: Vec<Category>,
    state: State,
}

impl Parser {
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
            state: State::Skipping,
        }
    }

    pub fn feed(&mut self, line: &str) {
        let trimmed = line.trim();

        if matches!(self.state, State::Skipping) {
            if trimmed == DOCUMENT_DATA_MARKER {
                self.state = State::AwaitingCategory;
            }
            return;
        }

        if trimmed.starts_with(CATEGORY_MARKER) {
            self.close_open_nodes();
            self.open_category(trimmed);
            return;
        }

        match std::mem::replace(&mut self.state, State::Skipping) {
            State::Skipping | State::AwaitingCategory => {
                self.state = State::AwaitingCategory;
            }
            State::InCategory { category } => {
                if line.trim_start().starts_with(ELEMENT_MARKER) {
                    self.state = open_element(category, line);
                } else {
                    // Body text with no element open is dropped.
                    self.state = State::InCategory { category };
                }
            }
            State::InElement {
                mut category,
                mut element,
                raw_mode,
            } => {
                if line.trim_start().starts_with(ELEMENT_MARKER) {
                    category.elements.push(element);
                    self.state = open_element(category, line);
                } else if trimmed == NEW_LINE_IGNORE_START {
                    self.state = State::InElement {
                        category,
                        element,
                        raw_mode: true,
                    };
                } else if trimmed == NEW_LINE_IGNORE_END {
                    self.state = State::InElement {
                        category,
                        element,
                        raw_mode: false,
                    };
                } else {
                    if raw_mode {
                        element.append_raw(line);
                    } else {
                        element.append_line(line);
                    }
                    self.state = State::InElement {
                        category,
                        element,
                        raw_mode,
                    };
                }
            }
        }
    }

    /// Flush the open element and category, in that order, and return the
    /// finished document.
    pub fn finish(mut self) -> Document {
        self.close_open_nodes();
        Document::new(self.categories)
    }

    fn close_open_nodes(&mut self) {
        match std::mem::replace(&mut self.state, State::AwaitingCategory) {
            State::Skipping => self.state = State::Skipping,
            State::AwaitingCategory => {}
            State::InCategory { category } => self.categories.push(category),
            State::InElement {
                mut category,
                element,
                ..
            } => {
                category.elements.push(element);
                self.categories.push(category);
            }
        }
    }

    fn open_category(&mut self, trimmed: &str) {
        let rest = trimmed
            .strip_prefix(CATEGORY_MARKER)
            .unwrap_or(trimmed);
        let read_only = rest.trim_end().ends_with(READONLY_END_MARKER);
        let rest = match rest.trim_end().strip_suffix(READONLY_END_MARKER) {
            Some(stripped) => stripped,
            None => rest,
        };
        let category = Category::from_directive(rest, read_only);
        if read_only {
            // Read-only categories never hold elements; append immediately.
            self.categories.push(category);
            self.state = State::AwaitingCategory;
        } else {
            self.state = State::InCategory { category };
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an element directive. The class sits before the first `=`, the
/// remainder is the first body line. Missing `=` or an empty class is a
/// malformed directive: the category stays open with no element.
fn open_element(category: Category, line: &str) -> State {
    let rest = line
        .trim_start()
        .strip_prefix(ELEMENT_MARKER)
        .unwrap_or(line);
    match rest.find('=') {
        Some(pos) if pos > 0 => State::InElement {
            element: Element::new(&rest[..pos], &rest[pos + 1..]),
            category,
            raw_mode: false,
        },
        _ => State::InCategory { category },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(lines: &[&str]) -> Document {
        parse_lines(lines.iter())
    }

    #[test]
    fn lines_before_the_data_marker_are_ignored() {
        let doc = parse(&[
            "project notes",
            "|>Not A Category",
            "> DOCUMENT DATA <",
            "|>Real",
        ]);
        assert_eq!(doc.category_count(), 1);
        assert_eq!(doc.categories[0].title, "Real");
    }

    #[test]
    fn missing_data_marker_yields_empty_document() {
        let doc = parse(&["|>Category", "|#Text=content"]);
        assert!(doc.is_empty());
    }

    #[test]
    fn category_and_element_are_flushed_at_end_of_input() {
        let doc = parse(&["> DOCUMENT DATA <", "|>Intro", "|#Text=hello"]);
        assert_eq!(doc.category_count(), 1);
        let cat = &doc.categories[0];
        assert_eq!(cat.title, "Intro");
        assert_eq!(cat.elements.len(), 1);
        assert_eq!(cat.elements[0].style_class, "Text");
        assert_eq!(cat.elements[0].text, "hello");
    }

    #[test]
    fn body_lines_append_with_line_breaks() {
        let doc = parse(&[
            "> DOCUMENT DATA <",
            "|>Intro",
            "|#Text=first",
            "second",
            "third",
        ]);
        assert_eq!(doc.categories[0].elements[0].text, "first\nsecond\nthird");
    }

    #[test]
    fn new_category_closes_open_element_and_category() {
        let doc = parse(&[
            "> DOCUMENT DATA <",
            "|>One",
            "|#Text=a",
            "|>Two",
            "|#Text=b",
        ]);
        assert_eq!(doc.category_count(), 2);
        assert_eq!(doc.categories[0].elements.len(), 1);
        assert_eq!(doc.categories[1].elements.len(), 1);
    }

    #[test]
    fn element_start_closes_previous_element() {
        let doc = parse(&[
            "> DOCUMENT DATA <",
            "|>Intro",
            "|#Text=a",
            "|#Code=b",
        ]);
        let elements = &doc.categories[0].elements;
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].style_class, "Text");
        assert_eq!(elements[1].style_class, "Code");
    }

    #[test]
    fn read_only_category_is_closed_immediately() {
        let doc = parse(&[
            "> DOCUMENT DATA <",
            "|>Legacy API <|",
            "|#Text=swallowed",
            "stray line",
            "|>Next",
        ]);
        assert_eq!(doc.category_count(), 2);
        assert!(doc.categories[0].read_only);
        assert_eq!(doc.categories[0].title, "Legacy API");
        assert!(doc.categories[0].elements.is_empty());
        assert!(!doc.categories[1].read_only);
    }

    #[test]
    fn read_only_category_keeps_its_attribute() {
        let doc = parse(&["> DOCUMENT DATA <", "|>Legacy|Space <|"]);
        let cat = &doc.categories[0];
        assert!(cat.read_only);
        assert_eq!(cat.title, "Legacy");
        assert!(cat.is_break());
    }

    #[test]
    fn malformed_element_directive_is_discarded() {
        let doc = parse(&[
            "> DOCUMENT DATA <",
            "|>Intro",
            "|#NoEquals",
            "ignored body",
            "|#Text=kept",
        ]);
        let elements = &doc.categories[0].elements;
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].text, "kept");
    }

    #[test]
    fn empty_element_class_is_discarded() {
        let doc = parse(&["> DOCUMENT DATA <", "|>Intro", "|#=content"]);
        assert!(doc.categories[0].elements.is_empty());
    }

    #[test]
    fn malformed_directive_still_closes_previous_element() {
        let doc = parse(&[
            "> DOCUMENT DATA <",
            "|>Intro",
            "|#Text=kept",
            "|#broken",
            "not appended anywhere",
        ]);
        let elements = &doc.categories[0].elements;
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].text, "kept");
    }

    #[test]
    fn indented_element_directive_keeps_its_class() {
        let doc = parse(&["> DOCUMENT DATA <", "|>Intro", "    |#Text=x"]);
        assert_eq!(doc.categories[0].elements[0].style_class, "Text");
    }

    #[test]
    fn ignore_region_concatenates_without_breaks() {
        let doc = parse(&[
            "> DOCUMENT DATA <",
            "|>Intro",
            "|#Text=start",
            "|NEW_LINE_IGNORE_START",
            "one",
            "two",
            "|NEW_LINE_IGNORE_END",
            "after",
        ]);
        assert_eq!(doc.categories[0].elements[0].text, "startonetwo\nafter");
    }

    #[test]
    fn ignore_markers_are_never_emitted() {
        let doc = parse(&[
            "> DOCUMENT DATA <",
            "|>Intro",
            "|#Text=a",
            "|NEW_LINE_IGNORE_START",
            "|NEW_LINE_IGNORE_END",
            "b",
        ]);
        assert_eq!(doc.categories[0].elements[0].text, "a\nb");
    }

    #[test]
    fn element_content_may_contain_equals_signs() {
        let doc = parse(&["> DOCUMENT DATA <", "|>C", "|#Code=int x = 1;"]);
        let el = &doc.categories[0].elements[0];
        assert_eq!(el.style_class, "Code");
        assert_eq!(el.text, "int x = 1;");
    }

    #[test]
    fn parse_str_handles_windows_line_endings() {
        let doc = parse_str("> DOCUMENT DATA <\r\n|>Intro\r\n|#Text=a\r\nb\r\n");
        assert_eq!(doc.categories[0].elements[0].text, "a\nb");
    }
}

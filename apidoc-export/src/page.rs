//! Per-category page assembly.
//!
//! Every category gets a clone of the template with its title substituted,
//! the full sidebar inserted after the categories marker, and (unless the
//! category is read-only) its element blocks inserted after the container
//! marker. Element insertion is offset by the number of sidebar lines, so a
//! template whose container marker precedes the categories marker will push
//! elements past the page end and fail; that arithmetic is part of the
//! template contract.

use crate::error::ExportError;
use crate::highlight::Highlighter;
use crate::ordering::Arrangement;
use crate::styles::CODE_CLASS;
use crate::template::{TemplateMacros, HEAD_MACRO, TITLE_MACRO};
use apidoc_parser::markup::text::{html_friendly, slugify};
use apidoc_parser::Category;

/// Render one sidebar entry. Read-only categories are plain indented text;
/// everything else links to its slugified page. A `Space` attribute prefixes
/// a break, a nested attribute indents.
pub fn sidebar_entry(category: &Category, title: &str) -> String {
    let break_prefix = if category.is_break() { "<br>" } else { "" };
    let indent = if category.is_nested() { "&emsp;" } else { "" };
    if category.read_only {
        format!("{break_prefix}{indent}{title}")
    } else {
        format!(
            "{break_prefix}<li>{indent}<a href=\"{}.html\">{title}</a></li>",
            slugify(title)
        )
    }
}

/// Sidebar lines for the whole document, in navigation order.
pub fn sidebar_lines(categories: &[Category], arrangement: &Arrangement) -> Vec<String> {
    arrangement
        .nav
        .iter()
        .map(|&index| sidebar_entry(&categories[index], arrangement.title(index)))
        .collect()
}

/// Render the element body: optional highlighting for `Code` blocks, then
/// macro expansion, then HTML-friendly escaping of breaks and indentation.
fn element_body(
    element: &apidoc_parser::Element,
    highlighter: &Highlighter,
    highlight_enabled: bool,
) -> String {
    let text = if element.style_class == CODE_CLASS && highlight_enabled {
        highlighter.highlight(&element.text)
    } else {
        element.text.clone()
    };
    html_friendly(&highlighter.expand_macros(&text))
}

/// Assemble the full page for the category at parse index `index`.
#[allow(clippy::too_many_arguments)]
pub fn render_page(
    template: &[String],
    macros: TemplateMacros,
    categories: &[Category],
    arrangement: &Arrangement,
    index: usize,
    document_title: &str,
    highlighter: &Highlighter,
    highlight_enabled: bool,
) -> Result<Vec<String>, ExportError> {
    let category = &categories[index];
    let title = arrangement.title(index);

    let mut lines = template.to_vec();
    lines[macros.head] = lines[macros.head].replace(HEAD_MACRO, title);
    lines[macros.title] = lines[macros.title].replace(TITLE_MACRO, document_title);

    let sidebar = sidebar_lines(categories, arrangement);
    let sidebar_len = sidebar.len();
    lines.splice(macros.categories..macros.categories, sidebar);

    if !category.read_only {
        for (offset, element) in category.elements.iter().enumerate() {
            let insert_at = macros.container + sidebar_len + offset;
            if insert_at >= lines.len() {
                return Err(ExportError::ElementInsertion {
                    category: title.to_string(),
                    index: insert_at,
                    line_count: lines.len(),
                });
            }
            lines.insert(
                insert_at,
                format!(
                    "<div class=\"{}\">{}</div>",
                    element.style_class,
                    element_body(element, highlighter, highlight_enabled)
                ),
            );
        }
    }

    Ok(lines)
}

//! Regex-driven code highlighting.
//!
//! Highlighting runs line by line in two stages. The first stage
//! ([`Highlighter::highlight`]) escapes literal angle brackets, claims `//`
//! comment tails, then applies every style's patterns in order, wrapping each
//! match in the style's start macro and the shared end macro. Each pattern is
//! applied as one non-overlapping sweep over the line, so already-inserted
//! macro text is never re-matched by the same pattern.
//!
//! The second stage ([`Highlighter::expand_macros`]) later converts all
//! macros — built-in and caller-supplied — into `<span class="...">` /
//! `</span>` pairs. The stages are separate because macro expansion runs over
//! whole element text, after the exporter decides whether highlighting was
//! enabled at all.

use crate::styles::{built_in_styles, CodeStyle, COMMENT_MARKER, STYLE_END_MACRO};
use apidoc_parser::markup::text::escape_angle_brackets;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Platform line separator used to reassemble highlighted lines. Every line,
/// including the last, is followed by one separator.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

#[derive(Debug, Clone)]
struct CompiledStyle {
    start_macro: String,
    regexes: Vec<Regex>,
}

/// Compile a style list, dropping patterns that fail to parse (a malformed
/// caller-supplied pattern degrades that pattern, never the whole export).
fn compile(styles: &[CodeStyle]) -> Vec<CompiledStyle> {
    styles
        .iter()
        .filter(|style| !style.patterns.is_empty())
        .map(|style| CompiledStyle {
            start_macro: style.start_macro.clone(),
            regexes: style
                .patterns
                .iter()
                .filter_map(|pattern| Regex::new(pattern).ok())
                .collect(),
        })
        .collect()
}

static BUILT_IN_COMPILED: Lazy<Vec<CompiledStyle>> = Lazy::new(|| compile(&built_in_styles()));

static COMMENT_START_MACRO: Lazy<Option<String>> = Lazy::new(|| {
    built_in_styles()
        .iter()
        .find(|style| style.is_comment)
        .map(|style| style.start_macro.clone())
});

/// Applies the built-in style table plus caller-supplied styles.
pub struct Highlighter {
    compiled: Vec<CompiledStyle>,
    spans: Vec<(String, String)>,
}

impl Highlighter {
    /// Build a highlighter for the built-in table followed by `extra_styles`,
    /// in the order supplied.
    pub fn new(extra_styles: &[CodeStyle]) -> Self {
        let mut compiled = BUILT_IN_COMPILED.clone();
        compiled.extend(compile(extra_styles));

        let mut spans: Vec<(String, String)> = built_in_styles()
            .iter()
            .map(|s| (s.start_macro.clone(), s.class_name.clone()))
            .collect();
        spans.extend(
            extra_styles
                .iter()
                .map(|s| (s.start_macro.clone(), s.class_name.clone())),
        );

        Self { compiled, spans }
    }

    /// Insert style macros into `text`, line by line.
    pub fn highlight(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + text.len() / 4);
        for line in text.split('\n') {
            let mut line = escape_angle_brackets(line);
            let mut comment_tail = String::new();

            if let Some(comment_macro) = COMMENT_START_MACRO.as_deref() {
                if let Some(pos) = line.find(COMMENT_MARKER) {
                    if pos == 0 {
                        out.push_str(comment_macro);
                        out.push_str(&line);
                        out.push_str(STYLE_END_MACRO);
                        out.push_str(LINE_SEPARATOR);
                        continue;
                    }
                    comment_tail =
                        format!("{comment_macro}{}{STYLE_END_MACRO}", &line[pos..]);
                    line.truncate(pos);
                }
            }

            for style in &self.compiled {
                for regex in &style.regexes {
                    line = regex
                        .replace_all(&line, |caps: &Captures<'_>| {
                            format!("{}{}{}", style.start_macro, &caps[0], STYLE_END_MACRO)
                        })
                        .into_owned();
                }
            }

            out.push_str(&line);
            out.push_str(&comment_tail);
            out.push_str(LINE_SEPARATOR);
        }
        out
    }

    /// Replace every known start macro with its `<span>` opener and the
    /// shared end macro with `</span>`. Macros never overlap, so the
    /// replacement order is irrelevant.
    pub fn expand_macros(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (start_macro, class_name) in &self.spans {
            out = out.replace(start_macro, &format!("<span class=\"{class_name}\">"));
        }
        out.replace(STYLE_END_MACRO, "</span>")
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(&[])
    }
}

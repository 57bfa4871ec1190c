//! Small string transforms shared by the parser and the HTML exporter.

/// Replace newlines and indentation with their HTML-friendly counterparts.
///
/// Windows line endings are handled before bare `\n` so a `\r\n` pair maps to
/// a single `<br>`. Tabs and runs of four spaces both become `&emsp;`.
pub fn html_friendly(text: &str) -> String {
    text.replace("\r\n", "<br>")
        .replace('\n', "<br>")
        .replace('\t', "&emsp;")
        .replace("    ", "&emsp;")
}

/// Turn a category title into its output file stem: spaces become
/// underscores, surrounding whitespace is dropped.
pub fn slugify(title: &str) -> String {
    title.replace(' ', "_").trim().to_string()
}

/// Escape literal angle brackets so code text never collides with markup
/// generated later in the pipeline.
pub fn escape_angle_brackets(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

/// Split a title into its leading priority digit and the remainder.
///
/// Titles of length <= 1 never carry a priority digit; this guards real
/// one-character titles against being stripped.
pub fn leading_priority_digit(title: &str) -> Option<(u32, &str)> {
    let mut chars = title.chars();
    let first = chars.next()?;
    if chars.next().is_none() {
        return None;
    }
    let digit = first.to_digit(10)?;
    Some((digit, &title[first.len_utf8()..]))
}
